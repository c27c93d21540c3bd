//! HTML serialization
//!
//!     Walks the event sequence once and writes the markup the renderer consumes:
//!
//!         <div data-russiandoll="1.0.0">
//!           <p data-opened-by="_intro">            one per paragraph, no id for anonymous ones
//!             <span data-opened-by="_why">...</span>         one per fragment
//!             <a href="#" data-opens="_why">caption</a>      one per reveal link
//!           </p>
//!         </div>
//!
//!     In debug mode every element also gets `data-source-pos="L,C"` and links get
//!     `data-descendants` with the comma separated printed ids of their closure. Outside debug
//!     mode those attributes are left out entirely.
//!
//!     Balance is guaranteed by the resolver, so the output is well formed by construction.

use super::registry::{FormatError, Formatter};
use crate::ast::{Document, Event, EventKind, Identifier};
use crate::FORMAT_VERSION;

pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Annotated html fragment for the russiandoll renderer"
    }

    fn serialize(&self, doc: &Document, debug: bool) -> Result<String, FormatError> {
        Ok(serialize_to_html(doc, debug))
    }
}

/// Render a document to html.
pub fn serialize_to_html(doc: &Document, debug: bool) -> String {
    let mut html = format!(
        "<div{}>",
        attrs(&[("data-russiandoll", Some(FORMAT_VERSION.to_string()))])
    );

    for event in doc.events() {
        write_event(&mut html, event, debug);
    }

    html.push_str("</div>");
    html
}

fn write_event(html: &mut String, event: &Event, debug: bool) {
    let pos = debug.then(|| event.position.to_attr());

    match &event.kind {
        EventKind::ParagraphOpen { opened_by } => {
            let opened_by = (!opened_by.is_anonymous()).then(|| opened_by.to_string());
            html.push_str(&format!(
                "<p{}>",
                attrs(&[("data-opened-by", opened_by), ("data-source-pos", pos)])
            ));
        }
        EventKind::ParagraphClose => html.push_str("</p>"),
        EventKind::FragmentOpen { opened_by } => {
            html.push_str(&format!(
                "<span{}>",
                attrs(&[
                    ("data-opened-by", Some(opened_by.to_string())),
                    ("data-source-pos", pos),
                ])
            ));
        }
        EventKind::FragmentClose => html.push_str("</span>"),
        EventKind::RevealLink {
            opens,
            caption,
            descendants,
            ..
        } => {
            let descendants = debug.then(|| join_ids(descendants));
            html.push_str(&format!(
                "<a href=\"#\"{}>{}</a>",
                attrs(&[
                    ("data-opens", Some(opens.to_string())),
                    ("data-source-pos", pos),
                    ("data-descendants", descendants),
                ]),
                caption
            ));
        }
        EventKind::Text { html: text, .. } => html.push_str(text),
    }
}

/// Printed ids, comma separated. Unreferenced ids all print the same and appear once.
fn join_ids(ids: &[Identifier]) -> String {
    let mut printed: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        let id = id.to_string();
        if !printed.contains(&id) {
            printed.push(id);
        }
    }
    printed.join(",")
}

/// Render attributes, skipping absent values. Values are already html safe.
fn attrs(pairs: &[(&str, Option<String>)]) -> String {
    pairs
        .iter()
        .filter_map(|(name, value)| {
            value
                .as_ref()
                .map(|value| format!(" {}=\"{}\"", name, value))
        })
        .collect()
}
