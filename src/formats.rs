//! Output formats
//!
//!     A format turns a finished [`Document`](crate::ast::Document) into text. Formats implement
//!     [`Formatter`] and are looked up by name in a [`FormatRegistry`]:
//!
//!     html        the annotated fragment consumed by the renderer (see [html])
//!     ast-json    the event sequence, for inspection
//!     ast-yaml    same, as YAML

pub mod html;
pub mod registry;
pub mod serialized;

pub use html::{serialize_to_html, HtmlFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};

use crate::ast::Document;

/// Render a document to html; `debug` adds source positions and descendant lists.
pub fn to_html(doc: &Document, debug: bool) -> String {
    serialize_to_html(doc, debug)
}
