//! Compilation pipeline
//!
//! This module provides:
//! - Option-based compilation (`Compiler`) - parse, then serialize through the format registry
//! - Named option profiles (`ProfileRegistry`)
//! - `compile_html`, the one-call path from source to renderer html

pub mod config;
pub mod executor;

pub use config::{CompileOptions, ConfigError, Profile, ProfileRegistry};
pub use executor::{CompileError, Compiler};

use crate::formats::to_html;
use crate::parsing::{parse, ParseError};

/// Parse `source` and render it to html.
pub fn compile_html(source: &str, debug: bool) -> Result<String, ParseError> {
    let doc = parse(source)?;
    Ok(to_html(&doc, debug))
}
