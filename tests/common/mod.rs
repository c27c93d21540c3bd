//! Shared helpers for integration tests

use russiandoll::{parse, to_html, Document};

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a source that is expected to be valid
#[allow(dead_code)]
pub fn parse_ok(source: &str) -> Document {
    init_logging();
    parse(source).unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", source, e))
}

/// Compile a valid source to html, without debug attributes
#[allow(dead_code)]
pub fn html(source: &str) -> String {
    to_html(&parse_ok(source), false)
}

/// Compile a valid source to html, with debug attributes
#[allow(dead_code)]
pub fn debug_html(source: &str) -> String {
    to_html(&parse_ok(source), true)
}
