//! AST dumps
//!
//! The event sequence serialized through serde, for inspecting what the resolver and the
//! closure pass produced. Identifiers appear in their printed form. Positions are part of every
//! event, so `debug` makes no difference here.

use super::registry::{FormatError, Formatter};
use crate::ast::Document;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "ast-json"
    }

    fn description(&self) -> &str {
        "Event sequence as pretty-printed JSON"
    }

    fn serialize(&self, doc: &Document, _debug: bool) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "ast-yaml"
    }

    fn description(&self) -> &str {
        "Event sequence as YAML"
    }

    fn serialize(&self, doc: &Document, _debug: bool) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;

    #[test]
    fn test_json_dump() {
        let doc = parse("[go]{x}").unwrap();
        let json = JsonFormatter.serialize(&doc, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let events = value["events"].as_array().unwrap();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0]["type"], "paragraph-open");
        assert_eq!(events[1]["type"], "reveal-link");
        assert_eq!(events[1]["opens"], "0");
        assert_eq!(events[1]["descendants"], serde_json::json!(["0"]));
        assert_eq!(events[2]["type"], "fragment-open");
        assert_eq!(events[2]["nesting"], serde_json::json!(["0"]));
        assert_eq!(events[3]["type"], "text");
        assert_eq!(events[3]["html"], "x");
    }

    #[test]
    fn test_yaml_dump() {
        let doc = parse(">intro {why:because}").unwrap();
        let yaml = YamlFormatter.serialize(&doc, false).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        let events = value["events"].as_sequence().unwrap();
        assert_eq!(events[3]["type"].as_str(), Some("fragment-open"));
        assert_eq!(events[3]["opened_by"].as_str(), Some("_why"));
    }
}
