//! Integration tests for the Compiler facade: options, profiles and format selection

mod common;

use common::init_logging;
use rstest::rstest;
use russiandoll::pipeline::{Profile, ProfileRegistry};
use russiandoll::{CompileError, CompileOptions, Compiler, FormatError, FormatRegistry};

const SOURCE: &str = ">intro Hello [more]{world}";

#[test]
fn test_default_options_produce_renderer_html() {
    init_logging();
    let compiler = Compiler::new();
    let html = compiler.compile(SOURCE, &CompileOptions::default()).unwrap();
    insta::assert_snapshot!(
        html,
        @r##"<div data-russiandoll="1.0.0"><p></p><p data-opened-by="_intro">Hello <a href="#" data-opens="0">more</a><span data-opened-by="0">world</span></p></div>"##
    );
}

#[rstest]
#[case::default("default", false)]
#[case::debug("debug", true)]
fn test_html_profiles(#[case] profile: &str, #[case] has_positions: bool) {
    let html = Compiler::new().compile_profile(profile, SOURCE).unwrap();
    assert!(html.starts_with(r#"<div data-russiandoll="1.0.0">"#));
    assert_eq!(html.contains("data-source-pos"), has_positions);
    assert_eq!(html.contains(r#"data-descendants="0""#), has_positions);
}

#[test]
fn test_ast_json_profile() {
    let json = Compiler::new().compile_profile("ast-json", SOURCE).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let events = value["events"].as_array().unwrap();

    let link = events
        .iter()
        .find(|event| event["type"] == "reveal-link")
        .unwrap();
    assert_eq!(link["opens"], "0");
    assert_eq!(link["caption"], "more");
    assert_eq!(link["nesting"], serde_json::json!(["_intro"]));
    assert_eq!(link["position"], serde_json::json!({ "line": 1, "column": 14 }));
}

#[test]
fn test_ast_yaml_profile() {
    let yaml = Compiler::new().compile_profile("ast-yaml", SOURCE).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    let events = value["events"].as_sequence().unwrap();
    assert_eq!(events.first().unwrap()["type"].as_str(), Some("paragraph-open"));
    assert_eq!(events.last().unwrap()["type"].as_str(), Some("paragraph-close"));
}

#[test]
fn test_options_from_yaml() {
    let options = CompileOptions::from_yaml("format: ast-json\n").unwrap();
    assert_eq!(options.format, "ast-json");
    assert!(!options.debug);

    let compiler = Compiler::new();
    assert!(compiler
        .compile_with_yaml(SOURCE, "debug: true\n")
        .unwrap()
        .contains(r#"data-source-pos="1,1""#));
}

#[test]
fn test_unknown_format_is_reported() {
    let error = Compiler::new()
        .compile(SOURCE, &CompileOptions::new("markdown", false))
        .unwrap_err();
    assert_eq!(
        error,
        CompileError::Format(FormatError::FormatNotFound("markdown".into()))
    );
    assert_eq!(error.to_string(), "Format 'markdown' not found");
}

#[test]
fn test_parse_errors_pass_through() {
    let error = Compiler::new()
        .compile("{", &CompileOptions::debug())
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Parse error at 1:2: Missing 1 closing curly bracket"
    );
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_compile_bytes() {
    let compiler = Compiler::new();
    let html = compiler
        .compile_bytes("¡Hola {mundo}!".as_bytes(), &CompileOptions::default())
        .unwrap();
    assert!(html.contains("¡Hola "));

    assert!(matches!(
        compiler.compile_bytes(&[0xff], &CompileOptions::default()),
        Err(CompileError::Parse(_))
    ));
}

#[test]
fn test_custom_profile() {
    let mut profiles = ProfileRegistry::with_defaults();
    profiles.register(Profile {
        name: "inspect".into(),
        description: "Debug AST".into(),
        options: CompileOptions::new("ast-json", true),
    });

    let compiler = Compiler::with_registry(FormatRegistry::with_defaults(), profiles);
    assert!(compiler.profiles().has("inspect"));
    assert!(compiler
        .compile_profile("inspect", SOURCE)
        .unwrap()
        .contains("\"reveal-link\""));
}
