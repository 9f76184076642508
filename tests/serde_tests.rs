#![cfg(all(feature = "serde", feature = "derive"))]

//! Integration tests for loading [`Options`] through serde.

use assign::{Assigner, Destination, Options, Source};
use rstest::rstest;

#[rstest]
fn test_options_json_roundtrip() {
    let options = Options::default().with_tags(["json"]).without_cycle_check();
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"tags":["assign","json"],"cycle_check":false}"#);

    let restored: Options = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, options);
}

#[rstest]
#[case("{}", Options::default())]
#[case(r#"{"cycle_check":false}"#, Options::default().without_cycle_check())]
fn test_missing_fields_take_defaults(#[case] json: &str, #[case] expected: Options) {
    let options: Options = serde_json::from_str(json).unwrap();
    assert_eq!(options, expected);
}

#[rstest]
fn test_loaded_tags_replace_the_default_key() {
    let options: Options = serde_json::from_str(r#"{"tags":["json"]}"#).unwrap();
    assert_eq!(options.tags(), ["json"]);
    assert!(options.cycle_check());
}

#[derive(Source)]
struct Input {
    one: u8,
    other: u8,
}

#[derive(Debug, Default, PartialEq, Destination)]
struct Output {
    #[assign(rename = "other", tag(json = "one"))]
    value: u8,
}

#[rstest]
fn test_loaded_options_drive_field_lookup() {
    let input = Input { one: 1, other: 2 };

    let mut by_default = Output::default();
    Assigner::new(&input).to(&mut by_default).unwrap();
    assert_eq!(by_default, Output { value: 2 });

    let options: Options = serde_json::from_str(r#"{"tags":["json"]}"#).unwrap();
    let mut by_json = Output::default();
    Assigner::with_options(&input, options)
        .to(&mut by_json)
        .unwrap();
    assert_eq!(by_json, Output { value: 1 });
}
