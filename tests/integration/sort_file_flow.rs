use std::fs;

use i18nsort::cmd::sort::{run_file, sort_file};
use i18nsort::domain::error::SortError;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn sorted_file_keeps_keys_and_values() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("messages.json");
    let input = r#"{
        "welcome": "Willkommen",
        "Zebra": "Zebra",
        "menu": {"open": "Öffnen", "close": "Schließen"},
        "count": 3,
        "enabled": false,
        "missing": null
    }"#;
    fs::write(&path, input).expect("write fixture");

    sort_file(&path).expect("sort should succeed");

    let before: Value = serde_json::from_str(input).expect("input json");
    let text = fs::read_to_string(&path).expect("read output");
    let after: Value = serde_json::from_str(&text).expect("output json");
    assert_eq!(before, after);

    let keys: Vec<String> = after
        .as_object()
        .expect("object")
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["Zebra", "count", "enabled", "menu", "missing", "welcome"]);

    let nested: Vec<&str> = after["menu"]
        .as_object()
        .expect("nested object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(nested, vec!["open", "close"]);
    assert!(text.contains("\"Schließen\""));
}

#[test]
fn serialized_keys_appear_in_ascending_order() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("messages.json");
    fs::write(&path, r#"{"c": 3, "a": 1, "b": 2}"#).expect("write fixture");

    sort_file(&path).expect("sort should succeed");

    let text = fs::read_to_string(&path).expect("read output");
    let a = text.find("\"a\"").expect("a present");
    let b = text.find("\"b\"").expect("b present");
    let c = text.find("\"c\"").expect("c present");
    assert!(a < b && b < c);
}

#[test]
fn duplicate_keys_keep_last_value() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("messages.json");
    fs::write(&path, r#"{"b": 1, "a": 2, "b": 3}"#).expect("write fixture");

    sort_file(&path).expect("sort should succeed");

    let text = fs::read_to_string(&path).expect("read output");
    assert_eq!(text, "{\n    \"a\": 2,\n    \"b\": 3\n}");
}

#[test]
fn large_and_exotic_numbers_keep_their_digits() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("messages.json");
    fs::write(
        &path,
        r#"{"b": 123456789012345678901234567890, "a": 1, "d": 1e400, "c": 1e-7}"#,
    )
    .expect("write fixture");

    sort_file(&path).expect("sort should succeed");

    let text = fs::read_to_string(&path).expect("read output");
    assert_eq!(
        text,
        "{\n    \"a\": 1,\n    \"b\": 123456789012345678901234567890,\n    \"c\": 1e-7,\n    \"d\": 1e400\n}"
    );
}

#[test]
fn sorting_twice_is_byte_identical() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("messages.json");
    fs::write(&path, r#"{"b":{"z":1,"a":2},"a":["x","y"]}"#).expect("write fixture");

    sort_file(&path).expect("first sort");
    let once = fs::read(&path).expect("read once");
    sort_file(&path).expect("second sort");
    let twice = fs::read(&path).expect("read twice");
    assert_eq!(once, twice);
}

#[test]
fn errors_are_reported_not_raised() {
    let dir = tempdir().expect("temp dir");
    let array = dir.path().join("array.json");
    fs::write(&array, "[1,2,3]").expect("write fixture");
    let missing = dir.path().join("missing.json");

    let mut out = Vec::new();
    run_file(&array, &mut out);
    run_file(&missing, &mut out);

    let lines = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = lines.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Error while processing file: '"));
    assert!(lines[0].ends_with("': JSON does not contain a dictionary."));
    assert!(lines[1].contains("File not found: '"));

    assert_eq!(fs::read_to_string(&array).expect("read array"), "[1,2,3]");
    assert!(!missing.exists());
    assert!(matches!(
        sort_file(&missing),
        Err(SortError::MissingFile { .. })
    ));
}
