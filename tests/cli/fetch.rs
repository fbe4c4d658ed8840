//! Tests for `courier fetch` with local files.

use crate::support::*;

#[test]
fn test_fetch_local_collection() {
    let t = Test::new();
    t.write("collection.json", &collection().to_string());

    let output = t.fetch(&["--collection", "collection.json"]);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["collection"], collection());
    assert!(json.get("environment").is_none());
}

#[test]
fn test_fetch_local_pair_unwraps_envelopes() {
    let t = Test::new();
    t.write(
        "collection.json",
        &envelope("collection", collection()).to_string(),
    );
    t.write(
        "env.json",
        &format!("\u{feff}{}", envelope("environment", environment())),
    );

    let output = t.fetch(&["--collection", "collection.json", "--environment", "env.json"]);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["collection"], collection());
    assert_eq!(json["environment"], environment());
}

#[test]
fn test_fetch_local_needs_no_profile() {
    let t = Test::new();
    t.write("env.json", &environment().to_string());

    let output = t.fetch(&["--environment", "env.json"]);
    assert_success(&output);
    assert_output_excludes(&output, "Passkey");
}

#[test]
fn test_fetch_missing_file() {
    let t = Test::new();

    let output = t.fetch(&["--collection", "missing.json"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "unable to read data from file \"missing.json\"");
}

#[test]
fn test_fetch_invalid_json() {
    let t = Test::new();
    t.write("broken.json", "{\"info\": ");

    let output = t.fetch(&["--collection", "broken.json"]);
    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "the file at \"broken.json\" does not contain valid JSON data",
    );
}

#[test]
fn test_fetch_requires_a_resource() {
    let t = Test::new();

    let output = t.fetch(&[]);
    assert_failure(&output);
}
