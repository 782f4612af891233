use printshop_payments::parsing::envelope::wrap_raw;
use printshop_payments::parsing::parser::ParserSelector;

#[test]
fn parses_orchestrator_snapshot() {
    let raw = r#"{"source":"checkout_created","preference_id":"pref_1","checkout_url":"https://gw.example/checkout/1","sandbox_url":"https://sandbox.gw.example/checkout/1","timestamp":"2026-01-01T00:00:00Z"}"#;

    let data = ParserSelector::standard().parse(raw).expect("snapshot should parse");
    assert_eq!(data.schema_version, "snapshot-v1");
    assert_eq!(data.checkout_url, "https://gw.example/checkout/1");
    assert_eq!(data.sandbox_url.as_deref(), Some("https://sandbox.gw.example/checkout/1"));
}

#[test]
fn parses_current_preference_shape() {
    let raw = r#"{"id":"123456-abc","init_point":"https://gw.example/init/1","sandbox_init_point":"https://sandbox.gw.example/init/1"}"#;

    let data = ParserSelector::standard().parse(raw).expect("preference should parse");
    assert_eq!(data.schema_version, "preference-v1");
    assert_eq!(data.checkout_url, "https://gw.example/init/1");
}

#[test]
fn parses_legacy_sdk_envelope() {
    let raw = r#"{"status":201,"response":{"id":"old-1","init_point":"https://gw.example/init/old"}}"#;

    let data = ParserSelector::standard().parse(raw).expect("sdk envelope should parse");
    assert_eq!(data.schema_version, "sdk-envelope-v0");
    assert_eq!(data.checkout_url, "https://gw.example/init/old");
    assert_eq!(data.sandbox_url, None);
}

#[test]
fn unrecognized_shape_is_unparseable_not_an_error() {
    assert!(ParserSelector::standard().parse(r#"{"foo":"bar"}"#).is_none());
}

#[test]
fn malformed_text_is_unparseable_but_its_envelope_is_stored_json() {
    let selector = ParserSelector::standard();
    let raw = "upstream sent us html";

    assert!(selector.parse(raw).is_none());

    // what actually lands in the ledger is the wrapped envelope: valid JSON,
    // still unrecognized by every parser
    let stored = wrap_raw(raw);
    assert!(serde_json::from_str::<serde_json::Value>(&stored).is_ok());
    assert!(selector.parse(&stored).is_none());
}

#[test]
fn reparsing_the_same_raw_yields_identical_data() {
    let selector = ParserSelector::standard();
    let raw = r#"{"source":"checkout_created","checkout_url":"https://gw.example/c/9","sandbox_url":null}"#;

    let first = selector.parse(raw).expect("should parse");
    let second = selector.parse(raw).expect("should parse");
    assert_eq!(first, second);
}

#[test]
fn priority_order_first_match_wins() {
    // recognizable by both the snapshot and the preference parser; the
    // snapshot parser is registered first
    let raw = r#"{"source":"checkout_created","checkout_url":"https://gw.example/s","id":"x","init_point":"https://gw.example/p"}"#;

    let data = ParserSelector::standard().parse(raw).expect("should parse");
    assert_eq!(data.schema_version, "snapshot-v1");
    assert_eq!(data.checkout_url, "https://gw.example/s");
}
