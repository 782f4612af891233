use printshop_payments::domain::attempt::{Attempt, AttemptStatus, StatusClass};
use printshop_payments::parsing::parser::ParserSelector;
use printshop_payments::service::query_service::{
    collect_checkout_data, latest_checkout_data, latest_matching, AttemptFilter,
};
use uuid::Uuid;

#[test]
fn success_filter_beats_raw_recency() {
    // newest first: an active-equivalent attempt recorded after the
    // success-equivalent checkout snapshot
    let attempts = vec![
        attempt(AttemptStatus::Processing, transition_raw()),
        attempt(AttemptStatus::Succeeded, snapshot_raw("https://gw.example/c/ok")),
    ];

    let filter = AttemptFilter::Class(StatusClass::Success);
    let data = latest_checkout_data(&attempts, Some(&filter), &ParserSelector::standard())
        .expect("success-equivalent attempt should be found and parsed");
    assert_eq!(data.checkout_url, "https://gw.example/c/ok");
}

#[test]
fn no_filter_returns_most_recent_attempt() {
    let attempts = vec![
        attempt(AttemptStatus::Succeeded, snapshot_raw("https://gw.example/c/new")),
        attempt(AttemptStatus::Succeeded, snapshot_raw("https://gw.example/c/old")),
    ];

    let found = latest_matching(&attempts, None).unwrap();
    let data = ParserSelector::standard().parse(&found.raw_response).unwrap();
    assert_eq!(data.checkout_url, "https://gw.example/c/new");
}

#[test]
fn exact_status_filter_narrows_before_recency() {
    let attempts = vec![
        attempt(AttemptStatus::Pending, snapshot_raw("https://gw.example/c/pending")),
        attempt(AttemptStatus::Initiated, snapshot_raw("https://gw.example/c/initiated")),
    ];

    let filter = AttemptFilter::Exact(AttemptStatus::Initiated);
    let data = latest_checkout_data(&attempts, Some(&filter), &ParserSelector::standard()).unwrap();
    assert_eq!(data.checkout_url, "https://gw.example/c/initiated");
}

#[test]
fn unparseable_latest_attempt_is_not_found() {
    let attempts = vec![attempt(AttemptStatus::Succeeded, r#"{"foo":"bar"}"#.to_string())];

    let result = latest_checkout_data(&attempts, None, &ParserSelector::standard());
    assert!(result.is_none());
}

#[test]
fn batch_read_skips_unparseable_entries() {
    let attempts = vec![
        attempt(AttemptStatus::Succeeded, snapshot_raw("https://gw.example/c/1")),
        attempt(AttemptStatus::Succeeded, r#"{"foo":"bar"}"#.to_string()),
        attempt(AttemptStatus::Succeeded, snapshot_raw("https://gw.example/c/2")),
    ];

    let data = collect_checkout_data(&attempts, None, &ParserSelector::standard());
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].checkout_url, "https://gw.example/c/1");
    assert_eq!(data[1].checkout_url, "https://gw.example/c/2");
}

#[test]
fn failed_class_filter_finds_nothing_in_an_active_history() {
    let attempts = vec![
        attempt(AttemptStatus::Processing, transition_raw()),
        attempt(AttemptStatus::Initiated, transition_raw()),
    ];

    let filter = AttemptFilter::Class(StatusClass::Failed);
    assert!(latest_matching(&attempts, Some(&filter)).is_none());
}

fn attempt(status: AttemptStatus, raw_response: String) -> Attempt {
    Attempt {
        attempt_id: Uuid::new_v4(),
        payment_id: Uuid::new_v4(),
        status,
        raw_response,
        error_code: None,
        created_at: chrono::Utc::now(),
    }
}

fn snapshot_raw(url: &str) -> String {
    serde_json::json!({
        "source": "checkout_created",
        "preference_id": "pref_1",
        "checkout_url": url,
        "sandbox_url": format!("{url}?sandbox=1"),
        "timestamp": "2026-01-01T00:00:00Z",
    })
    .to_string()
}

fn transition_raw() -> String {
    serde_json::json!({
        "source": "status_transition",
        "trigger": "webhook",
        "gateway_status": "in_process",
        "from": "PENDING",
        "to": "PENDING",
        "timestamp": "2026-01-01T00:00:00Z",
    })
    .to_string()
}
