use crate::domain::checkout::CheckoutData;
use crate::parsing::parser::ResponseParser;

fn str_field(raw: &serde_json::Value, key: &str) -> Option<String> {
    raw.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

// the snapshot the orchestrator writes at checkout creation
pub struct SnapshotV1Parser;

impl ResponseParser for SnapshotV1Parser {
    fn version(&self) -> &'static str {
        "snapshot-v1"
    }

    fn recognizes(&self, raw: &serde_json::Value) -> bool {
        raw.get("source").and_then(|v| v.as_str()) == Some("checkout_created")
    }

    fn extract(&self, raw: &serde_json::Value) -> Option<CheckoutData> {
        Some(CheckoutData {
            schema_version: self.version().to_string(),
            checkout_url: str_field(raw, "checkout_url")?,
            sandbox_url: str_field(raw, "sandbox_url"),
        })
    }
}

// current REST shape of a checkout preference
pub struct PreferenceV1Parser;

impl ResponseParser for PreferenceV1Parser {
    fn version(&self) -> &'static str {
        "preference-v1"
    }

    fn recognizes(&self, raw: &serde_json::Value) -> bool {
        raw.get("id").is_some() && raw.get("init_point").is_some()
    }

    fn extract(&self, raw: &serde_json::Value) -> Option<CheckoutData> {
        Some(CheckoutData {
            schema_version: self.version().to_string(),
            checkout_url: str_field(raw, "init_point")?,
            sandbox_url: str_field(raw, "sandbox_init_point"),
        })
    }
}

// pre-REST SDK shape; keeps attempts from the old integration readable
pub struct SdkEnvelopeParser;

impl ResponseParser for SdkEnvelopeParser {
    fn version(&self) -> &'static str {
        "sdk-envelope-v0"
    }

    fn recognizes(&self, raw: &serde_json::Value) -> bool {
        raw.get("response")
            .map(|inner| inner.get("init_point").is_some())
            .unwrap_or(false)
    }

    fn extract(&self, raw: &serde_json::Value) -> Option<CheckoutData> {
        let inner = raw.get("response")?;
        Some(CheckoutData {
            schema_version: self.version().to_string(),
            checkout_url: str_field(inner, "init_point")?,
            sandbox_url: str_field(inner, "sandbox_init_point"),
        })
    }
}
