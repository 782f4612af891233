use serde::Serialize;

// recomputed from the attempt's raw response on every read, never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutData {
    // version tag of the parser that produced this value
    pub schema_version: String,
    pub checkout_url: String,
    pub sandbox_url: Option<String>,
}
