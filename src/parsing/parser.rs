use crate::domain::checkout::CheckoutData;
use crate::parsing::versions::{PreferenceV1Parser, SdkEnvelopeParser, SnapshotV1Parser};

pub trait ResponseParser: Send + Sync {
    fn version(&self) -> &'static str;
    fn recognizes(&self, raw: &serde_json::Value) -> bool;
    fn extract(&self, raw: &serde_json::Value) -> Option<CheckoutData>;
}

// tries parsers in registration order; first non-empty extraction wins
pub struct ParserSelector {
    parsers: Vec<Box<dyn ResponseParser>>,
}

impl ParserSelector {
    pub fn new(parsers: Vec<Box<dyn ResponseParser>>) -> Self {
        Self { parsers }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(SnapshotV1Parser),
            Box::new(PreferenceV1Parser),
            Box::new(SdkEnvelopeParser),
        ])
    }

    pub fn parse(&self, raw_text: &str) -> Option<CheckoutData> {
        let value: serde_json::Value = serde_json::from_str(raw_text).ok()?;
        for parser in &self.parsers {
            if !parser.recognizes(&value) {
                continue;
            }
            if let Some(data) = parser.extract(&value) {
                return Some(data);
            }
        }
        None
    }

    pub fn versions(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.version()).collect()
    }
}
