use crate::domain::attempt::Attempt;
use crate::parsing::parser::ParserSelector;
use crate::repo::store::AttemptStore;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

impl HealthStatus {
    pub fn from_rate(rate: f64) -> HealthStatus {
        if rate > 0.95 {
            HealthStatus::Healthy
        } else if rate > 0.80 {
            HealthStatus::Warning
        } else {
            HealthStatus::Critical
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParserStats {
    pub version: String,
    pub parsed: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParserHealthReport {
    pub total_attempts: u64,
    pub parsed: u64,
    pub unparseable: u64,
    // internally written transition records, excluded from the coverage rate
    pub transition_records: u64,
    pub success_rate: f64,
    pub status: HealthStatus,
    pub per_parser: Vec<ParserStats>,
    pub unparseable_attempt_ids: Vec<Uuid>,
}

fn is_transition_record(raw: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|v| v.get("source").and_then(|s| s.as_str()).map(str::to_string))
        .as_deref()
        == Some("status_transition")
}

pub fn summarize(attempts: &[Attempt], selector: &ParserSelector) -> ParserHealthReport {
    let mut per_parser: HashMap<String, u64> = HashMap::new();
    let mut unparseable_ids = Vec::new();
    let mut transition_records = 0u64;

    for attempt in attempts {
        if is_transition_record(&attempt.raw_response) {
            transition_records += 1;
            continue;
        }
        match selector.parse(&attempt.raw_response) {
            Some(data) => *per_parser.entry(data.schema_version).or_insert(0) += 1,
            None => unparseable_ids.push(attempt.attempt_id),
        }
    }

    let parsed: u64 = per_parser.values().sum();
    let unparseable = unparseable_ids.len() as u64;
    let considered = parsed + unparseable;
    let success_rate = if considered == 0 {
        1.0
    } else {
        parsed as f64 / considered as f64
    };

    // registration order is priority order; keep it stable in the report
    let stats: Vec<ParserStats> = selector
        .versions()
        .into_iter()
        .map(|version| ParserStats {
            version: version.to_string(),
            parsed: per_parser.get(version).copied().unwrap_or(0),
        })
        .collect();

    ParserHealthReport {
        total_attempts: attempts.len() as u64,
        parsed,
        unparseable,
        transition_records,
        success_rate,
        status: HealthStatus::from_rate(success_rate),
        per_parser: stats,
        unparseable_attempt_ids: unparseable_ids,
    }
}

#[derive(Clone)]
pub struct DiagnosticsService {
    pub attempts_repo: Arc<dyn AttemptStore>,
    pub selector: Arc<ParserSelector>,
}

impl DiagnosticsService {
    pub async fn parser_health(
        &self,
        since: chrono::DateTime<chrono::Utc>,
    ) -> anyhow::Result<ParserHealthReport> {
        let attempts = self.attempts_repo.list_since(since).await?;
        Ok(summarize(&attempts, &self.selector))
    }
}
