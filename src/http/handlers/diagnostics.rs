use crate::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ParserHealthQuery {
    // RFC 3339; defaults to the last 24 hours
    pub since: Option<chrono::DateTime<chrono::Utc>>,
}

pub async fn parser_health(
    State(state): State<AppState>,
    Query(q): Query<ParserHealthQuery>,
) -> impl IntoResponse {
    let since = q.since.unwrap_or_else(|| chrono::Utc::now() - chrono::Duration::hours(24));

    match state.diagnostics.parser_health(since).await {
        Ok(report) => (axum::http::StatusCode::OK, Json(report)).into_response(),
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}
