use crate::domain::attempt::{AttemptStatus, StatusClass};
use crate::service::query_service::AttemptFilter;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CheckoutFilterQuery {
    pub class: Option<String>,
    pub status: Option<String>,
}

fn parse_filter(q: &CheckoutFilterQuery) -> Result<Option<AttemptFilter>, String> {
    match (&q.class, &q.status) {
        (Some(_), Some(_)) => Err("specify either class or status, not both".to_string()),
        (Some(class), None) => match class.as_str() {
            "successful" | "success" => Ok(Some(AttemptFilter::Class(StatusClass::Success))),
            "active" => Ok(Some(AttemptFilter::Class(StatusClass::Active))),
            "failed" => Ok(Some(AttemptFilter::Class(StatusClass::Failed))),
            other => Err(format!("unknown status class '{}'", other)),
        },
        (None, Some(status)) => AttemptStatus::parse(status)
            .map(|s| Some(AttemptFilter::Exact(s)))
            .ok_or_else(|| format!("unknown attempt status '{}'", status)),
        (None, None) => Ok(None),
    }
}

pub async fn get_latest_checkout_url(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
    Query(q): Query<CheckoutFilterQuery>,
) -> impl IntoResponse {
    let filter = match parse_filter(&q) {
        Ok(f) => f,
        Err(msg) => {
            return (
                axum::http::StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": msg})),
            )
                .into_response()
        }
    };

    match state.query_service.latest_checkout_data_for(payment_id, filter).await {
        Ok(Some(data)) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({
                "payment_id": payment_id,
                "checkout_url": data.checkout_url,
                "sandbox_url": data.sandbox_url,
                "schema_version": data.schema_version,
            })),
        )
            .into_response(),
        Ok(None) => (
            axum::http::StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "no matching checkout data"})),
        )
            .into_response(),
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

pub async fn list_checkout_data(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
    Query(q): Query<CheckoutFilterQuery>,
) -> impl IntoResponse {
    let filter = match parse_filter(&q) {
        Ok(f) => f,
        Err(msg) => {
            return (
                axum::http::StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": msg})),
            )
                .into_response()
        }
    };

    match state.query_service.all_checkout_data_for(payment_id, filter).await {
        Ok(entries) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({
                "payment_id": payment_id,
                "total": entries.len(),
                "checkout_data": entries,
            })),
        )
            .into_response(),
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}
