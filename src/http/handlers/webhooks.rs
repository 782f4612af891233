use crate::service::reconciler::WebhookOutcome;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PaymentWebhookPayload {
    pub gateway_payment_id: String,
    pub status: String,
}

pub async fn payment_webhook(
    State(state): State<AppState>,
    Json(payload): Json<PaymentWebhookPayload>,
) -> impl IntoResponse {
    match state
        .reconciler
        .handle_webhook(&payload.gateway_payment_id, &payload.status)
        .await
    {
        Ok(WebhookOutcome::Applied) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({"received": true, "applied": true})),
        )
            .into_response(),
        Ok(WebhookOutcome::Unchanged) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({"received": true, "applied": false})),
        )
            .into_response(),
        Ok(WebhookOutcome::NotFound) => (
            axum::http::StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "unknown gateway payment identifier"})),
        )
            .into_response(),
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}
