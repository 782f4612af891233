use crate::domain::payment::{CreatePaymentRequest, PaymentStatus, PaymentStatusResponse};
use crate::repo::store::{AttemptStore, PaymentStore};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

pub async fn create_payment(
    State(state): State<AppState>,
    Json(req): Json<CreatePaymentRequest>,
) -> impl IntoResponse {
    match state.checkout_service.create_payment(req).await {
        Ok(resp) => {
            let code = if resp.success {
                axum::http::StatusCode::OK
            } else {
                axum::http::StatusCode::UNPROCESSABLE_ENTITY
            };
            (code, Json(resp)).into_response()
        }
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn get_status(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
) -> impl IntoResponse {
    let payment = match state.payments_repo.find_by_id(payment_id).await {
        Ok(Some(p)) => p,
        Ok(None) => {
            return (
                axum::http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({"error": "payment not found"})),
            )
                .into_response()
        }
        Err(e) => {
            return (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    if payment.status == PaymentStatus::Pending {
        state.reconciler.poll(&payment).await;
    }

    let payment = match state.payments_repo.find_by_id(payment_id).await {
        Ok(Some(p)) => p,
        _ => payment,
    };

    let error = if matches!(payment.status, PaymentStatus::Failed | PaymentStatus::Rejected) {
        state
            .attempts_repo
            .list_by_payment_desc(payment_id)
            .await
            .ok()
            .and_then(|attempts| attempts.into_iter().find_map(|a| a.error_code))
    } else {
        None
    };

    (
        axum::http::StatusCode::OK,
        Json(PaymentStatusResponse {
            payment_id: payment.payment_id,
            status: payment.status,
            amount_minor: payment.amount_minor,
            currency: payment.currency,
            error,
        }),
    )
        .into_response()
}
