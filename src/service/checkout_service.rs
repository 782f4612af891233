use crate::domain::attempt::{AttemptStatus, NewAttempt, StatusClass};
use crate::domain::payment::{
    CreatePaymentRequest, CreatePaymentResponse, ErrorEnvelope, ErrorPayload, Payment, PaymentStatus,
};
use crate::gateways::{CheckoutGateway, CheckoutOrder, CheckoutOutcome};
use crate::parsing::envelope::wrap_raw;
use crate::repo::store::{AttemptStore, GatewayAccountStore, PaymentStore, SaleStore};
use crate::validation::chain::{ValidationContext, ValidatorChain};
use std::sync::Arc;

#[derive(Clone)]
pub struct CheckoutService {
    pub sales_repo: Arc<dyn SaleStore>,
    pub accounts_repo: Arc<dyn GatewayAccountStore>,
    pub payments_repo: Arc<dyn PaymentStore>,
    pub attempts_repo: Arc<dyn AttemptStore>,
    pub gateway: Arc<dyn CheckoutGateway>,
    pub chain: Arc<ValidatorChain>,
}

impl CheckoutService {
    pub async fn create_payment(
        &self,
        req: CreatePaymentRequest,
    ) -> Result<CreatePaymentResponse, (axum::http::StatusCode, ErrorEnvelope)> {
        let sale = self
            .sales_repo
            .find_by_id(req.sale_id)
            .await
            .map_err(internal)?
            .ok_or_else(|| {
                (
                    axum::http::StatusCode::NOT_FOUND,
                    err("SALE_NOT_FOUND", "sale does not exist"),
                )
            })?;

        let account = self
            .accounts_repo
            .find_by_location(sale.location_id)
            .await
            .map_err(internal)?;
        let prior = self
            .payments_repo
            .list_by_sale(sale.sale_id)
            .await
            .map_err(internal)?;

        let verdict = self.chain.validate(&ValidationContext {
            sale: &sale,
            request: &req,
            prior_payments: &prior,
            account: account.as_ref(),
        });
        if !verdict.is_ok() {
            return Ok(CreatePaymentResponse {
                success: false,
                message: verdict.errors.join("; "),
                checkout_url: None,
                intent_id: None,
                payment_id: None,
                status: None,
            });
        }
        for warning in &verdict.warnings {
            tracing::warn!("payment validation warning for sale {}: {}", sale.sale_id, warning);
        }

        let account = account.ok_or_else(|| internal(anyhow::anyhow!("validated account missing")))?;

        let payment = Payment::new_pending(sale.sale_id, req.amount_minor, &req.currency);
        self.payments_repo.insert(&payment).await.map_err(internal)?;

        let order = CheckoutOrder {
            external_reference: payment.payment_id.to_string(),
            amount_minor: req.amount_minor,
            currency: req.currency.clone(),
            items: sale.line_items.clone(),
        };

        match self.gateway.create_checkout(&account, order).await {
            Ok(outcome) if outcome.status.class() == StatusClass::Success => {
                if let Err(e) = self.record_checkout_created(&payment, &outcome).await {
                    self.contain_failure(
                        &payment,
                        AttemptStatus::Failed,
                        "PERSISTENCE_ERROR",
                        &e.to_string(),
                    )
                    .await;
                    return Err(internal(e));
                }

                let checkout_url = if account.sandbox {
                    outcome.sandbox_url.clone().or(outcome.checkout_url.clone())
                } else {
                    outcome.checkout_url.clone()
                };

                Ok(CreatePaymentResponse {
                    success: true,
                    message: "checkout created".to_string(),
                    checkout_url,
                    intent_id: outcome.preference_id,
                    payment_id: Some(payment.payment_id),
                    status: Some(PaymentStatus::Pending),
                })
            }
            Ok(outcome) => {
                let code = outcome
                    .error_code
                    .clone()
                    .unwrap_or_else(|| "GATEWAY_ERROR".to_string());
                let message = outcome
                    .error_message
                    .clone()
                    .unwrap_or_else(|| "gateway refused the checkout".to_string());
                self.contain_failure(&payment, outcome.status, &code, &message).await;

                Ok(CreatePaymentResponse {
                    success: false,
                    message,
                    checkout_url: None,
                    intent_id: None,
                    payment_id: Some(payment.payment_id),
                    status: Some(PaymentStatus::Failed),
                })
            }
            Err(e) => {
                self.contain_failure(
                    &payment,
                    AttemptStatus::Failed,
                    "INTERNAL_GATEWAY_ERROR",
                    &e.to_string(),
                )
                .await;

                Ok(CreatePaymentResponse {
                    success: false,
                    message: "payment could not be submitted to the gateway".to_string(),
                    checkout_url: None,
                    intent_id: None,
                    payment_id: Some(payment.payment_id),
                    status: Some(PaymentStatus::Failed),
                })
            }
        }
    }

    async fn record_checkout_created(
        &self,
        payment: &Payment,
        outcome: &CheckoutOutcome,
    ) -> anyhow::Result<()> {
        self.payments_repo
            .record_gateway_ids(payment.payment_id, outcome.preference_id.as_deref(), None, None)
            .await?;

        let snapshot = serde_json::json!({
            "source": "checkout_created",
            "preference_id": outcome.preference_id,
            "checkout_url": outcome.checkout_url,
            "sandbox_url": outcome.sandbox_url,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });
        self.attempts_repo
            .append(NewAttempt {
                payment_id: payment.payment_id,
                status: AttemptStatus::Succeeded,
                raw_response: snapshot.to_string(),
                error_code: None,
            })
            .await?;

        Ok(())
    }

    // any failure once a payment row exists lands here: mark FAILED and leave
    // a failed-class attempt with a non-empty error code
    async fn contain_failure(&self, payment: &Payment, status: AttemptStatus, code: &str, message: &str) {
        let status = if status.class() == StatusClass::Failed {
            status
        } else {
            AttemptStatus::Failed
        };

        if let Err(e) = self
            .payments_repo
            .update_status(payment.payment_id, PaymentStatus::Failed, payment.version)
            .await
        {
            tracing::error!(
                "failed to mark payment {} as FAILED: {}",
                payment.payment_id,
                e
            );
        }

        let attempt = NewAttempt {
            payment_id: payment.payment_id,
            status,
            raw_response: wrap_raw(message),
            error_code: Some(code.to_string()),
        };
        if let Err(e) = self.attempts_repo.append(attempt).await {
            tracing::error!(
                "failed to append failure attempt for payment {}: {}",
                payment.payment_id,
                e
            );
        }
    }
}

pub fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}

pub fn internal(e: anyhow::Error) -> (axum::http::StatusCode, ErrorEnvelope) {
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        err("INTERNAL_ERROR", &e.to_string()),
    )
}
