use crate::domain::attempt::{NewAttempt, StatusClass};
use crate::domain::payment::{Payment, PaymentStatus};
use crate::domain::status_map::{MappedStatus, StatusMap};
use crate::gateways::CheckoutGateway;
use crate::repo::store::{AttemptStore, GatewayAccountStore, PaymentStore, SaleStore};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileSource {
    Poll,
    Webhook,
}

impl ReconcileSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReconcileSource::Poll => "poll",
            ReconcileSource::Webhook => "webhook",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    Applied,
    Unchanged,
    NotFound,
}

// None both for "already there" and for a disallowed move, so redelivered
// webhooks degrade to no-ops and terminal payments stay terminal
pub fn plan_transition(current: PaymentStatus, observed: PaymentStatus) -> Option<PaymentStatus> {
    if current == observed {
        return None;
    }
    if current.can_transition_to(observed) {
        Some(observed)
    } else {
        None
    }
}

#[derive(Clone)]
pub struct Reconciler {
    pub payments_repo: Arc<dyn PaymentStore>,
    pub attempts_repo: Arc<dyn AttemptStore>,
    pub sales_repo: Arc<dyn SaleStore>,
    pub accounts_repo: Arc<dyn GatewayAccountStore>,
    pub gateway: Arc<dyn CheckoutGateway>,
    pub status_map: Arc<StatusMap>,
}

impl Reconciler {
    // gateway unreachability must never fail the caller's read
    pub async fn poll(&self, payment: &Payment) {
        let gateway_id = match &payment.gateway_payment_id {
            Some(id) => id.clone(),
            None => return,
        };

        if let Err(e) = self.poll_inner(payment, &gateway_id).await {
            tracing::warn!(
                "status poll for payment {} failed, serving last-known status: {}",
                payment.payment_id,
                e
            );
        }
    }

    async fn poll_inner(&self, payment: &Payment, gateway_id: &str) -> anyhow::Result<()> {
        let sale = self
            .sales_repo
            .find_by_id(payment.sale_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("sale {} missing for payment", payment.sale_id))?;
        let account = self
            .accounts_repo
            .find_by_location(sale.location_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("no gateway account for location {}", sale.location_id))?;

        let probe = self.gateway.fetch_status(&account, gateway_id).await?;
        if let Some(txn) = probe.transaction_id.as_deref() {
            self.payments_repo
                .record_gateway_ids(payment.payment_id, None, None, Some(txn))
                .await?;
        }

        let mapped = self.status_map.map_native(&probe.native_status);
        self.apply(payment, mapped, &probe.native_status, ReconcileSource::Poll)
            .await?;
        Ok(())
    }

    pub async fn handle_webhook(
        &self,
        gateway_payment_id: &str,
        gateway_status: &str,
    ) -> anyhow::Result<WebhookOutcome> {
        let payment = match self
            .payments_repo
            .find_by_gateway_identifier(gateway_payment_id)
            .await?
        {
            Some(p) => p,
            None => return Ok(WebhookOutcome::NotFound),
        };

        if payment.gateway_payment_id.is_none() {
            self.payments_repo
                .record_gateway_ids(payment.payment_id, None, Some(gateway_payment_id), None)
                .await?;
        }

        let mapped = self.status_map.map_native(gateway_status);
        let applied = self
            .apply(&payment, mapped, gateway_status, ReconcileSource::Webhook)
            .await?;

        Ok(if applied {
            WebhookOutcome::Applied
        } else {
            WebhookOutcome::Unchanged
        })
    }

    async fn apply(
        &self,
        payment: &Payment,
        mapped: MappedStatus,
        native_status: &str,
        source: ReconcileSource,
    ) -> anyhow::Result<bool> {
        let next = match plan_transition(payment.status, mapped.coarse) {
            Some(next) => next,
            None => {
                if payment.status != mapped.coarse {
                    tracing::warn!(
                        "ignoring disallowed transition {} -> {} for payment {} (source {})",
                        payment.status.as_str(),
                        mapped.coarse.as_str(),
                        payment.payment_id,
                        source.as_str()
                    );
                }
                return Ok(false);
            }
        };

        let updated = self
            .payments_repo
            .update_status(payment.payment_id, next, payment.version)
            .await?;
        if !updated {
            tracing::warn!(
                "lost reconcile race for payment {}; observed {} from {} was not applied",
                payment.payment_id,
                native_status,
                source.as_str()
            );
            return Ok(false);
        }

        let transition = serde_json::json!({
            "source": "status_transition",
            "trigger": source.as_str(),
            "gateway_status": native_status,
            "from": payment.status.as_str(),
            "to": next.as_str(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });
        self.attempts_repo
            .append(NewAttempt {
                payment_id: payment.payment_id,
                status: mapped.fine,
                raw_response: transition.to_string(),
                error_code: if mapped.fine.class() == StatusClass::Failed {
                    Some(native_status.to_ascii_uppercase())
                } else {
                    None
                },
            })
            .await?;

        tracing::info!(
            "payment {} moved {} -> {} ({} reported '{}')",
            payment.payment_id,
            payment.status.as_str(),
            next.as_str(),
            source.as_str(),
            native_status
        );
        Ok(true)
    }
}
