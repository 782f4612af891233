use crate::domain::attempt::AttemptStatus;
use crate::domain::sale::GatewayAccountConfig;
use crate::gateways::{CheckoutGateway, CheckoutOrder, CheckoutOutcome, StatusProbe};
use anyhow::Result;
use serde_json::json;

pub struct MercadoPagoGateway {
    pub base_url: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[async_trait::async_trait]
impl CheckoutGateway for MercadoPagoGateway {
    fn name(&self) -> &'static str {
        "mercadopago"
    }

    async fn create_checkout(
        &self,
        account: &GatewayAccountConfig,
        order: CheckoutOrder,
    ) -> Result<CheckoutOutcome> {
        let url = format!("{}/checkout/preferences", self.base_url);
        let items: Vec<serde_json::Value> = order
            .items
            .iter()
            .map(|item| {
                json!({
                    "title": item.description,
                    "quantity": item.quantity,
                    "currency_id": order.currency,
                    "unit_price": item.unit_price_minor as f64 / 100.0,
                })
            })
            .collect();
        let body = json!({
            "external_reference": order.external_reference,
            "items": items,
            "metadata": { "amount_minor": order.amount_minor },
        });

        let resp = self
            .client
            .post(url)
            .bearer_auth(&account.access_token)
            .json(&body)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        let outcome = match resp {
            Ok(r) if r.status().is_success() => {
                let v: serde_json::Value = r.json().await.unwrap_or_default();
                CheckoutOutcome {
                    status: AttemptStatus::Succeeded,
                    preference_id: v.get("id").and_then(|id| id.as_str()).map(ToString::to_string),
                    checkout_url: v
                        .get("init_point")
                        .and_then(|u| u.as_str())
                        .map(ToString::to_string),
                    sandbox_url: v
                        .get("sandbox_init_point")
                        .and_then(|u| u.as_str())
                        .map(ToString::to_string),
                    error_code: None,
                    error_message: None,
                }
            }
            Ok(r) => {
                let status = r.status();
                let body = r.text().await.unwrap_or_default();
                CheckoutOutcome {
                    status: if status.as_u16() == 403 {
                        AttemptStatus::BlockedByGateway
                    } else {
                        AttemptStatus::Failed
                    },
                    preference_id: None,
                    checkout_url: None,
                    sandbox_url: None,
                    error_code: Some(format!("HTTP_{}", status.as_u16())),
                    error_message: Some(body.chars().take(200).collect()),
                }
            }
            Err(e) if e.is_timeout() => CheckoutOutcome {
                status: AttemptStatus::NetworkError,
                preference_id: None,
                checkout_url: None,
                sandbox_url: None,
                error_code: Some("TIMEOUT".to_string()),
                error_message: Some("gateway timeout".to_string()),
            },
            Err(e) => CheckoutOutcome {
                status: AttemptStatus::NetworkError,
                preference_id: None,
                checkout_url: None,
                sandbox_url: None,
                error_code: Some("NETWORK_ERROR".to_string()),
                error_message: Some(e.to_string()),
            },
        };

        Ok(outcome)
    }

    async fn fetch_status(
        &self,
        account: &GatewayAccountConfig,
        gateway_payment_id: &str,
    ) -> Result<StatusProbe> {
        let url = format!("{}/v1/payments/{}", self.base_url, gateway_payment_id);
        let resp = self
            .client
            .get(url)
            .bearer_auth(&account.access_token)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await?;

        if !resp.status().is_success() {
            anyhow::bail!("status fetch for {} returned HTTP {}", gateway_payment_id, resp.status());
        }

        let v: serde_json::Value = resp.json().await?;
        let native_status = v
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or("pending")
            .to_string();
        let transaction_id = v
            .get("transaction_id")
            .or_else(|| v.get("authorization_code"))
            .and_then(|t| t.as_str())
            .map(ToString::to_string);

        Ok(StatusProbe {
            native_status,
            transaction_id,
        })
    }
}
