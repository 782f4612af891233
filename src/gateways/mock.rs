use crate::domain::attempt::AttemptStatus;
use crate::domain::sale::GatewayAccountConfig;
use crate::gateways::{CheckoutGateway, CheckoutOrder, CheckoutOutcome, StatusProbe};
use anyhow::Result;

pub struct MockGateway {
    pub behavior: String,
}

#[async_trait::async_trait]
impl CheckoutGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_checkout(
        &self,
        _account: &GatewayAccountConfig,
        order: CheckoutOrder,
    ) -> Result<CheckoutOutcome> {
        let outcome = match self.behavior.as_str() {
            "ALWAYS_DECLINE" => CheckoutOutcome {
                status: AttemptStatus::Declined,
                preference_id: None,
                checkout_url: None,
                sandbox_url: None,
                error_code: Some("MOCK_DECLINED".to_string()),
                error_message: Some("mock decline".to_string()),
            },
            "ALWAYS_TIMEOUT" => CheckoutOutcome {
                status: AttemptStatus::NetworkError,
                preference_id: None,
                checkout_url: None,
                sandbox_url: None,
                error_code: Some("MOCK_TIMEOUT".to_string()),
                error_message: Some("mock timeout".to_string()),
            },
            _ => CheckoutOutcome {
                status: AttemptStatus::Succeeded,
                preference_id: Some(format!("mock_pref_{}", uuid::Uuid::new_v4())),
                checkout_url: Some(format!(
                    "https://checkout.mock.local/{}",
                    order.external_reference
                )),
                sandbox_url: Some(format!(
                    "https://sandbox.checkout.mock.local/{}",
                    order.external_reference
                )),
                error_code: None,
                error_message: None,
            },
        };

        Ok(outcome)
    }

    async fn fetch_status(
        &self,
        _account: &GatewayAccountConfig,
        _gateway_payment_id: &str,
    ) -> Result<StatusProbe> {
        let native = match self.behavior.as_str() {
            "ALWAYS_DECLINE" => "rejected",
            "ALWAYS_TIMEOUT" => "pending",
            _ => "approved",
        };
        Ok(StatusProbe {
            native_status: native.to_string(),
            transaction_id: None,
        })
    }
}
