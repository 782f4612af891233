use crate::domain::attempt::AttemptStatus;
use crate::domain::sale::{GatewayAccountConfig, LineItem};
use anyhow::Result;

pub mod mercadopago;
pub mod mock;

#[derive(Debug, Clone)]
pub struct CheckoutOrder {
    // local payment id, echoed back by the gateway in notifications
    pub external_reference: String,
    pub amount_minor: i64,
    pub currency: String,
    pub items: Vec<LineItem>,
}

// transport failures and error payloads land here as failed-class statuses
// with an error code; adapters only return Err for programmer-level faults
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    pub status: AttemptStatus,
    pub preference_id: Option<String>,
    pub checkout_url: Option<String>,
    pub sandbox_url: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusProbe {
    pub native_status: String,
    pub transaction_id: Option<String>,
}

// credentials come in per call from the location's resolved account; adapters
// hold no mutable global configuration
#[async_trait::async_trait]
pub trait CheckoutGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn create_checkout(
        &self,
        account: &GatewayAccountConfig,
        order: CheckoutOrder,
    ) -> Result<CheckoutOutcome>;

    async fn fetch_status(
        &self,
        account: &GatewayAccountConfig,
        gateway_payment_id: &str,
    ) -> Result<StatusProbe>;
}
