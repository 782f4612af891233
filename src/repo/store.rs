use crate::domain::attempt::{Attempt, NewAttempt};
use crate::domain::payment::{Payment, PaymentStatus};
use crate::domain::sale::{GatewayAccountConfig, Sale};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait SaleStore: Send + Sync {
    async fn find_by_id(&self, sale_id: Uuid) -> Result<Option<Sale>>;
}

#[async_trait]
pub trait GatewayAccountStore: Send + Sync {
    async fn find_by_location(&self, location_id: Uuid) -> Result<Option<GatewayAccountConfig>>;
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn insert(&self, payment: &Payment) -> Result<()>;

    async fn find_by_id(&self, payment_id: Uuid) -> Result<Option<Payment>>;

    async fn list_by_sale(&self, sale_id: Uuid) -> Result<Vec<Payment>>;

    async fn find_by_gateway_identifier(&self, gateway_id: &str) -> Result<Option<Payment>>;

    async fn record_gateway_ids(
        &self,
        payment_id: Uuid,
        intent_id: Option<&str>,
        gateway_payment_id: Option<&str>,
        transaction_id: Option<&str>,
    ) -> Result<()>;

    async fn update_status(
        &self,
        payment_id: Uuid,
        status: PaymentStatus,
        expected_version: i32,
    ) -> Result<bool>;
}

#[async_trait]
pub trait AttemptStore: Send + Sync {
    async fn append(&self, attempt: NewAttempt) -> Result<Uuid>;

    async fn list_by_payment_desc(&self, payment_id: Uuid) -> Result<Vec<Attempt>>;

    async fn list_since(&self, since: chrono::DateTime<chrono::Utc>) -> Result<Vec<Attempt>>;

    async fn delete_older_than(&self, cutoff: chrono::DateTime<chrono::Utc>) -> Result<u64>;
}
