use serde::{Deserialize, Serialize};
use uuid::Uuid;

// the slice of a sale this engine needs; sales are owned by the
// store-management backend
#[derive(Debug, Clone)]
pub struct Sale {
    pub sale_id: Uuid,
    pub location_id: Uuid,
    pub status: SaleStatus,
    pub total_minor: i64,
    pub currency: String,
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatus {
    Draft,
    PaymentPending,
    PartiallyPaid,
    Paid,
    Cancelled,
}

impl SaleStatus {
    pub fn accepts_payments(&self) -> bool {
        matches!(self, SaleStatus::PaymentPending | SaleStatus::PartiallyPaid)
    }

    pub fn parse(s: &str) -> Option<SaleStatus> {
        match s {
            "DRAFT" => Some(SaleStatus::Draft),
            "PAYMENT_PENDING" => Some(SaleStatus::PaymentPending),
            "PARTIALLY_PAID" => Some(SaleStatus::PartiallyPaid),
            "PAID" => Some(SaleStatus::Paid),
            "CANCELLED" => Some(SaleStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: i32,
    pub unit_price_minor: i64,
}

#[derive(Debug, Clone)]
pub struct GatewayAccountConfig {
    pub location_id: Uuid,
    pub access_token: String,
    pub sandbox: bool,
    pub min_amount_minor: i64,
    pub max_amount_minor: i64,
    // above this the gateway may hold the charge for manual review
    pub soft_limit_minor: Option<i64>,
}
