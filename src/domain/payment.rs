use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Refunded,
    Failed,
}

impl PaymentStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PaymentStatus::Pending)
    }

    // a refund is the only move out of a terminal state
    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        match (self, next) {
            (PaymentStatus::Pending, n) if n != PaymentStatus::Pending => true,
            (PaymentStatus::Approved, PaymentStatus::Refunded) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Approved => "APPROVED",
            PaymentStatus::Rejected => "REJECTED",
            PaymentStatus::Cancelled => "CANCELLED",
            PaymentStatus::Refunded => "REFUNDED",
            PaymentStatus::Failed => "FAILED",
        }
    }

    pub fn parse(s: &str) -> Option<PaymentStatus> {
        match s {
            "PENDING" => Some(PaymentStatus::Pending),
            "APPROVED" => Some(PaymentStatus::Approved),
            "REJECTED" => Some(PaymentStatus::Rejected),
            "CANCELLED" => Some(PaymentStatus::Cancelled),
            "REFUNDED" => Some(PaymentStatus::Refunded),
            "FAILED" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }
}

// the three gateway identifiers are assigned independently as the payment
// progresses: intent id at creation, gateway payment id once the gateway
// confirms a payment object, transaction id once a bank-level reference exists
#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    pub payment_id: Uuid,
    pub sale_id: Uuid,
    pub amount_minor: i64,
    pub currency: String,
    pub status: PaymentStatus,
    pub intent_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub transaction_id: Option<String>,
    pub version: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Payment {
    pub fn new_pending(sale_id: Uuid, amount_minor: i64, currency: &str) -> Self {
        let now = chrono::Utc::now();
        Self {
            payment_id: Uuid::new_v4(),
            sale_id,
            amount_minor,
            currency: currency.to_string(),
            status: PaymentStatus::Pending,
            intent_id: None,
            gateway_payment_id: None,
            transaction_id: None,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreatePaymentRequest {
    pub sale_id: Uuid,
    pub amount_minor: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePaymentResponse {
    pub success: bool,
    pub message: String,
    pub checkout_url: Option<String>,
    pub intent_id: Option<String>,
    pub payment_id: Option<Uuid>,
    pub status: Option<PaymentStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentStatusResponse {
    pub payment_id: Uuid,
    pub status: PaymentStatus,
    pub amount_minor: i64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

// 4000 -> "40.00"
pub fn format_amount(minor: i64) -> String {
    format!("{}.{:02}", minor / 100, (minor % 100).abs())
}
