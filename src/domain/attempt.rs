use serde::{Deserialize, Serialize};
use uuid::Uuid;

// every variant belongs to exactly one StatusClass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    Succeeded,
    Completed,
    Initiated,
    Pending,
    Processing,
    AwaitingConfirmation,
    RequiresAction,
    Failed,
    Declined,
    Cancelled,
    Abandoned,
    Expired,
    InsufficientFunds,
    InvalidCard,
    AuthenticationFailed,
    FraudDetected,
    BlockedByGateway,
    NetworkError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Success,
    Active,
    Failed,
}

impl AttemptStatus {
    pub const ALL: [AttemptStatus; 18] = [
        AttemptStatus::Succeeded,
        AttemptStatus::Completed,
        AttemptStatus::Initiated,
        AttemptStatus::Pending,
        AttemptStatus::Processing,
        AttemptStatus::AwaitingConfirmation,
        AttemptStatus::RequiresAction,
        AttemptStatus::Failed,
        AttemptStatus::Declined,
        AttemptStatus::Cancelled,
        AttemptStatus::Abandoned,
        AttemptStatus::Expired,
        AttemptStatus::InsufficientFunds,
        AttemptStatus::InvalidCard,
        AttemptStatus::AuthenticationFailed,
        AttemptStatus::FraudDetected,
        AttemptStatus::BlockedByGateway,
        AttemptStatus::NetworkError,
    ];

    pub fn class(&self) -> StatusClass {
        match self {
            AttemptStatus::Succeeded | AttemptStatus::Completed => StatusClass::Success,
            AttemptStatus::Initiated
            | AttemptStatus::Pending
            | AttemptStatus::Processing
            | AttemptStatus::AwaitingConfirmation
            | AttemptStatus::RequiresAction => StatusClass::Active,
            AttemptStatus::Failed
            | AttemptStatus::Declined
            | AttemptStatus::Cancelled
            | AttemptStatus::Abandoned
            | AttemptStatus::Expired
            | AttemptStatus::InsufficientFunds
            | AttemptStatus::InvalidCard
            | AttemptStatus::AuthenticationFailed
            | AttemptStatus::FraudDetected
            | AttemptStatus::BlockedByGateway
            | AttemptStatus::NetworkError => StatusClass::Failed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptStatus::Succeeded => "succeeded",
            AttemptStatus::Completed => "completed",
            AttemptStatus::Initiated => "initiated",
            AttemptStatus::Pending => "pending",
            AttemptStatus::Processing => "processing",
            AttemptStatus::AwaitingConfirmation => "awaiting_confirmation",
            AttemptStatus::RequiresAction => "requires_action",
            AttemptStatus::Failed => "failed",
            AttemptStatus::Declined => "declined",
            AttemptStatus::Cancelled => "cancelled",
            AttemptStatus::Abandoned => "abandoned",
            AttemptStatus::Expired => "expired",
            AttemptStatus::InsufficientFunds => "insufficient_funds",
            AttemptStatus::InvalidCard => "invalid_card",
            AttemptStatus::AuthenticationFailed => "authentication_failed",
            AttemptStatus::FraudDetected => "fraud_detected",
            AttemptStatus::BlockedByGateway => "blocked_by_gateway",
            AttemptStatus::NetworkError => "network_error",
        }
    }

    pub fn parse(s: &str) -> Option<AttemptStatus> {
        AttemptStatus::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

// raw_response is always valid JSON text; non-JSON output is wrapped at write
#[derive(Debug, Clone, Serialize)]
pub struct Attempt {
    pub attempt_id: Uuid,
    pub payment_id: Uuid,
    pub status: AttemptStatus,
    pub raw_response: String,
    pub error_code: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAttempt {
    pub payment_id: Uuid,
    pub status: AttemptStatus,
    pub raw_response: String,
    pub error_code: Option<String>,
}
