use crate::domain::attempt::{AttemptStatus, StatusClass};
use crate::domain::payment::PaymentStatus;
use std::collections::HashMap;

// unrecognized native statuses map to pending: a notification we cannot
// classify is parked, never dropped or failed
pub struct StatusMap {
    native_to_fine: HashMap<&'static str, AttemptStatus>,
    fine_to_coarse: HashMap<AttemptStatus, PaymentStatus>,
    coarse_overrides: HashMap<&'static str, PaymentStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedStatus {
    pub fine: AttemptStatus,
    pub coarse: PaymentStatus,
}

impl Default for StatusMap {
    fn default() -> Self {
        let mut native = HashMap::new();
        native.insert("approved", AttemptStatus::Succeeded);
        native.insert("succeeded", AttemptStatus::Succeeded);
        native.insert("accredited", AttemptStatus::Completed);
        native.insert("completed", AttemptStatus::Completed);
        native.insert("created", AttemptStatus::Initiated);
        native.insert("initiated", AttemptStatus::Initiated);
        native.insert("pending", AttemptStatus::Pending);
        native.insert("in_process", AttemptStatus::Processing);
        native.insert("processing", AttemptStatus::Processing);
        native.insert("authorized", AttemptStatus::AwaitingConfirmation);
        native.insert("awaiting_confirmation", AttemptStatus::AwaitingConfirmation);
        native.insert("in_mediation", AttemptStatus::RequiresAction);
        native.insert("requires_action", AttemptStatus::RequiresAction);
        native.insert("rejected", AttemptStatus::Declined);
        native.insert("declined", AttemptStatus::Declined);
        native.insert("cancelled", AttemptStatus::Cancelled);
        native.insert("abandoned", AttemptStatus::Abandoned);
        native.insert("expired", AttemptStatus::Expired);
        native.insert("insufficient_funds", AttemptStatus::InsufficientFunds);
        native.insert("cc_rejected_insufficient_amount", AttemptStatus::InsufficientFunds);
        native.insert("invalid_card", AttemptStatus::InvalidCard);
        native.insert("cc_rejected_bad_filled_card_number", AttemptStatus::InvalidCard);
        native.insert("authentication_failed", AttemptStatus::AuthenticationFailed);
        native.insert("cc_rejected_call_for_authorize", AttemptStatus::AuthenticationFailed);
        native.insert("fraud_detected", AttemptStatus::FraudDetected);
        native.insert("cc_rejected_high_risk", AttemptStatus::FraudDetected);
        native.insert("blocked_by_gateway", AttemptStatus::BlockedByGateway);
        native.insert("network_error", AttemptStatus::NetworkError);
        native.insert("failed", AttemptStatus::Failed);
        native.insert("error", AttemptStatus::Failed);
        // coarse override below routes these to REFUNDED
        native.insert("refunded", AttemptStatus::Completed);
        native.insert("charged_back", AttemptStatus::Completed);

        let mut coarse = HashMap::new();
        for status in AttemptStatus::ALL {
            let mapped = match status.class() {
                StatusClass::Success => PaymentStatus::Approved,
                StatusClass::Active => PaymentStatus::Pending,
                StatusClass::Failed => match status {
                    AttemptStatus::Cancelled | AttemptStatus::Abandoned | AttemptStatus::Expired => {
                        PaymentStatus::Cancelled
                    }
                    AttemptStatus::Failed | AttemptStatus::NetworkError => PaymentStatus::Failed,
                    _ => PaymentStatus::Rejected,
                },
            };
            coarse.insert(status, mapped);
        }

        let mut overrides = HashMap::new();
        overrides.insert("refunded", PaymentStatus::Refunded);
        overrides.insert("charged_back", PaymentStatus::Refunded);

        Self {
            native_to_fine: native,
            fine_to_coarse: coarse,
            coarse_overrides: overrides,
        }
    }
}

impl StatusMap {
    pub fn map_native(&self, native: &str) -> MappedStatus {
        let key = native.trim().to_ascii_lowercase();
        let fine = self
            .native_to_fine
            .get(key.as_str())
            .copied()
            .unwrap_or(AttemptStatus::Pending);
        let coarse = self
            .coarse_overrides
            .get(key.as_str())
            .copied()
            .unwrap_or_else(|| self.coarse_of(fine));
        MappedStatus { fine, coarse }
    }

    pub fn coarse_of(&self, fine: AttemptStatus) -> PaymentStatus {
        self.fine_to_coarse
            .get(&fine)
            .copied()
            .unwrap_or(PaymentStatus::Pending)
    }
}
