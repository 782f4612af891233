use printshop_payments::domain::attempt::{AttemptStatus, StatusClass};
use printshop_payments::domain::payment::PaymentStatus;
use printshop_payments::domain::status_map::StatusMap;

#[test]
fn every_fine_status_belongs_to_exactly_one_class() {
    let mut success = 0;
    let mut active = 0;
    let mut failed = 0;

    for status in AttemptStatus::ALL {
        match status.class() {
            StatusClass::Success => success += 1,
            StatusClass::Active => active += 1,
            StatusClass::Failed => failed += 1,
        }
    }

    assert_eq!(success, 2);
    assert_eq!(active, 5);
    assert_eq!(failed, 11);
    assert_eq!(success + active + failed, AttemptStatus::ALL.len());
}

#[test]
fn fine_status_round_trips_through_its_string_form() {
    for status in AttemptStatus::ALL {
        assert_eq!(AttemptStatus::parse(status.as_str()), Some(status));
    }
}

#[test]
fn unknown_native_status_parks_as_pending() {
    let map = StatusMap::default();

    let mapped = map.map_native("some_future_gateway_state");
    assert_eq!(mapped.fine, AttemptStatus::Pending);
    assert_eq!(mapped.coarse, PaymentStatus::Pending);
}

#[test]
fn native_mapping_is_case_insensitive() {
    let map = StatusMap::default();
    assert_eq!(map.map_native("APPROVED").coarse, PaymentStatus::Approved);
    assert_eq!(map.map_native(" Rejected ").coarse, PaymentStatus::Rejected);
}

#[test]
fn decline_like_statuses_map_to_rejected() {
    let map = StatusMap::default();
    for native in ["rejected", "cc_rejected_insufficient_amount", "cc_rejected_high_risk"] {
        assert_eq!(map.map_native(native).coarse, PaymentStatus::Rejected, "{native}");
    }
}

#[test]
fn abandonment_like_statuses_map_to_cancelled() {
    let map = StatusMap::default();
    for native in ["cancelled", "abandoned", "expired"] {
        assert_eq!(map.map_native(native).coarse, PaymentStatus::Cancelled, "{native}");
    }
}

#[test]
fn refund_vocabulary_overrides_to_refunded() {
    let map = StatusMap::default();
    assert_eq!(map.map_native("refunded").coarse, PaymentStatus::Refunded);
    assert_eq!(map.map_native("charged_back").coarse, PaymentStatus::Refunded);
}

#[test]
fn every_fine_status_has_a_coarse_mapping() {
    let map = StatusMap::default();
    for status in AttemptStatus::ALL {
        let coarse = map.coarse_of(status);
        match status.class() {
            StatusClass::Success => assert_eq!(coarse, PaymentStatus::Approved),
            StatusClass::Active => assert_eq!(coarse, PaymentStatus::Pending),
            StatusClass::Failed => assert!(
                matches!(
                    coarse,
                    PaymentStatus::Rejected | PaymentStatus::Cancelled | PaymentStatus::Failed
                ),
                "{:?} mapped to {:?}",
                status,
                coarse
            ),
        }
    }
}
