use printshop_payments::domain::payment::PaymentStatus;
use printshop_payments::service::reconciler::plan_transition;

#[test]
fn identical_status_is_a_noop() {
    assert_eq!(plan_transition(PaymentStatus::Pending, PaymentStatus::Pending), None);
    assert_eq!(plan_transition(PaymentStatus::Approved, PaymentStatus::Approved), None);
}

#[test]
fn repeated_identical_input_stays_a_noop() {
    // redelivered webhook: first delivery applies, every replay plans nothing
    let first = plan_transition(PaymentStatus::Pending, PaymentStatus::Approved);
    assert_eq!(first, Some(PaymentStatus::Approved));

    let replay = plan_transition(PaymentStatus::Approved, PaymentStatus::Approved);
    assert_eq!(replay, None);
}

#[test]
fn pending_reaches_every_terminal_status() {
    for terminal in [
        PaymentStatus::Approved,
        PaymentStatus::Rejected,
        PaymentStatus::Cancelled,
        PaymentStatus::Refunded,
        PaymentStatus::Failed,
    ] {
        assert_eq!(plan_transition(PaymentStatus::Pending, terminal), Some(terminal));
    }
}

#[test]
fn approved_can_only_move_to_refunded() {
    assert_eq!(
        plan_transition(PaymentStatus::Approved, PaymentStatus::Refunded),
        Some(PaymentStatus::Refunded)
    );
    assert_eq!(plan_transition(PaymentStatus::Approved, PaymentStatus::Rejected), None);
    assert_eq!(plan_transition(PaymentStatus::Approved, PaymentStatus::Cancelled), None);
    assert_eq!(plan_transition(PaymentStatus::Approved, PaymentStatus::Failed), None);
}

#[test]
fn other_terminal_statuses_never_move() {
    for from in [
        PaymentStatus::Rejected,
        PaymentStatus::Cancelled,
        PaymentStatus::Refunded,
        PaymentStatus::Failed,
    ] {
        for to in [
            PaymentStatus::Pending,
            PaymentStatus::Approved,
            PaymentStatus::Rejected,
            PaymentStatus::Cancelled,
            PaymentStatus::Refunded,
            PaymentStatus::Failed,
        ] {
            assert_eq!(plan_transition(from, to), None, "{:?} -> {:?}", from, to);
        }
    }
}
