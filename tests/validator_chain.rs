use printshop_payments::domain::payment::{CreatePaymentRequest, Payment, PaymentStatus};
use printshop_payments::domain::sale::{GatewayAccountConfig, LineItem, Sale, SaleStatus};
use printshop_payments::validation::chain::{ValidationContext, ValidatorChain};
use uuid::Uuid;

#[test]
fn amount_over_available_balance_names_the_remainder() {
    let sale = sale(SaleStatus::PartiallyPaid, 10_000);
    let prior = vec![payment(&sale, 6_000, PaymentStatus::Approved)];
    let account = account(false);
    let req = request(&sale, 5_000);

    let result = ValidatorChain::standard().validate(&ctx(&sale, &req, &prior, Some(&account)));

    assert!(!result.is_ok());
    assert!(
        result.errors.iter().any(|e| e.contains("40.00")),
        "expected available balance 40.00 in {:?}",
        result.errors
    );
}

#[test]
fn closed_sale_rejects_all_payments() {
    let sale = sale(SaleStatus::Paid, 10_000);
    let req = request(&sale, 1_000);
    let account = account(false);

    let result = ValidatorChain::standard().validate(&ctx(&sale, &req, &[], Some(&account)));

    assert!(!result.is_ok());
    assert!(result.errors[0].contains("not open for payment"));
}

#[test]
fn first_failure_stops_later_failure_capable_validators() {
    // the amount is also over the total, but the sale-status failure comes
    // first and the amount validator must not be consulted
    let sale = sale(SaleStatus::Cancelled, 1_000);
    let req = request(&sale, 50_000);
    let account = account(false);

    let result = ValidatorChain::standard().validate(&ctx(&sale, &req, &[], Some(&account)));

    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("not open for payment"));
}

#[test]
fn warn_only_validator_runs_even_after_a_failure() {
    let sale = sale(SaleStatus::Cancelled, 10_000);
    let req = request(&sale, 1_000);
    let account = account(true);

    let result = ValidatorChain::standard().validate(&ctx(&sale, &req, &[], Some(&account)));

    assert!(!result.is_ok());
    assert!(result.warnings.iter().any(|w| w.contains("sandbox")));
}

#[test]
fn sale_without_line_items_fails() {
    let mut sale = sale(SaleStatus::PaymentPending, 10_000);
    sale.line_items.clear();
    let req = request(&sale, 1_000);
    let account = account(false);

    let result = ValidatorChain::standard().validate(&ctx(&sale, &req, &[], Some(&account)));

    assert!(result.errors.iter().any(|e| e.contains("no purchasable line items")));
}

#[test]
fn outstanding_pending_amount_warns_without_failing() {
    let sale = sale(SaleStatus::PartiallyPaid, 10_000);
    let prior = vec![payment(&sale, 2_000, PaymentStatus::Pending)];
    let req = request(&sale, 3_000);
    let account = account(false);

    let result = ValidatorChain::standard().validate(&ctx(&sale, &req, &prior, Some(&account)));

    assert!(result.is_ok());
    assert!(result.warnings.iter().any(|w| w.contains("20.00")));
}

#[test]
fn missing_gateway_account_fails() {
    let sale = sale(SaleStatus::PaymentPending, 10_000);
    let req = request(&sale, 1_000);

    let result = ValidatorChain::standard().validate(&ctx(&sale, &req, &[], None));

    assert!(result.errors.iter().any(|e| e.contains("no gateway account")));
}

#[test]
fn amount_below_gateway_minimum_fails() {
    let sale = sale(SaleStatus::PaymentPending, 10_000);
    let req = request(&sale, 50);
    let account = account(false);

    let result = ValidatorChain::standard().validate(&ctx(&sale, &req, &[], Some(&account)));

    assert!(result.errors.iter().any(|e| e.contains("below the gateway minimum")));
}

#[test]
fn amount_above_soft_ceiling_warns_but_passes() {
    let sale = sale(SaleStatus::PaymentPending, 1_000_000);
    let req = request(&sale, 600_000);
    let account = account(false);

    let result = ValidatorChain::standard().validate(&ctx(&sale, &req, &[], Some(&account)));

    assert!(result.is_ok());
    assert!(result.warnings.iter().any(|w| w.contains("gateway-side review")));
}

fn sale(status: SaleStatus, total_minor: i64) -> Sale {
    Sale {
        sale_id: Uuid::new_v4(),
        location_id: Uuid::new_v4(),
        status,
        total_minor,
        currency: "ARS".to_string(),
        line_items: vec![LineItem {
            description: "business cards, 500 units".to_string(),
            quantity: 1,
            unit_price_minor: total_minor,
        }],
    }
}

fn request(sale: &Sale, amount_minor: i64) -> CreatePaymentRequest {
    CreatePaymentRequest {
        sale_id: sale.sale_id,
        amount_minor,
        currency: sale.currency.clone(),
    }
}

fn payment(sale: &Sale, amount_minor: i64, status: PaymentStatus) -> Payment {
    let mut p = Payment::new_pending(sale.sale_id, amount_minor, &sale.currency);
    p.status = status;
    p
}

fn account(sandbox: bool) -> GatewayAccountConfig {
    GatewayAccountConfig {
        location_id: Uuid::new_v4(),
        access_token: "TEST-token".to_string(),
        sandbox,
        min_amount_minor: 100,
        max_amount_minor: 10_000_000,
        soft_limit_minor: Some(500_000),
    }
}

fn ctx<'a>(
    sale: &'a Sale,
    request: &'a CreatePaymentRequest,
    prior: &'a [Payment],
    account: Option<&'a GatewayAccountConfig>,
) -> ValidationContext<'a> {
    ValidationContext {
        sale,
        request,
        prior_payments: prior,
        account,
    }
}
