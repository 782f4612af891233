use crate::domain::payment::{format_amount, PaymentStatus};
use crate::domain::validation::ValidationResult;
use crate::validation::chain::{ValidationContext, Validator};

pub struct SaleStatusValidator;

impl Validator for SaleStatusValidator {
    fn name(&self) -> &'static str {
        "sale_status"
    }

    fn check(&self, ctx: &ValidationContext) -> ValidationResult {
        if ctx.sale.status.accepts_payments() {
            ValidationResult::ok()
        } else {
            ValidationResult::fail(format!(
                "sale {} is not open for payment (status {:?})",
                ctx.sale.sale_id, ctx.sale.status
            ))
        }
    }
}

pub struct LineItemValidator;

impl Validator for LineItemValidator {
    fn name(&self) -> &'static str {
        "line_items"
    }

    fn check(&self, ctx: &ValidationContext) -> ValidationResult {
        if ctx.sale.line_items.is_empty() {
            ValidationResult::fail(format!("sale {} has no purchasable line items", ctx.sale.sale_id))
        } else {
            ValidationResult::ok()
        }
    }
}

// pending payments count against the total until they settle or fail
pub struct AmountValidator;

impl Validator for AmountValidator {
    fn name(&self) -> &'static str {
        "amount"
    }

    fn check(&self, ctx: &ValidationContext) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if ctx.request.amount_minor <= 0 {
            result.merge(ValidationResult::fail("amount must be positive"));
            return result;
        }
        if ctx.request.currency != ctx.sale.currency {
            result.merge(ValidationResult::fail(format!(
                "currency {} does not match sale currency {}",
                ctx.request.currency, ctx.sale.currency
            )));
            return result;
        }

        let settled: i64 = ctx
            .prior_payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Approved)
            .map(|p| p.amount_minor)
            .sum();
        let outstanding: i64 = ctx
            .prior_payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Pending)
            .map(|p| p.amount_minor)
            .sum();

        let available = ctx.sale.total_minor - settled - outstanding;
        if ctx.request.amount_minor > available {
            result.merge(ValidationResult::fail(format!(
                "requested amount {} exceeds available balance {} for sale {}",
                format_amount(ctx.request.amount_minor),
                format_amount(available.max(0)),
                ctx.sale.sale_id
            )));
        }
        if outstanding > 0 {
            result.merge(ValidationResult::warn(format!(
                "sale {} already has {} pending across open payments",
                ctx.sale.sale_id,
                format_amount(outstanding)
            )));
        }

        result
    }
}

pub struct GatewayPrerequisiteValidator;

impl Validator for GatewayPrerequisiteValidator {
    fn name(&self) -> &'static str {
        "gateway_prerequisites"
    }

    fn check(&self, ctx: &ValidationContext) -> ValidationResult {
        let account = match ctx.account {
            Some(a) => a,
            None => {
                return ValidationResult::fail(format!(
                    "no gateway account configured for location {}",
                    ctx.sale.location_id
                ))
            }
        };

        let mut result = ValidationResult::ok();
        if ctx.request.amount_minor < account.min_amount_minor {
            result.merge(ValidationResult::fail(format!(
                "amount {} is below the gateway minimum of {}",
                format_amount(ctx.request.amount_minor),
                format_amount(account.min_amount_minor)
            )));
        }
        if ctx.request.amount_minor > account.max_amount_minor {
            result.merge(ValidationResult::fail(format!(
                "amount {} exceeds the gateway maximum of {}",
                format_amount(ctx.request.amount_minor),
                format_amount(account.max_amount_minor)
            )));
        }
        if let Some(soft) = account.soft_limit_minor {
            if ctx.request.amount_minor > soft && ctx.request.amount_minor <= account.max_amount_minor {
                result.merge(ValidationResult::warn(format!(
                    "amount {} is above {} and may trigger gateway-side review",
                    format_amount(ctx.request.amount_minor),
                    format_amount(soft)
                )));
            }
        }

        result
    }
}

pub struct SandboxAdvisoryValidator;

impl Validator for SandboxAdvisoryValidator {
    fn name(&self) -> &'static str {
        "sandbox_advisory"
    }

    fn warn_only(&self) -> bool {
        true
    }

    fn check(&self, ctx: &ValidationContext) -> ValidationResult {
        match ctx.account {
            Some(account) if account.sandbox => ValidationResult::warn(format!(
                "gateway account for location {} is in sandbox mode; no real funds will be captured",
                ctx.sale.location_id
            )),
            _ => ValidationResult::ok(),
        }
    }
}
