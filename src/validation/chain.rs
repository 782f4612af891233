use crate::domain::payment::{CreatePaymentRequest, Payment};
use crate::domain::sale::{GatewayAccountConfig, Sale};
use crate::domain::validation::ValidationResult;
use crate::validation::validators::{
    AmountValidator, GatewayPrerequisiteValidator, LineItemValidator, SaleStatusValidator,
    SandboxAdvisoryValidator,
};

pub struct ValidationContext<'a> {
    pub sale: &'a Sale,
    pub request: &'a CreatePaymentRequest,
    pub prior_payments: &'a [Payment],
    pub account: Option<&'a GatewayAccountConfig>,
}

pub trait Validator: Send + Sync {
    fn name(&self) -> &'static str;

    fn warn_only(&self) -> bool {
        false
    }

    fn check(&self, ctx: &ValidationContext) -> ValidationResult;
}

pub struct ValidatorChain {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorChain {
    pub fn new(validators: Vec<Box<dyn Validator>>) -> Self {
        Self { validators }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(SaleStatusValidator),
            Box::new(LineItemValidator),
            Box::new(AmountValidator),
            Box::new(GatewayPrerequisiteValidator),
            Box::new(SandboxAdvisoryValidator),
        ])
    }

    pub fn validate(&self, ctx: &ValidationContext) -> ValidationResult {
        let mut combined = ValidationResult::ok();
        let mut failed = false;

        for validator in &self.validators {
            // first failure stops further failure-capable validators;
            // warn-only ones always run
            if failed && !validator.warn_only() {
                continue;
            }
            let result = validator.check(ctx);
            if !result.is_ok() {
                failed = true;
            }
            combined.merge(result);
        }

        combined
    }
}
