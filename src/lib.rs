pub mod config;
pub mod domain {
    pub mod attempt;
    pub mod checkout;
    pub mod payment;
    pub mod sale;
    pub mod status_map;
    pub mod validation;
}
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod checkout_data;
        pub mod diagnostics;
        pub mod ops;
        pub mod payments;
        pub mod webhooks;
    }
}
pub mod parsing {
    pub mod envelope;
    pub mod parser;
    pub mod versions;
}
pub mod repo {
    pub mod attempts_repo;
    pub mod gateway_accounts_repo;
    pub mod payments_repo;
    pub mod sales_repo;
    pub mod store;
}
pub mod service {
    pub mod checkout_service;
    pub mod parser_health;
    pub mod query_service;
    pub mod reconciler;
    pub mod retention;
}
pub mod validation {
    pub mod chain;
    pub mod validators;
}

#[derive(Clone)]
pub struct AppState {
    pub checkout_service: service::checkout_service::CheckoutService,
    pub reconciler: service::reconciler::Reconciler,
    pub query_service: service::query_service::QueryService,
    pub diagnostics: service::parser_health::DiagnosticsService,
    pub payments_repo: std::sync::Arc<dyn repo::store::PaymentStore>,
    pub attempts_repo: std::sync::Arc<dyn repo::store::AttemptStore>,
    pub pool: sqlx::PgPool,
}
