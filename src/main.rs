use axum::routing::{get, post};
use axum::Router;
use printshop_payments::config::AppConfig;
use printshop_payments::domain::status_map::StatusMap;
use printshop_payments::gateways::mercadopago::MercadoPagoGateway;
use printshop_payments::gateways::mock::MockGateway;
use printshop_payments::gateways::CheckoutGateway;
use printshop_payments::parsing::parser::ParserSelector;
use printshop_payments::repo::attempts_repo::AttemptsRepo;
use printshop_payments::repo::gateway_accounts_repo::GatewayAccountsRepo;
use printshop_payments::repo::payments_repo::PaymentsRepo;
use printshop_payments::repo::sales_repo::SalesRepo;
use printshop_payments::repo::store::{AttemptStore, GatewayAccountStore, PaymentStore, SaleStore};
use printshop_payments::service::checkout_service::CheckoutService;
use printshop_payments::service::parser_health::DiagnosticsService;
use printshop_payments::service::query_service::QueryService;
use printshop_payments::service::reconciler::Reconciler;
use printshop_payments::validation::chain::ValidatorChain;
use printshop_payments::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let sales_repo: Arc<dyn SaleStore> = Arc::new(SalesRepo { pool: pool.clone() });
    let accounts_repo: Arc<dyn GatewayAccountStore> =
        Arc::new(GatewayAccountsRepo { pool: pool.clone() });
    let payments_repo: Arc<dyn PaymentStore> = Arc::new(PaymentsRepo { pool: pool.clone() });
    let attempts_repo: Arc<dyn AttemptStore> = Arc::new(AttemptsRepo { pool: pool.clone() });

    let gateway: Arc<dyn CheckoutGateway> = if cfg.gateway_adapter == "MOCK" {
        Arc::new(MockGateway {
            behavior: std::env::var("MOCK_GATEWAY_BEHAVIOR")
                .unwrap_or_else(|_| "ALWAYS_SUCCESS".to_string()),
        })
    } else {
        Arc::new(MercadoPagoGateway {
            base_url: cfg.gateway_base_url.clone(),
            timeout_ms: cfg.gateway_timeout_ms,
            client: reqwest::Client::new(),
        })
    };

    let selector = Arc::new(ParserSelector::standard());
    let status_map = Arc::new(StatusMap::default());

    let checkout_service = CheckoutService {
        sales_repo: sales_repo.clone(),
        accounts_repo: accounts_repo.clone(),
        payments_repo: payments_repo.clone(),
        attempts_repo: attempts_repo.clone(),
        gateway: gateway.clone(),
        chain: Arc::new(ValidatorChain::standard()),
    };

    let reconciler = Reconciler {
        payments_repo: payments_repo.clone(),
        attempts_repo: attempts_repo.clone(),
        sales_repo,
        accounts_repo,
        gateway,
        status_map,
    };

    let query_service = QueryService {
        attempts_repo: attempts_repo.clone(),
        selector: selector.clone(),
    };

    let diagnostics = DiagnosticsService {
        attempts_repo: attempts_repo.clone(),
        selector,
    };

    let state = AppState {
        checkout_service,
        reconciler,
        query_service,
        diagnostics,
        payments_repo,
        attempts_repo,
        pool,
    };

    let app = Router::new()
        .route(
            "/payments",
            post(printshop_payments::http::handlers::payments::create_payment),
        )
        .route(
            "/payments/:payment_id/status",
            get(printshop_payments::http::handlers::payments::get_status),
        )
        .route(
            "/payments/:payment_id/checkout-url",
            get(printshop_payments::http::handlers::checkout_data::get_latest_checkout_url),
        )
        .route(
            "/payments/:payment_id/checkout-data",
            get(printshop_payments::http::handlers::checkout_data::list_checkout_data),
        )
        .route(
            "/webhooks/payment",
            post(printshop_payments::http::handlers::webhooks::payment_webhook),
        )
        .route(
            "/diagnostics/parsers",
            get(printshop_payments::http::handlers::diagnostics::parser_health),
        )
        .route("/ops/readiness", get(printshop_payments::http::handlers::ops::readiness))
        .route("/ops/liveness", get(printshop_payments::http::handlers::ops::liveness))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
