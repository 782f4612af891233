use anyhow::Result;
use printshop_payments::config::AppConfig;
use printshop_payments::repo::attempts_repo::AttemptsRepo;
use printshop_payments::service::retention::{cutoff_from_days, RetentionJob};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&cfg.database_url)
        .await?;

    let job = RetentionJob {
        attempts_repo: Arc::new(AttemptsRepo { pool }),
    };

    let cutoff = cutoff_from_days(cfg.attempt_retention_days);
    let deleted = job.purge_older_than(cutoff).await?;
    tracing::info!(
        "attempt retention finished: {} rows deleted (cutoff {})",
        deleted,
        cutoff
    );
    Ok(())
}
