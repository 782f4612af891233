use crate::domain::sale::GatewayAccountConfig;
use crate::repo::store::GatewayAccountStore;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct GatewayAccountsRepo {
    pub pool: PgPool,
}

#[async_trait]
impl GatewayAccountStore for GatewayAccountsRepo {
    async fn find_by_location(&self, location_id: Uuid) -> Result<Option<GatewayAccountConfig>> {
        let row = sqlx::query(
            r#"
            SELECT location_id, access_token, sandbox, min_amount_minor, max_amount_minor, soft_limit_minor
            FROM gateway_accounts
            WHERE location_id = $1
            "#,
        )
        .bind(location_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| GatewayAccountConfig {
            location_id: r.get("location_id"),
            access_token: r.get("access_token"),
            sandbox: r.get("sandbox"),
            min_amount_minor: r.get("min_amount_minor"),
            max_amount_minor: r.get("max_amount_minor"),
            soft_limit_minor: r.get("soft_limit_minor"),
        }))
    }
}
