use crate::domain::sale::{LineItem, Sale, SaleStatus};
use crate::repo::store::SaleStore;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct SalesRepo {
    pub pool: PgPool,
}

#[async_trait]
impl SaleStore for SalesRepo {
    async fn find_by_id(&self, sale_id: Uuid) -> Result<Option<Sale>> {
        let row = sqlx::query(
            r#"
            SELECT sale_id, location_id, status, total_minor, currency, line_items
            FROM sales
            WHERE sale_id = $1
            "#,
        )
        .bind(sale_id)
        .fetch_optional(&self.pool)
        .await?;

        let row = match row {
            Some(r) => r,
            None => return Ok(None),
        };

        let status_text: String = row.get("status");
        // unknown sale states never accept payments
        let status = SaleStatus::parse(&status_text).unwrap_or(SaleStatus::Cancelled);
        let items_json: serde_json::Value = row.get("line_items");
        let line_items: Vec<LineItem> = serde_json::from_value(items_json).unwrap_or_default();

        Ok(Some(Sale {
            sale_id: row.get("sale_id"),
            location_id: row.get("location_id"),
            status,
            total_minor: row.get("total_minor"),
            currency: row.get("currency"),
            line_items,
        }))
    }
}
