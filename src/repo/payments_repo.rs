use crate::domain::payment::{Payment, PaymentStatus};
use crate::repo::store::PaymentStore;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct PaymentsRepo {
    pub pool: PgPool,
}

const PAYMENT_COLUMNS: &str = "payment_id, sale_id, amount_minor, currency, status, \
     intent_id, gateway_payment_id, transaction_id, version, created_at, updated_at";

fn map_payment(row: PgRow) -> Payment {
    let status_text: String = row.get("status");
    Payment {
        payment_id: row.get("payment_id"),
        sale_id: row.get("sale_id"),
        amount_minor: row.get("amount_minor"),
        currency: row.get("currency"),
        status: PaymentStatus::parse(&status_text).unwrap_or(PaymentStatus::Pending),
        intent_id: row.get("intent_id"),
        gateway_payment_id: row.get("gateway_payment_id"),
        transaction_id: row.get("transaction_id"),
        version: row.get("version"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl PaymentStore for PaymentsRepo {
    async fn insert(&self, payment: &Payment) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO payments (
                payment_id, sale_id, amount_minor, currency, status,
                intent_id, gateway_payment_id, transaction_id, version, created_at, updated_at
            ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11)
            "#,
        )
        .bind(payment.payment_id)
        .bind(payment.sale_id)
        .bind(payment.amount_minor)
        .bind(payment.currency.clone())
        .bind(payment.status.as_str())
        .bind(payment.intent_id.clone())
        .bind(payment.gateway_payment_id.clone())
        .bind(payment.transaction_id.clone())
        .bind(payment.version)
        .bind(payment.created_at)
        .bind(payment.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, payment_id: Uuid) -> Result<Option<Payment>> {
        let row = sqlx::query(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE payment_id = $1"
        ))
        .bind(payment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_payment))
    }

    async fn list_by_sale(&self, sale_id: Uuid) -> Result<Vec<Payment>> {
        let rows = sqlx::query(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE sale_id = $1 ORDER BY created_at ASC"
        ))
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_payment).collect())
    }

    // a webhook may carry whichever of the three identifiers the gateway
    // keyed the notification by
    async fn find_by_gateway_identifier(&self, gateway_id: &str) -> Result<Option<Payment>> {
        let row = sqlx::query(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments \
             WHERE intent_id = $1 OR gateway_payment_id = $1 OR transaction_id = $1 \
             LIMIT 1"
        ))
        .bind(gateway_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_payment))
    }

    async fn record_gateway_ids(
        &self,
        payment_id: Uuid,
        intent_id: Option<&str>,
        gateway_payment_id: Option<&str>,
        transaction_id: Option<&str>,
    ) -> Result<()> {
        // COALESCE: an already-assigned identifier is never overwritten
        sqlx::query(
            r#"
            UPDATE payments
            SET intent_id = COALESCE(intent_id, $2),
                gateway_payment_id = COALESCE(gateway_payment_id, $3),
                transaction_id = COALESCE(transaction_id, $4),
                updated_at = now()
            WHERE payment_id = $1
            "#,
        )
        .bind(payment_id)
        .bind(intent_id)
        .bind(gateway_payment_id)
        .bind(transaction_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_status(
        &self,
        payment_id: Uuid,
        status: PaymentStatus,
        expected_version: i32,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE payments
            SET status = $2, version = version + 1, updated_at = now()
            WHERE payment_id = $1 AND version = $3
            "#,
        )
        .bind(payment_id)
        .bind(status.as_str())
        .bind(expected_version)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
