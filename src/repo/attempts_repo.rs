use crate::domain::attempt::{Attempt, AttemptStatus, NewAttempt};
use crate::repo::store::AttemptStore;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct AttemptsRepo {
    pub pool: PgPool,
}

fn map_attempt(row: PgRow) -> Attempt {
    let status_text: String = row.get("status");
    Attempt {
        attempt_id: row.get("attempt_id"),
        payment_id: row.get("payment_id"),
        status: AttemptStatus::parse(&status_text).unwrap_or(AttemptStatus::Pending),
        raw_response: row.get("raw_response"),
        error_code: row.get("error_code"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl AttemptStore for AttemptsRepo {
    async fn append(&self, attempt: NewAttempt) -> Result<Uuid> {
        let attempt_id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO payment_attempts (attempt_id, payment_id, status, raw_response, error_code)
            VALUES ($1,$2,$3,$4,$5)
            "#,
        )
        .bind(attempt_id)
        .bind(attempt.payment_id)
        .bind(attempt.status.as_str())
        .bind(attempt.raw_response)
        .bind(attempt.error_code)
        .execute(&self.pool)
        .await?;

        Ok(attempt_id)
    }

    async fn list_by_payment_desc(&self, payment_id: Uuid) -> Result<Vec<Attempt>> {
        let rows = sqlx::query(
            r#"
            SELECT attempt_id, payment_id, status, raw_response, error_code, created_at
            FROM payment_attempts
            WHERE payment_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(payment_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_attempt).collect())
    }

    async fn list_since(&self, since: chrono::DateTime<chrono::Utc>) -> Result<Vec<Attempt>> {
        let rows = sqlx::query(
            r#"
            SELECT attempt_id, payment_id, status, raw_response, error_code, created_at
            FROM payment_attempts
            WHERE created_at >= $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_attempt).collect())
    }

    // only the retention job reaches this
    async fn delete_older_than(&self, cutoff: chrono::DateTime<chrono::Utc>) -> Result<u64> {
        let result = sqlx::query("DELETE FROM payment_attempts WHERE created_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
