use crate::repo::store::AttemptStore;
use std::sync::Arc;

// the one destructive operation over the attempt ledger; only the retention
// binary constructs this
pub struct RetentionJob {
    pub attempts_repo: Arc<dyn AttemptStore>,
}

impl RetentionJob {
    pub async fn purge_older_than(
        &self,
        cutoff: chrono::DateTime<chrono::Utc>,
    ) -> anyhow::Result<u64> {
        let deleted = self.attempts_repo.delete_older_than(cutoff).await?;
        tracing::info!("retention purge removed {} attempts older than {}", deleted, cutoff);
        Ok(deleted)
    }
}

pub fn cutoff_from_days(days: i64) -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now() - chrono::Duration::days(days)
}
