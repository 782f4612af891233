use crate::domain::attempt::{Attempt, AttemptStatus, StatusClass};
use crate::domain::checkout::CheckoutData;
use crate::parsing::parser::ParserSelector;
use crate::repo::store::AttemptStore;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptFilter {
    Class(StatusClass),
    Exact(AttemptStatus),
}

impl AttemptFilter {
    pub fn matches(&self, status: AttemptStatus) -> bool {
        match self {
            AttemptFilter::Class(class) => status.class() == *class,
            AttemptFilter::Exact(exact) => status == *exact,
        }
    }
}

// expects newest-first, the repo's canonical order
pub fn latest_matching<'a>(
    attempts: &'a [Attempt],
    filter: Option<&AttemptFilter>,
) -> Option<&'a Attempt> {
    attempts
        .iter()
        .find(|a| filter.map(|f| f.matches(a.status)).unwrap_or(true))
}

// an unparseable latest attempt is a not-found, not a fallback to older rows
pub fn latest_checkout_data(
    attempts: &[Attempt],
    filter: Option<&AttemptFilter>,
    selector: &ParserSelector,
) -> Option<CheckoutData> {
    latest_matching(attempts, filter).and_then(|a| selector.parse(&a.raw_response))
}

pub fn collect_checkout_data(
    attempts: &[Attempt],
    filter: Option<&AttemptFilter>,
    selector: &ParserSelector,
) -> Vec<CheckoutData> {
    attempts
        .iter()
        .filter(|a| filter.map(|f| f.matches(a.status)).unwrap_or(true))
        .filter_map(|a| selector.parse(&a.raw_response))
        .collect()
}

/// Read-only surface over the ledger. No caching: every call re-reads and
/// re-parses the stored raw responses.
#[derive(Clone)]
pub struct QueryService {
    pub attempts_repo: Arc<dyn AttemptStore>,
    pub selector: Arc<ParserSelector>,
}

impl QueryService {
    pub async fn latest_checkout_data_for(
        &self,
        payment_id: Uuid,
        filter: Option<AttemptFilter>,
    ) -> anyhow::Result<Option<CheckoutData>> {
        let attempts = self.attempts_repo.list_by_payment_desc(payment_id).await?;
        Ok(latest_checkout_data(&attempts, filter.as_ref(), &self.selector))
    }

    pub async fn all_checkout_data_for(
        &self,
        payment_id: Uuid,
        filter: Option<AttemptFilter>,
    ) -> anyhow::Result<Vec<CheckoutData>> {
        let attempts = self.attempts_repo.list_by_payment_desc(payment_id).await?;
        Ok(collect_checkout_data(&attempts, filter.as_ref(), &self.selector))
    }
}
