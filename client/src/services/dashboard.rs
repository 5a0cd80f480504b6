//! Overview counts shown when the dashboard opens.
//!
//! Three dependent reads composed client-side: the caller's memberships,
//! products in those companies, and public tests of those products. An empty
//! id set skips the next read.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use serde::Deserialize;

use crate::net::backend::{Backend, BackendError};
use crate::net::query::Query;
use crate::services::companies::member_company_ids;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub companies: usize,
    pub products: usize,
    pub active_tests: usize,
}

#[derive(Deserialize)]
struct IdRow {
    id: String,
}

pub async fn load_summary<B: Backend>(backend: &B, user_id: &str) -> Result<DashboardSummary, BackendError> {
    let company_ids = member_company_ids(backend, user_id).await?;
    let mut summary = DashboardSummary { companies: company_ids.len(), ..DashboardSummary::default() };
    if company_ids.is_empty() {
        return Ok(summary);
    }

    let products: Vec<IdRow> = backend
        .fetch(&Query::table("products").select("id").is_in("company_id", company_ids))
        .await?;
    summary.products = products.len();
    if products.is_empty() {
        return Ok(summary);
    }

    let tests = backend
        .select(
            &Query::table("tests")
                .select("id")
                .is_in("product_id", products.into_iter().map(|p| p.id))
                .eq("is_private", "false"),
        )
        .await?;
    summary.active_tests = tests.len();
    Ok(summary)
}
