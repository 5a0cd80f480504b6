//! Read-only test results and their rating statistics.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use crate::net::backend::{Backend, BackendError};
use crate::net::query::{Direction, Query};
use crate::net::types::TestResult;
use crate::util::rating_stats::RatingStats;

const TABLE: &str = "test_results";

/// Results for one test, newest first, with the tester embedded.
pub async fn list_results<B: Backend>(backend: &B, test_id: &str) -> Result<Vec<TestResult>, BackendError> {
    backend
        .fetch(
            &Query::table(TABLE)
                .select("*,tester:testers(name,email)")
                .eq("test_id", test_id)
                .order("created_at", Direction::Desc),
        )
        .await
}

pub fn stats_for(results: &[TestResult]) -> RatingStats {
    let ratings = results.iter().map(|r| r.rating).collect::<Vec<_>>();
    RatingStats::from_ratings(&ratings)
}
