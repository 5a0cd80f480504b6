//! Product tests.
//!
//! Who may see a private test is decided by backend policy; the flag is
//! only recorded here.

#[cfg(test)]
#[path = "tests_test.rs"]
mod tests_test;

use crate::net::backend::{Backend, BackendError};
use crate::net::query::{Direction, Query};
use crate::net::types::{NamedRef, Test};
use crate::util::form::optional_text;

pub(crate) const TABLE: &str = "tests";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewTest {
    pub product_id: String,
    pub title: String,
    pub description: String,
    pub is_private: bool,
}

impl NewTest {
    fn row(&self) -> serde_json::Value {
        serde_json::json!([{
            "title": self.title.trim(),
            "description": optional_text(&self.description),
            "is_private": self.is_private,
            "product_id": self.product_id,
        }])
    }
}

/// Visible tests, newest first, with the product name embedded.
pub async fn list_tests<B: Backend>(backend: &B) -> Result<Vec<Test>, BackendError> {
    backend
        .fetch(
            &Query::table(TABLE)
                .select("*,product:products(name)")
                .order("created_at", Direction::Desc),
        )
        .await
}

/// Products for the selector, by name.
pub async fn list_product_options<B: Backend>(backend: &B) -> Result<Vec<NamedRef>, BackendError> {
    backend
        .fetch(&Query::table("products").select("id,name").order("name", Direction::Asc))
        .await
}

pub async fn create_test<B: Backend>(backend: &B, test: &NewTest) -> Result<(), BackendError> {
    backend.insert(TABLE, test.row()).await
}
