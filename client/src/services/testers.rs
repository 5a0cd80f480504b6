//! Test participants.

#[cfg(test)]
#[path = "testers_test.rs"]
mod testers_test;

use crate::net::backend::{Backend, BackendError};
use crate::net::query::{Direction, Query};
use crate::net::types::Tester;
use crate::util::form::optional_text;

const TABLE: &str = "testers";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewTester {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewTester {
    fn row(&self) -> serde_json::Value {
        serde_json::json!([{
            "name": self.name.trim(),
            "email": self.email.trim(),
            "phone": optional_text(&self.phone),
        }])
    }
}

pub async fn list_testers<B: Backend>(backend: &B) -> Result<Vec<Tester>, BackendError> {
    backend
        .fetch(&Query::table(TABLE).select("*").order("name", Direction::Asc))
        .await
}

pub async fn create_tester<B: Backend>(backend: &B, tester: &NewTester) -> Result<(), BackendError> {
    backend.insert(TABLE, tester.row()).await
}
