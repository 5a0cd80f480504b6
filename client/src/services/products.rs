//! Products scoped to one of the caller's companies.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::backend::{Backend, BackendError};
use crate::net::query::{Direction, Query};
use crate::net::types::{Company, Product};
use crate::services::companies;
use crate::util::form::optional_text;

const TABLE: &str = "products";

/// Creation form values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewProduct {
    pub company_id: String,
    pub name: String,
    pub description: String,
}

impl NewProduct {
    fn row(&self) -> serde_json::Value {
        serde_json::json!([{
            "name": self.name.trim(),
            "description": optional_text(&self.description),
            "company_id": self.company_id,
        }])
    }
}

/// Companies offered in the selector, reached through the caller's
/// memberships.
pub async fn list_company_options<B: Backend>(backend: &B, user_id: &str) -> Result<Vec<Company>, BackendError> {
    companies::list_member_companies(backend, user_id).await
}

/// Newest first, with the owning company's name embedded.
pub async fn list_products<B: Backend>(backend: &B, company_id: &str) -> Result<Vec<Product>, BackendError> {
    backend
        .fetch(
            &Query::table(TABLE)
                .select("*,company:companies(id,name)")
                .eq("company_id", company_id)
                .order("created_at", Direction::Desc),
        )
        .await
}

pub async fn create_product<B: Backend>(backend: &B, product: &NewProduct) -> Result<(), BackendError> {
    backend.insert(TABLE, product.row()).await
}
