use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::fake::FakeBackend;

fn seeded() -> FakeBackend {
    let backend = FakeBackend::new();
    backend.seed(
        TABLE,
        vec![
            json!({ "id": "p1", "name": "Eldre", "company_id": "c1", "created_at": "2026-01-01T00:00:00Z",
                    "company": { "id": "c1", "name": "Alfa" } }),
            json!({ "id": "p2", "name": "Nyere", "company_id": "c1", "created_at": "2026-05-01T00:00:00Z",
                    "company": { "id": "c1", "name": "Alfa" } }),
            json!({ "id": "p3", "name": "Annet", "company_id": "c2", "created_at": "2026-03-01T00:00:00Z",
                    "company": { "id": "c2", "name": "Beta" } }),
        ],
    );
    backend
}

#[test]
fn products_are_filtered_by_company_newest_first() {
    let backend = seeded();
    let products = block_on(list_products(&backend, "c1")).unwrap();
    assert_eq!(products.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["Nyere", "Eldre"]);
    assert_eq!(products[0].company.as_ref().map(|c| c.name.as_str()), Some("Alfa"));
}

#[test]
fn switching_company_fetches_only_the_new_company() {
    let backend = seeded();
    block_on(list_products(&backend, "c1")).unwrap();
    let products = block_on(list_products(&backend, "c2")).unwrap();
    assert_eq!(products.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["p3"]);
}

#[test]
fn create_product_stores_blank_description_as_null() {
    let backend = FakeBackend::new();
    let product = NewProduct { company_id: "c1".to_owned(), name: " Ny app ".to_owned(), description: "  ".to_owned() };

    block_on(create_product(&backend, &product)).unwrap();

    let rows = backend.rows(TABLE);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Ny app");
    assert_eq!(rows[0]["company_id"], "c1");
    assert!(rows[0]["description"].is_null());
}

#[test]
fn create_product_keeps_description() {
    let backend = FakeBackend::new();
    let product = NewProduct { company_id: "c1".to_owned(), name: "App".to_owned(), description: "Mobil".to_owned() };
    block_on(create_product(&backend, &product)).unwrap();
    assert_eq!(backend.rows(TABLE)[0]["description"], "Mobil");
}

#[test]
fn company_options_go_through_memberships() {
    let backend = FakeBackend::new();
    backend.seed("companies", vec![json!({ "id": "c1", "name": "Alfa" }), json!({ "id": "c2", "name": "Beta" })]);
    backend.seed("company_members", vec![json!({ "id": "m1", "company_id": "c2", "user_id": "u1", "role": "member" })]);

    let options = block_on(list_company_options(&backend, "u1")).unwrap();

    assert_eq!(options.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["c2"]);
    assert_eq!(backend.calls()[0], "select:company_members");
}
