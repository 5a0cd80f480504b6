//! In-memory `Backend` used by unit tests.
//!
//! Evaluates `Query` filters and ordering over JSON rows, enforces configured
//! unique keys the way the database would, implements the company-plus-admin
//! RPC, and records every call so tests can assert what was (not) attempted.
//! Embedded relations are not joined: seed rows with the nested objects the
//! projection would produce.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde_json::{Value, json};

use super::backend::{Backend, BackendError, Credentials, UNIQUE_VIOLATION};
use super::query::{Direction, Filter, Query};
use super::types::{Session, User};
use crate::util::fragment::FragmentTokens;

#[derive(Default)]
pub struct FakeBackend {
    tables: RefCell<HashMap<String, Vec<Value>>>,
    unique_keys: RefCell<Vec<(String, Vec<String>)>>,
    accounts: RefCell<Vec<Credentials>>,
    session: RefCell<Option<Session>>,
    fragment_session: RefCell<Option<Session>>,
    failures: RefCell<HashMap<String, BackendError>>,
    calls: RefCell<Vec<String>>,
    rpc_returns_null: Cell<bool>,
    next_id: Cell<u64>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rows to `table`.
    pub fn seed(&self, table: &str, rows: Vec<Value>) {
        self.tables
            .borrow_mut()
            .entry(table.to_owned())
            .or_default()
            .extend(rows);
    }

    /// Reject inserts that duplicate `columns` in `table` with a `Conflict`.
    pub fn unique(&self, table: &str, columns: &[&str]) {
        self.unique_keys
            .borrow_mut()
            .push((table.to_owned(), columns.iter().map(|c| (*c).to_owned()).collect()));
    }

    pub fn add_account(&self, email: &str, password: &str) {
        self.accounts.borrow_mut().push(Credentials::new(email, password));
    }

    pub fn has_account(&self, email: &str) -> bool {
        self.accounts.borrow().iter().any(|c| c.email == email)
    }

    pub fn set_session(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session;
    }

    /// Session returned for confirmation-fragment tokens.
    pub fn set_fragment_session(&self, session: Option<Session>) {
        *self.fragment_session.borrow_mut() = session;
    }

    /// Make every call to `op` fail with `err`. `op` is one of `session`,
    /// `session_from_tokens`, `sign_up`, `sign_in`, `sign_out`, `rpc`, or
    /// `select:<table>` / `insert:<table>` / `delete:<table>`.
    pub fn fail(&self, op: &str, err: BackendError) {
        self.failures.borrow_mut().insert(op.to_owned(), err);
    }

    pub fn rpc_returns_null(&self) {
        self.rpc_returns_null.set(true);
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables.borrow().get(table).cloned().unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn called(&self, call: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == call)
    }

    fn record(&self, op: &str) -> Result<(), BackendError> {
        self.calls.borrow_mut().push(op.to_owned());
        match self.failures.borrow().get(op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn fresh_id(&self, prefix: &str) -> String {
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        format!("{prefix}-{n}")
    }

    fn session_for(&self, email: &str) -> Session {
        Session {
            access_token: format!("token-{email}"),
            refresh_token: Some("refresh".to_owned()),
            expires_at: None,
            user: User { id: format!("user-{email}"), email: Some(email.to_owned()) },
        }
    }

    fn violates_unique(&self, table: &str, existing: &[Value], row: &Value) -> bool {
        self.unique_keys
            .borrow()
            .iter()
            .filter(|(t, _)| t == table)
            .any(|(_, columns)| {
                existing
                    .iter()
                    .any(|other| columns.iter().all(|c| field_text(other, c) == field_text(row, c)))
            })
    }
}

fn field_text(row: &Value, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn matches(row: &Value, filter: &Filter) -> bool {
    match filter {
        Filter::Eq { column, value } => field_text(row, column).as_deref() == Some(value.as_str()),
        Filter::In { column, values } => {
            field_text(row, column).is_some_and(|v| values.iter().any(|candidate| *candidate == v))
        }
    }
}

fn filtered(rows: &[Value], query: &Query) -> Vec<Value> {
    let mut out = rows
        .iter()
        .filter(|row| query.filters().iter().all(|f| matches(row, f)))
        .cloned()
        .collect::<Vec<_>>();
    if let Some(order) = query.ordering() {
        out.sort_by(|a, b| field_text(a, &order.column).cmp(&field_text(b, &order.column)));
        if order.direction == Direction::Desc {
            out.reverse();
        }
    }
    out
}

impl Backend for FakeBackend {
    async fn current_session(&self) -> Result<Option<Session>, BackendError> {
        self.record("session")?;
        Ok(self.session.borrow().clone())
    }

    async fn session_from_tokens(&self, _tokens: &FragmentTokens) -> Result<Option<Session>, BackendError> {
        self.record("session_from_tokens")?;
        let session = self.fragment_session.borrow().clone();
        if session.is_some() {
            self.set_session(session.clone());
        }
        Ok(session)
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<(), BackendError> {
        self.record("sign_up")?;
        if self.has_account(&credentials.email) {
            return Err(BackendError::Auth { message: "User already registered".to_owned() });
        }
        self.accounts.borrow_mut().push(credentials.clone());
        Ok(())
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, BackendError> {
        self.record("sign_in")?;
        let known = self.accounts.borrow().iter().any(|c| c == credentials);
        if !known {
            return Err(BackendError::Auth { message: "Invalid login credentials".to_owned() });
        }
        let session = self.session_for(&credentials.email);
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        self.record("sign_out")?;
        self.set_session(None);
        Ok(())
    }

    async fn select(&self, query: &Query) -> Result<Vec<Value>, BackendError> {
        self.record(&format!("select:{}", query.table_name()))?;
        let rows = filtered(&self.rows(query.table_name()), query);
        if query.is_single() && rows.len() != 1 {
            return Err(BackendError::NotFound(query.table_name().to_owned()));
        }
        Ok(rows)
    }

    async fn insert(&self, table: &str, rows: Value) -> Result<(), BackendError> {
        self.record(&format!("insert:{table}"))?;
        let Value::Array(rows) = rows else {
            return Err(BackendError::Decode("insert body must be an array".to_owned()));
        };
        let mut existing = self.rows(table);
        let mut staged = Vec::new();
        for mut row in rows {
            if row.get("id").is_none() {
                row["id"] = Value::String(self.fresh_id(table));
            }
            if self.violates_unique(table, &existing, &row) {
                return Err(BackendError::Conflict {
                    message: format!("duplicate key value violates unique constraint ({UNIQUE_VIOLATION})"),
                });
            }
            existing.push(row.clone());
            staged.push(row);
        }
        self.seed(table, staged);
        Ok(())
    }

    async fn delete(&self, query: &Query) -> Result<(), BackendError> {
        self.record(&format!("delete:{}", query.table_name()))?;
        let mut tables = self.tables.borrow_mut();
        if let Some(rows) = tables.get_mut(query.table_name()) {
            rows.retain(|row| !query.filters().iter().all(|f| matches(row, f)));
        }
        Ok(())
    }

    async fn rpc(&self, function: &str, args: Value) -> Result<Value, BackendError> {
        self.record("rpc")?;
        if function != "create_company_with_admin" {
            return Err(BackendError::Http { status: 404, code: None, message: format!("unknown rpc {function}") });
        }
        if self.rpc_returns_null.get() {
            return Ok(Value::Null);
        }
        let name = args.get("company_name").cloned().unwrap_or(Value::Null);
        let admin_id = args.get("admin_id").cloned().unwrap_or(Value::Null);
        let company_id = self.fresh_id("company");
        let company = json!({ "id": company_id, "name": name, "created_at": "2026-10-18T00:00:00+00:00" });
        let email = self
            .rows("profiles")
            .into_iter()
            .find(|p| p.get("id") == Some(&admin_id))
            .and_then(|p| p.get("email").cloned())
            .unwrap_or(Value::String(String::new()));
        let member_id = self.fresh_id("member");
        self.seed("companies", vec![company.clone()]);
        self.seed(
            "company_members",
            vec![json!({
                "id": member_id,
                "company_id": company_id,
                "user_id": admin_id,
                "role": "admin",
                "profiles": { "email": email }
            })],
        );
        Ok(company)
    }
}
