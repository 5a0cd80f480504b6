//! Read/delete query builder for the backend's REST data surface.
//!
//! A `Query` is a plain value: table, column projection, equality and
//! membership filters, ordering, and a single-row flag. It renders to the
//! `?select=..&col=eq.v&order=col.desc` query string the REST surface expects,
//! and the in-memory test backend evaluates the same value directly.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// A row filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    /// `column = value`
    Eq { column: String, value: String },
    /// `column IN (values..)`
    In { column: String, values: Vec<String> },
}

impl Filter {
    pub fn column(&self) -> &str {
        match self {
            Self::Eq { column, .. } | Self::In { column, .. } => column,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    table: String,
    select: String,
    filters: Vec<Filter>,
    order: Option<Order>,
    single: bool,
}

impl Query {
    /// Start a query over `table` projecting every column.
    pub fn table(table: &str) -> Self {
        Self {
            table: table.to_owned(),
            select: "*".to_owned(),
            filters: Vec::new(),
            order: None,
            single: false,
        }
    }

    #[must_use]
    pub fn select(mut self, projection: &str) -> Self {
        self.select = projection.split_whitespace().collect::<String>();
        self
    }

    #[must_use]
    pub fn eq(mut self, column: &str, value: impl Into<String>) -> Self {
        self.filters
            .push(Filter::Eq { column: column.to_owned(), value: value.into() });
        self
    }

    #[must_use]
    pub fn is_in<I, S>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.push(Filter::In {
            column: column.to_owned(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    #[must_use]
    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some(Order { column: column.to_owned(), direction });
        self
    }

    /// Expect exactly one row; zero rows surfaces as `BackendError::NotFound`.
    #[must_use]
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn projection(&self) -> &str {
        &self.select
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn ordering(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    /// Render the filters and ordering only, for mutations that take a
    /// row selector (`DELETE`).
    pub fn filter_string(&self) -> String {
        let mut parts = Vec::new();
        for filter in &self.filters {
            parts.push(render_filter(filter));
        }
        if let Some(order) = &self.order {
            let dir = match order.direction {
                Direction::Asc => "asc",
                Direction::Desc => "desc",
            };
            parts.push(format!("order={}.{dir}", encode_component(&order.column, COMPONENT)));
        }
        parts.join("&")
    }

    /// Full query string including the projection.
    pub fn to_query_string(&self) -> String {
        let select = format!("select={}", encode_component(&self.select, PROJECTION));
        let rest = self.filter_string();
        if rest.is_empty() { select } else { format!("{select}&{rest}") }
    }

    /// Path relative to the backend root, e.g. `/rest/v1/products?select=*`.
    pub fn path(&self) -> String {
        format!("/rest/v1/{}?{}", self.table, self.to_query_string())
    }
}

/// Everything outside the RFC 3986 unreserved set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Projections stay readable: `*,company:companies(id,name)`.
const PROJECTION: &AsciiSet =
    &COMPONENT.remove(b'*').remove(b',').remove(b':').remove(b'(').remove(b')').remove(b'!');

fn render_filter(filter: &Filter) -> String {
    match filter {
        Filter::Eq { column, value } => {
            format!("{}=eq.{}", encode_component(column, COMPONENT), encode_component(value, COMPONENT))
        }
        Filter::In { column, values } => {
            let list = values
                .iter()
                .map(|v| encode_component(v, COMPONENT))
                .collect::<Vec<_>>()
                .join(",");
            format!("{}=in.({list})", encode_component(column, COMPONENT))
        }
    }
}

pub(crate) fn encode_component(raw: &str, set: &'static AsciiSet) -> String {
    utf8_percent_encode(raw, set).to_string()
}
