//! Backend location and public API key.
//!
//! The host renders both values into `<meta>` tags in the SSR shell; the
//! browser reads them back at hydrate time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const META_BACKEND_URL: &str = "testlab-backend-url";
pub const META_BACKEND_ANON_KEY: &str = "testlab-backend-anon-key";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without a trailing `/`.
    pub url: String,
    /// Public anon key sent as `apikey` on every request.
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: &str, anon_key: &str) -> Self {
        Self { url: url.trim().trim_end_matches('/').to_owned(), anon_key: anon_key.trim().to_owned() }
    }

    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Absolute URL for a backend-relative path such as `/auth/v1/user`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }

    /// Read the config from the `<meta>` tags rendered by the host.
    /// Missing tags yield an unconfigured (empty) value.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(&read_meta(META_BACKEND_URL).unwrap_or_default(), &read_meta(META_BACKEND_ANON_KEY).unwrap_or_default())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??;
    element.get_attribute("content")
}
