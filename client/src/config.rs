//! Backend location for every panel and request form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server reads the base URL from its environment and writes it into the
//! SSR shell as a `<meta>` tag. The hydrated client reads the same tag back,
//! so both render passes agree without a compile-time constant.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Name of the `<meta>` tag carrying the base URL into the browser.
pub const API_BASE_META_NAME: &str = "dashboard-api-base";

/// Location of the analytics backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Build a config from a base URL. Trailing slashes are dropped; an empty
    /// value falls back to [`DEFAULT_API_BASE_URL`].
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw: String = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_owned()
        } else {
            trimmed.to_owned()
        };
        Self { base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `"/sales-data"`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Read the base URL from the SSR-rendered `<meta>` tag.
    ///
    /// Falls back to the default outside the browser or when the tag is missing.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_BASE_META_NAME}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match content {
                Some(url) => Self::new(url),
                None => {
                    leptos::logging::warn!("no {API_BASE_META_NAME} meta tag; using {DEFAULT_API_BASE_URL}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
