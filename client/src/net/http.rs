//! Transport seam between panel logic and the browser's HTTP stack.
//!
//! DESIGN
//! ======
//! Panels and request forms only see [`HttpClient`], so the fetch/settle
//! logic runs unchanged against the `gloo-net` client in the browser and
//! against in-memory clients in tests. Futures are `?Send` because WASM
//! tasks run on a single thread.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiError;

/// Minimal JSON-over-HTTP surface used by the dashboard.
#[async_trait(?Send)]
pub trait HttpClient {
    /// `GET url`, returning the decoded JSON body of a 2xx response.
    async fn get_json(&self, url: &str) -> Result<Value, ApiError>;

    /// `POST url` with a JSON body, returning the decoded JSON body of a 2xx response.
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError>;
}

/// Client handle shared through Leptos context.
pub type SharedClient = Arc<dyn HttpClient + Send + Sync>;

/// Browser client backed by `gloo-net`.
///
/// During SSR every call returns [`ApiError::Unavailable`]; panels never
/// issue requests on the server because fetches start from client effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClient;

#[async_trait(?Send)]
impl HttpClient for BrowserClient {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json(resp: gloo_net::http::Response) -> Result<Value, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Server(resp.status()));
    }
    resp.json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
