//! Backend calls made by the panels and the one-shot request forms.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` and logs its own failure. Callers
//! turn errors into their static fallback text; nothing is retried here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::error::ApiError;
use super::http::HttpClient;
use super::types::{MessageResponse, PostMessageBody};
use crate::config::ApiConfig;
use crate::panels::{PanelKind, PanelPayload};

const GET_MESSAGE_PATH: &str = "/get_message";
const POST_MESSAGE_PATH: &str = "/post_message";

/// URL of the one-shot GET endpoint with `param` percent-encoded.
pub fn get_message_url(config: &ApiConfig, param: &str) -> String {
    with_param(&config.endpoint(GET_MESSAGE_PATH), param)
}

/// URL of the one-shot POST endpoint with `param` percent-encoded.
pub fn post_message_url(config: &ApiConfig, param: &str) -> String {
    with_param(&config.endpoint(POST_MESSAGE_PATH), param)
}

fn with_param(url: &str, param: &str) -> String {
    format!("{url}?param={}", urlencoding::encode(param))
}

/// Fetch and decode the payload for one panel.
///
/// # Errors
///
/// Returns the transport error, or [`ApiError::Decode`] if the body does not
/// match the panel's payload shape.
pub async fn fetch_panel<C>(client: &C, config: &ApiConfig, kind: PanelKind) -> Result<PanelPayload, ApiError>
where
    C: HttpClient + ?Sized,
{
    let url = config.endpoint(kind.path());
    let result = match client.get_json(&url).await {
        Ok(body) => kind.decode(body),
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        leptos::logging::error!("{} fetch from {url} failed: {e}", kind.slug());
    }
    result
}

/// `GET /get_message?param=...`, returning the response's `message`.
///
/// # Errors
///
/// Returns the transport or decode error.
pub async fn send_get_message<C>(client: &C, config: &ApiConfig, param: &str) -> Result<String, ApiError>
where
    C: HttpClient + ?Sized,
{
    let url = get_message_url(config, param);
    let result = client.get_json(&url).await.and_then(read_message);
    if let Err(e) = &result {
        leptos::logging::error!("GET request error: {e}");
    }
    result
}

/// `POST /post_message?param=...` with `{"bodyParam": ...}`, returning the
/// response's `message`.
///
/// # Errors
///
/// Returns the transport or decode error.
pub async fn send_post_message<C>(
    client: &C,
    config: &ApiConfig,
    body_param: &str,
    url_param: &str,
) -> Result<String, ApiError>
where
    C: HttpClient + ?Sized,
{
    let url = post_message_url(config, url_param);
    let body = serde_json::to_value(PostMessageBody { body_param: body_param.to_owned() })?;
    let result = client.post_json(&url, &body).await.and_then(read_message);
    if let Err(e) = &result {
        leptos::logging::error!("POST request error: {e}");
    }
    result
}

fn read_message(body: Value) -> Result<String, ApiError> {
    let resp: MessageResponse = serde_json::from_value(body)?;
    Ok(resp.message)
}
