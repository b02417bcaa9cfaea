//! One-shot GET/POST request forms.
//!
//! ERROR HANDLING
//! ==============
//! Empty required inputs are rejected before any network call with a
//! [`ValidationError`] whose text the page shows as a blocking alert. Backend
//! failures never surface as errors: they become
//! [`REQUEST_FAILED_MESSAGE`] in the response area.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use crate::config::ApiConfig;
use crate::net::api::{send_get_message, send_post_message};
use crate::net::error::ApiError;
use crate::net::http::HttpClient;

/// Response text shown when a one-shot request fails.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed, please check backend service";

/// A required input was left empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter first parameter")]
    MissingGetParam,
    #[error("Please fill both second and third inputs")]
    MissingPostFields,
}

/// Check the GET form's only input.
///
/// # Errors
///
/// [`ValidationError::MissingGetParam`] when `param` is blank.
pub fn validate_get(param: &str) -> Result<(), ValidationError> {
    if param.trim().is_empty() {
        return Err(ValidationError::MissingGetParam);
    }
    Ok(())
}

/// Check the POST form's body and URL inputs.
///
/// # Errors
///
/// [`ValidationError::MissingPostFields`] when either input is blank.
pub fn validate_post(body_param: &str, url_param: &str) -> Result<(), ValidationError> {
    if body_param.trim().is_empty() || url_param.trim().is_empty() {
        return Err(ValidationError::MissingPostFields);
    }
    Ok(())
}

/// Text shown for a finished request.
pub fn response_text(result: Result<String, ApiError>) -> String {
    result.unwrap_or_else(|_| REQUEST_FAILED_MESSAGE.to_owned())
}

/// Validate, then send the GET request. Inputs are sent untrimmed.
///
/// # Errors
///
/// Returns the validation error without touching the network.
pub async fn submit_get<C>(client: &C, config: &ApiConfig, param: &str) -> Result<String, ValidationError>
where
    C: HttpClient + ?Sized,
{
    validate_get(param)?;
    Ok(response_text(send_get_message(client, config, param).await))
}

/// Validate, then send the POST request. Inputs are sent untrimmed.
///
/// # Errors
///
/// Returns the validation error without touching the network.
pub async fn submit_post<C>(
    client: &C,
    config: &ApiConfig,
    body_param: &str,
    url_param: &str,
) -> Result<String, ValidationError>
where
    C: HttpClient + ?Sized,
{
    validate_post(body_param, url_param)?;
    Ok(response_text(send_post_message(client, config, body_param, url_param).await))
}

/// Inputs, in-flight flags, and last responses of both forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestFormState {
    pub get_param: String,
    pub post_body: String,
    pub post_param: String,
    pub get_in_flight: bool,
    pub post_in_flight: bool,
    pub get_response: Option<String>,
    pub post_response: Option<String>,
}

impl RequestFormState {
    #[must_use]
    pub fn get_button_label(&self) -> &'static str {
        if self.get_in_flight { "Sending..." } else { "Send GET Request" }
    }

    #[must_use]
    pub fn post_button_label(&self) -> &'static str {
        if self.post_in_flight { "Sending..." } else { "Send POST Request" }
    }
}
