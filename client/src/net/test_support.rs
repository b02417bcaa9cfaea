//! In-memory [`HttpClient`] that records every call and replays canned results.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiError;
use super::http::HttpClient;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    Get(String),
    Post(String, Value),
}

#[derive(Default)]
pub(crate) struct RecordingClient {
    calls: RefCell<Vec<Call>>,
    responses: RefCell<VecDeque<Result<Value, ApiError>>>,
}

impl RecordingClient {
    pub(crate) fn with_responses(responses: Vec<Result<Value, ApiError>>) -> Self {
        Self { calls: RefCell::new(Vec::new()), responses: RefCell::new(responses.into()) }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn next_response(&self) -> Result<Value, ApiError> {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no canned response".to_owned())))
    }
}

#[async_trait(?Send)]
impl HttpClient for RecordingClient {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        self.calls.borrow_mut().push(Call::Get(url.to_owned()));
        self.next_response()
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.calls.borrow_mut().push(Call::Post(url.to_owned(), body.clone()));
        self.next_response()
    }
}
