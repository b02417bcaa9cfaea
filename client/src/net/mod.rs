//! Networking modules for the analytics backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` abstracts the transport, `api` builds URLs and performs the panel
//! and request-form calls, `types` defines the JSON payloads, and `error`
//! classifies failures.

pub mod api;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
