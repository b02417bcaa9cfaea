//! Backend connectivity probe: a message plus whatever the backend echoes.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use serde_json::Value;

use super::{Detail, ViewConfig};
use crate::net::types::ConnectionCheck;

pub const TITLE: &str = "Backend Connection";

pub fn derive(payload: Option<&ConnectionCheck>) -> ViewConfig {
    let Some(payload) = payload else {
        return ViewConfig::default();
    };

    let mut details = Vec::new();
    if let Some(status) = &payload.status {
        details.push(detail("Status", status.clone()));
    }
    match &payload.data {
        Some(Value::Object(map)) => {
            details.extend(map.iter().map(|(key, value)| detail(key, display_json(value))));
        }
        Some(Value::Null) | None => {}
        Some(other) => details.push(detail("Data", display_json(other))),
    }

    ViewConfig {
        title: TITLE.to_owned(),
        message: Some(payload.message.clone()),
        details,
        ..ViewConfig::default()
    }
}

fn detail(label: &str, value: String) -> Detail {
    Detail { label: label.to_owned(), value }
}

fn display_json(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
