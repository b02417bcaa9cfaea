//! JSON payloads returned by the analytics backend.
//!
//! DESIGN
//! ======
//! Each panel payload is a flat object of parallel arrays. Fields default to
//! empty so a partially populated response still renders an (empty) chart
//! instead of failing the whole panel.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `GET /test` — backend connectivity probe.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionCheck {
    /// Optional status word, e.g. `"success"`.
    #[serde(default)]
    pub status: Option<String>,
    /// Human-readable greeting from the backend.
    pub message: String,
    /// Arbitrary extra data echoed by the backend.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// One named series of a grouped bar chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub name: String,
    #[serde(default)]
    pub data: Vec<f64>,
}

/// `GET /sales-data` — sales per category, grouped by region.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub series: Vec<NamedSeries>,
}

/// `GET /product-ranking` — top products with sales amount and order count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRanking {
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub sales: Vec<f64>,
    #[serde(default)]
    pub counts: Vec<f64>,
}

/// `GET /user-behavior` — action counts and mean durations in seconds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserBehavior {
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub counts: Vec<f64>,
    #[serde(default)]
    pub durations: Vec<f64>,
}

/// `GET /sales-trend` — daily sales amount and order count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesTrend {
    /// ISO dates (`YYYY-MM-DD`).
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub sales: Vec<f64>,
    #[serde(default)]
    pub orders: Vec<f64>,
}

/// Response of the one-shot `get_message` / `post_message` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// JSON body of `POST /post_message`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMessageBody {
    #[serde(rename = "bodyParam")]
    pub body_param: String,
}
