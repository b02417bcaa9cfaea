//! Catalogue of the dashboard's data panels.
//!
//! ARCHITECTURE
//! ============
//! Every panel follows one contract: fetch a fixed endpoint, decode it into
//! that panel's payload, derive a [`ViewConfig`] from it. `PanelKind` holds
//! the per-panel constants and dispatches decode/derive so the `DataPanel`
//! component stays generic.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use serde_json::Value;

use crate::net::error::ApiError;
use crate::net::types::{ConnectionCheck, ProductRanking, SalesData, SalesTrend, UserBehavior};
use crate::views::{self, ViewConfig};

/// One of the dashboard's data panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Connection,
    #[default]
    SalesAnalysis,
    ProductRanking,
    UserBehavior,
    SalesTrend,
}

/// Decoded payload of one panel.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelPayload {
    Connection(ConnectionCheck),
    SalesAnalysis(SalesData),
    ProductRanking(ProductRanking),
    UserBehavior(UserBehavior),
    SalesTrend(SalesTrend),
}

impl PanelKind {
    /// Sidebar order.
    pub const ALL: [PanelKind; 5] = [
        PanelKind::Connection,
        PanelKind::SalesAnalysis,
        PanelKind::ProductRanking,
        PanelKind::UserBehavior,
        PanelKind::SalesTrend,
    ];

    /// Endpoint path relative to the API base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Connection => "/test",
            Self::SalesAnalysis => "/sales-data",
            Self::ProductRanking => "/product-ranking",
            Self::UserBehavior => "/user-behavior",
            Self::SalesTrend => "/sales-trend",
        }
    }

    /// Stable identifier for logs and element ids.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::SalesAnalysis => "sales-analysis",
            Self::ProductRanking => "product-ranking",
            Self::UserBehavior => "user-behavior",
            Self::SalesTrend => "sales-trend",
        }
    }

    /// Sidebar label and card title while loading or failed.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Connection => "Connection Check",
            Self::SalesAnalysis => "Sales Analysis",
            Self::ProductRanking => "Product Ranking",
            Self::UserBehavior => "User Behavior",
            Self::SalesTrend => "Sales Trend",
        }
    }

    #[must_use]
    pub fn loading_text(self) -> &'static str {
        match self {
            Self::Connection => "Checking backend connection...",
            Self::SalesAnalysis => "Loading sales data...",
            Self::ProductRanking => "Loading product ranking...",
            Self::UserBehavior => "Loading user behavior data...",
            Self::SalesTrend => "Loading sales trend data...",
        }
    }

    /// Static message shown for any fetch failure.
    #[must_use]
    pub fn error_text(self) -> &'static str {
        match self {
            Self::Connection => "Failed to reach backend service",
            Self::SalesAnalysis => "Failed to fetch sales data",
            Self::ProductRanking => "Failed to fetch product ranking data",
            Self::UserBehavior => "Failed to fetch user behavior data",
            Self::SalesTrend => "Failed to fetch sales trend data",
        }
    }

    /// Decode a response body into this panel's payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match the shape.
    pub fn decode(self, body: Value) -> Result<PanelPayload, ApiError> {
        Ok(match self {
            Self::Connection => PanelPayload::Connection(serde_json::from_value(body)?),
            Self::SalesAnalysis => PanelPayload::SalesAnalysis(serde_json::from_value(body)?),
            Self::ProductRanking => PanelPayload::ProductRanking(serde_json::from_value(body)?),
            Self::UserBehavior => PanelPayload::UserBehavior(serde_json::from_value(body)?),
            Self::SalesTrend => PanelPayload::SalesTrend(serde_json::from_value(body)?),
        })
    }

    /// Derive the view for this panel. An absent payload, or one that belongs
    /// to another panel, yields the default configuration.
    #[must_use]
    pub fn derive_view(self, payload: Option<&PanelPayload>) -> ViewConfig {
        match (self, payload) {
            (Self::Connection, Some(PanelPayload::Connection(p))) => views::connection::derive(Some(p)),
            (Self::SalesAnalysis, Some(PanelPayload::SalesAnalysis(p))) => views::sales::derive(Some(p)),
            (Self::ProductRanking, Some(PanelPayload::ProductRanking(p))) => views::ranking::derive(Some(p)),
            (Self::UserBehavior, Some(PanelPayload::UserBehavior(p))) => views::behavior::derive(Some(p)),
            (Self::SalesTrend, Some(PanelPayload::SalesTrend(p))) => views::trend::derive(Some(p)),
            _ => ViewConfig::default(),
        }
    }
}
