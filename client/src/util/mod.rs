//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting and chart geometry live here so components only map
//! finished values onto markup, and browser-only helpers stay isolated.

pub mod alert;
pub mod chart_layout;
pub mod format;
