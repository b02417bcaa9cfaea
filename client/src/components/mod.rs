//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render panels and shell chrome while reading/writing shared
//! state from Leptos context providers. Geometry and text come finished from
//! `views` and `util`; components only map them onto markup.

pub mod chart_view;
pub mod data_panel;
pub mod request_forms;
pub mod sidebar;
pub mod stat_row;
