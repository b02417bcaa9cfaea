//! Client-side state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! `panel` holds the fetch lifecycle shared by every data panel, `requests`
//! the one-shot form state, and `ui` the shell's navigation selection.
//! Components wrap these plain structs in `RwSignal`s.

pub mod panel;
pub mod requests;
pub mod ui;
