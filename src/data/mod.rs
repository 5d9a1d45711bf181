//! Data layer - Pure UI state without rendering coupling
//!
//! The core updates these structures; frontends read them to render.

pub mod ui_state;

pub use ui_state::*;
