//! Frontend abstraction layer
//!
//! Defines the `Frontend` trait the terminal frontend implements. It
//! separates event polling and drawing from the core: the core mutates
//! state, the frontend renders it.

pub mod events;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait - event polling, rendering, and teardown.
pub trait Frontend {
    /// Poll for user input events.
    ///
    /// Returns all pending events (keyboard, mouse, resize, paste)
    /// converted to the frontend-agnostic `FrontendEvent` enum; an empty
    /// vector when none arrived within the poll timeout.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state. Called once per frame.
    fn render(&mut self, core: &AppCore) -> Result<()>;

    /// Restore the terminal and perform any teardown before exit.
    fn cleanup(&mut self) -> Result<()>;

    /// Current rendering area size (terminal size in cells).
    fn size(&self) -> (u16, u16);
}
