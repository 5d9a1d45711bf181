//! UI State - Focus, edit buffer, and hit regions
//!
//! This module contains UI state that is independent of rendering.
//! The core updates these structures; frontends read them to render.

use ratatui::layout::Rect;

/// Which control currently has focus.
///
/// Focus cycles add → step → subtract with Tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    AddButton,
    StepInput,
    SubtractButton,
}

impl Focus {
    /// Next control in the Tab cycle.
    pub fn next(self) -> Self {
        match self {
            Focus::AddButton => Focus::StepInput,
            Focus::StepInput => Focus::SubtractButton,
            Focus::SubtractButton => Focus::AddButton,
        }
    }

    /// Previous control in the Tab cycle.
    pub fn prev(self) -> Self {
        match self {
            Focus::AddButton => Focus::SubtractButton,
            Focus::StepInput => Focus::AddButton,
            Focus::SubtractButton => Focus::StepInput,
        }
    }
}

/// Interactive region of the widget, used for mouse hit-testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    AddButton,
    StepInput,
    SubtractButton,
}

/// Screen rectangles of the interactive controls, refreshed from the
/// computed layout before each hit-test.
#[derive(Clone, Copy, Debug, Default)]
pub struct HitRegions {
    pub add_button: Option<Rect>,
    pub step_input: Option<Rect>,
    pub subtract_button: Option<Rect>,
}

impl HitRegions {
    /// Find the region containing the given terminal cell, if any.
    pub fn hit(&self, x: u16, y: u16) -> Option<Region> {
        let contains = |rect: &Option<Rect>| {
            rect.is_some_and(|r| x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height)
        };

        if contains(&self.add_button) {
            Some(Region::AddButton)
        } else if contains(&self.step_input) {
            Some(Region::StepInput)
        } else if contains(&self.subtract_button) {
            Some(Region::SubtractButton)
        } else {
            None
        }
    }
}

/// Application UI state
#[derive(Clone, Debug)]
pub struct UiState {
    /// Currently focused control.
    pub focus: Focus,

    /// Raw text of the step field. Shown verbatim while the field is
    /// being edited; normalized to the parsed value's textual form when
    /// the edit is committed.
    pub step_buffer: String,

    /// Cursor position within `step_buffer`, in characters.
    pub step_cursor: usize,

    /// Interactive regions from the last computed layout.
    pub regions: HitRegions,

    /// Status bar text (key hints).
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::AddButton,
            step_buffer: String::from("1"),
            step_cursor: 1,
            regions: HitRegions::default(),
            status_text: String::new(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
