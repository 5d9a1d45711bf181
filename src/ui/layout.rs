//! Layout computation for the counter widget
//!
//! Produces named rectangles for every addressable element from the
//! terminal area alone, so the same function serves both rendering and
//! mouse hit-testing. Computation is deterministic: equal areas yield
//! equal layouts.

use crate::data::ui_state::HitRegions;
use ratatui::layout::Rect;

/// Width of a button cell, `[ + ]` / `[ - ]` with borders.
const BUTTON_WIDTH: u16 = 5;
/// Width of the bordered step field.
const INPUT_WIDTH: u16 = 9;
/// Gap between controls.
const GAP: u16 = 1;
/// Controls row: button, gap, field, gap, button.
const CONTROLS_WIDTH: u16 = BUTTON_WIDTH + GAP + INPUT_WIDTH + GAP + BUTTON_WIDTH;
/// Header, spacer, counter, spacer, controls (3 rows high).
const CONTENT_HEIGHT: u16 = 7;

/// Computed layout of the counter widget within a terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterLayout {
    /// Header line, full content width.
    pub header: Rect,
    /// Counter readout line, full content width.
    pub counter: Rect,
    /// Add button, labeled `+`.
    pub add_button: Rect,
    /// Step field between the buttons.
    pub step_input: Rect,
    /// Subtract button, labeled `-`.
    pub subtract_button: Rect,
    /// Bottom status line, when the area leaves room for one.
    pub status: Option<Rect>,
}

impl CounterLayout {
    /// Smallest area the widget can be laid out in.
    pub const MIN_WIDTH: u16 = CONTROLS_WIDTH;
    pub const MIN_HEIGHT: u16 = CONTENT_HEIGHT;

    /// Compute the layout for `area`.
    ///
    /// Areas smaller than the minimum yield zero-size rectangles, which
    /// the renderer and hit-testing both treat as absent.
    pub fn compute(area: Rect) -> Self {
        if area.width < Self::MIN_WIDTH || area.height < Self::MIN_HEIGHT {
            let empty = Rect::new(area.x, area.y, 0, 0);
            return Self {
                header: empty,
                counter: empty,
                add_button: empty,
                step_input: empty,
                subtract_button: empty,
                status: None,
            };
        }

        // Center the content block vertically, leaving the bottom row for
        // the status line when there is room.
        let status = if area.height >= CONTENT_HEIGHT + 2 {
            Some(Rect::new(
                area.x,
                area.y + area.height - 1,
                area.width,
                1,
            ))
        } else {
            None
        };
        let usable_height = if status.is_some() {
            area.height - 1
        } else {
            area.height
        };
        let top = area.y + (usable_height - CONTENT_HEIGHT) / 2;

        let header = Rect::new(area.x, top, area.width, 1);
        let counter = Rect::new(area.x, top + 2, area.width, 1);

        let controls_x = area.x + (area.width - CONTROLS_WIDTH) / 2;
        let controls_y = top + 4;
        let add_button = Rect::new(controls_x, controls_y, BUTTON_WIDTH, 3);
        let step_input = Rect::new(
            controls_x + BUTTON_WIDTH + GAP,
            controls_y,
            INPUT_WIDTH,
            3,
        );
        let subtract_button = Rect::new(
            controls_x + BUTTON_WIDTH + GAP + INPUT_WIDTH + GAP,
            controls_y,
            BUTTON_WIDTH,
            3,
        );

        Self {
            header,
            counter,
            add_button,
            step_input,
            subtract_button,
            status,
        }
    }

    /// Interactive regions for mouse hit-testing.
    pub fn hit_regions(&self) -> HitRegions {
        let non_empty = |rect: Rect| {
            if rect.width == 0 || rect.height == 0 {
                None
            } else {
                Some(rect)
            }
        };
        HitRegions {
            add_button: non_empty(self.add_button),
            step_input: non_empty(self.step_input),
            subtract_button: non_empty(self.subtract_button),
        }
    }
}
