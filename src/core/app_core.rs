//! Core application state (frontend-agnostic)
//!
//! AppCore owns the counter, the UI state, the active theme, and the
//! configuration. It applies routed input (keys, mouse clicks against the
//! computed layout regions, pasted text) and marks itself dirty so the
//! frontend knows to redraw. Every mutation of the step field fires the
//! change parse, so the step value always reflects the field's raw text.

use crate::config::Config;
use crate::core::actions::{route_key, CounterAction};
use crate::core::counter::CounterState;
use crate::data::ui_state::{Focus, Region, UiState};
use crate::theme::AppTheme;
use crate::ui::layout::CounterLayout;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

const STATUS_HINTS: &str = "+ add   - subtract   Tab focus   Enter activate   t theme   q quit";

/// Core application state shared by all frontends.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Active theme
    pub theme: AppTheme,

    /// Counter widget state
    pub counter: CounterState,

    /// Focus, step edit buffer, hit regions, status text
    pub ui_state: UiState,

    /// Application running flag
    pub running: bool,

    /// Set when state changed and the frontend should redraw
    pub needs_render: bool,
}

impl AppCore {
    /// Create the application core from loaded configuration.
    pub fn new(config: Config) -> Self {
        let mut theme = AppTheme::by_name(&config.ui.theme);
        theme.apply_threshold_overrides(
            config.ui.counter_high_color.as_deref(),
            config.ui.counter_low_color.as_deref(),
        );

        let mut ui_state = UiState::new();
        if config.ui.show_status_bar {
            ui_state.status_text = STATUS_HINTS.to_string();
        }

        Self {
            config,
            theme,
            counter: CounterState::new(),
            ui_state,
            running: true,
            needs_render: true,
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if let Some(action) = route_key(code, modifiers, self.ui_state.focus) {
            self.apply_action(action);
        }
    }

    /// Handle a mouse event against the layout for `area`.
    ///
    /// Only left-button presses act; the regions are recomputed from the
    /// area so clicks always test against current geometry.
    pub fn handle_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16, area: Rect) {
        if kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        self.ui_state.regions = CounterLayout::compute(area).hit_regions();
        match self.ui_state.regions.hit(x, y) {
            Some(Region::AddButton) => {
                self.set_focus(Focus::AddButton);
                self.counter.add();
                tracing::debug!(
                    value = %self.counter.value_text(),
                    class = self.counter.class().token(),
                    "Add clicked"
                );
            }
            Some(Region::SubtractButton) => {
                self.set_focus(Focus::SubtractButton);
                self.counter.subtract();
                tracing::debug!(
                    value = %self.counter.value_text(),
                    class = self.counter.class().token(),
                    "Subtract clicked"
                );
            }
            Some(Region::StepInput) => {
                self.set_focus(Focus::StepInput);
            }
            None => return,
        }
        self.needs_render = true;
    }

    /// Handle pasted text: characters go into the focused step field.
    pub fn handle_paste(&mut self, text: &str) {
        if self.ui_state.focus != Focus::StepInput {
            return;
        }
        for c in text.chars().filter(|c| !c.is_control()) {
            self.step_insert(c);
        }
        self.needs_render = true;
    }

    /// Handle a terminal resize.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        tracing::debug!(width, height, "Terminal resized");
        self.needs_render = true;
    }

    fn apply_action(&mut self, action: CounterAction) {
        match action {
            CounterAction::Add => self.counter.add(),
            CounterAction::Subtract => self.counter.subtract(),
            CounterAction::Activate => match self.ui_state.focus {
                Focus::AddButton => self.counter.add(),
                Focus::SubtractButton => self.counter.subtract(),
                Focus::StepInput => self.commit_step(),
            },
            CounterAction::FocusNext => self.set_focus(self.ui_state.focus.next()),
            CounterAction::FocusPrev => self.set_focus(self.ui_state.focus.prev()),
            CounterAction::StepInsert(c) => self.step_insert(c),
            CounterAction::StepBackspace => self.step_backspace(),
            CounterAction::StepCursorLeft => {
                self.ui_state.step_cursor = self.ui_state.step_cursor.saturating_sub(1);
            }
            CounterAction::StepCursorRight => {
                let len = self.ui_state.step_buffer.chars().count();
                self.ui_state.step_cursor = (self.ui_state.step_cursor + 1).min(len);
            }
            CounterAction::StepCommit => self.commit_step(),
            CounterAction::CycleTheme => {
                self.theme = self.theme.next();
                tracing::info!(theme = %self.theme.name, "Theme switched");
            }
            CounterAction::Quit => {
                tracing::info!("Exiting");
                self.running = false;
            }
        }
        self.needs_render = true;
    }

    /// Move focus; leaving the step field commits its edit, entering it
    /// places the cursor at the end.
    fn set_focus(&mut self, focus: Focus) {
        if self.ui_state.focus == Focus::StepInput && focus != Focus::StepInput {
            self.commit_step();
        }
        if focus == Focus::StepInput {
            self.ui_state.step_cursor = self.ui_state.step_buffer.chars().count();
        }
        self.ui_state.focus = focus;
    }

    /// Insert a character at the cursor and fire the change parse.
    fn step_insert(&mut self, c: char) {
        let mut chars: Vec<char> = self.ui_state.step_buffer.chars().collect();
        let at = self.ui_state.step_cursor.min(chars.len());
        chars.insert(at, c);
        self.ui_state.step_buffer = chars.into_iter().collect();
        self.ui_state.step_cursor = at + 1;
        self.fire_step_change();
    }

    /// Delete the character before the cursor and fire the change parse.
    fn step_backspace(&mut self) {
        if self.ui_state.step_cursor == 0 {
            return;
        }
        let mut chars: Vec<char> = self.ui_state.step_buffer.chars().collect();
        let at = self.ui_state.step_cursor - 1;
        if at < chars.len() {
            chars.remove(at);
        }
        self.ui_state.step_buffer = chars.into_iter().collect();
        self.ui_state.step_cursor = at;
        self.fire_step_change();
    }

    fn fire_step_change(&mut self) {
        self.counter.set_step_text(&self.ui_state.step_buffer);
    }

    /// Commit the step edit: normalize the field text to the parsed
    /// value's textual form (an unparseable entry reads `NaN`).
    pub fn commit_step(&mut self) {
        self.ui_state.step_buffer = self.counter.step_text();
        self.ui_state.step_cursor = self.ui_state.step_buffer.chars().count();
    }
}
