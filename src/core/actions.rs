//! Input routing for the counter widget
//!
//! Maps raw key events to `CounterAction`s based on which control has
//! focus. While the step field is focused, printable keys become edits of
//! its buffer; otherwise they act as widget shortcuts.

use crate::data::ui_state::Focus;
use crossterm::event::{KeyCode, KeyModifiers};

/// Action resolved from user input, applied by the app core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    /// Add the step to the counter.
    Add,
    /// Subtract the step from the counter.
    Subtract,
    /// Activate whichever button is focused.
    Activate,
    /// Move focus to the next control.
    FocusNext,
    /// Move focus to the previous control.
    FocusPrev,
    /// Insert a character into the step field at the cursor.
    StepInsert(char),
    /// Delete the character before the cursor in the step field.
    StepBackspace,
    /// Move the step-field cursor left.
    StepCursorLeft,
    /// Move the step-field cursor right.
    StepCursorRight,
    /// Commit the step edit and normalize the field text.
    StepCommit,
    /// Switch to the next built-in theme.
    CycleTheme,
    /// Exit the application.
    Quit,
}

/// Route a key event to a `CounterAction` based on the current focus.
///
/// Returns `None` for keys that have no meaning in the given context.
pub fn route_key(code: KeyCode, modifiers: KeyModifiers, focus: Focus) -> Option<CounterAction> {
    // Ctrl+C quits regardless of focus.
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(CounterAction::Quit),
            _ => None,
        };
    }

    if focus == Focus::StepInput {
        return match code {
            KeyCode::Char(c) if !c.is_control() => Some(CounterAction::StepInsert(c)),
            KeyCode::Backspace => Some(CounterAction::StepBackspace),
            KeyCode::Left => Some(CounterAction::StepCursorLeft),
            KeyCode::Right => Some(CounterAction::StepCursorRight),
            KeyCode::Enter | KeyCode::Esc => Some(CounterAction::StepCommit),
            KeyCode::Tab => Some(CounterAction::FocusNext),
            KeyCode::BackTab => Some(CounterAction::FocusPrev),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('+') | KeyCode::Char('=') => Some(CounterAction::Add),
        KeyCode::Char('-') => Some(CounterAction::Subtract),
        KeyCode::Char(' ') | KeyCode::Enter => Some(CounterAction::Activate),
        KeyCode::Tab => Some(CounterAction::FocusNext),
        KeyCode::BackTab => Some(CounterAction::FocusPrev),
        KeyCode::Char('t') => Some(CounterAction::CycleTheme),
        KeyCode::Char('q') | KeyCode::Esc => Some(CounterAction::Quit),
        _ => None,
    }
}
