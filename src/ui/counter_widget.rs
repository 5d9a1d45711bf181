//! The counter widget: render model and terminal renderer
//!
//! `CounterView` is the widget's rendering contract: every addressable
//! element (header, counter readout, step field, button labels, threshold
//! token) computed purely from current state. `CounterWidget` draws a view
//! into a ratatui `Buffer` using the active theme. Building or drawing the
//! same state twice produces identical output.

use crate::core::counter::{CounterState, ThresholdClass};
use crate::data::ui_state::{Focus, UiState};
use crate::theme::AppTheme;
use crate::ui::layout::CounterLayout;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Header text of the widget.
pub const HEADER_TEXT: &str = "My Counter";
/// Add button label.
pub const ADD_LABEL: &str = "+";
/// Subtract button label.
pub const SUBTRACT_LABEL: &str = "-";

/// Render model: the text and token of every addressable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub header: String,
    pub counter_text: String,
    pub counter_class: ThresholdClass,
    pub step_text: String,
    pub add_label: String,
    pub subtract_label: String,
}

impl CounterView {
    /// Build the view from current widget state.
    ///
    /// The step field shows the edit buffer, which the core keeps equal to
    /// the step value's textual form whenever the field is not mid-edit.
    pub fn build(counter: &CounterState, ui: &UiState) -> Self {
        Self {
            header: HEADER_TEXT.to_string(),
            counter_text: counter.value_text(),
            counter_class: counter.class(),
            step_text: ui.step_buffer.clone(),
            add_label: ADD_LABEL.to_string(),
            subtract_label: SUBTRACT_LABEL.to_string(),
        }
    }
}

/// Terminal renderer for a `CounterView`.
pub struct CounterWidget<'a> {
    view: &'a CounterView,
    theme: &'a AppTheme,
    focus: Focus,
    /// Cursor position in the step field, rendered only while the field
    /// has focus.
    step_cursor: usize,
    status_text: &'a str,
}

impl<'a> CounterWidget<'a> {
    pub fn new(view: &'a CounterView, theme: &'a AppTheme, ui: &'a UiState) -> Self {
        Self {
            view,
            theme,
            focus: ui.focus,
            step_cursor: ui.step_cursor,
            status_text: &ui.status_text,
        }
    }

    fn border_style(&self, control: Focus) -> Style {
        if self.focus == control {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        }
    }

    fn render_button(&self, label: &str, control: Focus, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style(control));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut style = Style::default().fg(self.theme.button_label);
        if self.focus == control {
            style = style.add_modifier(Modifier::BOLD);
        }
        Paragraph::new(Line::from(Span::styled(label.to_string(), style)))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }

    fn render_step_input(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::StepInput;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style(Focus::StepInput));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text: Vec<char> = self.view.step_text.chars().collect();
        let width = inner.width as usize;

        // Keep the cursor visible; unfocused fields show the head of the text.
        let cursor = self.step_cursor.min(text.len());
        let start = if focused && cursor + 1 > width {
            cursor + 1 - width
        } else {
            0
        };

        let text_style = Style::default().fg(self.theme.input_text);
        let mut spans = Vec::new();
        let visible_end = (start + width).min(text.len());
        if focused {
            let before: String = text[start..cursor].iter().collect();
            if !before.is_empty() {
                spans.push(Span::styled(before, text_style));
            }
            let cursor_char = if cursor < text.len() {
                text[cursor].to_string()
            } else {
                " ".to_string()
            };
            spans.push(Span::styled(
                cursor_char,
                Style::default().fg(Color::Black).bg(self.theme.input_cursor),
            ));
            if cursor + 1 < visible_end {
                let after: String = text[cursor + 1..visible_end].iter().collect();
                spans.push(Span::styled(after, text_style));
            }
        } else {
            let visible: String = text[start..visible_end].iter().collect();
            spans.push(Span::styled(visible, text_style));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }

    /// Draw the widget into `buf`. Areas below the layout minimum render
    /// nothing.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let layout = CounterLayout::compute(area);
        if layout.header.width == 0 {
            return;
        }

        Paragraph::new(Line::from(Span::styled(
            self.view.header.clone(),
            Style::default()
                .fg(self.theme.header)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(layout.header, buf);

        let counter_color = self.theme.color_for_class(self.view.counter_class);
        Paragraph::new(Line::from(Span::styled(
            self.view.counter_text.clone(),
            Style::default()
                .fg(counter_color)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(layout.counter, buf);

        self.render_button(&self.view.add_label, Focus::AddButton, layout.add_button, buf);
        self.render_step_input(layout.step_input, buf);
        self.render_button(
            &self.view.subtract_label,
            Focus::SubtractButton,
            layout.subtract_button,
            buf,
        );

        if let Some(status) = layout.status {
            if !self.status_text.is_empty() {
                Paragraph::new(Line::from(Span::styled(
                    self.status_text.to_string(),
                    Style::default().fg(self.theme.status_text),
                )))
                .alignment(Alignment::Center)
                .render(status, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_buffer(counter: &CounterState, ui: &UiState, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let view = CounterView::build(counter, ui);
        let theme = AppTheme::dark();
        CounterWidget::new(&view, &theme, ui).render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        let area = *buf.area();
        (area.x..area.x + area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = *buf.area();
        (area.y..area.y + area.height)
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn initial_view_contract() {
        let view = CounterView::build(&CounterState::new(), &UiState::new());
        assert_eq!(view.header, "My Counter");
        assert_eq!(view.counter_text, "0");
        assert_eq!(view.step_text, "1");
        assert_eq!(view.add_label, "+");
        assert_eq!(view.subtract_label, "-");
        assert_eq!(view.counter_class.token(), "");
    }

    #[test]
    fn view_building_is_idempotent() {
        let mut counter = CounterState::new();
        counter.set_step_text("50");
        counter.add();
        counter.add();
        let ui = UiState::new();
        assert_eq!(CounterView::build(&counter, &ui), CounterView::build(&counter, &ui));
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut counter = CounterState::new();
        counter.set_step_text("7");
        counter.subtract();
        let ui = UiState::new();
        let first = render_to_buffer(&counter, &ui, 40, 12);
        let second = render_to_buffer(&counter, &ui, 40, 12);
        assert_eq!(first, second);
    }

    #[test]
    fn rendered_text_contains_all_elements() {
        let counter = CounterState::new();
        let ui = UiState::new();
        let buf = render_to_buffer(&counter, &ui, 40, 12);
        let text = buffer_text(&buf);
        assert!(text.contains("My Counter"));
        assert!(text.contains('0'));
        assert!(text.contains('+'));
        assert!(text.contains('-'));
        assert!(text.contains('1'));
    }

    #[test]
    fn counter_readout_uses_threshold_color() {
        let mut counter = CounterState::new();
        counter.set_step_text("150");
        counter.add();
        let ui = UiState::new();
        let theme = AppTheme::dark();

        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        let view = CounterView::build(&counter, &ui);
        CounterWidget::new(&view, &theme, &ui).render(area, &mut buf);

        let layout = CounterLayout::compute(area);
        let y = layout.counter.y;
        let row = row_text(&buf, y);
        let x = row.find("150").expect("counter text on its row") as u16;
        assert_eq!(buf[(x, y)].fg, theme.counter_high);
    }

    #[test]
    fn nan_counter_renders_with_default_color() {
        let mut counter = CounterState::new();
        counter.set_step_text("nope");
        counter.add();
        let ui = UiState::new();
        let theme = AppTheme::dark();

        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        let view = CounterView::build(&counter, &ui);
        CounterWidget::new(&view, &theme, &ui).render(area, &mut buf);

        let layout = CounterLayout::compute(area);
        let y = layout.counter.y;
        let row = row_text(&buf, y);
        let x = row.find("NaN").expect("sentinel text on its row") as u16;
        assert_eq!(buf[(x, y)].fg, theme.counter_text);
    }

    #[test]
    fn tiny_area_renders_nothing() {
        let counter = CounterState::new();
        let ui = UiState::new();
        let buf = render_to_buffer(&counter, &ui, 8, 2);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 8, 2)));
    }
}
