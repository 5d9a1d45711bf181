//! Application-wide theme system
//!
//! The core computes a threshold token for the counter value; themes give
//! that token (and every other UI element) its color. Built-in themes can
//! be selected by name from config or the CLI, and the two threshold
//! colors can be overridden with hex strings.

use crate::core::counter::ThresholdClass;
use ratatui::style::Color;

/// Convert hex string to ratatui Color
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

/// Complete application theme defining all UI colors
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub name: String,
    pub description: String,

    // Text colors
    pub header: Color,
    pub counter_text: Color,
    pub status_text: Color,

    // Threshold colors (the visual meaning of the computed token)
    pub counter_high: Color,
    pub counter_low: Color,

    // Control colors
    pub border: Color,
    pub border_focused: Color,
    pub button_label: Color,
    pub input_text: Color,
    pub input_cursor: Color,
}

impl AppTheme {
    /// Default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            description: "Default dark theme".to_string(),
            header: Color::Cyan,
            counter_text: Color::White,
            status_text: Color::DarkGray,
            counter_high: Color::Green,
            counter_low: Color::Red,
            border: Color::DarkGray,
            border_focused: Color::Yellow,
            button_label: Color::White,
            input_text: Color::White,
            input_cursor: Color::Yellow,
        }
    }

    /// Light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            description: "For light terminal backgrounds".to_string(),
            header: Color::Blue,
            counter_text: Color::Black,
            status_text: Color::Gray,
            counter_high: Color::Rgb(0x00, 0x80, 0x00),
            counter_low: Color::Rgb(0xc0, 0x00, 0x00),
            border: Color::Gray,
            border_focused: Color::Blue,
            button_label: Color::Black,
            input_text: Color::Black,
            input_cursor: Color::Blue,
        }
    }

    /// Maximum-contrast theme.
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            description: "Maximum contrast".to_string(),
            header: Color::White,
            counter_text: Color::White,
            status_text: Color::White,
            counter_high: Color::LightGreen,
            counter_low: Color::LightRed,
            border: Color::White,
            border_focused: Color::LightYellow,
            button_label: Color::White,
            input_text: Color::White,
            input_cursor: Color::White,
        }
    }

    /// All built-in themes, in cycle order.
    pub fn builtin_themes() -> Vec<AppTheme> {
        vec![Self::dark(), Self::light(), Self::high_contrast()]
    }

    /// Look up a built-in theme by name, falling back to the dark theme.
    pub fn by_name(name: &str) -> AppTheme {
        Self::builtin_themes()
            .into_iter()
            .find(|t| t.name == name)
            .unwrap_or_else(|| {
                tracing::warn!("Unknown theme '{}', falling back to dark", name);
                Self::dark()
            })
    }

    /// The built-in theme following this one in the cycle.
    pub fn next(&self) -> AppTheme {
        let themes = Self::builtin_themes();
        let idx = themes
            .iter()
            .position(|t| t.name == self.name)
            .map(|i| (i + 1) % themes.len())
            .unwrap_or(0);
        themes.into_iter().nth(idx).unwrap_or_else(Self::dark)
    }

    /// Color for the counter readout given its threshold classification.
    pub fn color_for_class(&self, class: ThresholdClass) -> Color {
        match class {
            ThresholdClass::Green => self.counter_high,
            ThresholdClass::Red => self.counter_low,
            ThresholdClass::None => self.counter_text,
        }
    }

    /// Apply optional hex overrides to the threshold colors.
    ///
    /// Invalid hex strings are logged and ignored.
    pub fn apply_threshold_overrides(&mut self, high: Option<&str>, low: Option<&str>) {
        if let Some(hex) = high {
            match hex_to_color(hex) {
                Some(color) => self.counter_high = color,
                None => tracing::warn!("Ignoring invalid threshold color '{}'", hex),
            }
        }
        if let Some(hex) = low {
            match hex_to_color(hex) {
                Some(color) => self.counter_low = color,
                None => tracing::warn!("Ignoring invalid threshold color '{}'", hex),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_to_color_mapping() {
        let theme = AppTheme::dark();
        assert_eq!(theme.color_for_class(ThresholdClass::Green), theme.counter_high);
        assert_eq!(theme.color_for_class(ThresholdClass::Red), theme.counter_low);
        assert_eq!(theme.color_for_class(ThresholdClass::None), theme.counter_text);
    }

    #[test]
    fn lookup_by_name_with_fallback() {
        assert_eq!(AppTheme::by_name("light").name, "light");
        assert_eq!(AppTheme::by_name("no-such-theme").name, "dark");
    }

    #[test]
    fn cycle_visits_every_builtin() {
        let mut theme = AppTheme::dark();
        let count = AppTheme::builtin_themes().len();
        let mut seen = vec![theme.name.clone()];
        for _ in 1..count {
            theme = theme.next();
            seen.push(theme.name.clone());
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), count);
        assert_eq!(theme.next().name, "dark");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_to_color("#ff8000"), Some(Color::Rgb(0xff, 0x80, 0x00)));
        assert_eq!(hex_to_color("ff8000"), Some(Color::Rgb(0xff, 0x80, 0x00)));
        assert_eq!(hex_to_color("nope"), None);
        assert_eq!(hex_to_color("#12345"), None);
    }

    #[test]
    fn threshold_overrides() {
        let mut theme = AppTheme::dark();
        theme.apply_threshold_overrides(Some("#00ff00"), Some("bogus"));
        assert_eq!(theme.counter_high, Color::Rgb(0x00, 0xff, 0x00));
        assert_eq!(theme.counter_low, AppTheme::dark().counter_low);
    }
}
