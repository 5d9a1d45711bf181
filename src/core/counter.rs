//! Counter state: the running value, the step magnitude, and the
//! threshold classification derived from the value.
//!
//! Values are stored as `f64` so that an unparseable step entry degrades
//! to NaN instead of being rejected: NaN flows through add/subtract,
//! displays as `"NaN"`, and fails both threshold comparisons. Integral
//! values always display without a fractional part.

/// Threshold classification of the counter value.
///
/// At most one side can match for any value; NaN matches neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdClass {
    None,
    Green,
    Red,
}

impl ThresholdClass {
    /// Classify a counter value against the ±100 boundary.
    pub fn of(value: f64) -> Self {
        if value >= 100.0 {
            ThresholdClass::Green
        } else if value <= -100.0 {
            ThresholdClass::Red
        } else {
            ThresholdClass::None
        }
    }

    /// Stable token form, usable as a style key.
    pub fn token(&self) -> &'static str {
        match self {
            ThresholdClass::None => "",
            ThresholdClass::Green => "green",
            ThresholdClass::Red => "red",
        }
    }
}

/// Parse the leading base-10 integer of `raw`.
///
/// Skips leading whitespace, honors one optional sign, then consumes
/// ASCII digits until the first non-digit. Yields NaN when no digit is
/// consumed (empty input, bare sign, non-numeric text).
pub fn parse_step(raw: &str) -> f64 {
    let mut chars = raw.trim_start().chars().peekable();

    let mut sign = 1.0;
    if let Some(&c) = chars.peek() {
        if c == '+' || c == '-' {
            if c == '-' {
                sign = -1.0;
            }
            chars.next();
        }
    }

    let mut value = 0.0_f64;
    let mut any_digit = false;
    while let Some(&c) = chars.peek() {
        match c.to_digit(10) {
            Some(d) => {
                value = value * 10.0 + f64::from(d);
                any_digit = true;
                chars.next();
            }
            None => break,
        }
    }

    if any_digit {
        sign * value
    } else {
        f64::NAN
    }
}

/// Textual form of a counter or step value.
///
/// Integral values print with no fractional part, negative zero prints
/// as `"0"`, NaN prints as `"NaN"`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.007_199_254_740_992e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Counter widget state (rendering-agnostic).
///
/// Owned by one widget instance; nothing here is shared or persisted.
#[derive(Debug, Clone)]
pub struct CounterState {
    /// Accumulated counter value.
    pub value: f64,

    /// Magnitude applied by the next add/subtract.
    pub step: f64,
}

impl CounterState {
    /// Fresh widget state: counter 0, step 1.
    pub fn new() -> Self {
        Self {
            value: 0.0,
            step: 1.0,
        }
    }

    /// Add the current step to the counter. No bounds check.
    pub fn add(&mut self) {
        self.value += self.step;
    }

    /// Subtract the current step from the counter.
    pub fn subtract(&mut self) {
        self.value -= self.step;
    }

    /// Apply a change of the step field's raw text.
    ///
    /// Called on every edit of the field; the parse result replaces the
    /// step even when it is NaN.
    pub fn set_step_text(&mut self, raw: &str) {
        self.step = parse_step(raw);
    }

    /// Counter display text.
    pub fn value_text(&self) -> String {
        format_value(self.value)
    }

    /// Textual form of the step value (what the field shows once an edit
    /// is committed).
    pub fn step_text(&self) -> String {
        format_value(self.step)
    }

    /// Threshold classification of the current value.
    pub fn class(&self) -> ThresholdClass {
        ThresholdClass::of(self.value)
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let counter = CounterState::new();
        assert_eq!(counter.value_text(), "0");
        assert_eq!(counter.step_text(), "1");
        assert_eq!(counter.class(), ThresholdClass::None);
        assert_eq!(counter.class().token(), "");
    }

    #[test]
    fn add_with_default_step() {
        let mut counter = CounterState::new();
        counter.add();
        assert_eq!(counter.value_text(), "1");
    }

    #[test]
    fn subtract_with_default_step() {
        let mut counter = CounterState::new();
        counter.subtract();
        assert_eq!(counter.value_text(), "-1");
    }

    #[test]
    fn step_change_does_not_touch_counter() {
        let mut counter = CounterState::new();
        counter.set_step_text("5");
        assert_eq!(counter.value_text(), "0");
        assert_eq!(counter.step_text(), "5");
    }

    #[test]
    fn add_with_custom_step() {
        let mut counter = CounterState::new();
        counter.set_step_text("5");
        counter.add();
        assert_eq!(counter.value_text(), "5");
    }

    #[test]
    fn subtract_with_custom_step() {
        let mut counter = CounterState::new();
        counter.set_step_text("5");
        counter.subtract();
        assert_eq!(counter.value_text(), "-5");
    }

    #[test]
    fn add_then_subtract_twice() {
        let mut counter = CounterState::new();
        counter.set_step_text("10");
        counter.add();
        counter.subtract();
        counter.subtract();
        assert_eq!(counter.value_text(), "-10");
    }

    #[test]
    fn threshold_boundary_walk() {
        let mut counter = CounterState::new();
        counter.set_step_text("50");

        counter.add();
        assert_eq!(counter.class().token(), "");

        counter.add();
        assert_eq!(counter.value_text(), "100");
        assert_eq!(counter.class().token(), "green");

        counter.add();
        assert_eq!(counter.value_text(), "150");
        assert_eq!(counter.class().token(), "green");

        counter.subtract();
        counter.subtract();
        assert_eq!(counter.value_text(), "50");
        assert_eq!(counter.class().token(), "");

        for _ in 0..4 {
            counter.subtract();
        }
        assert_eq!(counter.value_text(), "-150");
        assert_eq!(counter.class().token(), "red");
    }

    #[test]
    fn threshold_class_property() {
        for v in -300..=300 {
            let value = f64::from(v);
            let class = ThresholdClass::of(value);
            assert_eq!(class == ThresholdClass::Green, v >= 100, "value {}", v);
            assert_eq!(class == ThresholdClass::Red, v <= -100, "value {}", v);
            assert!(
                !(class == ThresholdClass::Green && class == ThresholdClass::Red),
                "value {}",
                v
            );
        }
    }

    #[test]
    fn parse_plain_and_signed() {
        assert_eq!(parse_step("5"), 5.0);
        assert_eq!(parse_step("-7"), -7.0);
        assert_eq!(parse_step("+3"), 3.0);
        assert_eq!(parse_step("  42"), 42.0);
    }

    #[test]
    fn parse_stops_at_first_non_digit() {
        assert_eq!(parse_step("12.9"), 12.0);
        assert_eq!(parse_step("42abc"), 42.0);
    }

    #[test]
    fn parse_without_digits_is_nan() {
        assert!(parse_step("").is_nan());
        assert!(parse_step("abc").is_nan());
        assert!(parse_step("-").is_nan());
        assert!(parse_step("+").is_nan());
        assert!(parse_step(".5").is_nan());
    }

    #[test]
    fn nan_step_propagates_through_arithmetic() {
        let mut counter = CounterState::new();
        counter.set_step_text("oops");
        assert_eq!(counter.step_text(), "NaN");

        counter.add();
        assert_eq!(counter.value_text(), "NaN");
        assert_eq!(counter.class(), ThresholdClass::None);
        assert_eq!(counter.class().token(), "");

        // Once NaN, further arithmetic stays NaN even with a valid step.
        counter.set_step_text("5");
        counter.subtract();
        assert_eq!(counter.value_text(), "NaN");
    }

    #[test]
    fn negative_zero_displays_as_zero() {
        assert_eq!(format_value(-0.0), "0");
        let mut counter = CounterState::new();
        counter.set_step_text("-0");
        assert_eq!(counter.step_text(), "0");
    }
}
