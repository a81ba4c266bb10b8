/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Count-up animation for headline statistics such as `2.5Cr+` or `98%`.
//!
//! The number is pulled out of the element's text, counted up linearly over
//! [`STEPS`] frames, and the last frame restores the original text exactly.

pub const DURATION_MS: u32 = 2000;
pub const STEPS: u32 = 60;

/// Delay between frames.
pub const fn frame_interval_ms() -> u32 {
    DURATION_MS / STEPS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    /// Crore, `2.5Cr+`.
    Crore,
    /// Thousands, `50K+`.
    Thousand,
    /// Lakh with rupee prefix, `₹10L+`.
    Lakh,
    Percent,
    Plain,
}

impl Unit {
    fn of(text: &str) -> Self {
        if text.contains("Cr") {
            Unit::Crore
        } else if text.contains('K') {
            Unit::Thousand
        } else if text.contains('L') {
            Unit::Lakh
        } else if text.contains('%') {
            Unit::Percent
        } else {
            Unit::Plain
        }
    }

    fn format(&self, value: f64) -> String {
        match self {
            Unit::Crore => format!("{value:.1}Cr+"),
            Unit::Thousand => format!("{}K+", value.floor()),
            Unit::Lakh => format!("₹{value:.1}L+"),
            Unit::Percent => format!("{}%", value.floor()),
            Unit::Plain => format!("{}", value.floor()),
        }
    }
}

/// Leading decimal number of `digits`, which only holds digits and dots.
fn leading_number(digits: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in digits.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + c.len_utf8();
    }
    digits[..end].parse().ok()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    original: String,
    target: f64,
    unit: Unit,
}

impl CounterAnimation {
    /// `None` when the text has no number in it; such elements are left
    /// alone.
    pub fn from_text(text: &str) -> Option<Self> {
        let digits: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let target = leading_number(&digits)?;
        Some(Self {
            original: text.to_string(),
            target,
            unit: Unit::of(text),
        })
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Whether `step` (1-based) is the final frame.
    pub fn is_done(&self, step: u32) -> bool {
        step >= STEPS || self.value_at(step) >= self.target
    }

    /// `false` when the target is already reached at frame 0, e.g. `0%`.
    pub fn needs_ticks(&self) -> bool {
        !self.is_done(0)
    }

    fn value_at(&self, step: u32) -> f64 {
        self.target * f64::from(step) / f64::from(STEPS)
    }

    /// Text to show at frame `step`, `1..=STEPS`.
    pub fn frame(&self, step: u32) -> String {
        if self.is_done(step) {
            self.original.clone()
        } else {
            self.unit.format(self.value_at(step))
        }
    }
}
