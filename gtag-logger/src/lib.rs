//! Global `log` implementation for the browser.
//!
//! Every record at or above the console level goes to `console.*`. Records
//! at or above the gtag level are also reported to Google Analytics as
//! `exception` events when `window.gtag` exists. Without the hook the logger
//! is console-only; nothing is queued.

use log::{Level, LevelFilter};

/// Longest `description` sent with an exception event.
pub const MAX_DESCRIPTION_LEN: usize = 300;

pub const GTAG_SCRIPT_URL: &str = "https://www.googletagmanager.com/gtag/js";

#[derive(Clone, Debug)]
pub struct GtagConfig {
    /// e.g. `G-XXXXXXX`. Needed only for snippet injection.
    pub measurement_id: Option<String>,
    pub console_level: LevelFilter,
    pub gtag_level: LevelFilter,
    pub inject_snippet: bool,
}

impl Default for GtagConfig {
    fn default() -> Self {
        Self {
            measurement_id: None,
            console_level: LevelFilter::Info,
            gtag_level: LevelFilter::Warn,
            inject_snippet: true,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn passes(threshold: LevelFilter, level: Level) -> bool {
    level.to_level_filter() <= threshold
}

/// Text for an exception event, cut at [`MAX_DESCRIPTION_LEN`] bytes on a
/// char boundary.
pub fn exception_description(target: &str, message: &str) -> String {
    let mut text = format!("{target} — {message}");
    if text.len() > MAX_DESCRIPTION_LEN {
        let mut cut = MAX_DESCRIPTION_LEN;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
    }
    text
}

pub fn script_src(measurement_id: &str) -> String {
    format!("{GTAG_SCRIPT_URL}?id={measurement_id}")
}

#[cfg(target_arch = "wasm32")]
mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{has_gtag, send_event, track_page_view, GtagLogger};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert!(passes(LevelFilter::Warn, Level::Error));
        assert!(passes(LevelFilter::Warn, Level::Warn));
        assert!(!passes(LevelFilter::Warn, Level::Info));
        assert!(!passes(LevelFilter::Off, Level::Error));
    }

    #[test]
    fn description_is_truncated_on_char_boundary() {
        let long = "₹".repeat(200);
        let text = exception_description("site", &long);
        assert!(text.len() <= MAX_DESCRIPTION_LEN);
        assert!(text.starts_with("site — ₹"));
    }

    #[test]
    fn short_description_is_untouched() {
        assert_eq!(exception_description("a", "b"), "a — b");
    }

    #[test]
    fn script_src_carries_id() {
        assert_eq!(
            script_src("G-ABC"),
            "https://www.googletagmanager.com/gtag/js?id=G-ABC"
        );
    }
}
