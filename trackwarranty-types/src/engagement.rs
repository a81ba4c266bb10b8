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

//! Page-level engagement bookkeeping: scroll depth, idle detection, section
//! views, click classification and the navbar's scroll reaction.
//!
//! These are the state machines only. The web crate feeds them DOM events
//! and timer callbacks and forwards what they report to `gtag`.

use std::collections::{BTreeSet, HashSet};

use serde_json::{json, Value};

use crate::analytics::Params;

pub const SCROLL_MARKERS: [u8; 5] = [25, 50, 75, 90, 100];
pub const SCROLL_DEBOUNCE_MS: u32 = 100;
pub const INACTIVITY_MS: u32 = 30_000;
/// Document events that count as activity.
pub const ACTIVITY_EVENTS: [&str; 5] = ["mousedown", "mousemove", "keypress", "scroll", "touchstart"];
/// Visible fraction at which a section counts as viewed.
pub const SECTION_VIEW_RATIO: f64 = 0.5;

pub const NAV_SOLID_AFTER_PX: f64 = 100.0;
pub const NAV_HIDE_AFTER_PX: f64 = 200.0;
/// Fixed navbar height subtracted when smooth-scrolling to an anchor.
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0;

fn object(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => Params::new(),
    }
}

/// Reports each of [`SCROLL_MARKERS`] once.
#[derive(Debug, Clone, Default)]
pub struct ScrollDepthTracker {
    reported: BTreeSet<u8>,
}

impl ScrollDepthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `scrollable` is `scrollHeight - innerHeight`. Returns the markers
    /// crossed for the first time.
    pub fn update(&mut self, scroll_top: f64, scrollable: f64) -> Vec<u8> {
        if scrollable <= 0.0 {
            return Vec::new();
        }
        let percent = (scroll_top / scrollable * 100.0).round();
        SCROLL_MARKERS
            .iter()
            .copied()
            .filter(|marker| percent >= f64::from(*marker) && self.reported.insert(*marker))
            .collect()
    }
}

/// Engaged/idle tracking. The caller restarts a [`INACTIVITY_MS`] timer on
/// every activity event and calls [`EngagementTracker::inactivity_elapsed`]
/// when it fires.
#[derive(Debug, Clone)]
pub struct EngagementTracker {
    engaged: bool,
    started_at: f64,
}

impl EngagementTracker {
    pub fn new(now_ms: f64) -> Self {
        Self {
            engaged: true,
            started_at: now_ms,
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn activity(&mut self, now_ms: f64) {
        if !self.engaged {
            self.engaged = true;
            self.started_at = now_ms;
        }
    }

    /// Inactivity timer expired. Returns the engaged time to report.
    pub fn inactivity_elapsed(&mut self, now_ms: f64) -> Option<u64> {
        if !self.engaged {
            return None;
        }
        self.engaged = false;
        Some((now_ms - self.started_at).max(0.0) as u64)
    }

    /// Tab hidden. Returns the engaged time to report.
    pub fn hidden(&self, now_ms: f64) -> Option<u64> {
        self.engaged
            .then(|| (now_ms - self.started_at).max(0.0) as u64)
    }

    /// Tab visible again: a new engagement window starts.
    pub fn visible(&mut self, now_ms: f64) {
        self.engaged = true;
        self.started_at = now_ms;
    }
}

/// Reports each section once.
#[derive(Debug, Clone, Default)]
pub struct SectionViewTracker {
    seen: HashSet<String>,
}

impl SectionViewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, section: &str, visible_ratio: f64) -> bool {
        visible_ratio > SECTION_VIEW_RATIO && self.seen.insert(section.to_string())
    }
}

/// How the navbar should look for the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarStyle {
    /// More opaque background once the hero is scrolled past.
    pub solid: bool,
    /// Slid out of view while scrolling down.
    pub hidden: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NavbarScroll {
    last_top: f64,
}

impl NavbarScroll {
    pub fn update(&mut self, scroll_top: f64) -> NavbarStyle {
        let style = NavbarStyle {
            solid: scroll_top > NAV_SOLID_AFTER_PX,
            hidden: scroll_top > self.last_top && scroll_top > NAV_HIDE_AFTER_PX,
        };
        self.last_top = scroll_top;
        style
    }
}

/// Classify a clicked control for analytics.
pub fn button_type(href: Option<&str>, is_submit: bool, hostname: &str) -> &'static str {
    match href.filter(|h| !h.is_empty()) {
        Some(href) if href.contains("apps.apple.com") || href.contains("play.google.com") => {
            "app_download"
        }
        Some(href) if href.contains("wa.me") => "whatsapp_contact",
        Some(href) if href.starts_with("mailto:") => "email_contact",
        Some(href) if !hostname.is_empty() && href.contains(hostname) => "internal_link",
        Some(_) => "external_link",
        None if is_submit => "form_submit",
        None => "button",
    }
}

/// Analytics name for a page section.
pub fn section_name(id: &str, class: &str, tag: &str) -> String {
    if !id.is_empty() {
        return id.to_string();
    }
    const BY_CLASS: [(&str, &str); 8] = [
        ("hero", "hero"),
        ("problem", "problem"),
        ("solution", "solution"),
        ("social-proof", "social_proof"),
        ("enterprise", "enterprise"),
        ("download", "download"),
        ("navbar", "navigation"),
        ("footer", "footer"),
    ];
    BY_CLASS
        .iter()
        .find(|(needle, _)| class.contains(needle))
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| tag.to_lowercase())
}

pub fn scroll_params(depth: u8, engagement_ms: u64) -> Params {
    object(json!({
        "scroll_depth": depth,
        "engagement_time_msec": engagement_ms,
    }))
}

pub fn click_params(text: &str, kind: &str, section: &str, url: &str, outbound: bool) -> Params {
    object(json!({
        "click_text": text,
        "click_type": kind,
        "click_section": section,
        "click_url": url,
        "outbound": outbound,
    }))
}

pub fn section_view_params(section: &str, view_time_ms: u64) -> Params {
    object(json!({
        "section_name": section,
        "view_time": view_time_ms,
    }))
}

pub fn user_engagement_params(engagement_ms: u64, hidden: bool) -> Params {
    let mut params = object(json!({ "engagement_time_msec": engagement_ms }));
    if hidden {
        params.insert("visibility_state".into(), json!("hidden"));
    }
    params
}

pub fn form_params(form_name: &str, location: &str) -> Params {
    object(json!({
        "form_name": form_name,
        "form_location": location,
    }))
}

pub fn field_focus_params(form_name: &str, field_name: &str, field_type: &str) -> Params {
    object(json!({
        "form_name": form_name,
        "field_name": field_name,
        "field_type": field_type,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_markers_fire_once_each() {
        let mut tracker = ScrollDepthTracker::new();
        assert_eq!(tracker.update(0.0, 1000.0), Vec::<u8>::new());
        assert_eq!(tracker.update(500.0, 1000.0), vec![25, 50]);
        assert_eq!(tracker.update(400.0, 1000.0), Vec::<u8>::new());
        assert_eq!(tracker.update(1000.0, 1000.0), vec![75, 90, 100]);
        assert_eq!(tracker.update(1000.0, 1000.0), Vec::<u8>::new());
    }

    #[test]
    fn unscrollable_page_reports_nothing() {
        let mut tracker = ScrollDepthTracker::new();
        assert!(tracker.update(10.0, 0.0).is_empty());
    }

    #[test]
    fn engagement_reports_once_per_idle_period() {
        let mut tracker = EngagementTracker::new(1_000.0);
        assert_eq!(tracker.inactivity_elapsed(31_000.0), Some(30_000));
        assert!(!tracker.is_engaged());
        assert_eq!(tracker.inactivity_elapsed(61_000.0), None);

        tracker.activity(70_000.0);
        assert!(tracker.is_engaged());
        assert_eq!(tracker.inactivity_elapsed(100_000.0), Some(30_000));
    }

    #[test]
    fn activity_while_engaged_keeps_window_start() {
        let mut tracker = EngagementTracker::new(0.0);
        tracker.activity(5_000.0);
        assert_eq!(tracker.hidden(8_000.0), Some(8_000));
    }

    #[test]
    fn hidden_tab_only_reports_when_engaged() {
        let mut tracker = EngagementTracker::new(0.0);
        tracker.inactivity_elapsed(30_000.0);
        assert_eq!(tracker.hidden(40_000.0), None);
        tracker.visible(50_000.0);
        assert_eq!(tracker.hidden(52_000.0), Some(2_000));
    }

    #[test]
    fn sections_report_once_above_half_visible() {
        let mut tracker = SectionViewTracker::new();
        assert!(!tracker.observe("hero", 0.5));
        assert!(tracker.observe("hero", 0.6));
        assert!(!tracker.observe("hero", 0.9));
        assert!(tracker.observe("download", 1.0));
    }

    #[test]
    fn navbar_hides_only_when_scrolling_down_past_threshold() {
        let mut nav = NavbarScroll::default();
        assert_eq!(nav.update(50.0), NavbarStyle { solid: false, hidden: false });
        assert_eq!(nav.update(150.0), NavbarStyle { solid: true, hidden: false });
        assert_eq!(nav.update(300.0), NavbarStyle { solid: true, hidden: true });
        assert_eq!(nav.update(250.0), NavbarStyle { solid: true, hidden: false });
    }

    #[test]
    fn button_types() {
        let host = "trackwarranty.app";
        assert_eq!(
            button_type(Some("https://play.google.com/store/apps/details?id=x"), false, host),
            "app_download"
        );
        assert_eq!(button_type(Some("https://wa.me/123"), false, host), "whatsapp_contact");
        assert_eq!(button_type(Some("mailto:hi@x.in"), false, host), "email_contact");
        assert_eq!(
            button_type(Some("https://trackwarranty.app/#solution"), false, host),
            "internal_link"
        );
        assert_eq!(button_type(Some("https://x.com"), false, host), "external_link");
        assert_eq!(button_type(None, true, host), "form_submit");
        assert_eq!(button_type(Some(""), false, host), "button");
    }

    #[test]
    fn section_names() {
        assert_eq!(section_name("pricing", "hero", "section"), "pricing");
        assert_eq!(section_name("", "social-proof dark", "div"), "social_proof");
        assert_eq!(section_name("", "navbar fixed", "nav"), "navigation");
        assert_eq!(section_name("", "misc", "SECTION"), "section");
    }

    #[test]
    fn engagement_params_mark_hidden_state() {
        assert!(!user_engagement_params(10, false).contains_key("visibility_state"));
        assert_eq!(
            user_engagement_params(10, true)["visibility_state"],
            json!("hidden")
        );
    }
}
