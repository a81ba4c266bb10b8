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

//! web-sys implementations of the capability traits, plus the handful of
//! window helpers the components share.

use serde::Serialize;
use trackwarranty_types::analytics::{Params, PageEnv};
use trackwarranty_types::engagement::{section_name, NAV_SCROLL_OFFSET_PX};
use trackwarranty_types::referral::normalize_invite_html;
use trackwarranty_types::{detect_platform, AnalyticsHook, KeyValueStore, Platform, StorageError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions, Storage};

fn js_err(e: JsValue) -> StorageError {
    StorageError::Backend(format!("{e:?}"))
}

/// `window.localStorage`.
#[derive(Clone)]
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(|storage| Self { storage })
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(js_err)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(js_err)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(js_err)
    }
}

/// `window.gtag`, present only when the analytics snippet loaded.
pub struct GtagHook;

impl GtagHook {
    pub fn detect() -> Option<Self> {
        gtag_logger::has_gtag().then_some(GtagHook)
    }
}

impl AnalyticsHook for GtagHook {
    fn send_event(&self, name: &str, params: &Params) {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        match params.serialize(&serializer) {
            Ok(value) => gtag_logger::send_event(name, &value),
            Err(e) => log::warn!("Dropping gtag event {name}: {e}"),
        }
    }
}

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

pub fn current_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

pub fn hostname() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

pub fn page_env() -> PageEnv {
    let Some(window) = web_sys::window() else {
        return PageEnv::default();
    };
    let location = window.location();
    PageEnv {
        url: location.href().unwrap_or_default(),
        path: location.pathname().unwrap_or_default(),
        user_agent: window.navigator().user_agent().unwrap_or_default(),
        referrer: window.document().map(|d| d.referrer()).unwrap_or_default(),
    }
}

pub fn current_platform() -> Platform {
    let Some(window) = web_sys::window() else {
        return Platform::Desktop;
    };
    let navigator = window.navigator();
    detect_platform(
        &navigator.user_agent().unwrap_or_default(),
        &navigator.platform().unwrap_or_default(),
        navigator.max_touch_points().max(0) as u32,
    )
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("window.open failed: {e:?}");
        }
    }
}

/// Smooth-scroll to `#id`, leaving room for the fixed navbar.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(f64::from(target.offset_top()) - NAV_SCROLL_OFFSET_PX);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Hide page scrolling while a modal is open.
pub fn lock_body_scroll(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

/// Analytics name of the section that contains `element`.
pub fn containing_section(element: &Element) -> String {
    match element.closest("section, .hero, .navbar, .footer") {
        Ok(Some(section)) => section_name(&section.id(), &section.class_name(), &section.tag_name()),
        _ => "unknown".to_string(),
    }
}

/// Rewrite `/invite.html?path_code=X` to `?code=X` in the address bar.
pub fn normalize_invite_url() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    if let Some(cleaned) = normalize_invite_html(&path, &search) {
        log::debug!("Cleaning up invite url to {cleaned}");
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&cleaned));
        }
    }
}
