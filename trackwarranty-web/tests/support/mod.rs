// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for trackwarranty-web component tests.
//
// Provides mount/cleanup helpers, runtime config injection and local
// storage helpers so that individual test files stay focused on assertions.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::{JsCast, JsValue};

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

pub fn text_of(mount: &web_sys::Element, selector: &str) -> String {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} missing"))
        .text_content()
        .unwrap_or_default()
}

pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} missing"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

pub fn set_input(mount: &web_sys::Element, selector: &str, value: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} missing"))
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap()
        .set_value(value);
}

pub fn has_class(mount: &web_sys::Element, selector: &str, class: &str) -> bool {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} missing"))
        .class_list()
        .contains(class)
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` with test store URLs and no measurement
/// id, so `window.gtag` stays absent.
pub fn inject_app_config() {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("appStoreUrl", &"https://apps.apple.com/app/trackwarranty".into());
    set(
        "playStoreUrl",
        &"https://play.google.com/store/apps/details?id=app.trackwarranty".into(),
    );
    set("deepLinkScheme", &"trackwarranty".into());
    set("gaTag", &"trackwarranty_test".into());
    set("debugLogging", &"true".into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

pub fn remove_app_config() {
    let window = gloo_utils::window();
    js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into()).unwrap();
}

// ---------------------------------------------------------------------------
// Location and storage
// ---------------------------------------------------------------------------

pub fn local_storage() -> web_sys::Storage {
    gloo_utils::window().local_storage().unwrap().unwrap()
}

/// Drop everything the site keeps in `localStorage`.
pub fn clear_site_storage() {
    let storage = local_storage();
    for key in [
        "trackwarranty_referral",
        "trackwarranty_analytics",
        "ga_fallback_events",
    ] {
        storage.remove_item(key).unwrap();
    }
}

/// Parsed JSON value stored under `key`, if any.
pub fn stored_json(key: &str) -> Option<serde_json::Value> {
    local_storage()
        .get_item(key)
        .unwrap()
        .map(|raw| serde_json::from_str(&raw).unwrap())
}

/// Names of all events in the primary analytics log.
pub fn logged_events() -> Vec<String> {
    stored_json("trackwarranty_analytics")
        .and_then(|v| v.as_array().cloned())
        .unwrap_or_default()
        .iter()
        .filter_map(|e| e["event"].as_str().map(str::to_string))
        .collect()
}

/// Swap the address bar to `url` (same origin) and return the previous
/// href so the test can restore it.
pub fn replace_url(url: &str) -> String {
    let window = gloo_utils::window();
    let previous = window.location().href().unwrap();
    window
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(url))
        .unwrap();
    previous
}

/// Properties of the most recent `name` event in the primary analytics log.
pub fn last_logged(name: &str) -> Option<serde_json::Value> {
    stored_json("trackwarranty_analytics")?
        .as_array()?
        .iter()
        .rev()
        .find(|e| e["event"] == name)
        .map(|e| e["properties"].clone())
}

// ---------------------------------------------------------------------------
// Form controls and navigation
// ---------------------------------------------------------------------------

/// Set `value` on any form control (input, select, textarea).
pub fn set_control(mount: &web_sys::Element, selector: &str, value: &str) {
    let control = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} missing"));
    js_sys::Reflect::set(&control, &"value".into(), &value.into()).unwrap();
}

/// Click a link while cancelling its navigation, so the page under test
/// stays put but component handlers still run.
pub fn click_link_in_place(mount: &web_sys::Element, selector: &str) {
    let link = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} missing"));
    let _guard = gloo::events::EventListener::new(&link, "click", |event| {
        event.prevent_default()
    });
    link.dyn_into::<web_sys::HtmlElement>().unwrap().click();
}

/// Replace `window.open` with a recorder. Returns the original so the test
/// can put it back with [`restore_window_open`].
pub fn record_window_open() -> JsValue {
    let window = gloo_utils::window();
    let original = js_sys::Reflect::get(&window, &"open".into()).unwrap();
    let recorder = js_sys::Function::new_with_args(
        "url, target",
        "window.__openedUrls = (window.__openedUrls || []).concat([url]); return null;",
    );
    js_sys::Reflect::set(&window, &"__openedUrls".into(), &js_sys::Array::new()).unwrap();
    js_sys::Reflect::set(&window, &"open".into(), &recorder).unwrap();
    original
}

pub fn opened_urls() -> Vec<String> {
    let window = gloo_utils::window();
    js_sys::Array::from(&js_sys::Reflect::get(&window, &"__openedUrls".into()).unwrap())
        .iter()
        .filter_map(|url| url.as_string())
        .collect()
}

pub fn restore_window_open(original: JsValue) {
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"open".into(), &original).unwrap();
    js_sys::Reflect::delete_property(&window.into(), &"__openedUrls".into()).unwrap();
}
