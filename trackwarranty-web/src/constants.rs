// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_wasm_bindgen::from_value as from_js_value;
use trackwarranty_types::SiteConfig;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Hidden deep-link iframe lifetime.
pub const DEEP_LINK_IFRAME_MS: u32 = 1000;
/// After this long without leaving the page we assume the app is missing.
pub const DEEP_LINK_DIAGNOSTIC_MS: u32 = 2500;
/// Spinner shown before the invite page reveals its download buttons.
pub const INVITE_LOADING_MS: u32 = 1000;
pub const SUCCESS_MODAL_MS: u32 = 10_000;
pub const TOAST_MS: u32 = 4000;
pub const DOWNLOAD_FEEDBACK_MS: u32 = 3000;
pub const COMING_SOON_MS: u32 = 5000;

pub fn app_config() -> Result<SiteConfig, String> {
    let win = window().ok_or_else(|| "no window".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<SiteConfig>(config).map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// Runtime config, or the built-in defaults when the page ships without one.
pub fn site_config() -> SiteConfig {
    app_config().unwrap_or_else(|e| {
        log::warn!("{e}; using default site config");
        SiteConfig::default()
    })
}
