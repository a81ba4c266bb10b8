use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, window};

use crate::{exception_description, passes, script_src, GtagConfig};

pub struct GtagLogger {
    min_console_level: LevelFilter,
    min_gtag_level: LevelFilter,
}

impl GtagLogger {
    pub fn init(config: GtagConfig) -> Result<(), log::SetLoggerError> {
        if config.inject_snippet {
            maybe_inject_snippet(&config);
        }

        let logger = GtagLogger {
            min_console_level: config.console_level,
            min_gtag_level: config.gtag_level,
        };

        // set_logger needs 'static
        let leaked: &'static GtagLogger = Box::leak(Box::new(logger));
        log::set_logger(leaked)?;
        log::set_max_level(config.console_level.max(config.gtag_level));
        Ok(())
    }
}

impl Log for GtagLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }
    fn log(&self, record: &Record) {
        log_to_console(self.min_console_level, record);
        log_to_gtag(self.min_gtag_level, record);
    }
    fn flush(&self) {}
}

/// Whether `window.gtag` is callable.
pub fn has_gtag() -> bool {
    gtag_function().is_some()
}

fn gtag_function() -> Option<js_sys::Function> {
    let w = window()?;
    js_sys::Reflect::get(&w, &JsValue::from_str("gtag"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
}

/// `gtag('event', name, params)`. No-op without the hook.
pub fn send_event(name: &str, params: &JsValue) {
    if let Some(gtag) = gtag_function() {
        let _ = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(name),
            params,
        );
    }
}

/// Report a client-side route change. Safe to call without gtag.
pub fn track_page_view(title: &str, url: &str) {
    let params = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&params, &"page_title".into(), &JsValue::from_str(title));
    let _ = js_sys::Reflect::set(&params, &"page_location".into(), &JsValue::from_str(url));
    send_event("page_view", &params);
}

fn log_to_console(threshold: LevelFilter, record: &Record) {
    if !passes(threshold, record.level()) {
        return;
    }
    let msg = format!(
        "{}: {} — {}",
        record.level(),
        record.target(),
        record.args()
    );
    match record.level() {
        Level::Error => console::error_1(&JsValue::from_str(&msg)),
        Level::Warn => console::warn_1(&JsValue::from_str(&msg)),
        Level::Info => console::info_1(&JsValue::from_str(&msg)),
        Level::Debug => console::log_1(&JsValue::from_str(&msg)),
        Level::Trace => console::debug_1(&JsValue::from_str(&msg)),
    }
}

fn log_to_gtag(threshold: LevelFilter, record: &Record) {
    if !passes(threshold, record.level()) || !has_gtag() {
        return;
    }
    let description = exception_description(record.target(), &record.args().to_string());
    let params = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &params,
        &"description".into(),
        &JsValue::from_str(&description),
    );
    let _ = js_sys::Reflect::set(
        &params,
        &"fatal".into(),
        &JsValue::from_bool(record.level() == Level::Error),
    );
    send_event("exception", &params);
}

fn maybe_inject_snippet(cfg: &GtagConfig) {
    let Some(w) = window() else {
        return;
    };
    if has_gtag() {
        return;
    }
    let Some(id) = cfg.measurement_id.as_deref().filter(|id| !id.is_empty()) else {
        return;
    };

    // window.dataLayer + the standard gtag shim
    let data_layer = js_sys::Array::new();
    let _ = js_sys::Reflect::set(&w, &JsValue::from_str("dataLayer"), &data_layer);
    let shim = js_sys::Function::new_no_args("window.dataLayer.push(arguments);");
    let _ = js_sys::Reflect::set(&w, &JsValue::from_str("gtag"), &shim);

    let _ = shim.call2(
        &JsValue::NULL,
        &JsValue::from_str("js"),
        &js_sys::Date::new_0().into(),
    );
    let _ = shim.call2(
        &JsValue::NULL,
        &JsValue::from_str("config"),
        &JsValue::from_str(id),
    );

    if let Some(doc) = w.document() {
        if let Ok(script) = doc.create_element("script") {
            script.set_attribute("async", "true").ok();
            script.set_attribute("src", &script_src(id)).ok();
            if let Some(head) = doc.head() {
                let _ = head.append_child(&script);
            }
        }
    }
}
