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

//! Owned `IntersectionObserver`. Dropping it disconnects the observer and
//! frees the callback.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Reveal-on-scroll cards.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Stat counters and section views.
pub const HALF_VISIBLE: f64 = 0.5;

pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// `on_entry` runs for every entry the browser reports, visible or not.
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut on_entry: F) -> Result<Self, JsValue>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_entry(&entry, &observer);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Run `on_visible` once, the first time `element` crosses `threshold`.
pub fn observe_once<F>(
    element: &Element,
    threshold: f64,
    root_margin: Option<&str>,
    on_visible: F,
) -> Option<ViewportObserver>
where
    F: FnOnce() + 'static,
{
    let mut on_visible = Some(on_visible);
    let observer = ViewportObserver::new(threshold, root_margin, move |entry, observer| {
        if entry.is_intersecting() {
            observer.unobserve(&entry.target());
            if let Some(f) = on_visible.take() {
                f();
            }
        }
    });
    match observer {
        Ok(observer) => {
            observer.observe(element);
            Some(observer)
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {e:?}");
            None
        }
    }
}
