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

//! Page-side front of the event log: `track_event` for the local log and
//! `track_ga` for the gtag hook with its capped fallback.

use std::rc::Rc;

use trackwarranty_types::analytics::{self, Params};
use trackwarranty_types::{AnalyticsHook, KeyValueStore, MemoryStore};

use crate::browser::{self, GtagHook, LocalStore};

pub struct Tracker {
    store: Rc<dyn KeyValueStore>,
    ga_tag: String,
}

impl Tracker {
    /// Backed by `localStorage`, or by memory for this page view when
    /// storage is off.
    pub fn new(ga_tag: &str) -> Self {
        let store: Rc<dyn KeyValueStore> = match LocalStore::open() {
            Ok(store) => Rc::new(store),
            Err(e) => {
                log::warn!("Event log kept in memory: {e}");
                Rc::new(MemoryStore::new())
            }
        };
        Self::with_store(store, ga_tag)
    }

    pub fn with_store(store: Rc<dyn KeyValueStore>, ga_tag: &str) -> Self {
        Self {
            store,
            ga_tag: ga_tag.to_string(),
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn track_event(&self, name: &str, props: Params) {
        let now = browser::now_ms();
        let props = browser::page_env().annotate(props, now);
        if let Err(e) = analytics::track_event(self.store(), name, props, now) {
            log::warn!("Failed to record {name}: {e}");
        }
    }

    pub fn track_ga(&self, name: &str, params: Params) {
        let hook = GtagHook::detect();
        let result = analytics::track_ga_event(
            self.store(),
            hook.as_ref().map(|h| h as &dyn AnalyticsHook),
            &self.ga_tag,
            name,
            params,
            browser::now_ms(),
        );
        if let Err(e) = result {
            log::warn!("Failed to record GA event {name}: {e}");
        }
    }
}
