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

//! Local event log standing in for a real analytics backend.
//!
//! Two logs live in local storage:
//!
//! - [`PRIMARY_LOG`]: every `track_event` call, never trimmed.
//! - [`FALLBACK_LOG`]: `gtag` events recorded while the hook is missing,
//!   trimmed to the last [`FALLBACK_CAPACITY`] entries.
//!
//! Nothing is aggregated, batched or retried.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::platform::Platform;
use crate::referral::{ReferralContext, ShareMethod};
use crate::storage::{
    load_json_lenient, save_json, KeyValueStore, StorageError, ANALYTICS_KEY, GA_FALLBACK_KEY,
};
use crate::SCHEMA_VERSION;

pub type Params = Map<String, Value>;

pub const FALLBACK_CAPACITY: usize = 50;

/// Key under which the site tag is merged into every `gtag` event.
pub const TAG_PARAM: &str = "custom_parameter_1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    #[serde(default)]
    pub schema_version: u32,
    pub event: String,
    /// Older fallback entries used `parameters`.
    #[serde(default, alias = "parameters")]
    pub properties: Params,
    #[serde(default)]
    pub timestamp: u64,
}

impl AnalyticsEvent {
    pub fn new(event: impl Into<String>, properties: Params, timestamp: u64) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            event: event.into(),
            properties,
            timestamp,
        }
    }
}

/// The optional global analytics function (`window.gtag`).
pub trait AnalyticsHook {
    fn send_event(&self, name: &str, params: &Params);
}

/// An ordered event log stored as a JSON array under one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLog {
    pub key: &'static str,
    /// Keep at most this many of the newest entries.
    pub capacity: Option<usize>,
}

pub const PRIMARY_LOG: EventLog = EventLog {
    key: ANALYTICS_KEY,
    capacity: None,
};

pub const FALLBACK_LOG: EventLog = EventLog {
    key: GA_FALLBACK_KEY,
    capacity: Some(FALLBACK_CAPACITY),
};

impl EventLog {
    pub fn read<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Vec<AnalyticsEvent>, StorageError> {
        Ok(load_json_lenient(store, self.key)?.unwrap_or_default())
    }

    pub fn append<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        event: AnalyticsEvent,
    ) -> Result<(), StorageError> {
        let mut events = self.read(store)?;
        events.push(event);
        if let Some(capacity) = self.capacity {
            if events.len() > capacity {
                events.drain(..events.len() - capacity);
            }
        }
        save_json(store, self.key, &events)
    }
}

/// Page details attached to locally logged events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageEnv {
    pub url: String,
    pub path: String,
    pub user_agent: String,
    pub referrer: String,
}

impl PageEnv {
    pub fn annotate(&self, mut props: Params, now_ms: u64) -> Params {
        props.insert("timestamp".into(), json!(now_ms));
        props.insert("page".into(), json!(self.path));
        props.insert("url".into(), json!(self.url));
        props.insert("user_agent".into(), json!(self.user_agent));
        props.insert("referrer".into(), json!(self.referrer));
        props
    }
}

/// Append `name` to the primary log.
pub fn track_event<S: KeyValueStore + ?Sized>(
    store: &S,
    name: &str,
    props: Params,
    now_ms: u64,
) -> Result<AnalyticsEvent, StorageError> {
    let event = AnalyticsEvent::new(name, props, now_ms);
    PRIMARY_LOG.append(store, event.clone())?;
    log::debug!("Event tracked: {name}");
    Ok(event)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Hook,
    Fallback,
}

/// Hand `name` to the analytics hook with the site tag merged in, or record
/// it in the capped fallback log when there is no hook.
pub fn track_ga_event<S: KeyValueStore + ?Sized>(
    store: &S,
    hook: Option<&dyn AnalyticsHook>,
    tag: &str,
    name: &str,
    params: Params,
    now_ms: u64,
) -> Result<Delivery, StorageError> {
    match hook {
        Some(hook) => {
            let mut tagged = Params::new();
            tagged.insert(TAG_PARAM.into(), json!(tag));
            tagged.extend(params);
            hook.send_event(name, &tagged);
            log::debug!("GA event: {name}");
            Ok(Delivery::Hook)
        }
        None => {
            FALLBACK_LOG.append(store, AnalyticsEvent::new(name, params, now_ms))?;
            log::debug!("GA event (fallback): {name}");
            Ok(Delivery::Fallback)
        }
    }
}

fn object(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => Params::new(),
    }
}

pub fn invite_page_view(ctx: &ReferralContext, platform: Platform) -> Params {
    object(json!({
        "invite_code": ctx.invite_code,
        "referrer_name": ctx.referrer_name,
        "platform": platform,
        "utm_source": ctx.utm.source,
    }))
}

pub fn page_hidden(ctx: &ReferralContext, platform: Platform) -> Params {
    object(json!({
        "invite_code": ctx.invite_code,
        "platform": platform,
    }))
}

pub fn download_clicked(ctx: &ReferralContext, platform: Platform) -> Params {
    object(json!({
        "invite_code": ctx.invite_code,
        "platform": platform,
        "referrer_name": ctx.referrer_name,
        "utm_source": ctx.utm.source,
    }))
}

pub fn landing_page_view(ctx: &ReferralContext) -> Params {
    object(json!({
        "invite_code": ctx.invite_code,
        "referrer_name": ctx.referrer_name,
        "utm_source": ctx.utm.source,
    }))
}

pub fn referral_shared(method: ShareMethod, invite_code: &str, referrer_name: Option<&str>) -> Params {
    object(json!({
        "method": method.as_str(),
        "invite_code": invite_code,
        "referrer_name": referrer_name,
    }))
}

/// The `download_click` event followed by its `generate_lead` conversion.
pub fn download_click_ga(
    platform: Platform,
    invite_code: Option<&str>,
    section: &str,
) -> [(&'static str, Params); 2] {
    let status = if platform == Platform::Ios {
        "coming_soon"
    } else {
        "available"
    };
    [
        (
            "download_click",
            object(json!({
                "platform": platform,
                "invite_code": invite_code.unwrap_or_default(),
                "click_section": section,
                "app_status": status,
            })),
        ),
        (
            "generate_lead",
            object(json!({
                "currency": "USD",
                "value": 0,
                "lead_type": "app_download_intent",
                "platform": platform,
            })),
        ),
    ]
}

pub fn ios_coming_soon() -> Params {
    object(json!({ "interaction": "coming_soon_message_shown" }))
}

pub fn ga_page_view(title: &str, location: &str) -> Params {
    object(json!({
        "page_title": title,
        "page_location": location,
        "content_group1": "Landing Page",
    }))
}

/// `referral_<action>` parameters; absent values are sent as empty strings.
pub fn referral_ga(ctx: &ReferralContext) -> Params {
    let or_empty = |v: &Option<String>| v.clone().unwrap_or_default();
    object(json!({
        "invite_code": or_empty(&ctx.invite_code),
        "referrer_name": or_empty(&ctx.referrer_name),
        "utm_source": or_empty(&ctx.utm.source),
        "utm_medium": or_empty(&ctx.utm.medium),
        "utm_campaign": or_empty(&ctx.utm.campaign),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingHook {
        calls: RefCell<Vec<(String, Params)>>,
    }

    impl AnalyticsHook for RecordingHook {
        fn send_event(&self, name: &str, params: &Params) {
            self.calls
                .borrow_mut()
                .push((name.to_string(), params.clone()));
        }
    }

    #[test]
    fn primary_log_is_unbounded_and_ordered() {
        let store = MemoryStore::new();
        for i in 0..120u64 {
            track_event(&store, &format!("e{i}"), Params::new(), i).unwrap();
        }
        let events = PRIMARY_LOG.read(&store).unwrap();
        assert_eq!(events.len(), 120);
        assert_eq!(events[0].event, "e0");
        assert_eq!(events[119].event, "e119");
        assert_eq!(events[119].timestamp, 119);
    }

    #[test]
    fn fallback_log_keeps_last_fifty() {
        let store = MemoryStore::new();
        for i in 0..60u64 {
            let delivery =
                track_ga_event(&store, None, "site", &format!("g{i}"), Params::new(), i).unwrap();
            assert_eq!(delivery, Delivery::Fallback);
        }
        let events = FALLBACK_LOG.read(&store).unwrap();
        assert_eq!(events.len(), FALLBACK_CAPACITY);
        assert_eq!(events.first().unwrap().event, "g10");
        assert_eq!(events.last().unwrap().event, "g59");
    }

    #[test]
    fn hook_receives_tag_and_nothing_is_stored() {
        let store = MemoryStore::new();
        let hook = RecordingHook::default();
        let delivery = track_ga_event(
            &store,
            Some(&hook as &dyn AnalyticsHook),
            "trackwarranty_website",
            "scroll",
            object(json!({ "scroll_depth": 50 })),
            1,
        )
        .unwrap();

        assert_eq!(delivery, Delivery::Hook);
        assert!(store.is_empty());
        let calls = hook.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "scroll");
        assert_eq!(calls[0].1[TAG_PARAM], json!("trackwarranty_website"));
        assert_eq!(calls[0].1["scroll_depth"], json!(50));
    }

    #[test]
    fn legacy_entries_are_readable() {
        let store = MemoryStore::new();
        store
            .set_item(
                GA_FALLBACK_KEY,
                r#"[{"event":"click","parameters":{"click_text":"Go"},"timestamp":9}]"#,
            )
            .unwrap();
        store
            .set_item(
                ANALYTICS_KEY,
                r#"[{"event":"download_click","platform":"android","timestamp":3}]"#,
            )
            .unwrap();

        let fallback = FALLBACK_LOG.read(&store).unwrap();
        assert_eq!(fallback[0].properties["click_text"], json!("Go"));
        assert_eq!(fallback[0].schema_version, 0);

        let primary = PRIMARY_LOG.read(&store).unwrap();
        assert_eq!(primary[0].event, "download_click");
        assert_eq!(primary[0].timestamp, 3);
    }

    #[test]
    fn corrupt_log_starts_over() {
        let store = MemoryStore::new();
        store.set_item(ANALYTICS_KEY, "{oops").unwrap();
        track_event(&store, "page_view", Params::new(), 1).unwrap();
        assert_eq!(PRIMARY_LOG.read(&store).unwrap().len(), 1);
    }

    #[test]
    fn page_env_annotates_properties() {
        let env = PageEnv {
            url: "https://trackwarranty.app/invite/AB".into(),
            path: "/invite/AB".into(),
            user_agent: "UA".into(),
            referrer: String::new(),
        };
        let props = env.annotate(object(json!({ "platform": "ios" })), 77);
        assert_eq!(props["timestamp"], json!(77));
        assert_eq!(props["page"], json!("/invite/AB"));
        assert_eq!(props["platform"], json!("ios"));
    }

    #[test]
    fn download_click_pairs_with_lead() {
        let [(first, click), (second, lead)] =
            download_click_ga(Platform::Android, None, "download");
        assert_eq!(first, "download_click");
        assert_eq!(click["invite_code"], json!(""));
        assert_eq!(click["app_status"], json!("available"));
        assert_eq!(second, "generate_lead");
        assert_eq!(lead["lead_type"], json!("app_download_intent"));
    }

    #[test]
    fn invite_page_view_serializes_nulls_for_missing_fields() {
        let ctx = ReferralContext {
            invite_code: Some("AB".into()),
            ..Default::default()
        };
        let props = invite_page_view(&ctx, Platform::Desktop);
        assert_eq!(props["invite_code"], json!("AB"));
        assert_eq!(props["referrer_name"], Value::Null);
        assert_eq!(props["platform"], json!("desktop"));
    }
}
