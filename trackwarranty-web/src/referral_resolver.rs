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

//! Invite-page referral handling: resolve the context, pick the store link
//! for this device and try to hand the visitor to the installed app.

use gloo_timers::callback::Timeout;
use trackwarranty_types::platform::{download_options, DownloadOption};
use trackwarranty_types::referral::{
    self, build_deep_link, build_store_url, CapturePolicy, DEFAULT_INVITE_CODE,
};
use trackwarranty_types::{KeyValueStore, Platform, ReferralContext, SiteConfig};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::browser;
use crate::constants::{DEEP_LINK_DIAGNOSTIC_MS, DEEP_LINK_IFRAME_MS};

pub struct ReferralResolver {
    config: SiteConfig,
    platform: Platform,
    context: ReferralContext,
    deep_link: Option<DeepLinkAttempt>,
}

impl ReferralResolver {
    /// Resolve against the current location, `navigator` and `store`.
    pub fn from_window(config: SiteConfig, store: &dyn KeyValueStore) -> Self {
        Self::new(
            config,
            &browser::current_href(),
            store,
            browser::current_platform(),
            browser::now_ms(),
        )
    }

    pub fn new(
        config: SiteConfig,
        href: &str,
        store: &dyn KeyValueStore,
        platform: Platform,
        now_ms: u64,
    ) -> Self {
        let context = referral::resolve(href, store, now_ms, CapturePolicy::Invite)
            .unwrap_or_else(|e| {
                log::warn!("Referral context not persisted: {e}");
                let mut ctx = ReferralContext::parse(href);
                ctx.invite_code
                    .get_or_insert_with(|| DEFAULT_INVITE_CODE.to_string());
                ctx
            });
        log::info!("Invite for {platform}: {context:?}");
        Self {
            config,
            platform,
            context,
            deep_link: None,
        }
    }

    pub fn context(&self) -> &ReferralContext {
        &self.context
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn store_url(&self) -> String {
        build_store_url(self.platform, &self.context, &self.config)
    }

    pub fn download_options(&self) -> Vec<DownloadOption> {
        download_options(self.platform, &self.context, &self.config)
    }

    pub fn deep_link(&self) -> String {
        build_deep_link(&self.context, &self.config.deep_link_scheme)
    }

    /// Point a hidden iframe at the app's custom scheme. Nothing tells us
    /// whether the app opened; the later timer only logs that we assume it
    /// did not. Desktop visitors are skipped.
    pub fn attempt_deep_link(&mut self) {
        if !self.platform.is_mobile() {
            return;
        }
        let link = self.deep_link();
        log::info!("Attempting deep link {link}");
        match DeepLinkAttempt::start(&link) {
            Ok(attempt) => self.deep_link = Some(attempt),
            Err(e) => log::warn!("Deep link attempt failed: {e:?}"),
        }
    }

    pub fn deep_link_attempted(&self) -> bool {
        self.deep_link.is_some()
    }

    /// Cancel outstanding timers and remove the iframe.
    pub fn dispose(&mut self) {
        self.deep_link = None;
    }
}

struct DeepLinkAttempt {
    iframe: Element,
    _remove: Timeout,
    _diagnostic: Timeout,
}

impl DeepLinkAttempt {
    fn start(link: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;

        let iframe = document.create_element("iframe")?;
        iframe.set_attribute("style", "display: none")?;
        iframe.set_attribute("src", link)?;
        iframe.set_attribute("class", "deep-link-frame")?;
        body.append_child(&iframe)?;

        let remove = {
            let iframe = iframe.clone();
            Timeout::new(DEEP_LINK_IFRAME_MS, move || iframe.remove())
        };
        let diagnostic = Timeout::new(DEEP_LINK_DIAGNOSTIC_MS, || {
            log::info!("App not detected, visitor will use store links");
        });

        Ok(Self {
            iframe,
            _remove: remove,
            _diagnostic: diagnostic,
        })
    }
}

impl Drop for DeepLinkAttempt {
    fn drop(&mut self) {
        self.iframe.remove();
    }
}
