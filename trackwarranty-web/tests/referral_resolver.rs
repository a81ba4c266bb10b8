// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the invite resolver's deep-link hand-off. The
// resolver is built directly with a mobile platform, since the headless
// runner always reports a desktop browser.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use std::time::Duration;

use trackwarranty_types::{MemoryStore, Platform, SiteConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use trackwarranty_web::referral_resolver::ReferralResolver;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const INVITE_URL: &str = "https://trackwarranty.app/invite/AB12?ref=Sam";

fn resolver(platform: Platform) -> ReferralResolver {
    ReferralResolver::new(SiteConfig::default(), INVITE_URL, &MemoryStore::new(), platform, 1)
}

fn deep_link_frames() -> Vec<web_sys::Element> {
    let frames = gloo_utils::document()
        .query_selector_all("iframe.deep-link-frame")
        .unwrap();
    (0..frames.length())
        .filter_map(|i| frames.item(i))
        .map(|node| node.unchecked_into::<web_sys::Element>())
        .collect()
}

#[wasm_bindgen_test]
async fn android_visit_opens_the_app_scheme_in_a_hidden_frame() {
    let mut resolver = resolver(Platform::Android);
    assert!(resolver
        .store_url()
        .starts_with("https://play.google.com/store/apps/details?id=app.trackwarranty&referrer="));

    resolver.attempt_deep_link();
    assert!(resolver.deep_link_attempted());

    let frames = deep_link_frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(
        frames[0].get_attribute("src").as_deref(),
        Some("trackwarranty://invite?code=AB12&ref=Sam")
    );
    assert_eq!(frames[0].get_attribute("style").as_deref(), Some("display: none"));

    sleep(Duration::from_millis(1100)).await;
    assert!(deep_link_frames().is_empty(), "frame removed after a second");

    resolver.dispose();
}

#[wasm_bindgen_test]
async fn dispose_removes_the_frame_early() {
    let mut resolver = resolver(Platform::Ios);
    assert!(resolver
        .store_url()
        .starts_with("https://apps.apple.com/app/trackwarranty?code=AB12&ref=Sam"));

    resolver.attempt_deep_link();
    assert_eq!(deep_link_frames().len(), 1);

    resolver.dispose();
    assert!(!resolver.deep_link_attempted());
    assert!(deep_link_frames().is_empty());
}

#[wasm_bindgen_test]
async fn desktop_never_attempts_the_app() {
    let mut resolver = resolver(Platform::Desktop);
    resolver.attempt_deep_link();

    assert!(!resolver.deep_link_attempted());
    assert!(deep_link_frames().is_empty());
}
