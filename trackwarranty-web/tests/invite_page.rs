// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the invite page.
//
// Each test points the address bar at an invite URL with
// `history.replaceState`, renders the page and restores the original URL
// afterwards. The headless runner is a desktop browser, so the deep-link
// attempt is always skipped here.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{
    cleanup, clear_site_storage, click_link_in_place, create_mount_point, inject_app_config,
    last_logged, local_storage, logged_events, remove_app_config, replace_url, stored_json,
    text_of,
};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use trackwarranty_web::pages::invite::InvitePage;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn play_link(mount: &web_sys::Element) -> String {
    mount
        .query_selector("#downloadButtons a.download-btn-active")
        .unwrap()
        .expect("Play Store badge should be a link")
        .get_attribute("href")
        .unwrap()
}

#[wasm_bindgen_test]
async fn defaults_to_welcome_code_on_desktop() {
    clear_site_storage();
    inject_app_config();
    let previous = replace_url("/invite");

    let mount = create_mount_point();
    yew::Renderer::<InvitePage>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert_eq!(text_of(&mount, "#inviteCode"), "WELCOME");
    assert!(mount.query_selector("#referrerInfo").unwrap().is_none());
    assert_eq!(
        text_of(&mount, "#detectionStatus"),
        "Desktop detected - Showing all download options"
    );
    assert!(mount.query_selector("#loadingSpinner").unwrap().is_some());
    assert!(
        mount.query_selector("iframe.deep-link-frame").unwrap().is_none(),
        "desktop visitors should not get a deep-link attempt"
    );

    sleep(Duration::from_millis(1100)).await;
    assert!(mount.query_selector("#loadingSpinner").unwrap().is_none());
    let badges = mount.query_selector_all("#downloadButtons .store-badge").unwrap();
    assert_eq!(badges.length(), 2, "desktop sees both stores");
    assert!(mount
        .query_selector("#downloadButtons .download-btn-inactive")
        .unwrap()
        .is_some());

    let record = stored_json("trackwarranty_referral").expect("referral persisted");
    assert_eq!(record["inviteCode"], "WELCOME");
    assert!(logged_events().contains(&"invite_page_view".to_string()));

    cleanup(&mount);
    replace_url(&previous);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn path_code_and_referrer_reach_the_store_link() {
    clear_site_storage();
    inject_app_config();
    let previous = replace_url("/invite/ABC123?code=ZZZ&ref=Sam&utm_source=whatsapp");

    let mount = create_mount_point();
    yew::Renderer::<InvitePage>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert_eq!(text_of(&mount, "#inviteCode"), "ABC123");
    assert_eq!(text_of(&mount, "#referrerName"), "Sam invited you");
    assert_eq!(text_of(&mount, "#referrerAvatar"), "S");

    sleep(Duration::from_millis(1100)).await;
    let href = play_link(&mount);
    assert!(href.starts_with("https://play.google.com/store/apps/details?id=app.trackwarranty&referrer="));
    assert!(href.contains("invite_code%3DABC123"), "got {href}");
    assert!(href.contains("referrer_name%3DSam"), "got {href}");
    assert!(href.contains("utm_source%3Dwhatsapp"), "got {href}");

    cleanup(&mount);
    replace_url(&previous);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn play_badge_click_is_logged_as_android_on_desktop() {
    clear_site_storage();
    inject_app_config();
    let previous = replace_url("/invite/PLAY7?ref=Sam");

    let mount = create_mount_point();
    yew::Renderer::<InvitePage>::with_root(mount.clone()).render();
    sleep(Duration::from_millis(1100)).await;

    click_link_in_place(&mount, "#downloadButtons a.download-btn-active");
    sleep(Duration::ZERO).await;

    let props = last_logged("download_clicked").expect("download_clicked logged");
    assert_eq!(props["platform"], "android");
    assert_eq!(props["invite_code"], "PLAY7");
    assert_eq!(props["referrer_name"], "Sam");

    cleanup(&mount);
    replace_url(&previous);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn stored_referrer_fills_gaps_in_the_url() {
    clear_site_storage();
    inject_app_config();
    local_storage()
        .set_item(
            "trackwarranty_referral",
            r#"{"schemaVersion":1,"inviteCode":"OLD1","referrerName":"Ria","utmParams":{"source":"email"},"timestamp":1,"landingUrl":null}"#,
        )
        .unwrap();
    let previous = replace_url("/invite/NEW2");

    let mount = create_mount_point();
    yew::Renderer::<InvitePage>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert_eq!(text_of(&mount, "#inviteCode"), "NEW2");
    assert_eq!(text_of(&mount, "#referrerName"), "Ria invited you");

    let record = stored_json("trackwarranty_referral").unwrap();
    assert_eq!(record["inviteCode"], "NEW2");
    assert_eq!(record["referrerName"], "Ria");
    assert_eq!(record["utmParams"]["source"], "email");

    cleanup(&mount);
    replace_url(&previous);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn invite_html_path_code_is_cleaned_up() {
    clear_site_storage();
    let previous = replace_url("/invite.html?path_code=XYZ9&ref=Sam");

    let mount = create_mount_point();
    yew::Renderer::<InvitePage>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let location = gloo_utils::window().location();
    assert_eq!(location.pathname().unwrap(), "/invite.html");
    assert_eq!(location.search().unwrap(), "?ref=Sam&code=XYZ9");
    assert_eq!(text_of(&mount, "#inviteCode"), "XYZ9");

    cleanup(&mount);
    replace_url(&previous);
}

#[wasm_bindgen_test]
async fn visible_tab_does_not_log_page_hidden() {
    clear_site_storage();
    let previous = replace_url("/invite/HID3");

    let mount = create_mount_point();
    yew::Renderer::<InvitePage>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    // The runner's tab stays visible, so the event itself is a no-op.
    let event = web_sys::Event::new("visibilitychange").unwrap();
    gloo_utils::document().dispatch_event(&event).unwrap();
    sleep(Duration::ZERO).await;

    let events = logged_events();
    assert_eq!(
        events.iter().filter(|e| *e == "invite_page_view").count(),
        1
    );
    assert!(!events.contains(&"page_hidden".to_string()));

    cleanup(&mount);
    replace_url(&previous);
}
