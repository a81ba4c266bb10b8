// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the solution-section demo carousel.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, click, create_mount_point, has_class};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use trackwarranty_web::components::demo_carousel::DemoCarouselView;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn active_step(mount: &web_sys::Element) -> String {
    mount
        .query_selector(".demo-step.active")
        .unwrap()
        .expect("one step should be active")
        .get_attribute("data-step")
        .unwrap()
}

#[wasm_bindgen_test]
async fn starts_on_first_step_with_other_screens_hidden() {
    let mount = create_mount_point();
    yew::Renderer::<DemoCarouselView>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert_eq!(active_step(&mount), "1");
    assert!(!has_class(&mount, "[data-screen=\"1\"]", "hidden"));
    for step in 2..=4 {
        assert!(
            has_class(&mount, &format!("[data-screen=\"{step}\"]"), "hidden"),
            "screen {step} should be hidden"
        );
    }

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn advances_on_its_own() {
    let mount = create_mount_point();
    yew::Renderer::<DemoCarouselView>::with_root(mount.clone()).render();
    sleep(Duration::from_millis(4100)).await;

    assert_eq!(active_step(&mount), "2");
    assert!(!has_class(&mount, "[data-screen=\"2\"]", "hidden"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn clicking_a_step_selects_it() {
    let mount = create_mount_point();
    yew::Renderer::<DemoCarouselView>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, "[data-step=\"4\"]");
    sleep(Duration::ZERO).await;

    assert_eq!(active_step(&mount), "4");
    assert_eq!(
        mount.query_selector_all(".demo-step.active").unwrap().length(),
        1
    );
    assert!(!has_class(&mount, "[data-screen=\"4\"]", "hidden"));

    cleanup(&mount);
}
