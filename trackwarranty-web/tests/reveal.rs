// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for reveal-on-scroll cards and the one-shot viewport
// observer behind them.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use support::{cleanup, create_mount_point, has_class};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use trackwarranty_web::components::reveal::Reveal;
use trackwarranty_web::observers::observe_once;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Wrapper)]
fn wrapper() -> Html {
    html! {
        <Reveal class="story-card">
            <h3>{ "The bill that faded" }</h3>
        </Reveal>
    }
}

#[wasm_bindgen_test]
async fn card_fades_in_once_visible() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();

    sleep(Duration::from_millis(300)).await;
    assert!(has_class(&mount, ".story-card", "fade-in-up"));

    cleanup(&mount);
}

fn set_display(el: &web_sys::Element, value: &str) {
    el.dyn_ref::<web_sys::HtmlElement>()
        .unwrap()
        .style()
        .set_property("display", value)
        .unwrap();
}

#[wasm_bindgen_test]
async fn observer_fires_at_most_once() {
    let mount = create_mount_point();
    let target = gloo_utils::document().create_element("div").unwrap();
    target.set_text_content(Some("watched"));
    mount.append_child(&target).unwrap();

    let hits = Rc::new(Cell::new(0));
    let observer = {
        let hits = hits.clone();
        observe_once(&target, 0.1, None, move || hits.set(hits.get() + 1))
    }
    .expect("IntersectionObserver available");

    sleep(Duration::from_millis(200)).await;
    assert_eq!(hits.get(), 1);

    // Leave and re-enter the viewport.
    set_display(&target, "none");
    sleep(Duration::from_millis(200)).await;
    set_display(&target, "block");
    sleep(Duration::from_millis(200)).await;
    assert_eq!(hits.get(), 1);

    drop(observer);
    cleanup(&mount);
}
