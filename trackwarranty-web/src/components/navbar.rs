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

use gloo::events::EventListener;
use trackwarranty_types::engagement::{NavbarScroll, NavbarStyle};
use yew::prelude::*;

use crate::browser::scroll_to_section;

const LINKS: [(&str, &str); 4] = [
    ("problem", "Problem"),
    ("solution", "Solution"),
    ("solutions", "For Business"),
    ("download", "Download"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_early_access: Callback<()>,
}

/// Fixed top bar. Turns solid once the page scrolls and tucks away while
/// scrolling down further.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let style = use_state(NavbarStyle::default);

    {
        let style = style.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                let mut scroll = NavbarScroll::default();
                let mut last = NavbarStyle::default();
                let target = window.clone();
                EventListener::new(&target, "scroll", move |_| {
                    let top = window.page_y_offset().unwrap_or_default();
                    let next = scroll.update(top);
                    if next != last {
                        last = next;
                        style.set(next);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_early_access = {
        let cb = props.on_early_access.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let class = classes!(
        "navbar",
        style.solid.then_some("scrolled"),
        style.hidden.then_some("nav-hidden")
    );
    html! {
        <nav {class}>
            <div class="nav-container">
                <a class="nav-logo" href="#" onclick={Callback::from(|e: MouseEvent| {
                    e.prevent_default();
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                })}>
                    { "🛡️ TrackWarranty" }
                </a>
                <div class="nav-links">
                    { for LINKS.iter().map(|&(id, label)| html! {
                        <a
                            class="nav-link"
                            href={format!("#{id}")}
                            onclick={Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                scroll_to_section(id);
                            })}
                        >
                            { label }
                        </a>
                    }) }
                </div>
                <button class="btn btn-primary nav-cta" onclick={on_early_access}>
                    { "Get Early Access" }
                </button>
            </div>
        </nav>
    }
}
