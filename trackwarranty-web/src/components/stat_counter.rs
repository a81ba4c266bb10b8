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

//! Headline number that counts up once it is half visible.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use trackwarranty_types::counter::frame_interval_ms;
use trackwarranty_types::CounterAnimation;
use web_sys::Element;
use yew::prelude::*;

use crate::observers::{observe_once, HALF_VISIBLE};

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Final text, e.g. `2.5Cr+`.
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("stat-number"))]
    pub class: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let shown = use_state(|| props.text.to_string());
    let ticker: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);

    {
        let node = node.clone();
        let shown = shown.clone();
        let ticker = ticker.clone();
        use_effect_with(props.text.clone(), move |text| {
            shown.set(text.to_string());
            let animation = CounterAnimation::from_text(text);
            let observer = match (animation, node.cast::<Element>()) {
                (Some(animation), Some(el)) => {
                    let ticker = ticker.clone();
                    observe_once(&el, HALF_VISIBLE, None, move || {
                        start(animation, shown, ticker)
                    })
                }
                _ => None,
            };
            move || {
                drop(observer);
                ticker.borrow_mut().take();
            }
        });
    }

    html! {
        <span ref={node} class={props.class.clone()}>{ (*shown).clone() }</span>
    }
}

fn start(
    animation: CounterAnimation,
    shown: UseStateHandle<String>,
    ticker: Rc<RefCell<Option<Interval>>>,
) {
    if !animation.needs_ticks() {
        return;
    }
    let mut step = 0;
    let handle = ticker.clone();
    let interval = Interval::new(frame_interval_ms(), move || {
        if animation.is_done(step) {
            return;
        }
        step += 1;
        shown.set(animation.frame(step));
        if animation.is_done(step) {
            // The interval owns this closure; drop it after the callback returns.
            let handle = handle.clone();
            yew::platform::spawn_local(async move {
                handle.borrow_mut().take();
            });
        }
    });
    *ticker.borrow_mut() = Some(interval);
}
