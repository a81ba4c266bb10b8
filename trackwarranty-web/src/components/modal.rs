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

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::browser::lock_body_scroll;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Dialog that locks page scrolling while open.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    use_effect_with(props.open, |open| {
        lock_body_scroll(*open);
        let was_open = *open;
        move || {
            if was_open {
                lock_body_scroll(false);
            }
        }
    });

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let class = classes!("modal", (!props.open).then_some("hidden"));
    html! {
        <div id={props.id.clone()} {class}>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{ props.title.clone() }</h3>
                    <button class="modal-close" onclick={close}>{ "×" }</button>
                </div>
                <div class="modal-body">
                    { props.children.clone() }
                </div>
            </div>
        </div>
    }
}

/// Emit `on_done` once after `delay_ms`; unmounting first cancels it.
#[hook]
pub fn use_auto_dismiss(delay_ms: u32, on_done: Callback<()>) {
    use_effect_with((), move |_| {
        let timeout = Timeout::new(delay_ms, move || on_done.emit(()));
        move || drop(timeout)
    });
}

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub email: AttrValue,
    pub on_close: Callback<()>,
}

/// Early-access confirmation. Closes itself after `SUCCESS_MODAL_MS`.
#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    use_auto_dismiss(crate::constants::SUCCESS_MODAL_MS, props.on_close.clone());
    use_effect_with((), |_| {
        lock_body_scroll(true);
        || lock_body_scroll(false)
    });

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal success-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{ "Welcome to TrackWarranty Beta! 🎉" }</h3>
                    <button class="modal-close" onclick={close.clone()}>{ "×" }</button>
                </div>
                <div class="modal-body">
                    <div class="success-icon">{ "🛡️" }</div>
                    <h4>{ "You're officially in!" }</h4>
                    <p>{ "Confirmation sent to " }<strong class="success-email">{ props.email.clone() }</strong></p>
                    <div class="success-next-steps">
                        <h5>{ "What happens next?" }</h5>
                        <ul>
                            <li>{ "📧 Launch updates via email" }</li>
                            <li>{ "📱 First access when apps go live" }</li>
                            <li>{ "💬 Beta community invitation" }</li>
                            <li>{ "🎁 Free lifetime account (worth ₹999)" }</li>
                        </ul>
                    </div>
                    <button class="btn btn-primary" onclick={close}>{ "Awesome, Thanks!" }</button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimedOverlayProps {
    pub class: AttrValue,
    pub duration_ms: u32,
    pub on_done: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Centered message box that removes itself after `duration_ms`.
#[function_component(TimedOverlay)]
pub fn timed_overlay(props: &TimedOverlayProps) -> Html {
    use_auto_dismiss(props.duration_ms, props.on_done.clone());
    html! {
        <div class={classes!("timed-overlay", props.class.to_string())}>
            { props.children.clone() }
        </div>
    }
}
