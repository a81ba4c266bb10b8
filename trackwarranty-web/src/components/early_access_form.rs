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

use trackwarranty_types::forms::validate_early_access;
use yew::prelude::*;

use crate::components::submit::{clear_control, control_value, use_delayed_submit, SubmitPhase};
use crate::context::{use_notify, Notice};

#[derive(Properties, PartialEq)]
pub struct EarlyAccessFormProps {
    /// Receives the email once the simulated signup completes.
    pub on_success: Callback<String>,
    #[prop_or(AttrValue::Static("signup-form"))]
    pub class: AttrValue,
    #[prop_or(AttrValue::Static("Get Early Access"))]
    pub label: AttrValue,
}

/// Beta signup. Nothing leaves the browser; the button walks through
/// "Joining..." and "You're In!" and the form resets a few seconds later.
#[function_component(EarlyAccessForm)]
pub fn early_access_form(props: &EarlyAccessFormProps) -> Html {
    let email_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submit = use_delayed_submit();
    let notify = use_notify();

    let onsubmit = {
        let email_ref = email_ref.clone();
        let error = error.clone();
        let submit = submit.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submit.is_busy() {
                return;
            }
            let email = control_value(&email_ref);
            if let Err(err) = validate_early_access(&email) {
                let message = err.to_string();
                notify.emit(Notice::error(message.clone()));
                error.set(Some(message));
                return;
            }
            error.set(None);

            let on_success = on_success.clone();
            let email_ref = email_ref.clone();
            submit.start_with_reset(
                move || on_success.emit(email),
                move || clear_control(&email_ref),
            );
        })
    };

    let phase = submit.phase();
    let button_text = match phase {
        SubmitPhase::Idle => props.label.to_string(),
        SubmitPhase::Sending => "Joining...".to_string(),
        SubmitPhase::Sent => "✅ You're In!".to_string(),
    };

    html! {
        <form class={props.class.clone()} {onsubmit} novalidate=true>
            <input
                ref={email_ref}
                type="email"
                name="email"
                placeholder="Enter your email"
                class={classes!("form-input", error.is_some().then_some("invalid"))}
            />
            <button
                type="submit"
                class={classes!("btn", "btn-primary", (phase == SubmitPhase::Sent).then_some("success"))}
                disabled={phase != SubmitPhase::Idle}
            >
                <span>{ button_text }</span>
            </button>
            if let Some(message) = (*error).clone() {
                <div class="form-error">{ message }</div>
            }
        </form>
    }
}
