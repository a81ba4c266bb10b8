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

//! Shared plumbing for the form stubs: the simulated round trip and reading
//! control values at submit time.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use trackwarranty_types::forms::{FieldError, RESET_DELAY_MS, SUBMIT_DELAY_MS};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
    Sent,
}

#[derive(Default)]
struct SubmitTimers {
    sent: Option<Timeout>,
    reset: Option<Timeout>,
}

/// Handle returned by [`use_delayed_submit`].
#[derive(Clone)]
pub struct DelayedSubmit {
    phase: UseStateHandle<SubmitPhase>,
    timers: Rc<RefCell<SubmitTimers>>,
}

#[hook]
pub fn use_delayed_submit() -> DelayedSubmit {
    let phase = use_state(|| SubmitPhase::Idle);
    let timers = use_mut_ref(SubmitTimers::default);
    {
        let timers = timers.clone();
        use_effect_with((), move |_| {
            move || {
                let mut timers = timers.borrow_mut();
                timers.sent.take();
                timers.reset.take();
            }
        });
    }
    DelayedSubmit { phase, timers }
}

impl DelayedSubmit {
    pub fn phase(&self) -> SubmitPhase {
        *self.phase
    }

    pub fn is_busy(&self) -> bool {
        *self.phase != SubmitPhase::Idle
    }

    /// `Sending` now, `Sent` after [`SUBMIT_DELAY_MS`], at which point
    /// `on_sent` runs.
    pub fn start(&self, on_sent: impl FnOnce() + 'static) {
        self.phase.set(SubmitPhase::Sending);
        let phase = self.phase.clone();
        let timeout = Timeout::new(SUBMIT_DELAY_MS, move || {
            phase.set(SubmitPhase::Sent);
            on_sent();
        });
        self.timers.borrow_mut().sent = Some(timeout);
    }

    /// Like [`start`](Self::start), then back to `Idle` after
    /// [`RESET_DELAY_MS`] with `on_reset`.
    pub fn start_with_reset(
        &self,
        on_sent: impl FnOnce() + 'static,
        on_reset: impl FnOnce() + 'static,
    ) {
        let phase = self.phase.clone();
        let timers = self.timers.clone();
        self.start(move || {
            on_sent();
            let timeout = Timeout::new(RESET_DELAY_MS, move || {
                phase.set(SubmitPhase::Idle);
                on_reset();
            });
            timers.borrow_mut().reset = Some(timeout);
        });
    }
}

/// Current value of an input, select or textarea; empty when unmounted.
pub fn control_value(node: &NodeRef) -> String {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = node.cast::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = node.cast::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn clear_control(node: &NodeRef) {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.set_value("");
    } else if let Some(select) = node.cast::<HtmlSelectElement>() {
        select.set_value("");
    } else if let Some(area) = node.cast::<HtmlTextAreaElement>() {
        area.set_value("");
    }
}

/// Message for `field`, if it failed validation.
pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a FieldError> {
    errors.iter().find(|e| e.name == field)
}

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub field: AttrValue,
    pub errors: Rc<Vec<FieldError>>,
}

/// `<div id="{field}Error">`, shown only while the field is invalid.
#[function_component(FieldErrorText)]
pub fn field_error_text(props: &FieldErrorProps) -> Html {
    let error = error_for(&props.errors, &props.field);
    html! {
        <div
            id={format!("{}Error", props.field)}
            class={classes!("field-error", error.is_some().then_some("show"))}
        >
            { error.map(|e| e.error.to_string()).unwrap_or_default() }
        </div>
    }
}
