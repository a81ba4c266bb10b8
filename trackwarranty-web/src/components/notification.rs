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

//! Toast stack. Provides [`NotifyCtx`] to its children; each toast removes
//! itself after [`TOAST_MS`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::constants::TOAST_MS;
use crate::context::{Notice, NoticeKind, NotifyCtx};

#[derive(Default, PartialEq)]
struct Toasts {
    items: Vec<(u32, Notice)>,
}

enum ToastAction {
    Show(u32, Notice),
    Expire(u32),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Show(id, notice) => items.push((id, notice)),
            ToastAction::Expire(id) => items.retain(|(toast_id, _)| *toast_id != id),
        }
        Rc::new(Toasts { items })
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(NotificationHost)]
pub fn notification_host(props: &NotificationHostProps) -> Html {
    let toasts = use_reducer(Toasts::default);
    let next_id = use_mut_ref(|| 0u32);
    let timers: Rc<RefCell<HashMap<u32, Timeout>>> = use_mut_ref(HashMap::new);

    {
        let timers = timers.clone();
        use_effect_with((), move |_| move || timers.borrow_mut().clear());
    }

    let notify = {
        let dispatcher = toasts.dispatcher();
        use_memo((), move |_| {
            NotifyCtx::from(move |notice: Notice| {
                let id = {
                    let mut next = next_id.borrow_mut();
                    *next += 1;
                    *next
                };
                dispatcher.dispatch(ToastAction::Show(id, notice));

                let expire = {
                    let dispatcher = dispatcher.clone();
                    Timeout::new(TOAST_MS, move || dispatcher.dispatch(ToastAction::Expire(id)))
                };
                timers.borrow_mut().insert(id, expire);
            })
        })
    };

    html! {
        <ContextProvider<NotifyCtx> context={(*notify).clone()}>
            { props.children.clone() }
            <div class="notification-stack">
                { for toasts.items.iter().map(|(id, notice)| {
                    let (class, icon) = match notice.kind {
                        NoticeKind::Success => ("notification success", "✅"),
                        NoticeKind::Error => ("notification error", "❌"),
                    };
                    html! {
                        <div key={*id} class={class}>
                            <span>{ icon }</span>
                            <span class="notification-message">{ &notice.message }</span>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<NotifyCtx>>
    }
}
