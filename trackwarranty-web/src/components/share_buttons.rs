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

use trackwarranty_types::analytics::{referral_ga, referral_shared};
use trackwarranty_types::referral::{
    generate_referral_link, share_action, ShareAction, ShareMethod, DEFAULT_INVITE_CODE,
};
use trackwarranty_types::ReferralContext;
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

use crate::browser::{open_in_new_tab, origin};
use crate::context::{use_notify, use_site, Notice, NotifyCtx};

#[derive(Properties, PartialEq)]
pub struct ShareButtonsProps {
    pub referral: ReferralContext,
}

/// One button per [`ShareMethod`]; each share is logged locally and as a
/// `referral_shared` GA event.
#[function_component(ShareButtons)]
pub fn share_buttons(props: &ShareButtonsProps) -> Html {
    let site = use_site();
    let notify = use_notify();

    html! {
        <div class="share-buttons">
            { for ShareMethod::ALL.iter().map(|&method| {
                let onclick = {
                    let site = site.clone();
                    let notify = notify.clone();
                    let referral = props.referral.clone();
                    Callback::from(move |_: MouseEvent| {
                        let code = referral
                            .invite_code
                            .as_deref()
                            .unwrap_or(DEFAULT_INVITE_CODE);
                        let name = referral.referrer_name.as_deref();
                        let link = generate_referral_link(&origin(), code, name, Some(method.as_str()));
                        match share_action(method, code, &link) {
                            ShareAction::Open(url) => open_in_new_tab(&url),
                            ShareAction::CopyToClipboard { text, notice } => {
                                copy_to_clipboard(text, notice, notify.clone())
                            }
                        }
                        site.tracker
                            .track_event("referral_shared", referral_shared(method, code, name));
                        site.tracker.track_ga("referral_shared", referral_ga(&referral));
                    })
                };
                html! {
                    <button class={classes!("share-btn", method.as_str())} {onclick}>
                        { method.label() }
                    </button>
                }
            }) }
        </div>
    }
}

fn copy_to_clipboard(text: String, notice: &'static str, notify: NotifyCtx) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&text);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => notify.emit(Notice::success(notice)),
            Err(e) => log::warn!("Clipboard write failed: {e:?}"),
        }
    });
}
