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

//! `/invite/<code>` landing page. Resolves the referral once on mount, shows
//! the store badges for the visitor's platform after a short spinner, and
//! tries to hand over to the installed app on mobile.

use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use trackwarranty_types::analytics::{invite_page_view, page_hidden};
use trackwarranty_types::platform::detection_status;
use trackwarranty_types::referral::referrer_initial;
use yew::prelude::*;

use crate::browser::{current_href, normalize_invite_url};
use crate::components::download_buttons::StoreBadges;
use crate::constants::INVITE_LOADING_MS;
use crate::context::use_site;
use crate::referral_resolver::ReferralResolver;

const PAGE_TITLE: &str = "You're invited to TrackWarranty";

#[function_component(InvitePage)]
pub fn invite_page() -> Html {
    let site = use_site();
    let resolver = {
        let site = site.clone();
        use_mut_ref(move || {
            normalize_invite_url();
            ReferralResolver::from_window(site.config.clone(), site.tracker.store())
        })
    };
    let loading = use_state(|| true);

    {
        let resolver = resolver.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            let (context, platform) = {
                let resolver = resolver.borrow();
                (resolver.context().clone(), resolver.platform())
            };
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(PAGE_TITLE);
            }
            site.tracker
                .track_event("invite_page_view", invite_page_view(&context, platform));
            gtag_logger::track_page_view(PAGE_TITLE, &current_href());

            resolver.borrow_mut().attempt_deep_link();

            let spinner = Timeout::new(INVITE_LOADING_MS, move || loading.set(false));

            let visibility = web_sys::window().and_then(|w| w.document()).map(|document| {
                let target = document.clone();
                EventListener::new(&target, "visibilitychange", move |_| {
                    if document.hidden() {
                        site.tracker
                            .track_event("page_hidden", page_hidden(&context, platform));
                    }
                })
            });

            move || {
                drop(spinner);
                drop(visibility);
                resolver.borrow_mut().dispose();
            }
        });
    }

    let resolver = resolver.borrow();
    let context = resolver.context();
    let platform = resolver.platform();

    html! {
        <div class="invite-page">
            <div class="invite-card">
                <div class="invite-logo">{ "🛡️ TrackWarranty" }</div>
                <h1>{ "You've been invited!" }</h1>

                if let Some(name) = context.referrer_name.as_deref() {
                    <div id="referrerInfo" class="referrer-info">
                        <div id="referrerAvatar" class="referrer-avatar">
                            { referrer_initial(name).unwrap_or_default() }
                        </div>
                        <div id="referrerName" class="referrer-name">
                            { format!("{name} invited you") }
                        </div>
                    </div>
                }

                if let Some(code) = context.invite_code.as_deref() {
                    <div id="inviteCodeDisplay" class="invite-code-display">
                        <span class="invite-code-label">{ "Your invite code" }</span>
                        <span id="inviteCode" class="invite-code">{ code.to_string() }</span>
                    </div>
                }

                <p id="detectionStatus" class="detection-status">{ detection_status(platform) }</p>

                if *loading {
                    <div id="loadingSpinner" class="loading-spinner"></div>
                } else {
                    <StoreBadges
                        options={resolver.download_options()}
                        referral={context.clone()}
                    />
                }

                <a class="invite-home-link" href="/">{ "Learn more about TrackWarranty" }</a>
            </div>
        </div>
    }
}
