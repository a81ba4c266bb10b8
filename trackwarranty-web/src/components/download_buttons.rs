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

//! Store buttons. [`DownloadButtons`] sits on the marketing pages and
//! carries the visitor's referral into the store links; [`StoreBadges`] is
//! the invite page's per-platform variant.

use trackwarranty_types::analytics::{download_click_ga, download_clicked, ios_coming_soon};
use trackwarranty_types::platform::DownloadOption;
use trackwarranty_types::referral::rewrite_store_link;
use trackwarranty_types::{Platform, ReferralContext};
use web_sys::Element;
use yew::prelude::*;

use crate::browser::containing_section;
use crate::components::modal::TimedOverlay;
use crate::constants::{COMING_SOON_MS, DOWNLOAD_FEEDBACK_MS};
use crate::context::use_site;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Overlay {
    Opening(Platform),
    ComingSoon,
}

#[derive(Properties, PartialEq)]
pub struct DownloadButtonsProps {
    pub referral: ReferralContext,
}

#[function_component(DownloadButtons)]
pub fn download_buttons(props: &DownloadButtonsProps) -> Html {
    let site = use_site();
    // Keyed by a counter so a repeat click restarts the overlay timer.
    let overlay = use_state(|| None::<(u32, Overlay)>);

    let show = {
        let overlay = overlay.clone();
        move |kind: Overlay| {
            let next = (*overlay).map_or(1, |(n, _)| n + 1);
            overlay.set(Some((next, kind)));
        }
    };

    let play_href = rewrite_store_link(&site.config.play_store_url, &props.referral);
    let invite_code = props.referral.invite_code.clone().unwrap_or_default();

    let on_play = {
        let site = site.clone();
        let referral = props.referral.clone();
        let show = show.clone();
        Callback::from(move |e: MouseEvent| {
            let section = e
                .target_dyn_into::<Element>()
                .map(|el| containing_section(&el))
                .unwrap_or_else(|| "unknown".to_string());
            let platform = Platform::Android;
            site.tracker
                .track_event("download_click", download_clicked(&referral, platform));
            for (name, params) in
                download_click_ga(platform, referral.invite_code.as_deref(), &section)
            {
                site.tracker.track_ga(name, params);
            }
            show(Overlay::Opening(platform));
        })
    };

    let on_app_store = {
        let site = site.clone();
        let show = show.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            site.tracker.track_ga("ios_coming_soon_clicked", ios_coming_soon());
            show(Overlay::ComingSoon);
        })
    };

    let on_done = {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.set(None))
    };

    html! {
        <div class="download-buttons">
            <a
                class="app-store-btn download-btn-active"
                href={play_href}
                target="_blank"
                rel="noopener"
                data-invite-code={invite_code}
                onclick={on_play}
            >
                <img src="playstore.svg" alt="Get it on Google Play" />
            </a>
            <a class="app-store-btn download-btn-inactive" href="#" onclick={on_app_store}>
                <img src="app-store.svg" alt="Coming Soon on App Store" />
                <span class="coming-soon-label">{ "Coming Soon" }</span>
            </a>
            {
                match *overlay {
                    Some((key, Overlay::Opening(platform))) => html! {
                        <TimedOverlay key={key} class="download-feedback" duration_ms={DOWNLOAD_FEEDBACK_MS} on_done={on_done.clone()}>
                            <div class="overlay-icon">{ "📱" }</div>
                            <div class="overlay-title">{ format!("Opening {}...", store_name(platform)) }</div>
                            <div class="overlay-text">{ "Install TrackWarranty to get started!" }</div>
                        </TimedOverlay>
                    },
                    Some((key, Overlay::ComingSoon)) => html! {
                        <TimedOverlay key={key} class="coming-soon-message" duration_ms={COMING_SOON_MS} on_done={on_done.clone()}>
                            <div class="overlay-icon">{ "🍎" }</div>
                            <div class="overlay-title">{ "iOS App Coming Soon!" }</div>
                            <div class="overlay-text">
                                { "We're working hard to bring TrackWarranty to the App Store. Stay tuned!" }
                            </div>
                            <div class="overlay-note">{ "💚 Android version is available now on Play Store!" }</div>
                        </TimedOverlay>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

fn store_name(platform: Platform) -> &'static str {
    match platform {
        Platform::Ios => "App Store",
        _ => "Play Store",
    }
}

#[derive(Properties, PartialEq)]
pub struct StoreBadgesProps {
    pub options: Vec<DownloadOption>,
    pub referral: ReferralContext,
}

/// Invite page badges; only live listings are links.
#[function_component(StoreBadges)]
pub fn store_badges(props: &StoreBadgesProps) -> Html {
    let site = use_site();
    html! {
        <div id="downloadButtons" class="download-buttons">
            { for props.options.iter().map(|option| {
                let status = html! { <span class="download-status">{ option.status }</span> };
                match &option.href {
                    Some(href) => {
                        let onclick = {
                            let site = site.clone();
                            let referral = props.referral.clone();
                            let store = option.store;
                            Callback::from(move |_: MouseEvent| {
                                site.tracker.track_event(
                                    "download_clicked",
                                    download_clicked(&referral, store),
                                );
                            })
                        };
                        html! {
                            <a
                                class={classes!("store-badge", "download-btn-active", option.store.as_str())}
                                href={href.clone()}
                                {onclick}
                            >
                                <img src={option.badge_src} alt={option.alt} />
                                { status }
                            </a>
                        }
                    }
                    None => html! {
                        <div class={classes!("store-badge", "download-btn-inactive", option.store.as_str())}>
                            <img src={option.badge_src} alt={option.alt} />
                            { status }
                        </div>
                    },
                }
            }) }
        </div>
    }
}
