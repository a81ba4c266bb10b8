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

use trackwarranty_types::analytics::{ga_page_view, landing_page_view};
use yew::prelude::*;

use crate::browser::{current_href, scroll_to_section};
use crate::components::contact_form::ContactForm;
use crate::components::demo_carousel::DemoCarouselView;
use crate::components::download_buttons::DownloadButtons;
use crate::components::early_access_form::EarlyAccessForm;
use crate::components::modal::{Modal, SuccessModal};
use crate::components::navbar::Navbar;
use crate::components::partnership_form::PartnershipForm;
use crate::components::partnership_modal::{PartnershipModal, QuickChatButton};
use crate::components::referral_badge::ReferralBadge;
use crate::components::reveal::Reveal;
use crate::components::share_buttons::ShareButtons;
use crate::components::stat_counter::StatCounter;
use crate::context::use_site;
use crate::engagement::use_page_analytics;

const PAGE_TITLE: &str = "TrackWarranty - Never Lose a Warranty Again";

const STATS: [(&str, &str); 4] = [
    ("2.5Cr+", "warranty claims lost every year"),
    ("50K+", "bills misplaced every day"),
    ("₹10L+", "spent on avoidable repairs"),
    ("73%", "of people can't find their warranty card"),
];

const STORIES: [(&str, &str); 3] = [
    (
        "The fridge that died a week too late",
        "The compressor failed just after the warranty ended. Nobody remembered the date.",
    ),
    (
        "The bill that faded",
        "Thermal paper receipts are blank within a year. So is the claim.",
    ),
    (
        "The card in the drawer",
        "Somewhere in a drawer of manuals, the one card that mattered.",
    ),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("Priya S.", "Got my washing machine motor replaced for free. I had no idea it was still covered."),
    ("Rahul M.", "Every bill in one place. The reminders alone are worth it."),
    ("Anita K.", "Claimed my laptop battery two days before the warranty ran out."),
];

const SOLUTIONS: [(&str, &str); 3] = [
    ("Retailers", "Digital warranty cards issued at checkout."),
    ("Insurers", "Extended-warranty upsell at the moment of need."),
    ("Brands", "Registration and service reminders under your own label."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let site = use_site();
    let referral = {
        let site = site.clone();
        use_memo((), move |_| site.capture_landing_referral())
    };
    let early_access_open = use_state(|| false);
    let partnership_open = use_state(|| false);
    let signed_up = use_state(|| None::<String>);

    use_page_analytics(site.clone());

    {
        let site = site.clone();
        let referral = referral.clone();
        use_effect_with((), move |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(PAGE_TITLE);
            }
            site.tracker
                .track_event("page_view", landing_page_view(&referral));
            site.tracker
                .track_ga("page_view", ga_page_view(PAGE_TITLE, &current_href()));
            || ()
        });
    }

    let open_early_access = {
        let early_access_open = early_access_open.clone();
        Callback::from(move |_: ()| early_access_open.set(true))
    };
    let close_early_access = {
        let early_access_open = early_access_open.clone();
        Callback::from(move |_: ()| early_access_open.set(false))
    };
    let open_partnership = {
        let partnership_open = partnership_open.clone();
        Callback::from(move |_: MouseEvent| partnership_open.set(true))
    };
    let close_partnership = {
        let partnership_open = partnership_open.clone();
        Callback::from(move |_: ()| partnership_open.set(false))
    };
    let on_signed_up = {
        let signed_up = signed_up.clone();
        let early_access_open = early_access_open.clone();
        Callback::from(move |email: String| {
            early_access_open.set(false);
            signed_up.set(Some(email));
        })
    };
    let close_success = {
        let signed_up = signed_up.clone();
        Callback::from(move |_: ()| signed_up.set(None))
    };
    let hero_cta = {
        let open = open_early_access.clone();
        Callback::from(move |_: MouseEvent| open.emit(()))
    };
    let see_demo = Callback::from(|_: MouseEvent| scroll_to_section("solution"));
    let see_solutions = Callback::from(|_: MouseEvent| scroll_to_section("solutions"));

    html! {
        <>
            <Navbar on_early_access={open_early_access} />

            <section id="hero" class="hero">
                <div class="hero-content">
                    <ReferralBadge referral={(*referral).clone()} />
                    <h1>{ "Never lose a warranty again" }</h1>
                    <p class="hero-subtitle">
                        { "Snap a bill, and TrackWarranty remembers every warranty, service date and claim for you." }
                    </p>
                    <div class="hero-cta">
                        <button class="btn btn-primary" onclick={hero_cta}>{ "Get Early Access" }</button>
                        <button class="btn btn-secondary" onclick={see_demo}>{ "See How It Works" }</button>
                    </div>
                    <EarlyAccessForm on_success={on_signed_up.clone()} />
                </div>
            </section>

            <section id="problem" class="problem-section">
                <h2>{ "Warranties are easy to lose" }</h2>
                <div class="stats-grid">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div class="stat-card">
                            <StatCounter text={*value} />
                            <span class="stat-label">{ *label }</span>
                        </div>
                    }) }
                </div>
                <div class="story-grid">
                    { for STORIES.iter().map(|(title, body)| html! {
                        <Reveal class="story-card">
                            <h3>{ *title }</h3>
                            <p>{ *body }</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="solution" class="solution-section">
                <h2>{ "One photo. Every warranty tracked." }</h2>
                <DemoCarouselView />
            </section>

            <section class="social-proof">
                <h2>{ "Early users love it" }</h2>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|(name, quote)| html! {
                        <Reveal class="testimonial-card">
                            <p class="testimonial-quote">{ *quote }</p>
                            <span class="testimonial-name">{ *name }</span>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="solutions" class="enterprise-section">
                <h2>{ "TrackWarranty for Business" }</h2>
                <div class="solution-grid">
                    { for SOLUTIONS.iter().map(|(title, body)| html! {
                        <Reveal class="solution-card">
                            <h3>{ *title }</h3>
                            <p>{ *body }</p>
                        </Reveal>
                    }) }
                </div>
                <div class="enterprise-forms">
                    <ContactForm />
                    <PartnershipForm />
                </div>
                <div class="enterprise-cta">
                    <button class="btn btn-secondary" onclick={see_solutions}>{ "Explore Solutions" }</button>
                    <button class="btn btn-primary" onclick={open_partnership}>{ "Become a Partner" }</button>
                </div>
            </section>

            <section id="download" class="download-section">
                <h2>{ "Get the app" }</h2>
                <DownloadButtons referral={(*referral).clone()} />
                <h3>{ "Invite friends" }</h3>
                <ShareButtons referral={(*referral).clone()} />
            </section>

            <footer class="footer">
                <p>{ "© 2025 TrackWarranty" }</p>
            </footer>

            <Modal
                id="early-access-modal"
                title="Join the TrackWarranty Beta"
                open={*early_access_open}
                on_close={close_early_access}
            >
                <EarlyAccessForm class="modal-form" on_success={on_signed_up} label="Join Beta" />
            </Modal>
            <PartnershipModal open={*partnership_open} on_close={close_partnership} />
            if let Some(email) = (*signed_up).clone() {
                <SuccessModal email={email} on_close={close_success} />
            }
            <QuickChatButton />
        </>
    }
}
