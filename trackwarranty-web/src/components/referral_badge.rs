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

use trackwarranty_types::referral::badge_message;
use trackwarranty_types::ReferralContext;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReferralBadgeProps {
    pub referral: ReferralContext,
}

/// Shown only when the visit came through an invite.
#[function_component(ReferralBadge)]
pub fn referral_badge(props: &ReferralBadgeProps) -> Html {
    match badge_message(&props.referral) {
        Some(message) => html! {
            <div id="referral-badge" class="referral-badge fade-in-up">
                <span class="referral-icon">{ "🎁" }</span>
                <span id="referral-text">{ message }</span>
            </div>
        },
        None => html! {},
    }
}
