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

use std::rc::Rc;

use trackwarranty_types::forms::{
    validate_required, FieldError, FieldKind, PartnershipInquiry, RequiredField,
};
use yew::prelude::*;

use crate::browser::open_in_new_tab;
use crate::components::submit::{control_value, use_delayed_submit, FieldErrorText, SubmitPhase};
use crate::context::use_site;

pub const INDUSTRIES: [&str; 5] = [
    "Electronics Retail",
    "Insurance",
    "E-commerce",
    "Manufacturing",
    "Other",
];

/// Enterprise-section inquiry. Hands the message to WhatsApp first, then
/// shows the confirmation once the stub delay has passed.
#[function_component(PartnershipForm)]
pub fn partnership_form() -> Html {
    let site = use_site();
    let company_ref = use_node_ref();
    let email_ref = use_node_ref();
    let industry_ref = use_node_ref();
    let use_case_ref = use_node_ref();
    let errors = use_state(|| Rc::new(Vec::<FieldError>::new()));
    let submit = use_delayed_submit();

    let onsubmit = {
        let refs = [
            company_ref.clone(),
            email_ref.clone(),
            industry_ref.clone(),
            use_case_ref.clone(),
        ];
        let errors = errors.clone();
        let submit = submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submit.is_busy() {
                return;
            }
            let [company, email, industry, use_case] = refs.each_ref().map(control_value);
            let inquiry = PartnershipInquiry {
                company,
                email,
                industry,
                use_case,
            };
            let failed = validate_required(&[
                RequiredField {
                    name: "company",
                    label: "Company name",
                    value: &inquiry.company,
                    kind: FieldKind::Text,
                },
                RequiredField {
                    name: "email",
                    label: "Business email",
                    value: &inquiry.email,
                    kind: FieldKind::Email,
                },
                RequiredField {
                    name: "industry",
                    label: "Industry",
                    value: &inquiry.industry,
                    kind: FieldKind::Select,
                },
                RequiredField {
                    name: "useCase",
                    label: "Use case",
                    value: &inquiry.use_case,
                    kind: FieldKind::TextArea,
                },
            ]);
            let ok = failed.is_empty();
            errors.set(Rc::new(failed));
            if !ok {
                return;
            }

            open_in_new_tab(&inquiry.whatsapp_url(&site.config.partnership_whatsapp));
            log::info!("Partnership inquiry from {} ({})", inquiry.company, inquiry.industry);
            submit.start(|| {});
        })
    };

    if submit.phase() == SubmitPhase::Sent {
        return html! {
            <div class="enterprise-form form-success">
                <div class="form-success-icon">{ "🤝" }</div>
                <h3>{ "Partnership Inquiry Sent!" }</h3>
                <p>
                    { "Thank you for your interest in partnering with TrackWarranty. \
                       We'll be in touch via WhatsApp shortly to discuss opportunities." }
                </p>
                <div class="form-success-steps">
                    <p>{ "What's Next:" }</p>
                    <ul>
                        <li>{ "✅ Check WhatsApp for our message" }</li>
                        <li>{ "✅ Custom partnership proposal preparation" }</li>
                        <li>{ "✅ Schedule consultation call within 48 hours" }</li>
                    </ul>
                </div>
            </div>
        };
    }

    let sending = submit.phase() == SubmitPhase::Sending;
    html! {
        <form class="enterprise-form" {onsubmit} novalidate=true>
            <input ref={company_ref} type="text" name="company" placeholder="Company name" />
            <FieldErrorText field="company" errors={(*errors).clone()} />
            <input ref={email_ref} type="email" name="email" placeholder="Business email" />
            <FieldErrorText field="email" errors={(*errors).clone()} />
            <select ref={industry_ref} name="industry">
                <option value="">{ "Select industry" }</option>
                { for INDUSTRIES.iter().map(|i| html! { <option value={*i}>{ *i }</option> }) }
            </select>
            <FieldErrorText field="industry" errors={(*errors).clone()} />
            <textarea ref={use_case_ref} name="useCase" placeholder="How would you use TrackWarranty?" />
            <FieldErrorText field="useCase" errors={(*errors).clone()} />
            <button type="submit" class="btn btn-primary" disabled={sending}>
                <span>{ if sending { "Sending..." } else { "Start Partnership" } }</span>
            </button>
        </form>
    }
}
