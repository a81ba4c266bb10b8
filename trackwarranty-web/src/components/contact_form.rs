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

use trackwarranty_types::forms::{validate_required, FieldError, FieldKind, RequiredField};
use yew::prelude::*;

use crate::components::submit::{control_value, use_delayed_submit, FieldErrorText, SubmitPhase};

/// B2B demo request. Swaps itself for a confirmation panel once the
/// simulated request completes.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name_ref = use_node_ref();
    let company_ref = use_node_ref();
    let email_ref = use_node_ref();
    let size_ref = use_node_ref();
    let errors = use_state(|| Rc::new(Vec::<FieldError>::new()));
    let submit = use_delayed_submit();

    let onsubmit = {
        let refs = [name_ref.clone(), company_ref.clone(), email_ref.clone()];
        let errors = errors.clone();
        let submit = submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submit.is_busy() {
                return;
            }
            let [name, company, email] = refs.each_ref().map(control_value);
            let failed = validate_required(&[
                RequiredField {
                    name: "contactName",
                    label: "Your name",
                    value: &name,
                    kind: FieldKind::Text,
                },
                RequiredField {
                    name: "contactCompany",
                    label: "Company",
                    value: &company,
                    kind: FieldKind::Text,
                },
                RequiredField {
                    name: "contactEmail",
                    label: "Work email",
                    value: &email,
                    kind: FieldKind::Email,
                },
            ]);
            let ok = failed.is_empty();
            errors.set(Rc::new(failed));
            if ok {
                log::info!("Demo requested by {company}");
                submit.start(|| {});
            }
        })
    };

    if submit.phase() == SubmitPhase::Sent {
        return html! {
            <div class="contact-form form-success">
                <div class="form-success-icon">{ "✅" }</div>
                <h3>{ "Demo Request Received!" }</h3>
                <p>{ "Our enterprise team will contact you within 24 hours." }</p>
                <div class="form-success-steps">
                    <p>{ "Next Steps:" }</p>
                    <ul>
                        <li>{ "✅ Calendar link to choose your time" }</li>
                        <li>{ "✅ Pre-demo questionnaire" }</li>
                        <li>{ "✅ Custom ROI analysis" }</li>
                    </ul>
                </div>
            </div>
        };
    }

    let sending = submit.phase() == SubmitPhase::Sending;
    html! {
        <form class="contact-form" {onsubmit} novalidate=true>
            <input ref={name_ref} type="text" name="contactName" placeholder="Your name" />
            <FieldErrorText field="contactName" errors={(*errors).clone()} />
            <input ref={company_ref} type="text" name="contactCompany" placeholder="Company" />
            <FieldErrorText field="contactCompany" errors={(*errors).clone()} />
            <input ref={email_ref} type="email" name="contactEmail" placeholder="Work email" />
            <FieldErrorText field="contactEmail" errors={(*errors).clone()} />
            <select ref={size_ref} name="companySize">
                <option value="">{ "Company size" }</option>
                <option value="1-50">{ "1-50" }</option>
                <option value="51-500">{ "51-500" }</option>
                <option value="500+">{ "500+" }</option>
            </select>
            <button type="submit" class="btn btn-primary" disabled={sending}>
                <span>{ if sending { "Sending..." } else { "Request Demo" } }</span>
            </button>
        </form>
    }
}
