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

use trackwarranty_types::forms::{whatsapp_url, EnterpriseInquiry, FieldError};
use yew::prelude::*;

use crate::browser::open_in_new_tab;
use crate::components::modal::Modal;
use crate::components::partnership_form::INDUSTRIES;
use crate::components::submit::{clear_control, control_value, FieldErrorText};
use crate::context::{use_notify, use_site, Notice};

#[derive(Properties, PartialEq)]
pub struct PartnershipModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(PartnershipModal)]
pub fn partnership_modal(props: &PartnershipModalProps) -> Html {
    let site = use_site();
    let notify = use_notify();
    let refs = use_memo((), |_| {
        [
            NodeRef::default(),
            NodeRef::default(),
            NodeRef::default(),
            NodeRef::default(),
            NodeRef::default(),
        ]
    });
    let errors = use_state(|| Rc::new(Vec::<FieldError>::new()));

    let onsubmit = {
        let refs = refs.clone();
        let errors = errors.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let [name, company, email, industry, message] = refs.each_ref().map(control_value);
            let inquiry = EnterpriseInquiry {
                name,
                company,
                email,
                industry,
                message,
            };
            let failed = inquiry.validate();
            if !failed.is_empty() {
                errors.set(Rc::new(failed));
                return;
            }
            errors.set(Rc::default());

            open_in_new_tab(&whatsapp_url(
                &site.config.business_whatsapp,
                &inquiry.whatsapp_message(),
            ));
            notify.emit(Notice::success(
                "Opening WhatsApp with your partnership inquiry...",
            ));
            log::info!(
                "Partnership inquiry sent via WhatsApp: {} ({})",
                inquiry.company,
                inquiry.industry
            );
            refs.iter().for_each(clear_control);
            on_close.emit(());
        })
    };

    let [name_ref, company_ref, email_ref, industry_ref, message_ref] = (*refs).clone();
    let errs = (*errors).clone();
    html! {
        <Modal id="partnership-modal" title="Partner with TrackWarranty" open={props.open} on_close={props.on_close.clone()}>
            <form id="enterpriseForm" class="modal-form partnership-form" {onsubmit} novalidate=true>
                <input ref={name_ref} type="text" name="name" placeholder="Your name" />
                <FieldErrorText field="name" errors={errs.clone()} />
                <input ref={company_ref} type="text" name="company" placeholder="Company" />
                <FieldErrorText field="company" errors={errs.clone()} />
                <input ref={email_ref} type="email" name="email" placeholder="Business email" />
                <FieldErrorText field="email" errors={errs.clone()} />
                <select ref={industry_ref} name="industry">
                    <option value="">{ "Select industry" }</option>
                    { for INDUSTRIES.iter().map(|i| html! { <option value={*i}>{ *i }</option> }) }
                </select>
                <FieldErrorText field="industry" errors={errs.clone()} />
                <textarea ref={message_ref} name="message" placeholder="Tell us about your partnership goals" />
                <FieldErrorText field="message" errors={errs} />
                <button type="submit" class="btn btn-primary">
                    <span>{ "Send via WhatsApp" }</span>
                </button>
            </form>
        </Modal>
    }
}

/// Floating quick-chat button opening a WhatsApp conversation with the
/// business line.
#[function_component(QuickChatButton)]
pub fn quick_chat_button() -> Html {
    let site = use_site();
    let onclick = Callback::from(move |_: MouseEvent| {
        open_in_new_tab(&whatsapp_url(
            &site.config.business_whatsapp,
            trackwarranty_types::forms::QUICK_CHAT_MESSAGE,
        ));
        log::info!("WhatsApp chat opened for partnership inquiry");
    });
    html! {
        <button class="whatsapp-chat-btn" {onclick} aria-label="Chat on WhatsApp">{ "💬" }</button>
    }
}
