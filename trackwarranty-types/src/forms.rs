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

//! Form validation and the WhatsApp hand-off messages.
//!
//! None of the forms talk to a server. Signup and contact forms show a
//! confirmation after [`SUBMIT_DELAY_MS`]; partnership forms open WhatsApp
//! first and then show the confirmation.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Artificial latency before a form shows its confirmation.
pub const SUBMIT_DELAY_MS: u32 = 1500;
/// How long the early-access button shows its success state before the
/// form resets.
pub const RESET_DELAY_MS: u32 = 3000;

pub const QUICK_CHAT_MESSAGE: &str = "Hi! I'm interested in discussing partnership opportunities with TrackWarranty. Could you please share more information about your API integration and white-label solutions?";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("{0} is required")]
    Required(String),
}

/// Early-access signup only needs a well-formed email.
pub fn validate_early_access(email: &str) -> Result<(), FormError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(FormError::InvalidEmail)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Select,
    TextArea,
}

/// A `required` form control as seen at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredField<'a> {
    pub name: &'a str,
    /// Shown to the visitor, e.g. "Company name".
    pub label: &'a str,
    pub value: &'a str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub name: String,
    pub error: FormError,
}

/// Check every required field; an email field that is filled in must also
/// be well formed. Returns one error per failing field, in input order.
pub fn validate_required(fields: &[RequiredField<'_>]) -> Vec<FieldError> {
    fields
        .iter()
        .filter_map(|field| {
            let error = if field.value.trim().is_empty() {
                Some(FormError::Required(field.label.to_string()))
            } else if field.kind == FieldKind::Email && !is_valid_email(field.value) {
                Some(FormError::InvalidEmail)
            } else {
                None
            };
            error.map(|error| FieldError {
                name: field.name.to_string(),
                error,
            })
        })
        .collect()
}

pub fn whatsapp_url(number: &str, text: &str) -> String {
    format!("https://wa.me/{number}?text={}", urlencoding::encode(text))
}

/// Partnership inquiry from the enterprise section form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnershipInquiry {
    pub company: String,
    pub email: String,
    pub industry: String,
    pub use_case: String,
}

impl PartnershipInquiry {
    pub fn message(&self) -> String {
        format!(
            "*New Partnership Inquiry*\n\
             ------------------------\n\
             *Company:* {}\n\
             *Email:* {}\n\
             *Industry:* {}\n\
             *Use Case:*\n\
             {}\n\
             ------------------------\n\
             From TrackWarranty Website",
            self.company, self.email, self.industry, self.use_case
        )
    }

    pub fn whatsapp_url(&self, number: &str) -> String {
        whatsapp_url(number, &self.message())
    }
}

/// Partnership inquiry from the standalone partnership modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnterpriseInquiry {
    pub name: String,
    pub company: String,
    pub email: String,
    pub industry: String,
    pub message: String,
}

impl EnterpriseInquiry {
    pub fn fields(&self) -> [RequiredField<'_>; 5] {
        [
            RequiredField {
                name: "name",
                label: "Name",
                value: &self.name,
                kind: FieldKind::Text,
            },
            RequiredField {
                name: "company",
                label: "Company name",
                value: &self.company,
                kind: FieldKind::Text,
            },
            RequiredField {
                name: "email",
                label: "Email",
                value: &self.email,
                kind: FieldKind::Email,
            },
            RequiredField {
                name: "industry",
                label: "Industry",
                value: &self.industry,
                kind: FieldKind::Select,
            },
            RequiredField {
                name: "message",
                label: "Partnership goals",
                value: &self.message,
                kind: FieldKind::TextArea,
            },
        ]
    }

    pub fn validate(&self) -> Vec<FieldError> {
        validate_required(&self.fields())
    }

    pub fn whatsapp_message(&self) -> String {
        format!(
            "🤝 *Partnership Inquiry - TrackWarranty*\n\n\
             👤 *Name:* {}\n\
             🏢 *Company:* {}\n\
             📧 *Email:* {}\n\
             🏭 *Industry:* {}\n\n\
             💬 *Partnership Goals:*\n\
             {}\n\n\
             ---\n\
             Sent via TrackWarranty Partnership Form",
            self.name, self.company, self.email, self.industry, self.message
        )
    }
}

/// Name used for a form in analytics: its id, else its class, else its
/// position on the page.
pub fn form_name(id: &str, class: &str, index: usize) -> String {
    if !id.is_empty() {
        id.to_string()
    } else if !class.is_empty() {
        class.to_string()
    } else {
        format!("form_{index}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.in"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn early_access_rejects_bad_email() {
        assert_eq!(validate_early_access("not-an-email"), Err(FormError::InvalidEmail));
        assert_eq!(validate_early_access("a@b.co"), Ok(()));
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn required_fields_report_in_order() {
        let inquiry = EnterpriseInquiry {
            name: "  ".into(),
            company: "Acme".into(),
            email: "acme".into(),
            industry: "Retail".into(),
            message: String::new(),
        };
        let errors = inquiry.validate();
        let names: Vec<&str> = errors.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "message"]);
        assert_eq!(errors[1].error, FormError::InvalidEmail);
        assert_eq!(errors[0].error, FormError::Required("Name".into()));
        assert_eq!(errors[2].error.to_string(), "Partnership goals is required");
    }

    #[test]
    fn required_message_uses_the_label() {
        let errors = validate_required(&[RequiredField {
            name: "useCase",
            label: "Use case",
            value: "",
            kind: FieldKind::TextArea,
        }]);
        assert_eq!(errors[0].name, "useCase");
        assert_eq!(errors[0].error.to_string(), "Use case is required");
    }

    #[test]
    fn complete_inquiry_validates() {
        let inquiry = EnterpriseInquiry {
            name: "Priya".into(),
            company: "Acme".into(),
            email: "priya@acme.in".into(),
            industry: "Retail".into(),
            message: "White-label".into(),
        };
        assert!(inquiry.validate().is_empty());
        assert!(inquiry.whatsapp_message().contains("👤 *Name:* Priya"));
    }

    #[test]
    fn partnership_message_layout() {
        let inquiry = PartnershipInquiry {
            company: "Acme".into(),
            email: "ops@acme.in".into(),
            industry: "Electronics".into(),
            use_case: "Warranty API".into(),
        };
        let message = inquiry.message();
        assert!(message.starts_with("*New Partnership Inquiry*\n------------------------\n*Company:* Acme\n"));
        assert!(message.ends_with("Warranty API\n------------------------\nFrom TrackWarranty Website"));
    }

    #[test]
    fn whatsapp_url_encodes_text() {
        assert_eq!(
            whatsapp_url("916207466460", "Hi there & bye"),
            "https://wa.me/916207466460?text=Hi%20there%20%26%20bye"
        );
    }

    #[test]
    fn form_name_fallbacks() {
        assert_eq!(form_name("enterpriseForm", "x", 0), "enterpriseForm");
        assert_eq!(form_name("", "signup-form", 1), "signup-form");
        assert_eq!(form_name("", "", 2), "form_2");
    }
}
