pub mod contact_form;
pub mod demo_carousel;
pub mod download_buttons;
pub mod early_access_form;
pub mod modal;
pub mod navbar;
pub mod notification;
pub mod partnership_form;
pub mod partnership_modal;
pub mod referral_badge;
pub mod reveal;
pub mod share_buttons;
pub mod stat_counter;

mod submit;
