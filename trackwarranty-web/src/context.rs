// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! This module centralises shared state that needs to be accessed across
//! the component tree through Yew's `ContextProvider`.

use std::ops::Deref;
use std::rc::Rc;

use trackwarranty_types::referral::{self, CapturePolicy};
use trackwarranty_types::{ReferralContext, SiteConfig};
use yew::prelude::*;

use crate::browser;
use crate::constants::site_config;
use crate::tracker::Tracker;

pub struct SiteServices {
    pub config: SiteConfig,
    pub tracker: Tracker,
}

/// Config and event log shared by every page.
#[derive(Clone)]
pub struct SiteCtx {
    inner: Rc<SiteServices>,
}

impl PartialEq for SiteCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Deref for SiteCtx {
    type Target = SiteServices;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl SiteCtx {
    pub fn new(config: SiteConfig) -> Self {
        let tracker = Tracker::new(&config.ga_tag);
        Self {
            inner: Rc::new(SiteServices { config, tracker }),
        }
    }

    /// Referral context for the marketing pages. Only remembered when the
    /// visit carries a code or a referrer.
    pub fn capture_landing_referral(&self) -> ReferralContext {
        let href = browser::current_href();
        referral::resolve(
            &href,
            self.tracker.store(),
            browser::now_ms(),
            CapturePolicy::Landing,
        )
        .unwrap_or_else(|e| {
            log::warn!("Referral context not persisted: {e}");
            ReferralContext::parse(&href)
        })
    }
}

/// The provided [`SiteCtx`], or one built from the page config when rendered
/// outside the app root.
#[hook]
pub fn use_site() -> SiteCtx {
    let fallback = use_memo((), |_| SiteCtx::new(site_config()));
    use_context::<SiteCtx>().unwrap_or_else(|| (*fallback).clone())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Pushes a toast onto the page's notification stack.
pub type NotifyCtx = Callback<Notice>;

/// The provided [`NotifyCtx`]; outside a notification host notices only go
/// to the log.
#[hook]
pub fn use_notify() -> NotifyCtx {
    use_context::<NotifyCtx>()
        .unwrap_or_else(|| Callback::from(|notice: Notice| log::info!("{}", notice.message)))
}
