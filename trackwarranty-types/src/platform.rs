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

//! Visitor platform sniffing and the download options shown for each.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::referral::{build_store_url, ReferralContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Desktop,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Desktop => "desktop",
        }
    }

    pub fn is_mobile(&self) -> bool {
        !matches!(self, Platform::Desktop)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the visitor from `navigator.userAgent`, `navigator.platform` and
/// `navigator.maxTouchPoints`.
///
/// iPadOS reports itself as `MacIntel`; a touch screen gives it away.
pub fn detect_platform(user_agent: &str, platform: &str, max_touch_points: u32) -> Platform {
    let ios_agent = ["iPad", "iPhone", "iPod"]
        .iter()
        .any(|needle| user_agent.contains(needle));
    if ios_agent || (platform == "MacIntel" && max_touch_points > 1) {
        Platform::Ios
    } else if user_agent.contains("Android") {
        Platform::Android
    } else {
        Platform::Desktop
    }
}

pub fn detection_status(platform: Platform) -> &'static str {
    match platform {
        Platform::Ios => "iOS device detected - Preparing App Store link",
        Platform::Android => "Android device detected - Preparing Play Store link",
        Platform::Desktop => "Desktop detected - Showing all download options",
    }
}

/// A store badge on the invite page.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOption {
    pub store: Platform,
    /// `None` while the listing is not live yet.
    pub href: Option<String>,
    pub badge_src: &'static str,
    pub alt: &'static str,
    pub status: &'static str,
}

impl DownloadOption {
    pub fn is_active(&self) -> bool {
        self.href.is_some()
    }
}

fn app_store_option() -> DownloadOption {
    DownloadOption {
        store: Platform::Ios,
        href: None,
        badge_src: "app-store.svg",
        alt: "Coming Soon on App Store",
        status: "Coming Soon",
    }
}

fn play_store_option(ctx: &ReferralContext, config: &SiteConfig) -> DownloadOption {
    DownloadOption {
        store: Platform::Android,
        href: Some(build_store_url(Platform::Android, ctx, config)),
        badge_src: "playstore.svg",
        alt: "Get it on Google Play",
        status: "Available Now",
    }
}

/// Options for the detected platform. The App Store listing is not live, so
/// iOS visitors only see an inactive badge.
pub fn download_options(
    platform: Platform,
    ctx: &ReferralContext,
    config: &SiteConfig,
) -> Vec<DownloadOption> {
    match platform {
        Platform::Ios => vec![app_store_option()],
        Platform::Android => vec![play_store_option(ctx, config)],
        Platform::Desktop => vec![play_store_option(ctx, config), app_store_option()],
    }
}
