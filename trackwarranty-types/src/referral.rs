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

//! Referral context: where it comes from, how it is persisted, and the
//! outbound links that carry it forward.
//!
//! # Precedence
//!
//! Invite code: `/invite/<code>` path segment, then `code`, then `invite`
//! query parameter. Referrer name: `ref`, then `referrer`. Empty query values
//! count as absent. A freshly parsed field replaces the stored one only when
//! it is present, so landing on a bare URL keeps an earlier invite.
//!
//! # Store links
//!
//! The Play Store expects a single `referrer` parameter whose value is itself
//! an encoded query string; the App Store link takes plain `code`/`ref`
//! parameters. The two shapes are different on purpose.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use url::Url;

use crate::config::SiteConfig;
use crate::platform::Platform;
use crate::storage::{load_json_lenient, save_json, KeyValueStore, StorageError, REFERRAL_KEY};
use crate::SCHEMA_VERSION;

pub const DEFAULT_INVITE_CODE: &str = "WELCOME";

static INVITE_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)/invite/([a-z0-9]+)").expect("invite path regex"));

/// Standard UTM attribution parameters, read verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtmParams {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub content: Option<String>,
    pub term: Option<String>,
}

impl UtmParams {
    fn merge_over(self, stored: &UtmParams) -> UtmParams {
        UtmParams {
            source: self.source.or_else(|| stored.source.clone()),
            medium: self.medium.or_else(|| stored.medium.clone()),
            campaign: self.campaign.or_else(|| stored.campaign.clone()),
            content: self.content.or_else(|| stored.content.clone()),
            term: self.term.or_else(|| stored.term.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferralContext {
    pub invite_code: Option<String>,
    pub referrer_name: Option<String>,
    pub utm: UtmParams,
}

/// What gets written under [`REFERRAL_KEY`].
///
/// Records written before versioning have no `schemaVersion` and read back
/// as version 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferralRecord {
    pub schema_version: u32,
    pub invite_code: Option<String>,
    pub referrer_name: Option<String>,
    pub utm_params: UtmParams,
    pub timestamp: u64,
    pub landing_url: Option<String>,
}

impl ReferralRecord {
    pub fn new(ctx: &ReferralContext, timestamp: u64, landing_url: &str) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            invite_code: ctx.invite_code.clone(),
            referrer_name: ctx.referrer_name.clone(),
            utm_params: ctx.utm.clone(),
            timestamp,
            landing_url: Some(landing_url.to_string()),
        }
    }

    pub fn context(&self) -> ReferralContext {
        ReferralContext {
            invite_code: self.invite_code.clone(),
            referrer_name: self.referrer_name.clone(),
            utm: self.utm_params.clone(),
        }
    }
}

/// How a page captures referral context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePolicy {
    /// Invite page: fall back to [`DEFAULT_INVITE_CODE`] and always persist.
    Invite,
    /// Marketing pages: no default, persist only when there is a code or a
    /// referrer to remember.
    Landing,
}

/// Parse `href` (absolute, or a path with query) into a URL. Relative input
/// is resolved against a placeholder origin.
fn parse_url(href: &str) -> Option<Url> {
    Url::parse(href).ok().or_else(|| {
        Url::parse("http://localhost")
            .ok()
            .and_then(|base| base.join(href).ok())
    })
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

fn invite_code_from_path(path: &str) -> Option<String> {
    INVITE_PATH_RE
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

impl ReferralContext {
    /// Extract whatever the URL carries. No defaults are applied.
    pub fn parse(href: &str) -> Self {
        let Some(url) = parse_url(href) else {
            log::debug!("Unparseable landing url {href:?}");
            return Self::default();
        };

        let invite_code = invite_code_from_path(url.path())
            .or_else(|| query_value(&url, "code"))
            .or_else(|| query_value(&url, "invite"));
        let referrer_name = query_value(&url, "ref").or_else(|| query_value(&url, "referrer"));

        Self {
            invite_code,
            referrer_name,
            utm: UtmParams {
                source: query_value(&url, "utm_source"),
                medium: query_value(&url, "utm_medium"),
                campaign: query_value(&url, "utm_campaign"),
                content: query_value(&url, "utm_content"),
                term: query_value(&url, "utm_term"),
            },
        }
    }

    /// Lay `self` over `stored`: present fields win, absent ones fall back.
    pub fn merge_over(self, stored: &ReferralContext) -> ReferralContext {
        ReferralContext {
            invite_code: self.invite_code.or_else(|| stored.invite_code.clone()),
            referrer_name: self.referrer_name.or_else(|| stored.referrer_name.clone()),
            utm: self.utm.merge_over(&stored.utm),
        }
    }

    pub fn has_attribution(&self) -> bool {
        self.invite_code.is_some() || self.referrer_name.is_some()
    }
}

/// Last persisted context, if any. Unreadable records count as absent.
pub fn load_stored<S: KeyValueStore + ?Sized>(
    store: &S,
) -> Result<Option<ReferralRecord>, StorageError> {
    load_json_lenient(store, REFERRAL_KEY)
}

/// Parse `href`, merge it over the stored context and persist the result
/// according to `policy`.
pub fn resolve<S: KeyValueStore + ?Sized>(
    href: &str,
    store: &S,
    now_ms: u64,
    policy: CapturePolicy,
) -> Result<ReferralContext, StorageError> {
    let parsed = ReferralContext::parse(href);
    let stored = load_stored(store)?
        .map(|record| record.context())
        .unwrap_or_default();
    let mut merged = parsed.merge_over(&stored);

    let persist = match policy {
        CapturePolicy::Invite => {
            if merged.invite_code.is_none() {
                merged.invite_code = Some(DEFAULT_INVITE_CODE.to_string());
            }
            true
        }
        CapturePolicy::Landing => merged.has_attribution(),
    };

    if persist {
        save_json(store, REFERRAL_KEY, &ReferralRecord::new(&merged, now_ms, href))?;
    }
    log::debug!("Resolved referral context {merged:?}");
    Ok(merged)
}

/// `base` with `query` appended, using `&` if `base` already has a query.
fn append_query(base: &str, query: &str) -> String {
    if query.is_empty() {
        base.to_string()
    } else if base.contains('?') {
        format!("{base}&{query}")
    } else {
        format!("{base}?{query}")
    }
}

fn code_and_ref_query(ctx: &ReferralContext) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    if let Some(code) = &ctx.invite_code {
        params.append_pair("code", code);
    }
    if let Some(name) = &ctx.referrer_name {
        params.append_pair("ref", name);
    }
    params.finish()
}

/// Store link for `platform` carrying the referral context.
///
/// Desktop visitors get the Play Store link, the only live listing.
pub fn build_store_url(platform: Platform, ctx: &ReferralContext, config: &SiteConfig) -> String {
    match platform {
        Platform::Ios => append_query(&config.app_store_url, &code_and_ref_query(ctx)),
        Platform::Android | Platform::Desktop => {
            let mut referrer = form_urlencoded::Serializer::new(String::new());
            referrer.append_pair(
                "utm_source",
                ctx.utm.source.as_deref().unwrap_or("referral"),
            );
            referrer.append_pair("utm_medium", "invite_link");
            referrer.append_pair("utm_campaign", "referral_program");
            if let Some(code) = &ctx.invite_code {
                referrer.append_pair("utm_content", code);
                referrer.append_pair("invite_code", code);
            }
            if let Some(name) = &ctx.referrer_name {
                referrer.append_pair("referrer_name", name);
            }
            let query = format!("referrer={}", urlencoding::encode(&referrer.finish()));
            append_query(&config.play_store_url, &query)
        }
    }
}

/// Custom-scheme link that opens the installed app on the invite screen.
pub fn build_deep_link(ctx: &ReferralContext, scheme: &str) -> String {
    append_query(&format!("{scheme}://invite"), &code_and_ref_query(ctx))
}

/// Rewrite an existing store badge `href` on the marketing pages so the
/// install keeps its attribution. Non-store links come back unchanged.
pub fn rewrite_store_link(href: &str, ctx: &ReferralContext) -> String {
    let Ok(mut url) = Url::parse(href) else {
        return href.to_string();
    };
    let host = url.host_str().unwrap_or_default().to_string();

    let mut overrides: Vec<(&str, String)> = Vec::new();
    if host.contains("apps.apple.com") {
        if let Some(code) = &ctx.invite_code {
            overrides.push(("code", code.clone()));
        }
        if let Some(name) = &ctx.referrer_name {
            overrides.push(("ref", name.clone()));
        }
    } else if host.contains("play.google.com") {
        let mut referrer = form_urlencoded::Serializer::new(String::new());
        if let Some(code) = &ctx.invite_code {
            referrer.append_pair("invite_code", code);
        }
        if let Some(name) = &ctx.referrer_name {
            referrer.append_pair("referrer_name", name);
        }
        if let Some(source) = &ctx.utm.source {
            referrer.append_pair("utm_source", source);
        }
        referrer.append_pair("utm_medium", "website");
        referrer.append_pair("utm_campaign", "referral_program");
        overrides.push(("referrer", referrer.finish()));
    } else {
        return href.to_string();
    }

    if overrides.is_empty() {
        return url.to_string();
    }
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !overrides.iter().any(|(key, _)| k == key))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (k, v) in &kept {
            pairs.append_pair(k, v);
        }
        for (k, v) in &overrides {
            pairs.append_pair(k, v);
        }
    }
    url.to_string()
}

/// Shareable invite link for an existing user.
pub fn generate_referral_link(
    origin: &str,
    invite_code: &str,
    referrer_name: Option<&str>,
    utm_source: Option<&str>,
) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    params.append_pair("code", invite_code);
    if let Some(name) = referrer_name {
        params.append_pair("ref", name);
    }
    params.append_pair("utm_source", utm_source.unwrap_or("direct"));
    params.append_pair("utm_medium", "referral");
    params.append_pair("utm_campaign", "user_referral");
    format!(
        "{}/invite/{}?{}",
        origin.trim_end_matches('/'),
        invite_code,
        params.finish()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareMethod {
    WhatsApp,
    Instagram,
    Twitter,
    Email,
    Copy,
}

impl ShareMethod {
    pub const ALL: [ShareMethod; 5] = [
        ShareMethod::WhatsApp,
        ShareMethod::Instagram,
        ShareMethod::Twitter,
        ShareMethod::Email,
        ShareMethod::Copy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShareMethod::WhatsApp => "whatsapp",
            ShareMethod::Instagram => "instagram",
            ShareMethod::Twitter => "twitter",
            ShareMethod::Email => "email",
            ShareMethod::Copy => "copy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShareMethod::WhatsApp => "WhatsApp",
            ShareMethod::Instagram => "Instagram",
            ShareMethod::Twitter => "Twitter",
            ShareMethod::Email => "Email",
            ShareMethod::Copy => "Copy link",
        }
    }
}

pub fn share_message(method: ShareMethod, invite_code: &str, link: &str) -> String {
    match method {
        ShareMethod::Instagram => format!(
            "🛡️ Never lose a warranty again! ✨\n\nJoin me on TrackWarranty with code: {invite_code}\n\n{link}\n\n#WarrantyTracker #TechLife #SmartApps"
        ),
        ShareMethod::Twitter => format!(
            "🛡️ Never lose money on expired warranties again! Join me on @TrackWarranty with invite code {invite_code}: {link}"
        ),
        ShareMethod::Email => format!(
            "Hi!\n\nI've been using TrackWarranty to track all my warranties and it's been amazing - no more lost warranty cards or expired coverage!\n\nYou should try it too. Use my invite code {invite_code} to get special bonus features:\n\n{link}\n\nBest regards!"
        ),
        ShareMethod::WhatsApp | ShareMethod::Copy => format!(
            "🛡️ Never lose a warranty again! I'm using TrackWarranty to track all my warranties and get smart alerts. Join me with code {invite_code}: {link}"
        ),
    }
}

/// What the page should do for a share button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    Open(String),
    CopyToClipboard { text: String, notice: &'static str },
}

pub fn share_action(method: ShareMethod, invite_code: &str, link: &str) -> ShareAction {
    let message = share_message(method, invite_code, link);
    match method {
        ShareMethod::WhatsApp => ShareAction::Open(format!(
            "https://wa.me/?text={}",
            urlencoding::encode(&message)
        )),
        ShareMethod::Email => ShareAction::Open(format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode("Check out TrackWarranty"),
            urlencoding::encode(&message)
        )),
        ShareMethod::Instagram | ShareMethod::Twitter => ShareAction::CopyToClipboard {
            text: message,
            notice: "Message copied! Paste it in your post.",
        },
        ShareMethod::Copy => ShareAction::CopyToClipboard {
            text: link.to_string(),
            notice: "Referral link copied!",
        },
    }
}

/// Static hosting serves `/invite/<code>` through `invite.html?path_code=`.
/// Returns the cleaned-up URL to put in the address bar, if any.
pub fn normalize_invite_html(path: &str, query: &str) -> Option<String> {
    if path != "/invite.html" {
        return None;
    }
    let query = query.trim_start_matches('?');
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let path_code = pairs
        .iter()
        .find(|(k, _)| k == "path_code")
        .map(|(_, v)| v.clone())
        .filter(|v| !v.is_empty())?;
    let has_code = pairs.iter().any(|(k, v)| k == "code" && !v.is_empty());
    if has_code {
        return None;
    }

    let mut cleaned = form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs.iter().filter(|(k, _)| k != "path_code" && k != "code") {
        cleaned.append_pair(k, v);
    }
    cleaned.append_pair("code", &path_code);
    Some(format!("{path}?{}", cleaned.finish()))
}

/// Text for the referral badge on the marketing pages.
pub fn badge_message(ctx: &ReferralContext) -> Option<String> {
    if let Some(name) = &ctx.referrer_name {
        Some(format!("{name} invited you - bonus included!"))
    } else {
        ctx.invite_code
            .as_ref()
            .map(|code| format!("Invite code {code} - bonus included!"))
    }
}

/// Avatar letter for the referrer card.
pub fn referrer_initial(name: &str) -> Option<String> {
    name.chars().next().map(|c| c.to_uppercase().collect())
}
