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

//! Site configuration.
//!
//! Deployed pages inject `window.__APP_CONFIG`; every field has a default so
//! a page without the object still works.

use serde::Deserialize;

use crate::truthy;

pub const DEFAULT_APP_STORE_URL: &str = "https://apps.apple.com/app/trackwarranty";
pub const DEFAULT_PLAY_STORE_URL: &str =
    "https://play.google.com/store/apps/details?id=app.trackwarranty";
pub const DEFAULT_DEEP_LINK_SCHEME: &str = "trackwarranty";
pub const DEFAULT_PARTNERSHIP_WHATSAPP: &str = "916207466460";
pub const DEFAULT_BUSINESS_WHATSAPP: &str = "1234567890";
pub const DEFAULT_GA_TAG: &str = "trackwarranty_website";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub app_store_url: String,
    pub play_store_url: String,
    /// Scheme only, without `://`.
    pub deep_link_scheme: String,
    /// WhatsApp number that receives partnership form submissions.
    pub partnership_whatsapp: String,
    /// WhatsApp number behind the "chat with us" button.
    pub business_whatsapp: String,
    /// Merged into every gtag event as `custom_parameter_1`.
    pub ga_tag: String,
    pub ga_measurement_id: Option<String>,
    pub debug_logging: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            app_store_url: DEFAULT_APP_STORE_URL.to_string(),
            play_store_url: DEFAULT_PLAY_STORE_URL.to_string(),
            deep_link_scheme: DEFAULT_DEEP_LINK_SCHEME.to_string(),
            partnership_whatsapp: DEFAULT_PARTNERSHIP_WHATSAPP.to_string(),
            business_whatsapp: DEFAULT_BUSINESS_WHATSAPP.to_string(),
            ga_tag: DEFAULT_GA_TAG.to_string(),
            ga_measurement_id: None,
            debug_logging: "false".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn debug_logging_enabled(&self) -> bool {
        truthy(Some(self.debug_logging.as_str()))
    }

    /// Measurement id, ignoring blank values.
    pub fn measurement_id(&self) -> Option<&str> {
        self.ga_measurement_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.deep_link_scheme, "trackwarranty");
        assert!(!cfg.debug_logging_enabled());
    }

    #[test]
    fn camel_case_keys_override_defaults() {
        let cfg: SiteConfig = serde_json::from_str(
            r#"{"deepLinkScheme":"tw","gaMeasurementId":"G-123","debugLogging":"1"}"#,
        )
        .unwrap();
        assert_eq!(cfg.deep_link_scheme, "tw");
        assert_eq!(cfg.measurement_id(), Some("G-123"));
        assert!(cfg.debug_logging_enabled());
        assert_eq!(cfg.app_store_url, DEFAULT_APP_STORE_URL);
    }

    #[test]
    fn blank_measurement_id_is_ignored() {
        let cfg = SiteConfig {
            ga_measurement_id: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(cfg.measurement_id(), None);
    }
}
