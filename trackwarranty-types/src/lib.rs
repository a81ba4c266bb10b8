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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Browser-independent logic for the TrackWarranty website.
//!
//! Everything here is a pure function of its inputs or talks to the browser
//! through a small capability trait ([`storage::KeyValueStore`],
//! [`analytics::AnalyticsHook`]), so the web crate can plug in `localStorage`
//! and `window.gtag` while tests plug in [`storage::MemoryStore`].

pub mod analytics;
pub mod carousel;
pub mod config;
pub mod counter;
pub mod engagement;
pub mod forms;
pub mod platform;
pub mod referral;
pub mod storage;

pub use analytics::{AnalyticsEvent, AnalyticsHook, EventLog};
pub use carousel::DemoCarousel;
pub use config::SiteConfig;
pub use counter::CounterAnimation;
pub use platform::{detect_platform, Platform};
pub use referral::{ReferralContext, ReferralRecord, UtmParams};
pub use storage::{KeyValueStore, MemoryStore, StorageError};

/// Current version of every JSON record written to local storage.
pub const SCHEMA_VERSION: u32 = 1;

pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}
