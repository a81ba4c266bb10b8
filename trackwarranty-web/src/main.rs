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

use gtag_logger::{GtagConfig, GtagLogger};
use trackwarranty_web::app::{App, AppProps};
use trackwarranty_web::constants::app_config;

fn main() {
    let config = app_config();

    // Initialize unified console + gtag logging
    let _ = GtagLogger::init(GtagConfig {
        measurement_id: config
            .as_ref()
            .ok()
            .and_then(|c| c.measurement_id().map(str::to_string)),
        console_level: if cfg!(feature = "debugAssertions")
            || config.as_ref().is_ok_and(|c| c.debug_logging_enabled())
        {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        },
        gtag_level: log::LevelFilter::Warn,
        ..Default::default()
    });

    console_error_panic_hook::set_once();

    let config = config.unwrap_or_else(|e| {
        log::warn!("{e}; using default site config");
        Default::default()
    });
    log::info!("TrackWarranty website loaded");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
