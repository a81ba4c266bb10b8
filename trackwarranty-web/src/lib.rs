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

//! trackwarranty-web library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`) can
//! import components. The binary entry-point lives in `main.rs`.

pub mod app;
pub mod browser;
pub mod components;
pub mod constants;
pub mod context;
pub mod engagement;
pub mod observers;
pub mod pages;
pub mod referral_resolver;
pub mod routing;
pub mod tracker;
