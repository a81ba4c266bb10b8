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

//! Application route definitions.
//!
//! Kept in the library so that both the binary entry-point (`main.rs`) and
//! integration tests share the same `Route` enum.

use enum_display::EnumDisplay;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug, EnumDisplay)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/invite/:code")]
    Invite { code: String },
    #[at("/invite")]
    InviteLanding,
    /// Static hosts rewrite `/invite/<code>` to `invite.html?path_code=<code>`.
    #[at("/invite.html")]
    InviteHtml,
    #[not_found]
    #[at("/404")]
    NotFound,
}
