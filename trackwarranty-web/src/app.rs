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

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::notification::NotificationHost;
use crate::context::SiteCtx;
use crate::pages::home::Home;
use crate::pages::invite::InvitePage;
use crate::routing::Route;
use trackwarranty_types::SiteConfig;

fn switch(route: Route) -> Html {
    log::debug!("Routing to {route}");
    match route {
        Route::Home => html! { <Home /> },
        Route::Invite { .. } | Route::InviteLanding | Route::InviteHtml => {
            html! { <InvitePage /> }
        }
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{ "404" }</h1>
                <a href="/">{ "Back to TrackWarranty" }</a>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: SiteConfig,
}

/// Root component: shared services, toasts and the router.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let site = {
        let config = props.config.clone();
        use_memo((), move |_| SiteCtx::new(config))
    };

    html! {
        <ContextProvider<SiteCtx> context={(*site).clone()}>
            <NotificationHost>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </NotificationHost>
        </ContextProvider<SiteCtx>>
    }
}
