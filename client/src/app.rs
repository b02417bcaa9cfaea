//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_BASE_META_NAME, ApiConfig};
use crate::net::http::{BrowserClient, SharedClient};
use crate::pages::{dashboard::DashboardPage, requests::RequestsPage};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The API base URL is embedded as a `<meta>` tag so the hydrated client
/// talks to the same backend the server was configured with.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    let api_base = api.base_url().to_owned();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META_NAME content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App api=api/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared contexts (API config, HTTP client, UI state) and sets up
/// client-side routing.
#[component]
pub fn App(api: ApiConfig) -> impl IntoView {
    provide_meta_context();

    let client: SharedClient = Arc::new(BrowserClient);
    provide_context(api);
    provide_context(client);
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard.css"/>
        <Title text="Analytics Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("requests") view=RequestsPage/>
            </Routes>
        </Router>
    }
}
