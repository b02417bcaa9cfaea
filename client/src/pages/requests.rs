//! One-shot GET/POST request tester.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::request_forms::{GetRequestCard, PostRequestCard};
use crate::state::requests::RequestFormState;

#[component]
pub fn RequestsPage() -> impl IntoView {
    let form = RwSignal::new(RequestFormState::default());

    view! {
        <div class="requests-page">
            <header class="requests-page__header">
                <h1>"Request Tester"</h1>
                <A href="/" attr:class="requests-page__back">
                    "Back to dashboard"
                </A>
            </header>
            <div class="requests-page__cards">
                <GetRequestCard form=form/>
                <PostRequestCard form=form/>
            </div>
        </div>
    }
}
