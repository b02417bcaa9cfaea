//! GET and POST one-shot request cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both cards share a `RwSignal<RequestFormState>` owned by the requests
//! page. Validation failures raise a blocking alert and never reach the
//! network.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::http::SharedClient;
use crate::state::requests::{RequestFormState, submit_get, submit_post, validate_get, validate_post};
use crate::util::alert;

#[component]
pub fn GetRequestCard(form: RwSignal<RequestFormState>) -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let client = expect_context::<SharedClient>();

    let on_send = move |_| {
        let (param, busy) = form.with(|f| (f.get_param.clone(), f.get_in_flight));
        if busy {
            return;
        }
        if let Err(e) = validate_get(&param) {
            alert::show(&e.to_string());
            return;
        }
        form.update(|f| f.get_in_flight = true);
        let client = client.clone();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_get(client.as_ref(), &api, &param).await;
            form.update(|f| {
                f.get_in_flight = false;
                if let Ok(text) = outcome {
                    f.get_response = Some(text);
                }
            });
        });
    };

    view! {
        <section class="request-card">
            <h2 class="request-card__title">"GET Request"</h2>
            <label class="request-card__field">
                <span>"Parameter"</span>
                <input
                    type="text"
                    placeholder="Enter GET parameter"
                    prop:value=move || form.with(|f| f.get_param.clone())
                    on:input=move |ev| form.update(|f| f.get_param = event_target_value(&ev))
                />
            </label>
            <button
                class="btn btn--primary"
                disabled=move || form.with(|f| f.get_in_flight)
                on:click=on_send
            >
                {move || form.with(RequestFormState::get_button_label)}
            </button>
            {move || {
                form.with(|f| f.get_response.clone())
                    .map(|text| view! { <pre class="request-card__response">{format!("GET Response: {text}")}</pre> })
            }}
        </section>
    }
}

#[component]
pub fn PostRequestCard(form: RwSignal<RequestFormState>) -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let client = expect_context::<SharedClient>();

    let on_send = move |_| {
        let (body, param, busy) = form.with(|f| (f.post_body.clone(), f.post_param.clone(), f.post_in_flight));
        if busy {
            return;
        }
        if let Err(e) = validate_post(&body, &param) {
            alert::show(&e.to_string());
            return;
        }
        form.update(|f| f.post_in_flight = true);
        let client = client.clone();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_post(client.as_ref(), &api, &body, &param).await;
            form.update(|f| {
                f.post_in_flight = false;
                if let Ok(text) = outcome {
                    f.post_response = Some(text);
                }
            });
        });
    };

    view! {
        <section class="request-card">
            <h2 class="request-card__title">"POST Request"</h2>
            <label class="request-card__field">
                <span>"Body parameter"</span>
                <input
                    type="text"
                    placeholder="Enter POST body parameter"
                    prop:value=move || form.with(|f| f.post_body.clone())
                    on:input=move |ev| form.update(|f| f.post_body = event_target_value(&ev))
                />
            </label>
            <label class="request-card__field">
                <span>"URL parameter"</span>
                <input
                    type="text"
                    placeholder="Enter POST URL parameter"
                    prop:value=move || form.with(|f| f.post_param.clone())
                    on:input=move |ev| form.update(|f| f.post_param = event_target_value(&ev))
                />
            </label>
            <button
                class="btn btn--primary"
                disabled=move || form.with(|f| f.post_in_flight)
                on:click=on_send
            >
                {move || form.with(RequestFormState::post_button_label)}
            </button>
            {move || {
                form.with(|f| f.post_response.clone())
                    .map(|text| view! { <pre class="request-card__response">{format!("POST Response: {text}")}</pre> })
            }}
        </section>
    }
}
