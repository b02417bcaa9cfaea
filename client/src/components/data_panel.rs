//! Generic data panel: fetch on mount, then spinner, error, or view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard section is a `DataPanel` parameterised by [`PanelKind`].
//! The panel owns its `PanelState` exclusively; remounting (on navigation)
//! starts from a fresh state and a fresh fetch.

use leptos::prelude::*;

use crate::components::chart_view::ChartView;
use crate::components::stat_row::StatRow;
use crate::config::ApiConfig;
use crate::net::api::fetch_panel;
use crate::net::http::SharedClient;
use crate::panels::{PanelKind, PanelPayload};
use crate::state::panel::{PanelState, RenderMode};
use crate::views::ViewConfig;

/// Card that loads and renders one panel.
#[component]
pub fn DataPanel(kind: PanelKind) -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let client = expect_context::<SharedClient>();
    let state = RwSignal::new(PanelState::<PanelPayload>::loading());

    let load = Callback::new(move |()| {
        let Some(ticket) = state.try_update(PanelState::begin) else {
            return;
        };
        let client = client.clone();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = fetch_panel(client.as_ref(), &api, kind).await;
            let settled = state
                .try_update(|s| s.settle(ticket, result, kind.error_text()))
                .unwrap_or(false);
            if !settled {
                leptos::logging::debug_warn!("{}: dropped stale response", kind.slug());
            }
        });
    });

    // One fetch per mount. Effects only run in the browser.
    Effect::new(move || load.run(()));

    let title = Memo::new(move |_| {
        let derived = state.with(|s| kind.derive_view(s.fetch().payload()).title);
        if derived.is_empty() { kind.label().to_owned() } else { derived }
    });
    let is_loading = move || state.with(|s| s.fetch().is_loading());
    let has_content = move || state.with(|s| s.fetch().payload().is_some());

    view! {
        <section class="panel-card" id=format!("panel-{}", kind.slug())>
            <header class="panel-card__header">
                <h2 class="panel-card__title">{move || title.get()}</h2>
                <Show when=has_content>
                    <button
                        class="btn panel-card__refresh"
                        disabled=is_loading
                        on:click=move |_| load.run(())
                    >
                        "Refresh"
                    </button>
                </Show>
            </header>
            {move || {
                state
                    .with(|s| match s.render_mode() {
                        RenderMode::Spinner => view! {
                            <div class="panel-card__loading">
                                <div class="spinner" aria-hidden="true"></div>
                                <p>{kind.loading_text()}</p>
                            </div>
                        }
                        .into_any(),
                        RenderMode::Failed(message) => {
                            let message = message.to_owned();
                            view! {
                                <div class="panel-card__error">
                                    <div class="alert alert--error" role="alert">{message}</div>
                                    <button class="btn panel-card__retry" on:click=move |_| load.run(())>
                                        "Retry"
                                    </button>
                                </div>
                            }
                            .into_any()
                        }
                        RenderMode::Content(payload) => {
                            view! { <PanelBody config=kind.derive_view(Some(payload))/> }.into_any()
                        }
                    })
            }}
        </section>
    }
}

/// Renders a derived [`ViewConfig`].
#[component]
fn PanelBody(config: ViewConfig) -> impl IntoView {
    let ViewConfig { message, details, stats, chart, .. } = config;

    view! {
        <div class="panel-card__body">
            {message.map(|text| view! { <p class="panel-card__message">{text}</p> })}
            {(!details.is_empty())
                .then(|| {
                    view! {
                        <dl class="panel-card__details">
                            {details
                                .into_iter()
                                .map(|d| view! {
                                    <dt>{d.label}</dt>
                                    <dd>{d.value}</dd>
                                })
                                .collect::<Vec<_>>()}
                        </dl>
                    }
                })}
            {(!stats.is_empty()).then(|| view! { <StatRow stats=stats/> })}
            {chart.map(|chart| view! { <ChartView chart=chart/> })}
        </div>
    }
}
