//! Sidebar navigation for dashboard sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Writes `UiState::section`; the dashboard page remounts its data panel when
//! the selection changes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::panels::PanelKind;
use crate::state::ui::UiState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let collapsed = move || ui.with(|u| u.sidebar_collapsed);

    view! {
        <nav class="sidebar" class:sidebar--collapsed=collapsed>
            <div class="sidebar__header">
                <span class="sidebar__brand">"Analytics"</span>
                <button
                    class="sidebar__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    {move || if collapsed() { "»" } else { "«" }}
                </button>
            </div>
            <ul class="sidebar__items">
                {PanelKind::ALL
                    .into_iter()
                    .map(|kind| {
                        let active = move || ui.with(|u| u.section == kind);
                        view! {
                            <li>
                                <button
                                    class="sidebar__item"
                                    class:sidebar__item--active=active
                                    on:click=move |_| {
                                        ui.update(|u| {
                                            u.select(kind);
                                        });
                                    }
                                >
                                    {kind.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="sidebar__footer">
                <A href="/requests" attr:class="sidebar__link">
                    "Request Tester"
                </A>
            </div>
        </nav>
    }
}
