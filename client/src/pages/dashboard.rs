//! Dashboard shell: sidebar plus the selected data panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one panel is mounted at a time. Changing the section in `UiState`
//! drops the old panel (its pending response is ignored) and mounts a new one,
//! which fetches afresh.

use leptos::prelude::*;

use crate::components::data_panel::DataPanel;
use crate::components::sidebar::Sidebar;
use crate::state::ui::UiState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    // Memo so sidebar toggles do not remount the panel.
    let section = Memo::new(move |_| ui.with(|u| u.section));

    view! {
        <div class="dashboard-page">
            <Sidebar/>
            <main class="dashboard-page__content">
                {move || {
                    let kind = section.get();
                    view! { <DataPanel kind=kind/> }
                }}
            </main>
        </div>
    }
}
