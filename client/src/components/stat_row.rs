//! Row of headline statistic cards.

use leptos::prelude::*;

use crate::views::StatCard;

#[component]
pub fn StatRow(stats: Vec<StatCard>) -> impl IntoView {
    view! {
        <div class="stat-row">
            {stats
                .into_iter()
                .map(|stat| {
                    let value = stat.display_value();
                    view! {
                        <div class="stat-card">
                            <span class="stat-card__title">{stat.title}</span>
                            <span class="stat-card__value">{value}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
