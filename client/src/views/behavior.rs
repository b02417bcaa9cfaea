//! User actions: counts as bars, mean durations as a line on a second axis.

#[cfg(test)]
#[path = "behavior_test.rs"]
mod behavior_test;

use super::{AxisSide, ChartConfig, Orientation, Series, StatCard, ValueAxis, ViewConfig, category_tooltips};
use crate::net::types::UserBehavior;
use crate::util::format::finite_sum;

pub const TITLE: &str = "User Behavior Analytics";
const COUNT_SERIES: &str = "Action Count";
const DURATION_SERIES: &str = "Average Duration (seconds)";

#[allow(clippy::cast_precision_loss)]
pub fn derive(payload: Option<&UserBehavior>) -> ViewConfig {
    let Some(payload) = payload else {
        return ViewConfig::default();
    };

    let stats = vec![
        StatCard::new("Total Actions", finite_sum(&payload.counts)),
        StatCard::new("Average Duration", average_duration(&payload.durations)).with_suffix(" seconds"),
        StatCard::new("Action Types", payload.actions.len() as f64),
    ];

    let series = vec![
        Series::bar(COUNT_SERIES, payload.counts.clone(), "#5470c6").with_labels(),
        Series::line(DURATION_SERIES, payload.durations.clone(), "#91cc75").on_axis(1),
    ];

    let chart = ChartConfig {
        title: TITLE.to_owned(),
        orientation: Orientation::Vertical,
        categories: payload.actions.clone(),
        inverse_categories: false,
        legend: vec![COUNT_SERIES.to_owned(), DURATION_SERIES.to_owned()],
        value_axes: vec![
            ValueAxis::new("Action Count", AxisSide::Left),
            ValueAxis::new("Duration (seconds)", AxisSide::Right),
        ],
        tooltips: category_tooltips(&payload.actions, &series),
        series,
    };

    ViewConfig { title: TITLE.to_owned(), stats, chart: Some(chart), ..ViewConfig::default() }
}

/// Mean of `durations`, rounded to whole seconds; 0 for an empty list.
#[allow(clippy::cast_precision_loss)]
pub fn average_duration(durations: &[f64]) -> f64 {
    if durations.is_empty() {
        return 0.0;
    }
    (finite_sum(durations) / durations.len() as f64).round()
}
