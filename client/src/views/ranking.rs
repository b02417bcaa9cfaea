//! Top products as horizontal bars, best seller on top.

#[cfg(test)]
#[path = "ranking_test.rs"]
mod ranking_test;

use super::{AxisSide, ChartConfig, Orientation, Series, ValueAxis, ViewConfig, PALETTE};
use crate::net::types::ProductRanking;
use crate::util::format::format_auto;

pub const TITLE: &str = "Top Products Sales Ranking";
pub const CHART_TITLE: &str = "Top 10 Products by Sales";

pub fn derive(payload: Option<&ProductRanking>) -> ViewConfig {
    let Some(payload) = payload else {
        return ViewConfig::default();
    };

    let mut sales = Series::bar("Sales", payload.sales.clone(), PALETTE[0])
        .with_labels()
        .with_value_prefix("$");
    sales.point_colors = (0..payload.sales.len())
        .map(|idx| super::palette_color(idx).to_owned())
        .collect();

    let tooltips = payload
        .products
        .iter()
        .enumerate()
        .map(|(idx, product)| {
            let amount = payload.sales.get(idx).map_or_else(|| "-".to_owned(), |v| format_auto(*v));
            let orders = payload.counts.get(idx).map_or_else(|| "-".to_owned(), |v| format_auto(*v));
            format!("{product} | Sales: ${amount} | Orders: {orders}")
        })
        .collect();

    let chart = ChartConfig {
        title: CHART_TITLE.to_owned(),
        orientation: Orientation::Horizontal,
        categories: payload.products.clone(),
        inverse_categories: true,
        legend: Vec::new(),
        value_axes: vec![ValueAxis::new("Sales Amount ($)", AxisSide::Left).with_label_prefix("$")],
        series: vec![sales],
        tooltips,
    };

    ViewConfig { title: TITLE.to_owned(), chart: Some(chart), ..ViewConfig::default() }
}
