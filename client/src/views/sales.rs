//! Sales by category and region as grouped vertical bars.

#[cfg(test)]
#[path = "sales_test.rs"]
mod sales_test;

use super::{AxisSide, ChartConfig, Orientation, Series, ValueAxis, ViewConfig, category_tooltips, palette_color};
use crate::net::types::SalesData;

pub const TITLE: &str = "Sales Analysis by Category and Region";

pub fn derive(payload: Option<&SalesData>) -> ViewConfig {
    let Some(payload) = payload else {
        return ViewConfig::default();
    };

    let series: Vec<Series> = payload
        .series
        .iter()
        .enumerate()
        .map(|(idx, s)| Series::bar(s.name.clone(), s.data.clone(), palette_color(idx)).with_value_prefix("$"))
        .collect();

    let chart = ChartConfig {
        title: TITLE.to_owned(),
        orientation: Orientation::Vertical,
        categories: payload.regions.clone(),
        inverse_categories: false,
        legend: payload.categories.clone(),
        value_axes: vec![ValueAxis::new("Sales Amount ($)", AxisSide::Left).with_label_prefix("$")],
        tooltips: category_tooltips(&payload.regions, &series),
        series,
    };

    ViewConfig { title: TITLE.to_owned(), chart: Some(chart), ..ViewConfig::default() }
}
