//! Daily sales as a smoothed area line with daily orders as bars.

#[cfg(test)]
#[path = "trend_test.rs"]
mod trend_test;

use super::{AxisSide, ChartConfig, Orientation, Series, StatCard, ValueAxis, ViewConfig, category_tooltips};
use crate::net::types::SalesTrend;
use crate::util::format::{finite_sum, short_date};

pub const TITLE: &str = "Sales Trend Analysis";
const SALES_SERIES: &str = "Daily Sales";
const ORDERS_SERIES: &str = "Daily Orders";

#[allow(clippy::cast_precision_loss)]
pub fn derive(payload: Option<&SalesTrend>) -> ViewConfig {
    let Some(payload) = payload else {
        return ViewConfig::default();
    };

    let stats = vec![
        StatCard::new("Total Sales", finite_sum(&payload.sales))
            .with_precision(2)
            .with_prefix("$"),
        StatCard::new("Total Orders", finite_sum(&payload.orders)),
        StatCard::new("Tracking Days", payload.dates.len() as f64),
    ];

    let mut sales = Series::line(SALES_SERIES, payload.sales.clone(), "#ee6666").with_value_prefix("$");
    sales.smooth = true;
    sales.area = true;
    let series = vec![sales, Series::bar(ORDERS_SERIES, payload.orders.clone(), "#5470c6").on_axis(1)];

    let chart = ChartConfig {
        title: TITLE.to_owned(),
        orientation: Orientation::Vertical,
        categories: payload.dates.iter().map(|d| short_date(d)).collect(),
        inverse_categories: false,
        legend: vec![SALES_SERIES.to_owned(), ORDERS_SERIES.to_owned()],
        value_axes: vec![
            ValueAxis::new("Sales Amount ($)", AxisSide::Left).with_label_prefix("$"),
            ValueAxis::new("Order Count", AxisSide::Right),
        ],
        tooltips: category_tooltips(&payload.dates, &series),
        series,
    };

    ViewConfig { title: TITLE.to_owned(), stats, chart: Some(chart), ..ViewConfig::default() }
}
