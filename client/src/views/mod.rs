//! Pure view derivations, one module per panel.
//!
//! DESIGN
//! ======
//! Each `derive` maps a payload to a declarative [`ViewConfig`] without I/O,
//! so the same payload always yields the same configuration and the chart
//! components only ever read finished descriptions.


pub mod behavior;
pub mod config;
pub mod connection;
pub mod ranking;
pub mod sales;
pub mod trend;

pub use config::{AxisSide, ChartConfig, Detail, Orientation, Series, SeriesKind, StatCard, ValueAxis, ViewConfig};

/// Series colours, applied in order.
pub const PALETTE: [&str; 10] = [
    "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272", "#fc8452", "#9a60b4", "#ea7ccc", "#c23531",
];

/// Palette colour for position `index`, wrapping around.
#[must_use]
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One hover line per category: the category followed by every series value
/// at that position, e.g. `North | Electronics: $1,200 | Clothing: $800`.
pub fn category_tooltips(categories: &[String], series: &[Series]) -> Vec<String> {
    categories
        .iter()
        .enumerate()
        .map(|(idx, category)| {
            let mut parts = vec![category.clone()];
            parts.extend(
                series
                    .iter()
                    .filter_map(|s| s.value_label(idx).map(|label| format!("{}: {label}", s.name))),
            );
            parts.join(" | ")
        })
        .collect()
}
