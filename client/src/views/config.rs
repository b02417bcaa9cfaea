//! Declarative description of what a panel renders.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::format::{format_auto, format_number};

/// Everything a panel shows once its payload has arrived.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewConfig {
    /// Card title.
    pub title: String,
    /// Free-text message shown above the content, if any.
    pub message: Option<String>,
    /// Label/value rows rendered as a small table.
    pub details: Vec<Detail>,
    /// Statistic cards rendered in a row above the chart.
    pub stats: Vec<StatCard>,
    pub chart: Option<ChartConfig>,
}

impl ViewConfig {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.details.is_empty() && self.stats.is_empty() && self.chart.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

/// A single headline number.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: f64,
    /// Digits after the decimal point.
    pub precision: usize,
    pub prefix: String,
    pub suffix: String,
}

impl StatCard {
    pub fn new(title: impl Into<String>, value: f64) -> Self {
        Self { title: title.into(), value, ..Self::default() }
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Formatted value, e.g. `$1,234.50`.
    #[must_use]
    pub fn display_value(&self) -> String {
        format!("{}{}{}", self.prefix, format_number(self.value, self.precision), self.suffix)
    }
}

/// Direction the category axis runs in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Categories along the bottom, values upward.
    #[default]
    Vertical,
    /// Categories down the left side, values to the right.
    Horizontal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisSide {
    #[default]
    Left,
    Right,
}

/// A value axis; series refer to it by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueAxis {
    pub name: String,
    pub side: AxisSide,
    /// Prepended to tick labels, e.g. `$`.
    pub label_prefix: String,
}

impl ValueAxis {
    pub fn new(name: impl Into<String>, side: AxisSide) -> Self {
        Self { name: name.into(), side, label_prefix: String::new() }
    }

    #[must_use]
    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeriesKind {
    #[default]
    Bar,
    Line,
}

/// One data series plotted against the category axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub data: Vec<f64>,
    pub color: String,
    /// Per-point colours for bars; empty means every point uses `color`.
    pub point_colors: Vec<String>,
    /// Index into [`ChartConfig::value_axes`].
    pub axis: usize,
    pub smooth: bool,
    /// Fill the area under a line.
    pub area: bool,
    pub show_labels: bool,
    /// Prepended to data labels and tooltip values, e.g. `$`.
    pub value_prefix: String,
}

impl Series {
    pub fn bar(name: impl Into<String>, data: Vec<f64>, color: impl Into<String>) -> Self {
        Self { name: name.into(), kind: SeriesKind::Bar, data, color: color.into(), ..Self::default() }
    }

    pub fn line(name: impl Into<String>, data: Vec<f64>, color: impl Into<String>) -> Self {
        Self { name: name.into(), kind: SeriesKind::Line, data, color: color.into(), ..Self::default() }
    }

    #[must_use]
    pub fn on_axis(mut self, axis: usize) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_labels(mut self) -> Self {
        self.show_labels = true;
        self
    }

    #[must_use]
    pub fn with_value_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.value_prefix = prefix.into();
        self
    }

    /// Display text for the point at `index`, e.g. `$1,200`.
    #[must_use]
    pub fn value_label(&self, index: usize) -> Option<String> {
        self.data
            .get(index)
            .map(|v| format!("{}{}", self.value_prefix, format_auto(*v)))
    }

    /// Colour of the point at `index`.
    #[must_use]
    pub fn color_at(&self, index: usize) -> &str {
        self.point_colors.get(index).map_or(self.color.as_str(), String::as_str)
    }
}

/// A category chart with one or two value axes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub orientation: Orientation,
    /// Category axis labels, already formatted for display.
    pub categories: Vec<String>,
    /// Draw the first category furthest from the origin (top of a horizontal chart).
    pub inverse_categories: bool,
    pub legend: Vec<String>,
    pub value_axes: Vec<ValueAxis>,
    pub series: Vec<Series>,
    /// Hover text per category.
    pub tooltips: Vec<String>,
}

impl ChartConfig {
    /// Largest finite value plotted on `axis`, or 0 when the axis is empty.
    #[must_use]
    pub fn axis_max(&self, axis: usize) -> f64 {
        self.series
            .iter()
            .filter(|s| s.axis == axis)
            .flat_map(|s| s.data.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}
