//! Geometry for rendering a [`ChartConfig`] as SVG.
//!
//! DESIGN
//! ======
//! `layout` turns a declarative chart into absolute shapes (bars, line paths,
//! text marks, hover bands) inside a fixed viewBox. The `ChartView`
//! component only emits SVG elements for the finished scene, so every
//! coordinate decision is testable without a DOM.
//!
//! Orientation decides which dimension carries categories: vertical charts
//! place categories left-to-right and grow values upward; horizontal charts
//! stack categories bottom-to-top (top-to-bottom when inverted) and grow
//! values to the right.

#[cfg(test)]
#[path = "chart_layout_test.rs"]
mod chart_layout_test;

use crate::util::format::format_auto;
use crate::views::{AxisSide, ChartConfig, Orientation, SeriesKind, palette_color};

pub const DEFAULT_WIDTH: f64 = 720.0;
pub const DEFAULT_HEIGHT: f64 = 400.0;

const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 44.0;
const MARGIN_AXIS: f64 = 64.0;
const MARGIN_NARROW: f64 = 24.0;
const MARGIN_CATEGORY_LABELS: f64 = 120.0;
const TICK_COUNT: usize = 5;
/// Share of each category slot occupied by its bar group.
const GROUP_FILL: f64 = 0.7;

/// The rectangle inside the margins where data is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    Start,
    #[default]
    Middle,
    End,
}

impl Anchor {
    /// SVG `text-anchor` value.
    #[must_use]
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextMark {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: Anchor,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub title: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineShape {
    pub path: String,
    /// Closed path for the filled area under the line, if requested.
    pub area_path: Option<String>,
    pub color: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Invisible rectangle spanning one category, carrying its tooltip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverBand {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tooltip: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
}

/// Absolute shapes for one chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartScene {
    pub width: f64,
    pub height: f64,
    pub plot: PlotArea,
    pub grid: Vec<GridLine>,
    pub bars: Vec<BarShape>,
    pub lines: Vec<LineShape>,
    pub value_labels: Vec<TextMark>,
    pub category_ticks: Vec<TextMark>,
    pub value_ticks: Vec<TextMark>,
    pub axis_titles: Vec<TextMark>,
    pub hover_bands: Vec<HoverBand>,
    pub legend: Vec<LegendEntry>,
}

/// Round `max` up to 1, 2, 2.5, or 5 times a power of ten. Non-positive or
/// non-finite input yields 1 so an empty axis still has a scale.
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10_f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|step| normalized <= *step)
        .unwrap_or(10.0);
    step * magnitude
}

/// `count + 1` evenly spaced tick values from 0 to `max`.
#[allow(clippy::cast_precision_loss)]
pub fn tick_values(max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![0.0];
    }
    (0..=count).map(|i| max * i as f64 / count as f64).collect()
}

/// SVG path through `points`; `smooth` uses Catmull-Rom curves.
pub fn line_path(points: &[(f64, f64)], smooth: bool) -> String {
    let Some(&(x0, y0)) = points.first() else {
        return String::new();
    };
    let mut path = format!("M{x0:.1},{y0:.1}");
    for i in 1..points.len() {
        let (x, y) = points[i];
        if smooth {
            let p0 = points[i.saturating_sub(2)];
            let p1 = points[i - 1];
            let p3 = points[(i + 1).min(points.len() - 1)];
            let c1 = (p1.0 + (x - p0.0) / 6.0, p1.1 + (y - p0.1) / 6.0);
            let c2 = (x - (p3.0 - p1.0) / 6.0, y - (p3.1 - p1.1) / 6.0);
            path.push_str(&format!(" C{:.1},{:.1} {:.1},{:.1} {x:.1},{y:.1}", c1.0, c1.1, c2.0, c2.1));
        } else {
            path.push_str(&format!(" L{x:.1},{y:.1}"));
        }
    }
    path
}

/// Geometry of one chart inside a `width` × `height` viewBox.
#[allow(clippy::cast_precision_loss, clippy::too_many_lines)]
pub fn layout(chart: &ChartConfig, width: f64, height: f64) -> ChartScene {
    let horizontal = chart.orientation == Orientation::Horizontal;
    let has_right_axis = chart.value_axes.iter().any(|a| a.side == AxisSide::Right);

    let left = if horizontal { MARGIN_CATEGORY_LABELS } else { MARGIN_AXIS };
    let right = if has_right_axis { MARGIN_AXIS } else { MARGIN_NARROW };
    let plot = PlotArea {
        x: left,
        y: MARGIN_TOP,
        width: (width - left - right).max(0.0),
        height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0),
    };

    let count = chart.categories.len();
    let category_len = if horizontal { plot.height } else { plot.width };
    let value_len = if horizontal { plot.width } else { plot.height };
    let slot = if count == 0 { 0.0 } else { category_len / count as f64 };

    let axis_count = chart.value_axes.len().max(1);
    let axis_max: Vec<f64> = (0..axis_count).map(|i| nice_ceiling(chart.axis_max(i))).collect();
    let scale_of = |axis: usize| axis_max.get(axis).copied().unwrap_or(1.0);

    // Start of the category slot along the category dimension.
    // Horizontal charts grow upward from the bottom; inverse puts index 0 on top.
    // Vertical charts grow rightward; inverse puts index 0 on the right.
    let slot_start = |idx: usize| -> f64 {
        match (horizontal, chart.inverse_categories) {
            (true, true) => plot.y + slot * idx as f64,
            (true, false) => plot.bottom() - slot * (idx as f64 + 1.0),
            (false, true) => plot.x + slot * (count - 1 - idx) as f64,
            (false, false) => plot.x + slot * idx as f64,
        }
    };
    let value_extent = |value: f64, axis: usize| -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        (value.max(0.0) / scale_of(axis)).min(1.0) * value_len
    };
    // Point on screen for (category, value).
    let point = |idx: usize, value: f64, axis: usize| -> (f64, f64) {
        let center = slot_start(idx) + slot / 2.0;
        let extent = value_extent(value, axis);
        if horizontal { (plot.x + extent, center) } else { (center, plot.bottom() - extent) }
    };

    let mut scene = ChartScene { width, height, plot, ..ChartScene::default() };

    // Grid and value ticks.
    for (axis_idx, axis) in chart.value_axes.iter().enumerate() {
        for tick in tick_values(scale_of(axis_idx), TICK_COUNT) {
            let offset = value_extent(tick, axis_idx);
            let text = format!("{}{}", axis.label_prefix, format_auto(tick));
            if horizontal {
                let x = plot.x + offset;
                scene.value_ticks.push(TextMark { x, y: plot.bottom() + 16.0, text, anchor: Anchor::Middle });
                if axis_idx == 0 {
                    scene.grid.push(GridLine { x1: x, y1: plot.y, x2: x, y2: plot.bottom() });
                }
            } else {
                let y = plot.bottom() - offset;
                let (x, anchor) = match axis.side {
                    AxisSide::Left => (plot.x - 6.0, Anchor::End),
                    AxisSide::Right => (plot.right() + 6.0, Anchor::Start),
                };
                scene.value_ticks.push(TextMark { x, y: y + 4.0, text, anchor });
                if axis_idx == 0 {
                    scene.grid.push(GridLine { x1: plot.x, y1: y, x2: plot.right(), y2: y });
                }
            }
        }
        let title = if horizontal {
            TextMark { x: plot.right(), y: plot.bottom() + 36.0, text: axis.name.clone(), anchor: Anchor::End }
        } else {
            let x = match axis.side {
                AxisSide::Left => plot.x,
                AxisSide::Right => plot.right(),
            };
            TextMark { x, y: plot.y - 12.0, text: axis.name.clone(), anchor: Anchor::Middle }
        };
        scene.axis_titles.push(title);
    }

    // Category ticks and hover bands.
    for (idx, category) in chart.categories.iter().enumerate() {
        let start = slot_start(idx);
        let center = start + slot / 2.0;
        let tooltip = chart.tooltips.get(idx).cloned().unwrap_or_else(|| category.clone());
        if horizontal {
            scene.category_ticks.push(TextMark { x: plot.x - 6.0, y: center + 4.0, text: category.clone(), anchor: Anchor::End });
            scene.hover_bands.push(HoverBand { x: plot.x, y: start, width: plot.width, height: slot, tooltip });
        } else {
            scene.category_ticks.push(TextMark { x: center, y: plot.bottom() + 18.0, text: category.clone(), anchor: Anchor::Middle });
            scene.hover_bands.push(HoverBand { x: start, y: plot.y, width: slot, height: plot.height, tooltip });
        }
    }

    // Bars, grouped side by side within each slot.
    let bar_series: Vec<_> = chart.series.iter().filter(|s| s.kind == SeriesKind::Bar).collect();
    if !bar_series.is_empty() {
        let group = slot * GROUP_FILL;
        let thickness = group / bar_series.len() as f64;
        for (bar_idx, series) in bar_series.iter().enumerate() {
            for (idx, value) in series.data.iter().copied().enumerate().take(count) {
                let offset = slot_start(idx) + (slot - group) / 2.0 + thickness * bar_idx as f64;
                let extent = value_extent(value, series.axis);
                let label = series.value_label(idx).unwrap_or_default();
                let (x, y, w, h) = if horizontal {
                    (plot.x, offset, extent, thickness)
                } else {
                    (offset, plot.bottom() - extent, thickness, extent)
                };
                scene.bars.push(BarShape {
                    x,
                    y,
                    width: w,
                    height: h,
                    color: series.color_at(idx).to_owned(),
                    title: format!("{} | {}: {label}", chart.categories[idx], series.name),
                });
                if series.show_labels {
                    let mark = if horizontal {
                        TextMark { x: x + w + 4.0, y: y + h / 2.0 + 4.0, text: label, anchor: Anchor::Start }
                    } else {
                        TextMark { x: x + w / 2.0, y: y - 4.0, text: label, anchor: Anchor::Middle }
                    };
                    scene.value_labels.push(mark);
                }
            }
        }
    }

    // Lines, drawn over the bars.
    for series in chart.series.iter().filter(|s| s.kind == SeriesKind::Line) {
        let points: Vec<(f64, f64)> = series
            .data
            .iter()
            .copied()
            .enumerate()
            .take(count)
            .map(|(idx, value)| point(idx, value, series.axis))
            .collect();
        if points.is_empty() {
            continue;
        }
        let path = line_path(&points, series.smooth);
        let area_path = series.area.then(|| {
            let (first, last) = (points[0], points[points.len() - 1]);
            if horizontal {
                format!("{path} L{:.1},{:.1} L{:.1},{:.1} Z", plot.x, last.1, plot.x, first.1)
            } else {
                format!("{path} L{:.1},{:.1} L{:.1},{:.1} Z", last.0, plot.bottom(), first.0, plot.bottom())
            }
        });
        if series.show_labels {
            for (idx, &(x, y)) in points.iter().enumerate() {
                let text = series.value_label(idx).unwrap_or_default();
                scene.value_labels.push(TextMark { x, y: y - 8.0, text, anchor: Anchor::Middle });
            }
        }
        scene.lines.push(LineShape { path, area_path, color: series.color.clone(), points });
    }

    scene.legend = chart
        .legend
        .iter()
        .enumerate()
        .map(|(idx, name)| LegendEntry {
            name: name.clone(),
            color: chart
                .series
                .iter()
                .find(|s| &s.name == name)
                .map_or_else(|| palette_color(idx).to_owned(), |s| s.color.clone()),
        })
        .collect();

    scene
}
