use super::*;
use crate::views::{Series, ValueAxis};

fn vertical_bars(data: Vec<f64>) -> ChartConfig {
    ChartConfig {
        categories: (0..data.len()).map(|i| format!("c{i}")).collect(),
        value_axes: vec![ValueAxis::new("Value", AxisSide::Left)],
        series: vec![Series::bar("s", data, "#5470c6")],
        ..ChartConfig::default()
    }
}

const EPS: f64 = 1e-9;

// =============================================================
// Scales
// =============================================================

#[test]
fn nice_ceiling_rounds_up_to_friendly_steps() {
    assert!((nice_ceiling(300.0) - 500.0).abs() < EPS);
    assert!((nice_ceiling(1730.0) - 2000.0).abs() < EPS);
    assert!((nice_ceiling(2.2) - 2.5).abs() < EPS);
    assert!((nice_ceiling(45.0) - 50.0).abs() < EPS);
}

#[test]
fn nice_ceiling_of_empty_axis_is_one() {
    assert_eq!(nice_ceiling(0.0), 1.0);
    assert_eq!(nice_ceiling(-5.0), 1.0);
    assert_eq!(nice_ceiling(f64::NAN), 1.0);
}

#[test]
fn tick_values_are_evenly_spaced() {
    assert_eq!(tick_values(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(tick_values(10.0, 0), vec![0.0]);
}

// =============================================================
// Paths
// =============================================================

#[test]
fn straight_line_path() {
    assert_eq!(line_path(&[(0.0, 10.0), (5.0, 2.5)], false), "M0.0,10.0 L5.0,2.5");
}

#[test]
fn smooth_line_path_uses_curves_through_every_point() {
    let path = line_path(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)], true);
    assert!(path.starts_with("M0.0,0.0 C"));
    assert!(path.ends_with(" 20.0,0.0"));
    assert_eq!(path.matches('C').count(), 2);
}

#[test]
fn empty_line_path() {
    assert_eq!(line_path(&[], true), "");
}

// =============================================================
// Layout
// =============================================================

#[test]
fn bar_heights_are_proportional_to_values() {
    let scene = layout(&vertical_bars(vec![50.0, 100.0]), DEFAULT_WIDTH, DEFAULT_HEIGHT);
    assert_eq!(scene.bars.len(), 2);
    assert!((scene.bars[1].height - scene.plot.height).abs() < EPS);
    assert!((scene.bars[0].height - scene.plot.height / 2.0).abs() < EPS);
    assert!((scene.bars[0].y + scene.bars[0].height - scene.plot.bottom()).abs() < EPS);
}

#[test]
fn grouped_bars_sit_side_by_side() {
    let mut chart = vertical_bars(vec![10.0, 20.0]);
    chart.series.push(Series::bar("t", vec![15.0, 5.0], "#91cc75"));
    let scene = layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    assert_eq!(scene.bars.len(), 4);
    // First category: series "s" then series "t".
    let first = &scene.bars[0];
    let second = &scene.bars[2];
    assert!(first.x + first.width <= second.x + EPS);
    assert_eq!(second.color, "#91cc75");
}

#[test]
fn horizontal_inverse_puts_first_category_on_top() {
    let chart = ChartConfig {
        orientation: Orientation::Horizontal,
        inverse_categories: true,
        ..vertical_bars(vec![30.0, 20.0, 10.0])
    };
    let scene = layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    assert!(scene.bars[0].y < scene.bars[1].y);
    assert!(scene.bars[1].y < scene.bars[2].y);
    assert!((scene.bars[0].x - scene.plot.x).abs() < EPS);
    assert!(scene.bars[0].width > scene.bars[2].width);
}

#[test]
fn horizontal_inverse_orders_ticks_and_hover_bands_top_down() {
    let chart = ChartConfig {
        orientation: Orientation::Horizontal,
        inverse_categories: true,
        ..vertical_bars(vec![30.0, 20.0, 10.0])
    };
    let scene = layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    assert_eq!(scene.category_ticks[0].text, "c0");
    assert!(scene.category_ticks[0].y < scene.category_ticks[2].y);
    assert!((scene.hover_bands[0].y - scene.plot.y).abs() < EPS);
    let last = &scene.hover_bands[2];
    assert!((last.y + last.height - scene.plot.bottom()).abs() < EPS);
}

#[test]
fn vertical_inverse_puts_first_category_on_the_right() {
    let chart = ChartConfig { inverse_categories: true, ..vertical_bars(vec![1.0, 2.0]) };
    let scene = layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    assert!(scene.bars[0].x > scene.bars[1].x);
}

#[test]
fn horizontal_without_inverse_puts_first_category_at_bottom() {
    let chart = ChartConfig { orientation: Orientation::Horizontal, ..vertical_bars(vec![1.0, 2.0]) };
    let scene = layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    assert!(scene.bars[0].y > scene.bars[1].y);
}

#[test]
fn right_axis_widens_right_margin() {
    let single = layout(&vertical_bars(vec![1.0]), DEFAULT_WIDTH, DEFAULT_HEIGHT);
    let mut dual_chart = vertical_bars(vec![1.0]);
    dual_chart.value_axes.push(ValueAxis::new("Other", AxisSide::Right));
    let dual = layout(&dual_chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    assert!(dual.plot.width < single.plot.width);
    assert!(dual.value_ticks.iter().any(|t| t.anchor == Anchor::Start));
}

#[test]
fn line_series_on_second_axis_uses_its_own_scale() {
    let chart = ChartConfig {
        categories: vec!["a".into(), "b".into()],
        value_axes: vec![ValueAxis::new("Sales", AxisSide::Left), ValueAxis::new("Orders", AxisSide::Right)],
        series: vec![
            Series::bar("Sales", vec![1000.0, 500.0], "#000"),
            Series::line("Orders", vec![5.0, 10.0], "#111").on_axis(1),
        ],
        ..ChartConfig::default()
    };
    let scene = layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    let line = &scene.lines[0];
    assert_eq!(line.points.len(), 2);
    // 10 is the top of a 0..10 scale.
    assert!((line.points[1].1 - scene.plot.y).abs() < EPS);
    assert!(line.area_path.is_none());
}

#[test]
fn area_line_closes_to_baseline() {
    let mut series = Series::line("Sales", vec![1.0, 2.0], "#ee6666");
    series.area = true;
    let chart = ChartConfig {
        categories: vec!["a".into(), "b".into()],
        value_axes: vec![ValueAxis::new("Sales", AxisSide::Left)],
        series: vec![series],
        ..ChartConfig::default()
    };
    let scene = layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    let area = scene.lines[0].area_path.as_deref().unwrap();
    assert!(area.ends_with('Z'));
    assert!(area.contains(&format!("{:.1}", scene.plot.bottom())));
}

#[test]
fn value_labels_only_for_labelled_series() {
    let mut chart = vertical_bars(vec![1200.0]);
    assert!(layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT).value_labels.is_empty());
    chart.series[0] = chart.series[0].clone().with_labels().with_value_prefix("$");
    let scene = layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    assert_eq!(scene.value_labels[0].text, "$1,200");
}

#[test]
fn hover_bands_carry_tooltips_with_category_fallback() {
    let mut chart = vertical_bars(vec![1.0, 2.0]);
    chart.tooltips = vec!["first tip".into()];
    let scene = layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    assert_eq!(scene.hover_bands[0].tooltip, "first tip");
    assert_eq!(scene.hover_bands[1].tooltip, "c1");
}

#[test]
fn data_beyond_categories_is_not_drawn() {
    let mut chart = vertical_bars(vec![1.0, 2.0]);
    chart.series[0].data.push(3.0);
    assert_eq!(layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT).bars.len(), 2);
}

#[test]
fn empty_chart_still_has_axis_ticks() {
    let chart = ChartConfig {
        value_axes: vec![ValueAxis::new("Value", AxisSide::Left).with_label_prefix("$")],
        ..ChartConfig::default()
    };
    let scene = layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    assert!(scene.bars.is_empty() && scene.lines.is_empty());
    assert_eq!(scene.value_ticks.first().map(|t| t.text.as_str()), Some("$0"));
    assert_eq!(scene.value_ticks.last().map(|t| t.text.as_str()), Some("$1"));
}

#[test]
fn legend_takes_series_colors() {
    let mut chart = vertical_bars(vec![1.0]);
    chart.legend = vec!["s".into(), "missing".into()];
    let scene = layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    assert_eq!(scene.legend[0].color, "#5470c6");
    assert_eq!(scene.legend[1].color, "#91cc75");
}
