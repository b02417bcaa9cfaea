//! SVG renderer for a [`ChartConfig`].
//!
//! DESIGN
//! ======
//! All geometry comes from [`chart_layout::layout`]; this component only
//! emits elements. Tooltips use SVG `<title>` children so hovering works
//! without any script.

use leptos::prelude::*;

use crate::util::chart_layout::{self, DEFAULT_HEIGHT, DEFAULT_WIDTH, TextMark};
use crate::views::ChartConfig;

fn coord(value: f64) -> String {
    format!("{value:.1}")
}

fn text_marks(marks: Vec<TextMark>, class: &'static str) -> impl IntoView {
    marks
        .into_iter()
        .map(|mark| {
            view! {
                <text class=class x=coord(mark.x) y=coord(mark.y) text-anchor=mark.anchor.as_svg()>
                    {mark.text}
                </text>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn ChartView(chart: ChartConfig) -> impl IntoView {
    let scene = chart_layout::layout(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);
    let view_box = format!("0 0 {} {}", scene.width, scene.height);
    let title = chart.title.clone();

    let legend = scene
        .legend
        .into_iter()
        .map(|entry| {
            view! {
                <li class="chart__legend-item">
                    <span class="chart__swatch" style=format!("background:{}", entry.color)></span>
                    {entry.name}
                </li>
            }
        })
        .collect::<Vec<_>>();

    let grid = scene
        .grid
        .into_iter()
        .map(|g| view! { <line class="chart__grid-line" x1=coord(g.x1) y1=coord(g.y1) x2=coord(g.x2) y2=coord(g.y2)></line> })
        .collect::<Vec<_>>();

    let bars = scene
        .bars
        .into_iter()
        .map(|b| {
            view! {
                <rect x=coord(b.x) y=coord(b.y) width=coord(b.width) height=coord(b.height) fill=b.color rx="2">
                    <title>{b.title}</title>
                </rect>
            }
        })
        .collect::<Vec<_>>();

    let lines = scene
        .lines
        .into_iter()
        .map(|line| {
            let area = line.area_path.map(|d| {
                view! { <path class="chart__area" d=d fill=line.color.clone() fill-opacity="0.25" stroke="none"></path> }
            });
            let dots = line
                .points
                .iter()
                .map(|&(x, y)| view! { <circle cx=coord(x) cy=coord(y) r="3" fill=line.color.clone()></circle> })
                .collect::<Vec<_>>();
            view! {
                <g class="chart__series">
                    {area}
                    <path class="chart__line" d=line.path fill="none" stroke=line.color.clone() stroke-width="3"></path>
                    {dots}
                </g>
            }
        })
        .collect::<Vec<_>>();

    let hover = scene
        .hover_bands
        .into_iter()
        .map(|band| {
            view! {
                <rect class="chart__hover" x=coord(band.x) y=coord(band.y) width=coord(band.width) height=coord(band.height) fill="transparent">
                    <title>{band.tooltip}</title>
                </rect>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <figure class="chart">
            <figcaption class="chart__title">{title.clone()}</figcaption>
            <ul class="chart__legend">{legend}</ul>
            <svg class="chart__svg" viewBox=view_box role="img" aria-label=title>
                <g class="chart__grid">{grid}</g>
                <g class="chart__bars">{bars}</g>
                <g class="chart__lines">{lines}</g>
                <g class="chart__hover-bands">{hover}</g>
                <g class="chart__value-labels">{text_marks(scene.value_labels, "chart__value-label")}</g>
                <g class="chart__axis">
                    {text_marks(scene.category_ticks, "chart__tick chart__tick--category")}
                    {text_marks(scene.value_ticks, "chart__tick chart__tick--value")}
                    {text_marks(scene.axis_titles, "chart__axis-title")}
                </g>
            </svg>
        </figure>
    }
}
