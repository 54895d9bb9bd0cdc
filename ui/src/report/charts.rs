use dioxus::prelude::*;

use super::ChartDatum;
use crate::core::format;
use crate::i18n::use_lang_marker;

const PALETTE: [&str; 5] = ["#0f172a", "#334155", "#64748b", "#94a3b8", "#cbd5e1"];

const DONUT_RADIUS: f64 = 48.0;
const DONUT_STROKE: f64 = 18.0;
const DONUT_CENTER: f64 = 60.0;

fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One ring segment expressed as a dash pattern on a full circle.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DonutArc {
    pub dash: f64,
    pub gap: f64,
    pub offset: f64,
    pub color: &'static str,
}

fn donut_circumference() -> f64 {
    2.0 * std::f64::consts::PI * DONUT_RADIUS
}

/// Arcs proportional to each value's share of the series total. Values are
/// drawn as given; a series with no positive total draws an empty ring.
pub(crate) fn donut_arcs(data: &[ChartDatum]) -> Vec<DonutArc> {
    let total: f64 = data
        .iter()
        .map(|d| d.value)
        .filter(|v| v.is_finite() && *v > 0.0)
        .sum();
    if !(total.is_finite() && total > 0.0) {
        return Vec::new();
    }

    let circumference = donut_circumference();
    let mut consumed = 0.0;
    data.iter()
        .enumerate()
        .filter(|(_, d)| d.value.is_finite() && d.value > 0.0)
        .map(|(index, d)| {
            let dash = d.value / total * circumference;
            let arc = DonutArc {
                dash,
                gap: circumference - dash,
                offset: -consumed,
                color: palette_color(index),
            };
            consumed += dash;
            arc
        })
        .collect()
}

/// Bar lengths as a percentage of the largest value in the series.
pub(crate) fn bar_widths(data: &[ChartDatum]) -> Vec<f64> {
    let max = data
        .iter()
        .map(|d| d.value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    data.iter()
        .map(|d| {
            if max > 0.0 && d.value.is_finite() && d.value > 0.0 {
                (d.value / max * 100.0).min(100.0)
            } else {
                0.0
            }
        })
        .collect()
}

#[component]
pub fn DonutChart(data: Vec<ChartDatum>) -> Element {
    let _lang = use_lang_marker();
    let arcs = donut_arcs(&data);
    let size = DONUT_CENTER * 2.0;
    let rotate = format!("rotate(-90 {DONUT_CENTER} {DONUT_CENTER})");

    rsx! {
        div { class: "donut",
            svg {
                class: "donut__ring",
                view_box: "0 0 {size} {size}",
                circle {
                    cx: "{DONUT_CENTER}",
                    cy: "{DONUT_CENTER}",
                    r: "{DONUT_RADIUS}",
                    fill: "none",
                    stroke: "#e2e8f0",
                    stroke_width: "{DONUT_STROKE}",
                }
                for arc in arcs {
                    circle {
                        cx: "{DONUT_CENTER}",
                        cy: "{DONUT_CENTER}",
                        r: "{DONUT_RADIUS}",
                        fill: "none",
                        stroke: arc.color,
                        stroke_width: "{DONUT_STROKE}",
                        stroke_dasharray: format!("{:.3} {:.3}", arc.dash, arc.gap),
                        stroke_dashoffset: format!("{:.3}", arc.offset),
                        transform: rotate.clone(),
                    }
                }
            }
            ul { class: "chart-legend",
                for (index, datum) in data.iter().enumerate() {
                    li { class: "chart-legend__item",
                        span {
                            class: "chart-legend__swatch",
                            style: format!("background: {}", palette_color(index)),
                        }
                        span { class: "chart-legend__label", "{datum.segment.label()}" }
                        span { class: "chart-legend__value", "{format::format_share(datum.value)}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn HorizontalBarChart(data: Vec<ChartDatum>) -> Element {
    let _lang = use_lang_marker();
    let widths = bar_widths(&data);

    rsx! {
        ul { class: "bars",
            for (index, (datum, width)) in data.iter().zip(widths).enumerate() {
                li { class: "bars__row",
                    span { class: "bars__label", "{datum.segment.label()}" }
                    div { class: "bars__track",
                        div {
                            class: "bars__fill",
                            style: format!("width: {width:.1}%; background: {}", palette_color(index)),
                        }
                    }
                    span { class: "bars__value", "{format::format_share(datum.value)}" }
                }
            }
        }
    }
}
