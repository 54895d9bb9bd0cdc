//! Report renderer: a read-only view of one [`FacialAnalysisReport`] plus the
//! three photographs it was produced from.

mod charts;
pub use charts::{DonutChart, HorizontalBarChart};

mod features;
pub use features::{toggle_region, FeaturePanels, FeatureRegion};

mod header;
pub use header::ReportHeader;

mod suggestions;
pub use suggestions::{MedicalPlan, SuggestionBox};

use api::{FacialAnalysisReport, FiveEyes, ThreeParts};
use dioxus::prelude::*;

use crate::core::intake::SubmittedImages;
use crate::i18n::use_lang_marker;
use crate::t;

/// One labelled share in a proportion chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProportionSegment {
    Upper,
    Middle,
    Lower,
    LeftSide,
    LeftEye,
    EyeGap,
    RightEye,
    RightSide,
}

impl ProportionSegment {
    pub fn label(self) -> String {
        match self {
            ProportionSegment::Upper => t!("chart-upper"),
            ProportionSegment::Middle => t!("chart-middle"),
            ProportionSegment::Lower => t!("chart-lower"),
            ProportionSegment::LeftSide => t!("chart-left-side"),
            ProportionSegment::LeftEye => t!("chart-left-eye"),
            ProportionSegment::EyeGap => t!("chart-eye-gap"),
            ProportionSegment::RightEye => t!("chart-right-eye"),
            ProportionSegment::RightSide => t!("chart-right-side"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub segment: ProportionSegment,
    pub value: f64,
}

/// Vertical thirds as a chart series, top to bottom.
pub fn three_parts_series(parts: &ThreeParts) -> Vec<ChartDatum> {
    vec![
        ChartDatum { segment: ProportionSegment::Upper, value: parts.upper },
        ChartDatum { segment: ProportionSegment::Middle, value: parts.middle },
        ChartDatum { segment: ProportionSegment::Lower, value: parts.lower },
    ]
}

/// Horizontal fifths as a chart series, left to right.
pub fn five_eyes_series(eyes: &FiveEyes) -> Vec<ChartDatum> {
    vec![
        ChartDatum { segment: ProportionSegment::LeftSide, value: eyes.left_side },
        ChartDatum { segment: ProportionSegment::LeftEye, value: eyes.left_eye },
        ChartDatum { segment: ProportionSegment::EyeGap, value: eyes.middle },
        ChartDatum { segment: ProportionSegment::RightEye, value: eyes.right_eye },
        ChartDatum { segment: ProportionSegment::RightSide, value: eyes.right_side },
    ]
}

#[component]
pub fn ReportView(
    report: FacialAnalysisReport,
    images: SubmittedImages,
    issued_at: String,
    on_restart: EventHandler<()>,
) -> Element {
    let _lang = use_lang_marker();
    let three_parts = three_parts_series(&report.proportions.three_parts);
    let five_eyes = five_eyes_series(&report.proportions.five_eyes);

    rsx! {
        section { class: "page report",
            ReportHeader {
                images: images.clone(),
                summary: report.summary.clone(),
                score: report.overall_score,
                issued_at,
            }

            MedicalPlan { items: report.suggestions.medical_beauty_items().to_vec() }

            FeaturePanels { notes: report.features.clone() }

            div { class: "report__charts",
                section { class: "report-card report-chart",
                    h3 { class: "report-card__title", {t!("chart-three-parts-title")} }
                    DonutChart { data: three_parts }
                    p { class: "report-chart__description", "{report.proportions.three_parts.description}" }
                }
                section { class: "report-card report-chart",
                    h3 { class: "report-card__title", {t!("chart-five-eyes-title")} }
                    HorizontalBarChart { data: five_eyes }
                    p { class: "report-chart__description", "{report.proportions.five_eyes.description}" }
                }
            }

            div { class: "report__suggestions",
                SuggestionBox {
                    title: t!("suggestions-makeup-title"),
                    modifier: "makeup",
                    items: report.suggestions.makeup.clone(),
                }
                SuggestionBox {
                    title: t!("suggestions-lifestyle-title"),
                    modifier: "lifestyle",
                    items: report.suggestions.lifestyle.clone(),
                }
            }

            div { class: "report__footer",
                button {
                    r#type: "button",
                    class: "button button--primary report__restart",
                    onclick: move |_| on_restart.call(()),
                    {t!("report-restart")}
                }
                p { class: "report__colophon", {t!("report-colophon")} }
            }
        }
    }
}
