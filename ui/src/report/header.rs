use dioxus::prelude::*;

use crate::core::format;
use crate::core::intake::{SlotKind, SubmittedImages};
use crate::i18n::use_lang_marker;
use crate::t;

/// Photographs, summary and overall score. `issued_at` is omitted when empty.
#[component]
pub fn ReportHeader(images: SubmittedImages, summary: String, score: f64, issued_at: String) -> Element {
    let _lang = use_lang_marker();
    let score_label = format::format_score(score);

    rsx! {
        header { class: "report-card report-header",
            div { class: "report-header__photos",
                for kind in SlotKind::ALL {
                    figure { key: "{kind.id()}", class: "report-header__photo",
                        img {
                            src: "{images.get(kind).data_uri()}",
                            alt: "{kind.label()}",
                        }
                        figcaption { "{kind.label()}" }
                    }
                }
            }
            div { class: "report-header__body",
                div { class: "report-header__summary",
                    span { class: "report-header__eyebrow", {t!("report-summary-label")} }
                    p { class: "report-header__text", "{summary}" }
                    if !issued_at.is_empty() {
                        span { class: "report-header__issued", {t!("report-issued-at", when = issued_at.clone())} }
                    }
                }
                div { class: "report-score",
                    span { class: "report-score__label", {t!("report-score-label")} }
                    strong { class: "report-score__value", "{score_label}" }
                    span { class: "report-score__scale", "/ 100" }
                }
            }
        }
    }
}
