use dioxus::prelude::*;

use crate::i18n::use_lang_marker;
use crate::t;

/// Numbered procedure plan. Renders nothing when there are no items.
#[component]
pub fn MedicalPlan(items: Vec<String>) -> Element {
    let _lang = use_lang_marker();
    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "report-card medical-plan",
            div { class: "medical-plan__header",
                h3 { class: "report-card__title", {t!("medical-plan-title")} }
                span { class: "medical-plan__badge", {t!("medical-plan-badge")} }
            }
            ol { class: "medical-plan__list",
                for (number, item) in items.iter().enumerate().map(|(i, item)| (format!("{:02}", i + 1), item)) {
                    li { class: "medical-plan__item",
                        span { class: "medical-plan__index", "{number}" }
                        p { class: "medical-plan__text", "{item}" }
                    }
                }
            }
            p { class: "medical-plan__disclaimer", {t!("medical-plan-disclaimer")} }
        }
    }
}

/// Titled list of advice; `modifier` selects the accent colour.
#[component]
pub fn SuggestionBox(title: String, modifier: &'static str, items: Vec<String>) -> Element {
    let _lang = use_lang_marker();
    rsx! {
        section { class: "report-card suggestion-box suggestion-box--{modifier}",
            h3 { class: "report-card__title", "{title}" }
            if items.is_empty() {
                p { class: "suggestion-box__empty", {t!("suggestions-empty")} }
            } else {
                ul { class: "suggestion-box__list",
                    for item in items.iter() {
                        li { class: "suggestion-box__item", "{item}" }
                    }
                }
            }
        }
    }
}
