use dioxus::prelude::*;

use crate::i18n::use_lang_marker;
use crate::t;

#[component]
pub fn AnalyzingPanel() -> Element {
    let _lang = use_lang_marker();
    rsx! {
        section { class: "page analyzing", aria_live: "polite",
            div { class: "analyzing__spinner", aria_hidden: "true" }
            h2 { class: "analyzing__title", {t!("analyzing-title")} }
            p { class: "analyzing__detail", {t!("analyzing-detail")} }
        }
    }
}
