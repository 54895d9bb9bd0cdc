use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

/// Top bar: brand, feature badges and the locale switcher.
///
/// The language selector updates the global loader and, if the platform
/// provided one, the shared `Signal<String>` language code so that every view
/// subscribed to it re-renders with fresh strings.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Obtain global language code signal if the platform provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = i18n::use_lang_marker();

    #[cfg(debug_assertions)]
    tracing::trace!(target: "facelab.i18n", lang = %_lang_marker, "navbar render");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                // Unknown tags resolve to the fallback; show what was selected.
                let active = i18n::current_language();
                current_lang.set(active.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(active);
                }
            }
            Err(err) => {
                tracing::warn!(target: "facelab.i18n", lang = %val, error = %err, "language switch failed");
            }
        }
    };

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true", "P" }
                        span { class: "navbar__brand-mark", {t!("brand-name")} }
                    }
                    span { class: "navbar__brand-subtitle", {t!("brand-subtitle")} }
                }

                ul { class: "navbar__badges",
                    li { class: "navbar__badge", {t!("nav-badge-tri-view")} }
                    li { class: "navbar__badge", {t!("nav-badge-skeletal")} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
