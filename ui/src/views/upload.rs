use dioxus::prelude::*;

use crate::core::intake::{SlotKind, UploadSlots};
use crate::i18n::use_lang_marker;
use crate::t;

/// Three pickers, the error banner and the submit action.
#[component]
pub fn UploadPanel(
    slots: UploadSlots,
    ready: bool,
    error: String,
    on_capture: EventHandler<(SlotKind, Vec<u8>)>,
    on_submit: EventHandler<()>,
) -> Element {
    let _lang = use_lang_marker();
    let submit_label = if ready {
        t!("upload-submit-ready")
    } else {
        t!("upload-submit-incomplete")
    };

    rsx! {
        section { class: "page upload",
            div { class: "upload__intro",
                h1 { class: "upload__title", {t!("upload-title")} }
                p { class: "upload__lead", {t!("upload-lead")} }
            }

            if !error.is_empty() {
                div { class: "upload__error", role: "alert", "{error}" }
            }

            div { class: "upload__grid",
                for kind in SlotKind::ALL {
                    UploadBox {
                        key: "{kind.id()}",
                        kind,
                        preview: slots.get(kind).map(|image| image.data_uri().to_string()).unwrap_or_default(),
                        on_capture,
                    }
                }
            }

            div { class: "upload__actions",
                button {
                    r#type: "button",
                    class: if ready { "button button--primary upload__submit" } else { "button upload__submit" },
                    disabled: !ready,
                    onclick: move |_| {
                        if ready {
                            on_submit.call(());
                        }
                    },
                    "{submit_label}"
                }
                ul { class: "upload__privacy",
                    li { class: "upload__privacy-badge", {t!("upload-privacy-biometric")} }
                    li { class: "upload__privacy-badge", {t!("upload-privacy-encrypted")} }
                }
            }
        }
    }
}

/// One clickable picker. `preview` is the captured data URI, or empty.
#[component]
pub fn UploadBox(kind: SlotKind, preview: String, on_capture: EventHandler<(SlotKind, Vec<u8>)>) -> Element {
    let _lang = use_lang_marker();
    let filled = !preview.is_empty();
    let input_id = format!("upload-{}", kind.id());

    let on_change = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        match engine.read_file(&name).await {
            Some(bytes) => on_capture.call((kind, bytes)),
            None => {
                tracing::warn!(target: "facelab.intake", slot = kind.id(), file = %name, "selected file could not be read");
            }
        }
    };

    rsx! {
        label {
            r#for: "{input_id}",
            class: if filled { "upload-box upload-box--filled" } else { "upload-box" },
            input {
                id: "{input_id}",
                class: "upload-box__input",
                r#type: "file",
                accept: "image/*",
                onchange: on_change,
            }
            if filled {
                img { class: "upload-box__preview", src: "{preview}", alt: "{kind.label()}" }
                span { class: "upload-box__hint", {t!("upload-replace-hint")} }
                span { class: "upload-box__check", aria_hidden: "true", "✓" }
            } else {
                span { class: "upload-box__placeholder", aria_hidden: "true", "+" }
            }
            span { class: "upload-box__label", "{kind.label()}" }
            span { class: "upload-box__description", "{kind.hint()}" }
        }
    }
}
