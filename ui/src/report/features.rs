use api::FeatureNotes;
use dioxus::prelude::*;

use crate::i18n::use_lang_marker;
use crate::t;

/// Facial regions that carry a written note, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureRegion {
    Eyes,
    Nose,
    Lips,
    Jawline,
}

impl FeatureRegion {
    pub const ALL: [FeatureRegion; 4] = [
        FeatureRegion::Eyes,
        FeatureRegion::Nose,
        FeatureRegion::Lips,
        FeatureRegion::Jawline,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FeatureRegion::Eyes => "eyes",
            FeatureRegion::Nose => "nose",
            FeatureRegion::Lips => "lips",
            FeatureRegion::Jawline => "jawline",
        }
    }

    pub fn title(self) -> String {
        match self {
            FeatureRegion::Eyes => t!("feature-eyes"),
            FeatureRegion::Nose => t!("feature-nose"),
            FeatureRegion::Lips => t!("feature-lips"),
            FeatureRegion::Jawline => t!("feature-jawline"),
        }
    }

    pub fn note(self, notes: &FeatureNotes) -> &str {
        match self {
            FeatureRegion::Eyes => &notes.eyes,
            FeatureRegion::Nose => &notes.nose,
            FeatureRegion::Lips => &notes.lips,
            FeatureRegion::Jawline => &notes.jawline,
        }
    }
}

/// Accordion transition: selecting the open panel closes it, any other
/// selection replaces the open one.
pub fn toggle_region(open: Option<FeatureRegion>, selected: FeatureRegion) -> Option<FeatureRegion> {
    if open == Some(selected) {
        None
    } else {
        Some(selected)
    }
}

#[component]
pub fn FeaturePanels(notes: FeatureNotes) -> Element {
    let _lang = use_lang_marker();
    let mut open = use_signal(|| None::<FeatureRegion>);
    let current = open();

    rsx! {
        section { class: "report-card features",
            h3 { class: "report-card__title", {t!("features-title")} }
            ul { class: "features__list",
                for region in FeatureRegion::ALL {
                    li {
                        key: "{region.id()}",
                        class: if current == Some(region) { "features__item features__item--open" } else { "features__item" },
                        button {
                            r#type: "button",
                            class: "features__toggle",
                            aria_expanded: if current == Some(region) { "true" } else { "false" },
                            onclick: move |_| {
                                let next = toggle_region(open(), region);
                                open.set(next);
                            },
                            span { class: "features__name", "{region.title()}" }
                            span { class: "features__chevron", if current == Some(region) { "−" } else { "+" } }
                        }
                        p {
                            class: if current == Some(region) { "features__note" } else { "features__note features__note--clamped" },
                            "{region.note(&notes)}"
                        }
                    }
                }
            }
        }
    }
}
