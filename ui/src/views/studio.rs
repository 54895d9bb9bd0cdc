use api::AnalysisClient;
use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::format;
use crate::core::intake::SlotKind;
use crate::core::session::{AnalysisPhase, Session};
use crate::i18n::use_lang_marker;
use crate::report::ReportView;

use super::analyzing::AnalyzingPanel;
use super::upload::UploadPanel;

/// User actions routed through the studio's single event loop. Events are
/// handled one at a time, so an analysis call runs to completion before the
/// next event is looked at.
#[derive(Debug, Clone)]
pub enum StudioEvent {
    Capture { kind: SlotKind, bytes: Vec<u8> },
    Submit,
    Restart,
}

#[component]
pub fn Studio() -> Element {
    let _lang = use_lang_marker();

    let session = use_signal(Session::default);
    let provided = try_use_context::<AnalysisClient>();
    let client = use_hook(move || provided.unwrap_or_else(AnalysisClient::from_env));

    let events = use_coroutine(move |mut rx: UnboundedReceiver<StudioEvent>| {
        let client = client.clone();
        let mut session = session;

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    StudioEvent::Capture { kind, bytes } => {
                        session.with_mut(|s| s.capture(kind, &bytes));
                    }
                    StudioEvent::Submit => {
                        let Some(images) = session.with_mut(Session::begin_analysis) else {
                            continue;
                        };
                        tracing::info!(target: "facelab.session", "analysis started");
                        let outcome = client
                            .analyze(&images.frontal, &images.lateral, &images.oblique)
                            .await;
                        session.with_mut(|s| s.settle(outcome));
                    }
                    StudioEvent::Restart => {
                        session.with_mut(Session::reset);
                    }
                }
            }
        }
    });

    let state = session();
    let completed = match (state.phase(), state.report(), state.slots().submission()) {
        (AnalysisPhase::Completed, Some(report), Some(images)) => Some((report.clone(), images)),
        _ => None,
    };

    rsx! {
        main { class: "studio",
            {match state.phase() {
                AnalysisPhase::Idle | AnalysisPhase::Error => rsx! {
                    UploadPanel {
                        slots: state.slots().clone(),
                        ready: state.is_ready(),
                        error: state.error().map(|err| err.message()).unwrap_or_default(),
                        on_capture: move |(kind, bytes): (SlotKind, Vec<u8>)| {
                            events.send(StudioEvent::Capture { kind, bytes })
                        },
                        on_submit: move |_| events.send(StudioEvent::Submit),
                    }
                },
                AnalysisPhase::Analyzing => rsx! {
                    AnalyzingPanel {}
                },
                AnalysisPhase::Completed => rsx! {
                    if let Some((report, images)) = completed {
                        ReportView {
                            report,
                            images,
                            issued_at: state.completed_at().map(format::format_issued_at).unwrap_or_default(),
                            on_restart: move |_| events.send(StudioEvent::Restart),
                        }
                    }
                },
            }}
        }
    }
}
