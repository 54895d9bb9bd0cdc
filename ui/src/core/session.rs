//! Application session: analysis phase, photo slots and the current report.
//!
//! Phase edges
//! -----------
//! ```text
//! Idle ──┐
//!        ├─ begin_analysis (all slots filled) ─> Analyzing ─┬─ settle(Ok)  ─> Completed
//! Error ─┘                                                 └─ settle(Err) ─> Error
//! ```
//! `reset` is the only way back to `Idle`. Every mutation goes through the
//! methods below so the report exists exactly when the phase is `Completed`.

use api::{AnalysisError, FacialAnalysisReport};
use time::OffsetDateTime;

use super::intake::{capture_image, SlotKind, SubmittedImages, UploadSlots};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Analyzing,
    Completed,
    Error,
}

/// User-facing failure notice. Stored untranslated so the banner follows
/// the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    ServiceUnavailable,
}

impl SessionError {
    pub fn message(self) -> String {
        match self {
            SessionError::ServiceUnavailable => crate::t!("error-service-unavailable"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    phase: AnalysisPhase,
    slots: UploadSlots,
    report: Option<FacialAnalysisReport>,
    error: Option<SessionError>,
    completed_at: Option<OffsetDateTime>,
}

impl Session {
    pub fn phase(&self) -> AnalysisPhase {
        self.phase
    }

    pub fn slots(&self) -> &UploadSlots {
        &self.slots
    }

    pub fn report(&self) -> Option<&FacialAnalysisReport> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<SessionError> {
        self.error
    }

    pub fn completed_at(&self) -> Option<OffsetDateTime> {
        self.completed_at
    }

    /// Submit is enabled iff every slot holds an image.
    pub fn is_ready(&self) -> bool {
        self.slots.is_complete()
    }

    /// The upload screen (and therefore capture) is reachable from these phases only.
    pub fn accepts_uploads(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Idle | AnalysisPhase::Error)
    }

    /// Store a newly selected file for `kind` and clear any error notice.
    /// Returns whether the slot changed.
    pub fn capture(&mut self, kind: SlotKind, bytes: &[u8]) -> bool {
        if !self.accepts_uploads() {
            return false;
        }
        if capture_image(&mut self.slots, kind, bytes).is_none() {
            return false;
        }
        self.error = None;
        true
    }

    /// Enter `Analyzing` and hand out the images for exactly one client call.
    pub fn begin_analysis(&mut self) -> Option<SubmittedImages> {
        if !self.accepts_uploads() {
            return None;
        }
        let images = self.slots.submission()?;
        self.phase = AnalysisPhase::Analyzing;
        self.error = None;
        Some(images)
    }

    /// Apply the outcome of the in-flight call. Ignored outside `Analyzing`.
    pub fn settle(&mut self, outcome: Result<FacialAnalysisReport, AnalysisError>) {
        if self.phase != AnalysisPhase::Analyzing {
            tracing::warn!(target: "facelab.session", phase = ?self.phase, "dropping analysis outcome outside analyzing phase");
            return;
        }

        match outcome {
            Ok(report) => {
                tracing::info!(target: "facelab.session", score = report.overall_score, "report ready");
                self.report = Some(report);
                self.completed_at = Some(OffsetDateTime::now_utc());
                self.error = None;
                self.phase = AnalysisPhase::Completed;
            }
            Err(err) => {
                tracing::error!(target: "facelab.session", kind = err.kind(), error = %err, "analysis failed");
                self.report = None;
                self.completed_at = None;
                self.error = Some(SessionError::ServiceUnavailable);
                self.phase = AnalysisPhase::Error;
            }
        }
    }

    /// Discard everything and return to the initial upload screen.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
