//! Form state store: the single source of truth for field values and the
//! submission status flag.
//!
//! The store is plain synchronous state. The asynchronous half of a
//! submission lives in [`crate::contact::submit`]; the event loop carries
//! the [`SubmissionToken`] between the two so a late completion or a stale
//! reset timer can be recognised and dropped.

use crate::contact::form::{FormData, FormStatus};
use crate::contact::submit::SubmitOutcome;

pub type SubmissionToken = u64;

#[derive(Debug, Default)]
pub struct ContactStore {
    form_data: FormData,
    form_status: FormStatus,
    latest_token: Option<SubmissionToken>,
    next_token: SubmissionToken,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    pub fn form_status(&self) -> FormStatus {
        self.form_status
    }

    /// Replace the whole field record. No validation happens here.
    pub fn set_form_data(&mut self, data: FormData) {
        self.form_data = data;
    }

    pub fn set_form_status(&mut self, status: FormStatus) {
        self.form_status = status;
    }

    /// Start a submission: snapshot the fields, enter `Loading` and issue a
    /// fresh token.
    ///
    /// Returns `None` without touching anything while another submission is
    /// still loading.
    pub fn begin_submission(&mut self) -> Option<(SubmissionToken, FormData)> {
        if self.form_status.is_loading() {
            tracing::debug!("submission ignored: previous request still in flight");
            return None;
        }
        let token = self.next_token;
        self.next_token += 1;
        self.latest_token = Some(token);
        self.set_form_status(FormStatus::Loading);
        Some((token, self.form_data.clone()))
    }

    /// Apply the outcome of submission `token`.
    ///
    /// Success clears all three fields; failure leaves them as typed.
    /// Outcomes of superseded submissions are dropped and `false` is returned.
    pub fn complete_submission(&mut self, token: SubmissionToken, outcome: &SubmitOutcome) -> bool {
        if self.latest_token != Some(token) {
            tracing::debug!(token, "dropping outcome of superseded submission");
            return false;
        }
        match outcome {
            Ok(()) => {
                self.set_form_status(FormStatus::Success);
                self.set_form_data(FormData::default());
            }
            Err(_) => self.set_form_status(FormStatus::Error),
        }
        true
    }

    /// Clear the status flag once the grace period of submission `token` is
    /// over. A timer from an older submission leaves a newer status alone.
    pub fn reset_status(&mut self, token: SubmissionToken) -> bool {
        if self.latest_token != Some(token) {
            tracing::debug!(token, "stale status reset ignored");
            return false;
        }
        self.set_form_status(FormStatus::None);
        true
    }
}
