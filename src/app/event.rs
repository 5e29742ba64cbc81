use crate::contact::store::SubmissionToken;
use crate::contact::submit::SubmitOutcome;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Background request for a submission finished
    SubmissionFinished {
        token: SubmissionToken,
        outcome: SubmitOutcome,
    },

    /// Grace period of a submission's notice is over
    StatusReset { token: SubmissionToken },

    /// Tick for UI refresh
    Tick,
}
