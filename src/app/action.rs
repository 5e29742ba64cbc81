use crate::contact::form::FormData;
use crate::contact::store::SubmissionToken;

/// Side effects requested by the handler and carried out by the event loop.
#[derive(Debug, PartialEq)]
pub enum Action {
    Submit { token: SubmissionToken, form: FormData },
    ScheduleStatusReset { token: SubmissionToken },
    Quit,
}
