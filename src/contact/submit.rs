//! Background half of a contact submission and the status reset timer.

use crate::app::event::AppEvent;
use crate::contact::client::ContactClient;
use crate::contact::error::ContactError;
use crate::contact::form::FormData;
use crate::contact::store::SubmissionToken;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Default grace period before a success or error notice is cleared.
pub const STATUS_RESET_DELAY: Duration = Duration::from_millis(3000);

pub type SubmitOutcome = Result<(), ContactError>;

/// Post `form` once and classify the reply. Only 200 and 201 count as sent.
pub async fn submit(client: &dyn ContactClient, form: &FormData) -> SubmitOutcome {
    let status = client.post_contact(form).await?;
    match status {
        200 | 201 => Ok(()),
        status => Err(ContactError::UnexpectedResponse { status }),
    }
}

/// Run submission `token` and report its outcome to the event loop.
///
/// Never fails outward: transport errors and unexpected statuses end up in
/// the [`AppEvent::SubmissionFinished`] outcome.
pub fn spawn_submission(
    client: Arc<dyn ContactClient>,
    token: SubmissionToken,
    form: FormData,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(token, "submitting contact form");
        let outcome = submit(client.as_ref(), &form).await;
        match &outcome {
            Ok(()) => tracing::info!(token, "contact form submitted"),
            Err(e) => tracing::error!(token, error = %e, "Form submission failed"),
        }
        let _ = event_tx.send(AppEvent::SubmissionFinished { token, outcome });
    })
}

/// Ask the event loop to clear the status of submission `token` after `delay`.
pub fn spawn_status_reset(
    token: SubmissionToken,
    delay: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = event_tx.send(AppEvent::StatusReset { token });
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted stand-in for the HTTP client.
    pub(crate) struct FakeClient {
        reply: Option<u16>,
        pub(crate) received: Mutex<Vec<FormData>>,
    }

    impl FakeClient {
        pub(crate) fn status(status: u16) -> Self {
            Self {
                reply: Some(status),
                received: Mutex::new(Vec::new()),
            }
        }

        /// Simulates a request that never reached the server.
        pub(crate) fn unreachable() -> Self {
            Self {
                reply: None,
                received: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ContactClient for FakeClient {
        async fn post_contact(&self, form: &FormData) -> Result<u16, ContactError> {
            self.received.lock().unwrap().push(form.clone());
            match self.reply {
                Some(status) => Ok(status),
                None => Err(ContactError::InvalidBaseUrl("unreachable".into())),
            }
        }
    }

    fn jane() -> FormData {
        FormData::new("Jane", "jane@x.com", "Hi")
    }

    #[tokio::test]
    async fn test_submit_classifies_status() {
        for status in [200, 201] {
            assert!(submit(&FakeClient::status(status), &jane()).await.is_ok());
        }
        for status in [204, 301, 400, 500] {
            let err = submit(&FakeClient::status(status), &jane()).await.unwrap_err();
            assert!(matches!(err, ContactError::UnexpectedResponse { status: s } if s == status));
        }
        assert!(submit(&FakeClient::unreachable(), &jane()).await.is_err());
    }

    #[tokio::test]
    async fn test_spawn_submission_reports_outcome() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let client = Arc::new(FakeClient::status(201));
        spawn_submission(client.clone(), 7, jane(), tx).await.unwrap();

        match rx.recv().await {
            Some(AppEvent::SubmissionFinished { token, outcome }) => {
                assert_eq!(token, 7);
                assert!(outcome.is_ok());
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(client.received.lock().unwrap().as_slice(), &[jane()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_reset_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = tokio::time::Instant::now();
        spawn_status_reset(3, STATUS_RESET_DELAY, tx);

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(rx.try_recv().is_err());

        let event = rx.recv().await;
        assert!(matches!(event, Some(AppEvent::StatusReset { token: 3 })));
        assert!(start.elapsed() >= STATUS_RESET_DELAY);
    }
}
