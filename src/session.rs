//! The validation session: input checking, the single-flight request guard,
//! and the screen state (status, summary, cards) the surrounding shell
//! paints after each submission.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::errors::ClientError;
use crate::models::validation::{ValidationRequest, ValidationResponse};
use crate::render::{render_results, RenderedResults};
use crate::traits::backend::ValidationBackend;

/// Styling of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    None,
    Success,
    Error,
}

/// The single user-visible status message.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub message: String,
    pub kind: StatusKind,
}

impl StatusLine {
    fn empty() -> Self {
        Self {
            message: String::new(),
            kind: StatusKind::None,
        }
    }
}

/// Everything a shell needs to paint after a submission.
///
/// A successful submission replaces all three fields; a failed one clears
/// the results and response so stale cards are never mistaken for the
/// current query's.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub status: StatusLine,
    pub results: Option<RenderedResults>,
    pub last_response: Option<ValidationResponse>,
}

impl Screen {
    fn empty() -> Self {
        Self {
            status: StatusLine::empty(),
            results: None,
            last_response: None,
        }
    }
}

/// What happened to a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request ran and settled; the status line says how it went.
    Completed,
    /// A precondition failed; no network call was made.
    Rejected,
    /// Another request is in flight; the attempt was a no-op.
    Busy,
}

/// Releases the in-flight flag when dropped, so the trigger is re-enabled on
/// every exit path from a submission.
struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        if flag.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(Self { flag: flag.clone() })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// One submit/render cycle over an injected backend.
pub struct ValidationSession<B: ValidationBackend> {
    backend: B,
    in_flight: Arc<AtomicBool>,
    screen: Mutex<Screen>,
}

impl<B: ValidationBackend> ValidationSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            in_flight: Arc::new(AtomicBool::new(false)),
            screen: Mutex::new(Screen::empty()),
        }
    }

    /// Submit text to the validation endpoint and update the screen state.
    ///
    /// Both inputs are trimmed first; an empty URL or empty text sets a
    /// local error status and performs no network call. While a request is
    /// in flight further submissions are no-ops. Errors never propagate out
    /// of the session: they surface on the status line, and any previously
    /// rendered results are cleared.
    pub async fn submit(&self, api_url: &str, text: &str) -> SubmitOutcome {
        let api_url = api_url.trim();
        let text = text.trim();

        if api_url.is_empty() {
            self.set_status(ClientError::MissingApiUrl.to_string(), StatusKind::Error)
                .await;
            return SubmitOutcome::Rejected;
        }

        if text.is_empty() {
            self.set_status(ClientError::MissingText.to_string(), StatusKind::Error)
                .await;
            return SubmitOutcome::Rejected;
        }

        let _guard = match InFlightGuard::acquire(&self.in_flight) {
            Some(guard) => guard,
            None => {
                debug!("Submission ignored: a request is already in flight");
                return SubmitOutcome::Busy;
            }
        };

        info!("Submitting {} characters of text to {}", text.len(), api_url);
        self.set_status("Validating claims...".to_string(), StatusKind::Success)
            .await;

        let request = ValidationRequest::new(text);
        match self.backend.validate(api_url, &request).await {
            Ok(response) => {
                let mut screen = self.screen.lock().await;
                screen.results = Some(render_results(&response));
                screen.last_response = Some(response);
                screen.status = StatusLine {
                    message: "Validation complete.".to_string(),
                    kind: StatusKind::Success,
                };
            }
            Err(err) => {
                warn!("Validation request failed: {}", err);
                let mut screen = self.screen.lock().await;
                screen.status = StatusLine {
                    message: format!(
                        "Failed to validate: {}. Is the backend running at the API URL?",
                        err
                    ),
                    kind: StatusKind::Error,
                };
                screen.results = None;
                screen.last_response = None;
            }
        }

        SubmitOutcome::Completed
    }

    /// Snapshot of the current screen state.
    pub async fn screen(&self) -> Screen {
        self.screen.lock().await.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn set_status(&self, message: String, kind: StatusKind) {
        let mut screen = self.screen.lock().await;
        screen.status = StatusLine { message, kind };
    }
}
