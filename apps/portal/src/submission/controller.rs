//! Submission Controller — owns the application form and its submission lifecycle.
//!
//! Lifecycle: `Idle` → `Submitting` → `Succeeded` | `Failed` → `Idle` (next interaction).
//! At most one request is in flight: `submit()` while `Submitting` is a no-op, and
//! in-flight requests are never cancelled, not even when the `submit()` future is dropped.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::errors::{PortalError, ValidationError, SUBMISSION_FAILED_MESSAGE};
use crate::gateway::{ApiGateway, GatewayError};
use crate::identity::IdentityProvider;
use crate::models::application::ApplicationSubmission;
use crate::models::evaluation::EvaluationResult;
use crate::submission::resume::ResumeFile;
use crate::submission::view::SubmissionView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Returned by selection changes attempted while a request is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("An application is already being processed")]
pub struct SubmissionInFlight;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Succeeded(EvaluationResult),
    /// Carries the user-facing message; the cause was logged.
    Failed(String),
    Rejected(ValidationError),
    /// A request was already in flight; nothing was sent.
    Ignored,
}

#[derive(Debug, Clone, Default)]
struct FormState {
    phase: SubmissionPhase,
    selected_job: Option<i64>,
    resume: Option<ResumeFile>,
    result: Option<EvaluationResult>,
    error: Option<String>,
}

impl FormState {
    /// Leaves a terminal phase on user interaction. The last result stays visible
    /// until the next submission starts.
    fn interact(&mut self) {
        if matches!(
            self.phase,
            SubmissionPhase::Succeeded | SubmissionPhase::Failed
        ) {
            self.phase = SubmissionPhase::Idle;
        }
        self.error = None;
    }
}

pub struct SubmissionController {
    gateway: Arc<dyn ApiGateway>,
    identity: Arc<dyn IdentityProvider>,
    // Never held across the gateway call.
    state: Arc<Mutex<FormState>>,
}

impl SubmissionController {
    pub fn new(gateway: Arc<dyn ApiGateway>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            gateway,
            identity,
            state: Arc::new(Mutex::new(FormState::default())),
        }
    }

    pub async fn phase(&self) -> SubmissionPhase {
        self.state.lock().await.phase
    }

    pub async fn select_job(&self, job_id: i64) -> Result<(), SubmissionInFlight> {
        let mut state = self.state.lock().await;
        if state.phase == SubmissionPhase::Submitting {
            return Err(SubmissionInFlight);
        }
        state.interact();
        state.selected_job = Some(job_id);
        Ok(())
    }

    pub async fn select_file(&self, resume: ResumeFile) -> Result<(), SubmissionInFlight> {
        let mut state = self.state.lock().await;
        if state.phase == SubmissionPhase::Submitting {
            return Err(SubmissionInFlight);
        }
        state.interact();
        state.resume = Some(resume);
        Ok(())
    }

    /// Validates the selection, then sends exactly one application request.
    pub async fn submit(&self) -> SubmitOutcome {
        let submission = {
            let mut state = self.state.lock().await;

            if state.phase == SubmissionPhase::Submitting {
                debug!("Submission already in flight; ignoring submit");
                return SubmitOutcome::Ignored;
            }

            let (Some(job_id), Some(resume)) = (state.selected_job, state.resume.clone()) else {
                let err = ValidationError::MissingSelection;
                state.error = Some(PortalError::from(err.clone()).user_message());
                return SubmitOutcome::Rejected(err);
            };

            state.phase = SubmissionPhase::Submitting;
            state.result = None;
            state.error = None;

            ApplicationSubmission {
                job_id,
                resume,
                identity: self.identity.capture(),
            }
        };

        info!(
            "Submitting application for job {} with '{}'",
            submission.job_id,
            submission.resume.file_name()
        );

        let gateway = self.gateway.clone();
        let state = self.state.clone();
        // Detached so the request completes and records its outcome even if
        // the caller stops waiting for this future.
        let request = tokio::spawn(async move {
            let response = gateway.submit_application(&submission).await;
            settle(&state, response).await
        });

        match request.await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Submission task ended abnormally: {e}");
                let mut state = self.state.lock().await;
                state.phase = SubmissionPhase::Failed;
                state.error = Some(SUBMISSION_FAILED_MESSAGE.to_string());
                SubmitOutcome::Failed(SUBMISSION_FAILED_MESSAGE.to_string())
            }
        }
    }

    /// Snapshot of everything the form needs to draw itself.
    pub async fn view(&self) -> SubmissionView {
        let state = self.state.lock().await;
        SubmissionView::new(
            state.phase,
            state.resume.as_ref().map(ResumeFile::file_name),
            state.error.as_deref(),
            state.result.as_ref(),
        )
    }
}

/// Writes the gateway response back into the form and leaves a terminal phase.
async fn settle(
    state: &Mutex<FormState>,
    response: Result<EvaluationResult, GatewayError>,
) -> SubmitOutcome {
    let mut state = state.lock().await;
    match response {
        Ok(result) => {
            info!(
                "Application evaluated: score={:.1} shortlisted={}",
                result.match_score, result.shortlisted
            );
            state.phase = SubmissionPhase::Succeeded;
            state.result = Some(result.clone());
            SubmitOutcome::Succeeded(result)
        }
        Err(e) => {
            let message = PortalError::Submission(e).user_message();
            state.phase = SubmissionPhase::Failed;
            state.error = Some(message.clone());
            SubmitOutcome::Failed(message)
        }
    }
}
