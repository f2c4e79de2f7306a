use std::fmt;

use thiserror::Error;
use tracing::error;

use crate::gateway::GatewayError;
use crate::submission::resume::ResumeError;

pub const SUBMISSION_FAILED_MESSAGE: &str = "Application processing failed. Please try again.";
pub const JOB_LISTINGS_FAILED_MESSAGE: &str =
    "Failed to load job listings. Please ensure the backend is running.";

/// Detected locally; never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a job and upload a resume")]
    MissingSelection,
}

/// The three independent dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardResource {
    Jobs,
    Candidates,
    Analytics,
}

impl fmt::Display for DashboardResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DashboardResource::Jobs => "jobs",
            DashboardResource::Candidates => "candidates",
            DashboardResource::Analytics => "analytics",
        };
        f.write_str(name)
    }
}

/// At least one dashboard read rejected. Lists every failed read, not just the first.
/// Never shown to the user: the dashboard falls back to empty data and logs this.
#[derive(Debug, Error)]
#[error("Failed to load dashboard ({})", describe_failures(.failures))]
pub struct PartialLoadError {
    pub failures: Vec<(DashboardResource, GatewayError)>,
}

impl PartialLoadError {
    pub fn failed_resources(&self) -> Vec<DashboardResource> {
        self.failures.iter().map(|(resource, _)| *resource).collect()
    }
}

fn describe_failures(failures: &[(DashboardResource, GatewayError)]) -> String {
    failures
        .iter()
        .map(|(resource, err)| format!("{resource}: {err}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Application-level error type.
/// `user_message` decides what a user sees; internal detail only goes to the log.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Application submission failed: {0}")]
    Submission(#[source] GatewayError),

    #[error("Job catalog failed to load: {0}")]
    JobCatalog(#[source] GatewayError),

    #[error("Resume error: {0}")]
    Resume(#[from] ResumeError),
}

impl PortalError {
    /// The message shown to the user. Transport detail is logged here and never returned.
    pub fn user_message(&self) -> String {
        match self {
            PortalError::Validation(e) => e.to_string(),
            PortalError::Submission(e) => {
                error!("Application failed: {e}");
                SUBMISSION_FAILED_MESSAGE.to_string()
            }
            PortalError::JobCatalog(e) => {
                error!("Failed to load jobs: {e}");
                JOB_LISTINGS_FAILED_MESSAGE.to_string()
            }
            PortalError::Resume(e) => e.to_string(),
        }
    }
}
