use crate::identity::CandidateIdentity;
use crate::submission::resume::ResumeFile;

/// One submission attempt, built when `submit()` passes validation and dropped
/// once the gateway call resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationSubmission {
    pub job_id: i64,
    pub resume: ResumeFile,
    pub identity: CandidateIdentity,
}
