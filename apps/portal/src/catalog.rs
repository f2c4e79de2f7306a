//! Job Catalog — read model of open positions shared by the dashboard and the application form.

use tracing::info;

use crate::errors::PortalError;
use crate::gateway::ApiGateway;
use crate::models::job::JobPosting;

const REQUIREMENTS_PREVIEW_CHARS: usize = 50;

/// Open positions in the order the backend listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobCatalog {
    jobs: Vec<JobPosting>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }

    pub async fn load(gateway: &dyn ApiGateway) -> Result<Self, PortalError> {
        let jobs = gateway.list_jobs().await.map_err(PortalError::JobCatalog)?;
        info!("Loaded {} job postings", jobs.len());
        Ok(Self::new(jobs))
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn find(&self, job_id: i64) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Label used in the position picker: "Title • Department • first 50 chars of requirements...".
pub fn option_label(job: &JobPosting) -> String {
    let preview: String = job
        .requirements
        .chars()
        .take(REQUIREMENTS_PREVIEW_CHARS)
        .collect();
    format!("{} • {} • {}...", job.title, job.department, preview)
}
