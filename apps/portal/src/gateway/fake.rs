//! In-memory `ApiGateway` for component tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{Barrier, Notify};

use super::{ApiGateway, GatewayError};
use crate::models::analytics::AnalyticsSnapshot;
use crate::models::application::ApplicationSubmission;
use crate::models::candidate::Candidate;
use crate::models::evaluation::EvaluationResult;
use crate::models::job::JobPosting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Jobs,
    Candidates,
    Analytics,
    Submit,
}

#[derive(Default)]
pub struct FakeGateway {
    jobs: Vec<JobPosting>,
    candidates: Vec<Candidate>,
    analytics: AnalyticsSnapshot,
    evaluation: Option<EvaluationResult>,
    failing: Vec<Endpoint>,
    /// When set, the three dashboard fetches each wait on it before answering.
    fetch_barrier: Option<Arc<Barrier>>,
    /// When set, `submit_application` parks until notified.
    submit_gate: Option<Arc<Notify>>,
    pub submit_started: Arc<Notify>,
    calls: Mutex<Vec<Endpoint>>,
    submit_calls: AtomicUsize,
    submissions: Mutex<Vec<ApplicationSubmission>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jobs(mut self, jobs: Vec<JobPosting>) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_candidates(mut self, candidates: Vec<Candidate>) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn with_analytics(mut self, analytics: AnalyticsSnapshot) -> Self {
        self.analytics = analytics;
        self
    }

    pub fn with_evaluation(mut self, evaluation: EvaluationResult) -> Self {
        self.evaluation = Some(evaluation);
        self
    }

    pub fn failing(mut self, endpoint: Endpoint) -> Self {
        self.failing.push(endpoint);
        self
    }

    pub fn with_fetch_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.fetch_barrier = Some(barrier);
        self
    }

    pub fn with_submit_gate(mut self, gate: Arc<Notify>) -> Self {
        self.submit_gate = Some(gate);
        self
    }

    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<ApplicationSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    async fn answer<T: Clone>(&self, endpoint: Endpoint, value: &T) -> Result<T, GatewayError> {
        self.calls.lock().unwrap().push(endpoint);
        if let Some(barrier) = &self.fetch_barrier {
            barrier.wait().await;
        }
        if self.failing.contains(&endpoint) {
            return Err(GatewayError::Api {
                status: 500,
                message: format!("{endpoint:?} unavailable"),
            });
        }
        Ok(value.clone())
    }
}

#[async_trait]
impl ApiGateway for FakeGateway {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, GatewayError> {
        self.answer(Endpoint::Jobs, &self.jobs).await
    }

    async fn list_candidates(&self) -> Result<Vec<Candidate>, GatewayError> {
        self.answer(Endpoint::Candidates, &self.candidates).await
    }

    async fn get_analytics(&self) -> Result<AnalyticsSnapshot, GatewayError> {
        self.answer(Endpoint::Analytics, &self.analytics).await
    }

    async fn submit_application(
        &self,
        submission: &ApplicationSubmission,
    ) -> Result<EvaluationResult, GatewayError> {
        self.calls.lock().unwrap().push(Endpoint::Submit);
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        self.submissions.lock().unwrap().push(submission.clone());
        self.submit_started.notify_one();

        if let Some(gate) = &self.submit_gate {
            gate.notified().await;
        }

        match (&self.evaluation, self.failing.contains(&Endpoint::Submit)) {
            (Some(evaluation), false) => Ok(evaluation.clone()),
            _ => Err(GatewayError::Api {
                status: 500,
                message: "matching engine unavailable".to_string(),
            }),
        }
    }
}

pub fn job(id: i64, title: &str) -> JobPosting {
    JobPosting {
        id,
        title: title.to_string(),
        department: "Retail Banking".to_string(),
        description: format!("{title} role at a branch office"),
        requirements: "Degree in Accounting or Finance, two years of banking experience"
            .to_string(),
    }
}

pub fn candidate(id: i64, name: &str, shortlisted: bool) -> Candidate {
    Candidate {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        job_title: "Credit Analyst".to_string(),
        match_score: if shortlisted { 82.0 } else { 35.0 },
        shortlisted,
        skills: vec!["Excel".to_string(), "SQL".to_string()],
    }
}
