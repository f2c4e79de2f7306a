//! Dashboard Aggregator — fan-out/fan-in load of jobs, candidates and analytics.
//!
//! The three reads are dispatched together and joined on a single barrier; the
//! model is only replaced once all of them have settled. Any failure degrades the
//! whole dashboard to empty/default data. Partial results are never shown.

use std::sync::Arc;

use tracing::{error, info};

use crate::catalog::JobCatalog;
use crate::errors::{DashboardResource, PartialLoadError};
use crate::gateway::{ApiGateway, GatewayError};
use crate::models::analytics::AnalyticsSnapshot;
use crate::models::candidate::Candidate;
use crate::models::job::JobPosting;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardPhase {
    #[default]
    Loading,
    Ready,
}

/// Read-only view model for one dashboard mount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardModel {
    pub jobs: JobCatalog,
    pub shortlisted: Vec<Candidate>,
    pub analytics: AnalyticsSnapshot,
}

impl DashboardModel {
    fn from_responses(
        jobs: Result<Vec<JobPosting>, GatewayError>,
        candidates: Result<Vec<Candidate>, GatewayError>,
        analytics: Result<AnalyticsSnapshot, GatewayError>,
    ) -> Result<Self, PartialLoadError> {
        let mut failures = Vec::new();

        let jobs = jobs
            .map_err(|e| failures.push((DashboardResource::Jobs, e)))
            .ok();
        let candidates = candidates
            .map_err(|e| failures.push((DashboardResource::Candidates, e)))
            .ok();
        let analytics = analytics
            .map_err(|e| failures.push((DashboardResource::Analytics, e)))
            .ok();

        match (jobs, candidates, analytics) {
            (Some(jobs), Some(candidates), Some(analytics)) => Ok(Self {
                jobs: JobCatalog::new(jobs),
                shortlisted: shortlisted_only(candidates),
                analytics,
            }),
            _ => Err(PartialLoadError { failures }),
        }
    }
}

pub fn shortlisted_only(candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.into_iter().filter(|c| c.shortlisted).collect()
}

pub struct DashboardAggregator {
    gateway: Arc<dyn ApiGateway>,
    phase: DashboardPhase,
    model: DashboardModel,
    failure: Option<PartialLoadError>,
}

impl DashboardAggregator {
    pub fn new(gateway: Arc<dyn ApiGateway>) -> Self {
        Self {
            gateway,
            phase: DashboardPhase::Loading,
            model: DashboardModel::default(),
            failure: None,
        }
    }

    pub fn phase(&self) -> DashboardPhase {
        self.phase
    }

    pub fn model(&self) -> &DashboardModel {
        &self.model
    }

    /// The load failure that caused the fallback to empty data, if any.
    pub fn failure(&self) -> Option<&PartialLoadError> {
        self.failure.as_ref()
    }

    /// Loads the dashboard once. `Ready` is terminal; a second call does nothing.
    pub async fn mount(&mut self) -> &DashboardModel {
        if self.phase == DashboardPhase::Ready {
            return &self.model;
        }

        let gateway = self.gateway.as_ref();
        let (jobs, candidates, analytics) = tokio::join!(
            gateway.list_jobs(),
            gateway.list_candidates(),
            gateway.get_analytics()
        );

        match DashboardModel::from_responses(jobs, candidates, analytics) {
            Ok(model) => {
                info!(
                    "Dashboard loaded: {} jobs, {} shortlisted candidates",
                    model.jobs.len(),
                    model.shortlisted.len()
                );
                self.model = model;
            }
            Err(e) => {
                error!("{e}");
                self.model = DashboardModel::default();
                self.failure = Some(e);
            }
        }

        self.phase = DashboardPhase::Ready;
        &self.model
    }
}
