//! Text rendering of the staff dashboard.

use std::fmt;

use crate::dashboard::aggregator::{DashboardModel, DashboardPhase};
use crate::models::candidate::Candidate;
use crate::models::job::JobPosting;

pub const LOADING_LABEL: &str = "Loading dashboard...";
pub const NO_JOBS_TITLE: &str = "No Jobs Available";
pub const NO_JOBS_TEXT: &str = "Check back later for new opportunities at Hibret Bank.";

const SKILLS_PREVIEW: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRow {
    pub name: String,
    pub email: String,
    pub applied_for: String,
    pub match_label: String,
    pub skills: String,
}

impl From<&Candidate> for CandidateRow {
    fn from(candidate: &Candidate) -> Self {
        let skills = if candidate.skills.is_empty() {
            "N/A".to_string()
        } else {
            candidate
                .skills
                .iter()
                .take(SKILLS_PREVIEW)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        Self {
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            applied_for: candidate.job_title.clone(),
            match_label: format!("{:.1}% Match", candidate.match_score),
            skills,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Loading,
    Ready {
        metrics: Vec<MetricCard>,
        jobs: Vec<JobPosting>,
        /// Empty means the section is not rendered at all.
        shortlisted: Vec<CandidateRow>,
        top_roles: Vec<(String, f64)>,
    },
}

impl DashboardView {
    pub fn new(phase: DashboardPhase, model: &DashboardModel) -> Self {
        if phase == DashboardPhase::Loading {
            return DashboardView::Loading;
        }

        let analytics = &model.analytics;
        let metrics = vec![
            MetricCard {
                label: "Total Applications",
                value: analytics.total_candidates_or_zero().to_string(),
            },
            MetricCard {
                label: "Shortlisted",
                value: analytics.shortlisted_or_zero().to_string(),
            },
            MetricCard {
                label: "Avg Match Score",
                value: analytics.avg_score_label(),
            },
            MetricCard {
                label: "Active Jobs",
                value: model.jobs.len().to_string(),
            },
        ];

        DashboardView::Ready {
            metrics,
            jobs: model.jobs.jobs().to_vec(),
            shortlisted: model.shortlisted.iter().map(CandidateRow::from).collect(),
            top_roles: analytics
                .top_roles()
                .into_iter()
                .map(|(title, score)| (title.to_string(), score))
                .collect(),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (metrics, jobs, shortlisted, top_roles) = match self {
            DashboardView::Loading => return writeln!(f, "{LOADING_LABEL}"),
            DashboardView::Ready {
                metrics,
                jobs,
                shortlisted,
                top_roles,
            } => (metrics, jobs, shortlisted, top_roles),
        };

        for metric in metrics {
            writeln!(f, "{:<20} {}", metric.label, metric.value)?;
        }

        writeln!(f)?;
        writeln!(f, "Active Job Postings ({} positions)", jobs.len())?;
        if jobs.is_empty() {
            writeln!(f, "  {NO_JOBS_TITLE}")?;
            writeln!(f, "  {NO_JOBS_TEXT}")?;
        }
        for job in jobs {
            writeln!(f, "  {} - {}", job.title, job.department)?;
            writeln!(f, "    {}", job.description)?;
            writeln!(f, "    Requirements: {}", job.requirements)?;
        }

        if !top_roles.is_empty() {
            writeln!(f)?;
            writeln!(f, "Top Roles by Match Score")?;
            for (title, score) in top_roles {
                writeln!(f, "  {title}: {score:.1}%")?;
            }
        }

        if !shortlisted.is_empty() {
            writeln!(f)?;
            writeln!(f, "Shortlisted Candidates")?;
            for row in shortlisted {
                writeln!(f, "  {} <{}> [{}]", row.name, row.email, row.match_label)?;
                writeln!(f, "    Applied for: {}", row.applied_for)?;
                writeln!(f, "    {}", row.skills)?;
            }
        }

        Ok(())
    }
}
