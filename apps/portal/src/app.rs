//! Composition root — owns the active view and mounts one component per view.
//!
//! The active view is a plain value. Children receive it read-only together with
//! a setter callback; there is no global navigation state.

use std::fmt;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::catalog::{option_label, JobCatalog};
use crate::dashboard::aggregator::DashboardAggregator;
use crate::dashboard::view::DashboardView;
use crate::errors::PortalError;
use crate::submission::controller::{SubmissionController, SubmitOutcome};
use crate::submission::resume::ResumeFile;
use crate::state::AppState;

pub const BRAND: &str = "Hibret Bank Careers";
pub const FOOTER: &str = "© 2025 Hibret Bank S.C. All rights reserved.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    ApplicationForm,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::ApplicationForm => "Apply Now",
        }
    }
}

/// Navigation bar. Reads the current view, changes it only through `set_view`.
pub struct Header<'a> {
    current: View,
    set_view: &'a mut dyn FnMut(View),
}

impl<'a> Header<'a> {
    pub fn new(current: View, set_view: &'a mut dyn FnMut(View)) -> Self {
        Self { current, set_view }
    }

    pub fn navigate(&mut self, target: View) {
        if target != self.current {
            (self.set_view)(target);
            self.current = target;
        }
    }
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{BRAND} |")?;
        for view in [View::Dashboard, View::ApplicationForm] {
            if view == self.current {
                write!(f, " [{}]", view.label())?;
            } else {
                write!(f, " {}", view.label())?;
            }
        }
        Ok(())
    }
}

/// What the application form was asked to do on this run.
#[derive(Debug, Clone, Default)]
pub struct ApplicationInput<'a> {
    pub job_id: Option<i64>,
    pub resume: Option<&'a Path>,
}

pub struct App {
    state: AppState,
    view: View,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            view: View::default(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Renders the header and lets it switch the active view.
    pub fn navigate(&mut self, target: View) -> String {
        let mut next = self.view;
        let rendered = {
            let mut set_view = |view: View| next = view;
            let mut header = Header::new(self.view, &mut set_view);
            header.navigate(target);
            header.to_string()
        };
        self.set_view(next);
        rendered
    }

    /// Mounts the active view's component and returns its rendering.
    pub async fn render(&self, input: ApplicationInput<'_>) -> String {
        let body = match self.view {
            View::Dashboard => self.render_dashboard().await,
            View::ApplicationForm => self.render_application(input).await,
        };
        format!("{body}\n{FOOTER}\n")
    }

    pub async fn render_jobs(&self) -> String {
        match JobCatalog::load(self.state.gateway.as_ref()).await {
            Ok(catalog) if catalog.is_empty() => "No positions are open right now.\n".to_string(),
            Ok(catalog) => catalog
                .jobs()
                .iter()
                .map(|job| format!("{:>4}  {}\n", job.id, option_label(job)))
                .collect(),
            Err(e) => format!("! {}\n", e.user_message()),
        }
    }

    async fn render_dashboard(&self) -> String {
        let mut aggregator = DashboardAggregator::new(self.state.gateway.clone());
        aggregator.mount().await;
        if let Some(failure) = aggregator.failure() {
            warn!(
                "Dashboard showing empty data; failed reads: {:?}",
                failure.failed_resources()
            );
        }
        DashboardView::new(aggregator.phase(), aggregator.model()).to_string()
    }

    async fn render_application(&self, input: ApplicationInput<'_>) -> String {
        let mut notices = String::new();

        // Job list failures are shown but do not block the form.
        let catalog = match JobCatalog::load(self.state.gateway.as_ref()).await {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                notices.push_str(&format!("! {}\n", e.user_message()));
                None
            }
        };

        let controller =
            SubmissionController::new(self.state.gateway.clone(), self.state.identity.clone());

        if let Some(job_id) = input.job_id {
            match catalog.as_ref().and_then(|c| c.find(job_id)) {
                Some(job) => notices.push_str(&format!("Position: {}\n", option_label(job))),
                None if catalog.is_some() => {
                    warn!("Job {job_id} is not in the open positions list; submitting anyway")
                }
                None => {}
            }
            if let Err(e) = controller.select_job(job_id).await {
                warn!("Job selection rejected: {e}");
            }
        }

        if let Some(path) = input.resume {
            match ResumeFile::load(path).await {
                Ok(resume) => {
                    if let Err(e) = controller.select_file(resume).await {
                        warn!("Resume selection rejected: {e}");
                    }
                }
                Err(e) => {
                    let message = PortalError::from(e).user_message();
                    notices.push_str(&format!("! {message}\n"));
                }
            }
        }

        match controller.submit().await {
            SubmitOutcome::Succeeded(result) => {
                if let Some(candidate_id) = result.candidate_id {
                    info!("Application recorded as candidate {candidate_id}");
                }
            }
            SubmitOutcome::Rejected(e) => debug!("Submission blocked locally: {e}"),
            SubmitOutcome::Failed(_) | SubmitOutcome::Ignored => {}
        }
        debug!("Application form settled in {:?}", controller.phase().await);
        format!("{notices}{}", controller.view().await)
    }
}
