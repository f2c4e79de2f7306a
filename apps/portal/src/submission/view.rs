//! Text rendering of the application form and its evaluation result.

use std::fmt;

use crate::models::evaluation::EvaluationResult;
use crate::submission::controller::SubmissionPhase;
use crate::submission::resume::{UPLOAD_HINT, UPLOAD_PROMPT};

pub const SUBMIT_LABEL: &str = "Submit Application";
pub const PROGRESS_LABEL: &str = "Processing Application...";
pub const PERFECT_MATCH_TITLE: &str = "Perfect Match!";
pub const PERFECT_MATCH_TEXT: &str = "Your profile matches all requirements!";

pub fn format_score(score: f64) -> String {
    format!("{score:.1}%")
}

pub fn status_label(shortlisted: bool) -> &'static str {
    if shortlisted {
        "Shortlisted"
    } else {
        "Not Selected"
    }
}

pub fn next_step_label(shortlisted: bool) -> &'static str {
    if shortlisted {
        "Interview Scheduled"
    } else {
        "Review Feedback"
    }
}

/// Right-hand panel of the result. Exactly one mode, chosen by whether any skills are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillsPanel {
    Recommended(Vec<String>),
    PerfectMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub match_score: String,
    pub status: &'static str,
    pub next_step: &'static str,
    pub strengths: Vec<String>,
    pub skills: SkillsPanel,
}

impl From<&EvaluationResult> for ResultView {
    fn from(result: &EvaluationResult) -> Self {
        let skills = if result.is_perfect_match() {
            SkillsPanel::PerfectMatch
        } else {
            SkillsPanel::Recommended(result.missing_skills.clone())
        };

        Self {
            match_score: format_score(result.match_score),
            status: status_label(result.shortlisted),
            next_step: next_step_label(result.shortlisted),
            strengths: result.strengths.clone(),
            skills,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionView {
    pub file_label: String,
    pub error: Option<String>,
    pub in_progress: bool,
    pub submit_enabled: bool,
    /// Suppressed while a submission is in flight.
    pub result: Option<ResultView>,
}

impl SubmissionView {
    pub fn new(
        phase: SubmissionPhase,
        file_name: Option<&str>,
        error: Option<&str>,
        result: Option<&EvaluationResult>,
    ) -> Self {
        let in_progress = phase == SubmissionPhase::Submitting;
        Self {
            file_label: file_name.unwrap_or(UPLOAD_PROMPT).to_string(),
            error: error.map(str::to_string),
            in_progress,
            submit_enabled: !in_progress,
            result: if in_progress {
                None
            } else {
                result.map(ResultView::from)
            },
        }
    }
}

fn write_badges(f: &mut fmt::Formatter<'_>, badges: &[String]) -> fmt::Result {
    let line = badges
        .iter()
        .map(|badge| format!("[{badge}]"))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(f, "  {line}")
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Application Results")?;
        writeln!(f, "  Match Score: {}", self.match_score)?;
        writeln!(f, "  Status: {}", self.status)?;
        writeln!(f, "  Next Steps: {}", self.next_step)?;
        writeln!(f, "Strengths")?;
        write_badges(f, &self.strengths)?;
        match &self.skills {
            SkillsPanel::Recommended(skills) => {
                writeln!(f, "Recommended Skills")?;
                write_badges(f, skills)
            }
            SkillsPanel::PerfectMatch => {
                writeln!(f, "{PERFECT_MATCH_TITLE}")?;
                writeln!(f, "  {PERFECT_MATCH_TEXT}")
            }
        }
    }
}

impl fmt::Display for SubmissionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Join Hibret Bank")?;
        if let Some(error) = &self.error {
            writeln!(f, "! {error}")?;
        }
        writeln!(f, "Resume: {} ({UPLOAD_HINT})", self.file_label)?;
        if self.in_progress {
            writeln!(f, "(…) {PROGRESS_LABEL}")?;
        }
        if self.submit_enabled {
            writeln!(f, "[{SUBMIT_LABEL}]")?;
        }
        if let Some(result) = &self.result {
            writeln!(f)?;
            write!(f, "{result}")?;
        }
        Ok(())
    }
}
