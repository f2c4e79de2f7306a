use serde::{Deserialize, Serialize};

/// Aggregate hiring metrics from `GET /api/analytics/`.
///
/// Every field may be null or absent on the wire. Rendering code goes through the
/// `*_or_zero` accessors so a metric is never shown blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_candidates: Option<u64>,
    pub shortlisted: Option<u64>,
    pub avg_score: Option<f64>,
    /// Top roles by average match score, paired index-wise with `match_scores`.
    #[serde(default)]
    pub job_titles: Option<Vec<String>>,
    #[serde(default)]
    pub match_scores: Option<Vec<f64>>,
}

impl AnalyticsSnapshot {
    pub fn total_candidates_or_zero(&self) -> u64 {
        self.total_candidates.unwrap_or(0)
    }

    pub fn shortlisted_or_zero(&self) -> u64 {
        self.shortlisted.unwrap_or(0)
    }

    /// Average match score as a percentage label: "72.4%", or "0%" when unknown.
    pub fn avg_score_label(&self) -> String {
        match self.avg_score {
            Some(score) => format!("{score:.1}%"),
            None => "0%".to_string(),
        }
    }

    /// (title, average score) pairs; unmatched trailing entries are dropped.
    pub fn top_roles(&self) -> Vec<(&str, f64)> {
        match (&self.job_titles, &self.match_scores) {
            (Some(titles), Some(scores)) => titles
                .iter()
                .map(String::as_str)
                .zip(scores.iter().copied())
                .collect(),
            _ => Vec::new(),
        }
    }
}
