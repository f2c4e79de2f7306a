use serde::{Deserialize, Serialize};

/// Server-side evaluation of a submitted résumé.
///
/// Consumed verbatim: the score, the shortlisting decision and both skill lists
/// come from the matching engine and are never recomputed by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Id of the candidate record the server created for this application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<i64>,
    pub match_score: f64, // 0 – 100
    pub shortlisted: bool,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

impl EvaluationResult {
    pub fn is_perfect_match(&self) -> bool {
        self.missing_skills.is_empty()
    }
}
