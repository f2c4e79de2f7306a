use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Read-only projection of a candidate as listed by `GET /api/candidates/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Denormalized from the job posting; the backend names it after the ORM lookup.
    #[serde(rename = "job__title", default)]
    pub job_title: String,
    pub match_score: f64,
    pub shortlisted: bool,
    /// Anything other than a JSON array of strings is treated as "no skills recorded".
    #[serde(default, deserialize_with = "skills_from_json")]
    pub skills: Vec<String>,
}

fn skills_from_json<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(skill) => Some(skill),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
