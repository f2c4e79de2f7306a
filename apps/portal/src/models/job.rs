use serde::{Deserialize, Serialize};

/// An open position as listed by `GET /api/jobs/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub department: String,
    pub description: String,
    /// Free text, not a structured list.
    pub requirements: String,
}
