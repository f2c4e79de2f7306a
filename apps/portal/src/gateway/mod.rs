/// API Gateway — typed access to the four recruitment backend endpoints.
///
/// Components only see `Arc<dyn ApiGateway>`. `HttpApiGateway` is the one place
/// that builds URLs, multipart bodies and status handling.
///
/// No retries: every call is attempted exactly once and failures go straight to the caller.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::analytics::AnalyticsSnapshot;
use crate::models::application::ApplicationSubmission;
use crate::models::candidate::Candidate;
use crate::models::evaluation::EvaluationResult;
use crate::models::job::JobPosting;

#[cfg(test)]
pub mod fake;

pub const JOBS_PATH: &str = "/api/jobs/";
pub const CANDIDATES_PATH: &str = "/api/candidates/";
pub const ANALYTICS_PATH: &str = "/api/analytics/";
pub const PROCESS_APPLICATION_PATH: &str = "/api/process-application/";

/// Transport-level failure of a gateway call.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Body the backend returns alongside a failing status.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The recruitment backend as seen by the portal. Implement this to point the
/// components at another backend (or a test double) without touching them.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, GatewayError>;

    async fn list_candidates(&self) -> Result<Vec<Candidate>, GatewayError>;

    async fn get_analytics(&self) -> Result<AnalyticsSnapshot, GatewayError>;

    async fn submit_application(
        &self,
        submission: &ApplicationSubmission,
    ) -> Result<EvaluationResult, GatewayError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HttpApiGateway — REST backend over reqwest
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct HttpApiGateway {
    client: Client,
    base_url: String,
}

impl HttpApiGateway {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        debug!("GET {path}");
        let response = self.client.get(self.url(path)).send().await?;
        read_json(response).await
    }
}

#[async_trait]
impl ApiGateway for HttpApiGateway {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, GatewayError> {
        self.get_json(JOBS_PATH).await
    }

    async fn list_candidates(&self) -> Result<Vec<Candidate>, GatewayError> {
        self.get_json(CANDIDATES_PATH).await
    }

    async fn get_analytics(&self) -> Result<AnalyticsSnapshot, GatewayError> {
        self.get_json(ANALYTICS_PATH).await
    }

    /// POSTs the multipart form the backend expects: `resume`, `job_id`, `name`, `email`.
    async fn submit_application(
        &self,
        submission: &ApplicationSubmission,
    ) -> Result<EvaluationResult, GatewayError> {
        let resume = &submission.resume;
        let part = Part::bytes(resume.content().to_vec())
            .file_name(resume.file_name().to_string())
            .mime_str(resume.mime_type())?;

        let form = Form::new()
            .part("resume", part)
            .text("job_id", submission.job_id.to_string())
            .text("name", submission.identity.name.clone())
            .text("email", submission.identity.email.clone());

        debug!(
            "POST {PROCESS_APPLICATION_PATH} job_id={} file={} ({} bytes)",
            submission.job_id,
            resume.file_name(),
            resume.len()
        );

        let response = self
            .client
            .post(self.url(PROCESS_APPLICATION_PATH))
            .multipart(form)
            .send()
            .await?;

        read_json(response).await
    }
}

/// Maps non-2xx statuses to `GatewayError::Api` and decodes successful bodies.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("Backend returned {}: {}", status, body);
        // Try to parse error message
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        return Err(GatewayError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(GatewayError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::CandidateIdentity;
    use crate::submission::resume::ResumeFile;
    use axum::extract::{Multipart, State};
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    /// (field name, file name, bytes) for every multipart field received.
    type CapturedFields = Arc<Mutex<Vec<(String, Option<String>, Vec<u8>)>>>;

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn gateway(base_url: &str) -> HttpApiGateway {
        HttpApiGateway::new(base_url, Duration::from_secs(5)).unwrap()
    }

    fn submission() -> ApplicationSubmission {
        ApplicationSubmission {
            job_id: 42,
            resume: ResumeFile::new("resume.pdf", b"%PDF-1.4".to_vec()),
            identity: CandidateIdentity {
                name: "Test Candidate".to_string(),
                email: "test@example.com".to_string(),
            },
        }
    }

    async fn process_application(
        State(captured): State<CapturedFields>,
        mut multipart: Multipart,
    ) -> Json<Value> {
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let data = field.bytes().await.unwrap().to_vec();
            captured.lock().unwrap().push((name, file_name, data));
        }
        Json(json!({
            "candidate_id": 7,
            "match_score": 87.5,
            "shortlisted": true,
            "strengths": ["SQL"],
            "missing_skills": []
        }))
    }

    #[tokio::test]
    async fn test_submit_sends_documented_multipart_fields() {
        let captured = CapturedFields::default();
        let router = Router::new()
            .route(PROCESS_APPLICATION_PATH, post(process_application))
            .with_state(captured.clone());
        let base_url = spawn_backend(router).await;

        let result = gateway(&base_url)
            .submit_application(&submission())
            .await
            .unwrap();

        assert_eq!(result.candidate_id, Some(7));
        assert_eq!(result.match_score, 87.5);
        assert_eq!(result.strengths, vec!["SQL"]);

        let fields = captured.lock().unwrap().clone();
        let names: Vec<&str> = fields.iter().map(|(name, _, _)| name.as_str()).collect();
        assert_eq!(names, vec!["resume", "job_id", "name", "email"]);
        assert_eq!(fields[0].1.as_deref(), Some("resume.pdf"));
        assert_eq!(fields[0].2, b"%PDF-1.4".to_vec());
        assert_eq!(fields[1].2, b"42".to_vec());
        assert_eq!(fields[2].2, b"Test Candidate".to_vec());
        assert_eq!(fields[3].2, b"test@example.com".to_vec());
    }

    #[tokio::test]
    async fn test_list_endpoints_decode_backend_json() {
        let router = Router::new()
            .route(
                JOBS_PATH,
                get(|| async {
                    Json(json!([{
                        "id": 1,
                        "title": "Credit Analyst",
                        "department": "Credit",
                        "description": "Assess loan applications",
                        "requirements": "Finance degree, Excel"
                    }]))
                }),
            )
            .route(
                CANDIDATES_PATH,
                get(|| async {
                    Json(json!([{
                        "id": 9,
                        "name": "Abebe",
                        "email": "abebe@example.com",
                        "job__title": "Credit Analyst",
                        "match_score": 81.0,
                        "shortlisted": true,
                        "skills": ["Excel"]
                    }]))
                }),
            )
            .route(
                ANALYTICS_PATH,
                get(|| async {
                    Json(json!({
                        "job_titles": ["Credit Analyst"],
                        "match_scores": [81.0],
                        "total_candidates": 1,
                        "shortlisted": 1,
                        "avg_score": 81.0
                    }))
                }),
            );
        let base_url = spawn_backend(router).await;
        let gateway = gateway(&format!("{base_url}/"));

        let jobs = gateway.list_jobs().await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Credit Analyst");

        let candidates = gateway.list_candidates().await.unwrap();
        assert_eq!(candidates[0].job_title, "Credit Analyst");

        let analytics = gateway.get_analytics().await.unwrap();
        assert_eq!(analytics.total_candidates, Some(1));
        assert_eq!(analytics.top_roles(), vec![("Credit Analyst", 81.0)]);
    }

    #[tokio::test]
    async fn test_non_2xx_keeps_server_error_message() {
        let router = Router::new().route(
            PROCESS_APPLICATION_PATH,
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "JobPosting matching query does not exist." })),
                )
            }),
        );
        let base_url = spawn_backend(router).await;

        let err = gateway(&base_url)
            .submit_application(&submission())
            .await
            .unwrap_err();

        match err {
            GatewayError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "JobPosting matching query does not exist.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_kept_verbatim() {
        let router = Router::new().route(
            JOBS_PATH,
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let base_url = spawn_backend(router).await;

        let err = gateway(&base_url).list_jobs().await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Api { status: 502, ref message } if message == "upstream down"
        ));
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_parse_error() {
        let router = Router::new().route(ANALYTICS_PATH, get(|| async { "<html>oops</html>" }));
        let base_url = spawn_backend(router).await;

        let err = gateway(&base_url).get_analytics().await.unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = gateway(&format!("http://{addr}"))
            .list_jobs()
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Http(_)));
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let router = Router::new().route(
            JOBS_PATH,
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!([]))
            }),
        );
        let base_url = spawn_backend(router).await;
        let gateway = HttpApiGateway::new(&base_url, Duration::from_millis(100)).unwrap();

        match gateway.list_jobs().await.unwrap_err() {
            GatewayError::Http(e) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
