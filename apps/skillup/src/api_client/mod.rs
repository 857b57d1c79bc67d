//! Analysis backend client. Every remote call the crate makes goes through
//! the `AnalysisBackend` trait; `HttpBackend` is the production implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::{ApiError, AppError};
use crate::models::{CourseRecord, Submission, VideoRecord};

pub mod dto;

pub use dto::{JobMatchRequest, ResumeAnalysis};
use dto::{
    CoursesResponse, JobMatchingResponse, ProjectIdeasResponse, ProjectRequest, VideosResponse,
};

const ANALYZE_RESUME: &str = "analyze_resume";
const FETCH_COURSES: &str = "fetch_courses";
const YOUTUBE_COURSES: &str = "youtube-courses";
const JOB_MATCHING: &str = "job_matching";
const PROJECT_GENERATOR: &str = "project_generator";
const HEALTH: &str = "health";

/// The five remote calls an analysis is made of.
///
/// The orchestrator holds an `Arc<dyn AnalysisBackend>`, so tests can swap in
/// an in-memory backend without touching orchestration code.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze_resume(&self, submission: &Submission) -> Result<ResumeAnalysis, ApiError>;

    async fn fetch_courses(&self, job_title: &str) -> Result<Vec<CourseRecord>, ApiError>;

    async fn fetch_videos(&self, job_title: &str) -> Result<Vec<VideoRecord>, ApiError>;

    /// Returns free-text recommendations, numbered per role.
    async fn match_jobs(&self, request: &JobMatchRequest) -> Result<String, ApiError>;

    /// Returns free-text project write-ups, numbered per project.
    async fn generate_projects(&self, skills: &[String]) -> Result<String, ApiError>;
}

/// Endpoint URLs derived from the configured base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn analyze_resume(&self) -> String {
        format!("{}/{ANALYZE_RESUME}/", self.base)
    }

    pub fn fetch_courses(&self, job_title: &str) -> String {
        format!("{}/{FETCH_COURSES}/{}", self.base, urlencoding::encode(job_title))
    }

    pub fn youtube_courses(&self, job_title: &str) -> String {
        format!("{}/{YOUTUBE_COURSES}/{}", self.base, urlencoding::encode(job_title))
    }

    pub fn job_matching(&self) -> String {
        format!("{}/{JOB_MATCHING}/", self.base)
    }

    pub fn project_generator(&self) -> String {
        format!("{}/{PROJECT_GENERATOR}/", self.base)
    }

    pub fn health(&self) -> String {
        format!("{}/{HEALTH}", self.base)
    }
}

/// reqwest-backed client for the analysis backend.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    endpoints: Endpoints,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoints: Endpoints::new(&config.api_base_url),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Succeeds when the backend answers its health endpoint with any 2xx.
    pub async fn health(&self) -> Result<(), ApiError> {
        let response = self.client.get(self.endpoints.health()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: HEALTH,
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    async fn analyze_resume(&self, submission: &Submission) -> Result<ResumeAnalysis, ApiError> {
        let file = multipart::Part::bytes(submission.bytes.to_vec())
            .file_name(submission.file_name.clone())
            .mime_str(submission.mime_type)?;
        let form = multipart::Form::new()
            .part("file", file)
            .text("job_title", submission.job_title.clone());

        let response = self
            .client
            .post(self.endpoints.analyze_resume())
            .multipart(form)
            .send()
            .await?;

        read_body(ANALYZE_RESUME, response).await
    }

    async fn fetch_courses(&self, job_title: &str) -> Result<Vec<CourseRecord>, ApiError> {
        let response = self
            .client
            .get(self.endpoints.fetch_courses(job_title))
            .send()
            .await?;

        let body: CoursesResponse = read_body(FETCH_COURSES, response).await?;
        Ok(body.courses)
    }

    async fn fetch_videos(&self, job_title: &str) -> Result<Vec<VideoRecord>, ApiError> {
        let response = self
            .client
            .get(self.endpoints.youtube_courses(job_title))
            .send()
            .await?;

        let body: VideosResponse = read_body(YOUTUBE_COURSES, response).await?;
        Ok(body.videos)
    }

    async fn match_jobs(&self, request: &JobMatchRequest) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoints.job_matching())
            .header("accept", "application/json")
            .json(request)
            .send()
            .await?;

        let body: JobMatchingResponse = read_body(JOB_MATCHING, response).await?;
        Ok(body.job_recommendations)
    }

    async fn generate_projects(&self, skills: &[String]) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoints.project_generator())
            .json(&ProjectRequest { skills })
            .send()
            .await?;

        let body: ProjectIdeasResponse = read_body(PROJECT_GENERATOR, response).await?;
        Ok(body.project_ideas)
    }
}

/// Checks the status, then decodes the JSON body into `T`.
async fn read_body<T: DeserializeOwned>(
    endpoint: &'static str,
    response: Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("{endpoint} returned {status}: {body}");
        return Err(ApiError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }

    let value: serde_json::Value = response.json().await?;
    let decoded = decode_body(endpoint, value)?;
    debug!("{endpoint} call succeeded");
    Ok(decoded)
}

/// The backend reports some failures as a 2xx body carrying an `error` key.
fn decode_body<T: DeserializeOwned>(
    endpoint: &'static str,
    value: serde_json::Value,
) -> Result<T, ApiError> {
    if let Some(error) = value.get("error") {
        let message = error
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(ApiError::Backend { endpoint, message });
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_urls() {
        let endpoints = Endpoints::new("https://api.example.com/");
        assert_eq!(endpoints.analyze_resume(), "https://api.example.com/analyze_resume/");
        assert_eq!(endpoints.job_matching(), "https://api.example.com/job_matching/");
        assert_eq!(
            endpoints.project_generator(),
            "https://api.example.com/project_generator/"
        );
        assert_eq!(endpoints.health(), "https://api.example.com/health");
    }

    #[test]
    fn test_job_title_is_path_encoded() {
        let endpoints = Endpoints::new("http://localhost:8000");
        assert_eq!(
            endpoints.fetch_courses("C++ Developer/Lead"),
            "http://localhost:8000/fetch_courses/C%2B%2B%20Developer%2FLead"
        );
        assert_eq!(
            endpoints.youtube_courses("Software Engineer"),
            "http://localhost:8000/youtube-courses/Software%20Engineer"
        );
    }

    #[test]
    fn test_decode_body_success() {
        let body: JobMatchingResponse = decode_body(
            JOB_MATCHING,
            json!({"job_recommendations": "1. **Data Analyst**"}),
        )
        .unwrap();
        assert_eq!(body.job_recommendations, "1. **Data Analyst**");
    }

    #[test]
    fn test_decode_body_error_key_is_backend_failure() {
        let err = decode_body::<VideosResponse>(
            YOUTUBE_COURSES,
            json!({"error": "HTTP error occurred: 403 Forbidden"}),
        )
        .unwrap_err();
        match err {
            ApiError::Backend { endpoint, message } => {
                assert_eq!(endpoint, YOUTUBE_COURSES);
                assert_eq!(message, "HTTP error occurred: 403 Forbidden");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_body_contract_mismatch() {
        let err = decode_body::<ResumeAnalysis>(ANALYZE_RESUME, json!({"skills": []})).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_http_backend_uses_configured_base() {
        let config = Config {
            api_base_url: "http://127.0.0.1:9999".to_string(),
            environment: "development".to_string(),
            http_timeout_secs: 5,
            rust_log: "info".to_string(),
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.endpoints().health(), "http://127.0.0.1:9999/health");
    }
}
