//! Wire types of the analysis backend.

use serde::{Deserialize, Serialize};

use crate::models::{CourseRecord, VideoRecord};

/// Response of `POST /analyze_resume/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeAnalysis {
    pub missing_skills: String,
    #[serde(default)]
    pub extracted_text: String,
}

/// Body of `POST /job_matching/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobMatchRequest {
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
}

/// Body of `POST /project_generator/`.
#[derive(Debug, Serialize)]
pub(crate) struct ProjectRequest<'a> {
    pub skills: &'a [String],
}

#[derive(Debug, Deserialize)]
pub(crate) struct CoursesResponse {
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideosResponse {
    #[serde(default)]
    pub videos: Vec<VideoRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobMatchingResponse {
    pub job_recommendations: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectIdeasResponse {
    pub project_ideas: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_analysis_without_extracted_text() {
        let parsed: ResumeAnalysis =
            serde_json::from_str(r#"{"missing_skills": "- Rust\n- Go"}"#).unwrap();
        assert_eq!(parsed.missing_skills, "- Rust\n- Go");
        assert!(parsed.extracted_text.is_empty());
    }

    #[test]
    fn test_job_match_request_omits_absent_fields() {
        let request = JobMatchRequest {
            skills: vec!["SQL".to_string()],
            job_title: None,
            extracted_text: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"skills": ["SQL"]})
        );
    }

    #[test]
    fn test_videos_response_keeps_backend_link() {
        let json = r#"{"videos": [{
            "title": "SQL Course",
            "video_id": "HXV3zeQKqGY",
            "thumbnail": "https://i.ytimg.com/vi/HXV3zeQKqGY/hqdefault.jpg",
            "channel": "freeCodeCamp.org",
            "link": "https://www.youtube.com/watch?v=HXV3zeQKqGY"
        }]}"#;
        let parsed: VideosResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.videos.len(), 1);
        assert_eq!(parsed.videos[0].channel, "freeCodeCamp.org");
    }

    #[test]
    fn test_missing_course_list_is_empty() {
        let parsed: CoursesResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.courses.is_empty());
    }
}
