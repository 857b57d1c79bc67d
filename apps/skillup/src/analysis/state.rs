use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CourseRecord, VideoRecord};
use crate::parsing::{JobRecommendation, ProjectIdea};

/// One independently loading part of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Skills,
    Courses,
    Videos,
    Jobs,
    Projects,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Skills,
        Section::Courses,
        Section::Videos,
        Section::Jobs,
        Section::Projects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Skills => "skills",
            Section::Courses => "courses",
            Section::Videos => "videos",
            Section::Jobs => "jobs",
            Section::Projects => "projects",
        }
    }

    /// Fixed message shown when the section ends in error.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Section::Skills => "Failed to analyze resume",
            Section::Courses => "Failed to load courses",
            Section::Videos => "Failed to load videos",
            Section::Jobs => "Failed to load job recommendations",
            Section::Projects => "Failed to load project ideas",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// loading → completed | error, and error → loading on retry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionState {
    #[default]
    Loading,
    Completed,
    Error,
}

/// State, error and data of one section.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SectionStatus<T> {
    pub state: SectionState,
    pub error: Option<String>,
    /// User-facing reason behind `error`, when one is known.
    pub detail: Option<String>,
    pub data: T,
    pub settled_at: Option<DateTime<Utc>>,
}

impl<T> SectionStatus<T> {
    pub fn complete(&mut self, data: T) {
        self.state = SectionState::Completed;
        self.error = None;
        self.detail = None;
        self.data = data;
        self.settled_at = Some(Utc::now());
    }

    /// Marks the section failed. Data from an earlier success is kept.
    pub fn fail(&mut self, message: &str, detail: Option<&str>) {
        self.state = SectionState::Error;
        self.error = Some(message.to_string());
        self.detail = detail.map(str::to_string);
        self.settled_at = Some(Utc::now());
    }

    pub fn reload(&mut self) {
        self.state = SectionState::Loading;
        self.error = None;
        self.detail = None;
        self.settled_at = None;
    }
}

/// Everything the presentation layer renders for one analysis.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisSnapshot {
    pub job_title: String,
    pub skills: SectionStatus<Vec<String>>,
    pub courses: SectionStatus<Vec<CourseRecord>>,
    pub videos: SectionStatus<Vec<VideoRecord>>,
    pub jobs: SectionStatus<Vec<JobRecommendation>>,
    pub projects: SectionStatus<Vec<ProjectIdea>>,
    pub extracted_text: String,
    /// Raw backend text behind `jobs`.
    pub job_recommendations_text: String,
    /// Raw backend text behind `projects`.
    pub project_ideas_text: String,
}

impl AnalysisSnapshot {
    pub fn new(job_title: &str) -> Self {
        Self {
            job_title: job_title.to_string(),
            ..Self::default()
        }
    }

    pub fn state(&self, section: Section) -> SectionState {
        match section {
            Section::Skills => self.skills.state,
            Section::Courses => self.courses.state,
            Section::Videos => self.videos.state,
            Section::Jobs => self.jobs.state,
            Section::Projects => self.projects.state,
        }
    }

    pub fn error(&self, section: Section) -> Option<&str> {
        match section {
            Section::Skills => self.skills.error.as_deref(),
            Section::Courses => self.courses.error.as_deref(),
            Section::Videos => self.videos.error.as_deref(),
            Section::Jobs => self.jobs.error.as_deref(),
            Section::Projects => self.projects.error.as_deref(),
        }
    }

    pub fn detail(&self, section: Section) -> Option<&str> {
        match section {
            Section::Skills => self.skills.detail.as_deref(),
            Section::Courses => self.courses.detail.as_deref(),
            Section::Videos => self.videos.detail.as_deref(),
            Section::Jobs => self.jobs.detail.as_deref(),
            Section::Projects => self.projects.detail.as_deref(),
        }
    }

    pub fn reload(&mut self, section: Section) {
        match section {
            Section::Skills => self.skills.reload(),
            Section::Courses => self.courses.reload(),
            Section::Videos => self.videos.reload(),
            Section::Jobs => self.jobs.reload(),
            Section::Projects => self.projects.reload(),
        }
    }

    /// True once no section is loading.
    pub fn is_settled(&self) -> bool {
        Section::ALL
            .iter()
            .all(|s| self.state(*s) != SectionState::Loading)
    }

    pub fn failed_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.state(*s) == SectionState::Error)
            .collect()
    }
}
