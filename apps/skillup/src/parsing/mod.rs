//! Free-text parsers for the prose the analysis backend returns.
//!
//! Every parser here is total: malformed or empty input degrades to an empty
//! list or to records holding placeholder text, never to an error.

pub mod fields;
pub mod jobs;
pub mod projects;
pub mod skills;

pub use jobs::{parse_job_recommendations, JobRecommendation};
pub use projects::{parse_project_ideas, ProjectIdea};
pub use skills::parse_skills;
