//! Job-recommendation parser.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::fields::{clean, split_chunks, strip_bold, truncate, FieldSet};

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s+").expect("valid numbering regex"));

const DESCRIPTION: &str = "Description";
const SKILLS: &str = "Key Required Skills";
const CAREER_PATH: &str = "Potential Career Path";

const FIELDS: FieldSet = FieldSet::new(&[DESCRIPTION, SKILLS, CAREER_PATH]);

const DESCRIPTION_CAP: usize = 300;
const SKILLS_CAP: usize = 200;
const CAREER_PATH_CAP: usize = 200;

/// One suggested role, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub title: String,
    pub description: String,
    pub skills: String,
    pub career_path: String,
}

/// Splits numbered job recommendations ("1. ...", "2. ...") into records.
///
/// Produces one record per non-blank chunk, in source order. Fields that
/// cannot be located get placeholder text; a chunk with nothing usable becomes
/// "Job Recommendation N".
pub fn parse_job_recommendations(text: &str) -> Vec<JobRecommendation> {
    split_chunks(&NUMBERED, text)
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| parse_chunk(index + 1, chunk))
        .collect()
}

fn parse_chunk(number: usize, chunk: &str) -> JobRecommendation {
    let title = extract_title(chunk).unwrap_or_else(|| format!("Job Recommendation {number}"));

    let description = FIELDS.extract_or(chunk, DESCRIPTION, "Description not available");
    let skills = FIELDS.extract_or(chunk, SKILLS, "Skills information not available");
    let career_path =
        FIELDS.extract_or(chunk, CAREER_PATH, "Career path information not available");

    JobRecommendation {
        title,
        description: truncate(&description, DESCRIPTION_CAP),
        skills: truncate(&skills, SKILLS_CAP),
        career_path: truncate(&career_path, CAREER_PATH_CAP),
    }
}

/// A `**bold**` title opening the chunk, else the first line's text before
/// its first emphasis marker.
fn extract_title(chunk: &str) -> Option<String> {
    let first_line = chunk.trim_start().lines().next().unwrap_or_default();
    let line = FIELDS.before_first_label(first_line);

    if let Some(rest) = line.strip_prefix("**") {
        if let Some((inner, _)) = rest.split_once("**") {
            let inner = inner.trim();
            if !inner.is_empty() {
                return Some(inner.to_string());
            }
        }
    }

    let before_emphasis = line.split('*').next().unwrap_or_default().trim();
    let title = if before_emphasis.is_empty() {
        strip_bold(clean(line))
    } else {
        strip_bold(before_emphasis)
    };
    let title = title.trim();

    (!title.is_empty()).then(|| title.to_string())
}
