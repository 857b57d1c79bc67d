//! Project-idea parser.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::fields::{split_chunks, strip_bold, truncate, FieldSet};

// The numbering is fused with the first label: "1. Project Title: ...".
static NUMBERED_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\.\s+(?:\*\*)?Project Title:(?:\*\*)?").expect("valid project regex")
});

const TITLE: &str = "Project Title";
const DESCRIPTION: &str = "Description";
const SKILLS: &str = "Key Skills Demonstrated";
const IMPACT: &str = "Potential Real-World Impact";
const DIFFICULTY: &str = "Difficulty Level";

const FIELDS: FieldSet = FieldSet::new(&[TITLE, DESCRIPTION, SKILLS, IMPACT, DIFFICULTY]);

const TITLE_CAP: usize = 80;
const DESCRIPTION_CAP: usize = 250;
const SKILLS_CAP: usize = 150;
const IMPACT_CAP: usize = 150;
const DIFFICULTY_CAP: usize = 20;

pub const DEFAULT_DIFFICULTY: &str = "Intermediate";

/// One portfolio project suggestion, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub title: String,
    pub description: String,
    pub skills: String,
    pub impact: String,
    pub difficulty: String,
}

/// Splits "1. Project Title: ..." sections into project records, in order.
pub fn parse_project_ideas(text: &str) -> Vec<ProjectIdea> {
    split_chunks(&NUMBERED_TITLE, text)
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| parse_chunk(index + 1, chunk))
        .collect()
}

fn parse_chunk(number: usize, chunk: &str) -> ProjectIdea {
    let first_line = chunk.trim_start().lines().next().unwrap_or_default();
    let title = strip_bold(FIELDS.before_first_label(first_line));
    let title = match title.trim() {
        "" => format!("Creative Project {number}"),
        t => t.to_string(),
    };

    let description = FIELDS.extract_or(chunk, DESCRIPTION, "Description not available");
    let skills = FIELDS.extract_or(chunk, SKILLS, "Skills information not available");
    let impact = FIELDS.extract_or(chunk, IMPACT, "Impact information not available");

    // Anything longer than a short level name is a parse miss, not a level.
    let difficulty = match FIELDS.extract(chunk, DIFFICULTY) {
        Some(level) if level.chars().count() <= DIFFICULTY_CAP => level.to_string(),
        _ => DEFAULT_DIFFICULTY.to_string(),
    };

    ProjectIdea {
        title: truncate(&title, TITLE_CAP),
        description: truncate(&description, DESCRIPTION_CAP),
        skills: truncate(&skills, SKILLS_CAP),
        impact: truncate(&impact, IMPACT_CAP),
        difficulty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1. Project Title: Budget Buddy\n\
Description: A personal finance tracker with monthly reports.\n\
Key Skills Demonstrated: React, Node.js, SQL\n\
Potential Real-World Impact: Helps students manage spending.\n\
Difficulty Level: Beginner\n\n\
2. Project Title: **Route Planner**\n\
Description: Shortest-path delivery routing.\n\
Key Skills Demonstrated: Graph algorithms\n\
Potential Real-World Impact: Cuts fuel costs for small couriers.\n\
Difficulty Level: Advanced\n";

    #[test]
    fn test_parses_all_fields() {
        let projects = parse_project_ideas(SAMPLE);
        assert_eq!(projects.len(), 2);

        let first = &projects[0];
        assert_eq!(first.title, "Budget Buddy");
        assert_eq!(first.description, "A personal finance tracker with monthly reports.");
        assert_eq!(first.skills, "React, Node.js, SQL");
        assert_eq!(first.impact, "Helps students manage spending.");
        assert_eq!(first.difficulty, "Beginner");

        assert_eq!(projects[1].title, "Route Planner");
        assert_eq!(projects[1].difficulty, "Advanced");
    }

    #[test]
    fn test_bold_label_markers_are_tolerated() {
        let text = "**1. Project Title:** Code Review Bot\n**Description:** Reviews pull requests.\n**Difficulty Level:** Intermediate";
        let projects = parse_project_ideas(text);
        // the "**" before the numbering is a chunk of its own
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "Creative Project 1");
        assert_eq!(projects[0].description, "Description not available");
        assert_eq!(projects[1].title, "Code Review Bot");
        assert_eq!(projects[1].description, "Reviews pull requests.");
        assert_eq!(projects[1].difficulty, "Intermediate");
    }

    #[test]
    fn test_missing_fields_get_placeholders() {
        let projects = parse_project_ideas("1. Project Title: Lonely Title");
        assert_eq!(
            projects,
            vec![ProjectIdea {
                title: "Lonely Title".to_string(),
                description: "Description not available".to_string(),
                skills: "Skills information not available".to_string(),
                impact: "Impact information not available".to_string(),
                difficulty: DEFAULT_DIFFICULTY.to_string(),
            }]
        );
    }

    #[test]
    fn test_long_difficulty_falls_back_to_default() {
        let text = "1. Project Title: X\nDifficulty Level: Intermediate to Advanced depending on scope";
        assert_eq!(parse_project_ideas(text)[0].difficulty, DEFAULT_DIFFICULTY);
    }

    #[test]
    fn test_empty_title_gets_numbered_placeholder() {
        let text = "1. Project Title: A\n2. Project Title: \nDescription: nameless";
        let projects = parse_project_ideas(text);
        assert_eq!(projects[1].title, "Creative Project 2");
        assert_eq!(projects[1].description, "nameless");
    }

    #[test]
    fn test_title_is_truncated() {
        let text = format!("1. Project Title: {}", "T".repeat(90));
        assert_eq!(parse_project_ideas(&text)[0].title, format!("{}...", "T".repeat(80)));
    }

    #[test]
    fn test_plain_numbered_list_is_one_chunk() {
        // only "N. Project Title:" starts a new project
        let projects = parse_project_ideas("Ideas:\n1. Something\n2. Else");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Ideas:");
    }
}
