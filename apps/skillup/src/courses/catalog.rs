//! Curated course tables keyed by job title fragment and by skill.

use crate::models::CourseRecord;

pub const UDEMY_SEARCH_URL: &str = "https://www.udemy.com/courses/search/?q=";

/// A course entry as written in the static tables.
#[derive(Debug, Clone, Copy)]
pub struct CuratedCourse {
    pub title: &'static str,
    pub link: &'static str,
    pub platform: &'static str,
    pub snippet: &'static str,
    pub is_free: bool,
}

impl CuratedCourse {
    pub fn to_record(&self) -> CourseRecord {
        CourseRecord {
            title: self.title.to_string(),
            link: self.link.to_string(),
            platform: self.platform.to_string(),
            snippet: self.snippet.to_string(),
            is_free: self.is_free,
        }
    }
}

/// Courses for any job title containing the key (lower-case).
pub const JOB_COURSES: &[(&str, &[CuratedCourse])] = &[
    (
        "software engineer",
        &[CuratedCourse {
            title: "Full Stack Web Development",
            link: "https://www.freecodecamp.org/learn/",
            platform: "FreeCodeCamp",
            snippet: "Complete full-stack development curriculum",
            is_free: true,
        }],
    ),
    (
        "data scientist",
        &[CuratedCourse {
            title: "Data Science Fundamentals",
            link: "https://www.kaggle.com/learn",
            platform: "Kaggle Learn",
            snippet: "Free micro-courses in data science and machine learning",
            is_free: true,
        }],
    ),
    (
        "product manager",
        &[CuratedCourse {
            title: "Product Management Fundamentals",
            link: "https://www.coursera.org/search?query=product%20management",
            platform: "Coursera",
            snippet: "Learn product management principles and practices",
            is_free: false,
        }],
    ),
];

/// Courses for a normalized (lower-case, synonym-mapped) skill name.
pub const SKILL_COURSES: &[(&str, &[CuratedCourse])] = &[
    (
        "javascript",
        &[
            CuratedCourse {
                title: "JavaScript Fundamentals - FreeCodeCamp",
                link: "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures/",
                platform: "FreeCodeCamp",
                snippet: "Learn JavaScript fundamentals including variables, functions, and data structures",
                is_free: true,
            },
            CuratedCourse {
                title: "Modern JavaScript Course",
                link: "https://javascript.info/",
                platform: "JavaScript.info",
                snippet: "Comprehensive JavaScript tutorial covering ES6+ features",
                is_free: true,
            },
        ],
    ),
    (
        "python",
        &[
            CuratedCourse {
                title: "Python for Everybody Specialization",
                link: "https://www.coursera.org/specializations/python",
                platform: "Coursera",
                snippet: "Learn Python programming from basics to advanced concepts",
                is_free: false,
            },
            CuratedCourse {
                title: "Python Tutorial - W3Schools",
                link: "https://www.w3schools.com/python/",
                platform: "W3Schools",
                snippet: "Interactive Python tutorial with examples and exercises",
                is_free: true,
            },
        ],
    ),
    (
        "react",
        &[
            CuratedCourse {
                title: "React Documentation",
                link: "https://react.dev/learn",
                platform: "Official Docs",
                snippet: "Official React documentation and tutorial",
                is_free: true,
            },
            CuratedCourse {
                title: "React Course",
                link: "https://www.freecodecamp.org/learn/front-end-development-libraries/",
                platform: "FreeCodeCamp",
                snippet: "Learn React and build interactive user interfaces",
                is_free: true,
            },
        ],
    ),
    (
        "nodejs",
        &[CuratedCourse {
            title: "Node.js Tutorial",
            link: "https://www.w3schools.com/nodejs/",
            platform: "W3Schools",
            snippet: "Learn Node.js for server-side JavaScript development",
            is_free: true,
        }],
    ),
    (
        "sql",
        &[CuratedCourse {
            title: "SQL Tutorial",
            link: "https://www.w3schools.com/sql/",
            platform: "W3Schools",
            snippet: "Learn SQL for database management and queries",
            is_free: true,
        }],
    ),
    (
        "data analysis",
        &[CuratedCourse {
            title: "Data Analysis with Python",
            link: "https://www.freecodecamp.org/learn/data-analysis-with-python/",
            platform: "FreeCodeCamp",
            snippet: "Learn data analysis using Python, Pandas, and NumPy",
            is_free: true,
        }],
    ),
    (
        "machine learning",
        &[CuratedCourse {
            title: "Machine Learning Course",
            link: "https://www.coursera.org/search?query=machine%20learning",
            platform: "Coursera",
            snippet: "Introduction to machine learning algorithms and applications",
            is_free: false,
        }],
    ),
];

/// Common abbreviations mapped onto the keys of [`SKILL_COURSES`].
pub const SKILL_SYNONYMS: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("react.js", "react"),
    ("node.js", "nodejs"),
    ("ml", "machine learning"),
    ("ai", "artificial intelligence"),
];

pub fn normalize_skill(skill_lower: &str) -> &str {
    SKILL_SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == skill_lower)
        .map_or(skill_lower, |&(_, canonical)| canonical)
}

pub fn courses_for_skill(normalized: &str) -> &'static [CuratedCourse] {
    SKILL_COURSES
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|&(_, courses)| courses)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_synonyms_resolve() {
        assert_eq!(normalize_skill("js"), "javascript");
        assert_eq!(normalize_skill("node.js"), "nodejs");
        assert_eq!(normalize_skill("rust"), "rust");
    }

    #[test]
    fn test_every_synonym_target_except_ai_has_courses() {
        for (alias, target) in SKILL_SYNONYMS {
            if *alias == "ai" {
                continue;
            }
            assert!(!courses_for_skill(target).is_empty(), "no courses for {target}");
        }
    }

    #[test]
    fn test_catalog_titles_are_unique() {
        let mut seen = HashSet::new();
        for (_, courses) in JOB_COURSES.iter().chain(SKILL_COURSES) {
            for course in courses.iter() {
                assert!(seen.insert(course.title), "duplicate title {}", course.title);
            }
        }
    }
}
