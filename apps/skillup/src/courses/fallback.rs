use std::collections::HashSet;

use crate::courses::catalog::{courses_for_skill, normalize_skill, JOB_COURSES, UDEMY_SEARCH_URL};
use crate::models::CourseRecord;

pub const MAX_FALLBACK_COURSES: usize = 12;

/// Builds course recommendations without any network access.
///
/// Algorithm:
/// 1. Curated courses for every job key contained in the lower-cased title.
/// 2. Per skill: curated courses for the synonym-normalized skill, then one
///    generic paid Udemy search course named after the raw skill.
/// 3. Drop later duplicates by exact title.
/// 4. Stable sort, free courses first.
/// 5. Keep at most [`MAX_FALLBACK_COURSES`].
pub fn generate_fallback_courses(skills: &[String], job_title: &str) -> Vec<CourseRecord> {
    let job_title = job_title.to_lowercase();
    let mut courses: Vec<CourseRecord> = JOB_COURSES
        .iter()
        .filter(|(key, _)| job_title.contains(key))
        .flat_map(|(_, curated)| curated.iter().map(|c| c.to_record()))
        .collect();

    for skill in skills {
        let lower = skill.to_lowercase();
        courses.extend(
            courses_for_skill(normalize_skill(&lower))
                .iter()
                .map(|c| c.to_record()),
        );
        courses.push(generic_course(skill));
    }

    let mut seen = HashSet::new();
    courses.retain(|course| seen.insert(course.title.clone()));

    // sort_by_key is stable
    courses.sort_by_key(|course| !course.is_free);
    courses.truncate(MAX_FALLBACK_COURSES);
    courses
}

fn generic_course(skill: &str) -> CourseRecord {
    CourseRecord {
        title: format!("{skill} Complete Guide"),
        link: format!("{UDEMY_SEARCH_URL}{}", urlencoding::encode(skill)),
        platform: "Udemy".to_string(),
        snippet: format!("Comprehensive {skill} courses with practical projects"),
        is_free: false,
    }
}
