use serde::{Deserialize, Serialize};

/// A course recommendation, either returned by the backend or generated
/// locally as a fallback. The title is the identity of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(rename = "isFree", default)]
    pub is_free: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_course_without_is_free_defaults_to_paid() {
        let json = r#"{
            "title": "Introduction to Rust",
            "link": "https://www.coursera.org/",
            "snippet": "Learn the fundamentals of Rust",
            "platform": "Coursera"
        }"#;
        let course: CourseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(course.platform, "Coursera");
        assert!(!course.is_free);
    }

    #[test]
    fn test_is_free_uses_camel_case_on_the_wire() {
        let course = CourseRecord {
            title: "SQL Tutorial".to_string(),
            link: "https://www.w3schools.com/sql/".to_string(),
            platform: "W3Schools".to_string(),
            snippet: "Learn SQL".to_string(),
            is_free: true,
        };
        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(value["isFree"], true);
        assert!(value.get("is_free").is_none());
    }
}
