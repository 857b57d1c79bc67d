//! Missing-skills parser: turns the free-text skill gap into a list of names.

use std::sync::LazyLock;

use regex::Regex;

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Missing Skills:").expect("valid header regex"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[•*-]\s*").expect("valid bullet regex"));
static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.\n]").expect("valid sentence regex"));

/// Segments this long are stray prose rather than a skill name.
const MAX_SENTENCE_SKILL_LEN: usize = 100;

/// Parses the backend's "missing skills" text into skill names, in source order.
///
/// Tries, in order, bullet splitting, sentence splitting and plain line
/// splitting; the first method that yields anything wins. The result is empty
/// only when the text is empty once the header is removed.
pub fn parse_skills(raw: &str) -> Vec<String> {
    let cleaned = HEADER.replacen(raw, 1, "");
    let cleaned = cleaned.trim();

    let skills = from_bullets(cleaned);
    if !skills.is_empty() {
        return skills;
    }

    let skills = from_sentences(cleaned);
    if !skills.is_empty() {
        return skills;
    }

    from_lines(cleaned)
}

fn from_bullets(text: &str) -> Vec<String> {
    if !text.contains(['•', '*', '-']) {
        return Vec::new();
    }

    BULLET
        .split(text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let name = segment.split_once(':').map_or(segment, |(name, _)| name);
            let name = name.strip_suffix('.').unwrap_or(name);
            name.trim().to_string()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

fn from_sentences(text: &str) -> Vec<String> {
    SENTENCE
        .split(text)
        .map(str::trim)
        .filter(|segment| {
            !segment.is_empty() && segment.chars().count() < MAX_SENTENCE_SKILL_LEN
        })
        .map(|segment| {
            let head = segment.split(['(', ':']).next().unwrap_or_default().trim();
            if head.is_empty() {
                segment.to_string()
            } else {
                head.to_string()
            }
        })
        .collect()
}

fn from_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let line = line.trim_start();
            line.strip_prefix('-')
                .map_or(line, str::trim_start)
                .trim()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_dash_bullets() {
        assert_eq!(parse_skills("Missing Skills:\n- Python\n- SQL\n"), vec!["Python", "SQL"]);
    }

    #[test]
    fn test_header_is_case_insensitive() {
        assert_eq!(parse_skills("missing skills: • Docker • Kubernetes"), vec!["Docker", "Kubernetes"]);
    }

    #[test]
    fn test_bullets_drop_explanations_and_trailing_period() {
        let raw = "* Kubernetes: container orchestration at scale\n* Terraform.\n* GraphQL";
        assert_eq!(parse_skills(raw), vec!["Kubernetes", "Terraform", "GraphQL"]);
    }

    #[test]
    fn test_markdown_bold_bullets() {
        let raw = "*   **AWS**\n*   **CI/CD**";
        assert_eq!(parse_skills(raw), vec!["AWS", "CI/CD"]);
    }

    #[test]
    fn test_sentence_fallback_keeps_leading_run() {
        let raw = "Machine learning (scikit learn). Statistics: hypothesis testing\nTableau";
        assert_eq!(
            parse_skills(raw),
            vec!["Machine learning", "Statistics", "Tableau"]
        );
    }

    #[test]
    fn test_sentence_fallback_drops_long_prose() {
        let prose = "a".repeat(120);
        let raw = format!("{prose}. Rust");
        assert_eq!(parse_skills(&raw), vec!["Rust"]);
    }

    #[test]
    fn test_line_fallback_when_only_long_prose() {
        let prose = "word ".repeat(30);
        let skills = parse_skills(prose.trim());
        assert_eq!(skills.len(), 1);
        assert!(skills[0].starts_with("word word"));
    }

    #[test]
    fn test_segment_starting_with_paren_is_kept_whole() {
        assert_eq!(parse_skills("(optional) Go"), vec!["(optional) Go"]);
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        assert!(parse_skills("").is_empty());
        assert!(parse_skills("Missing Skills:\n\n   ").is_empty());
    }

    #[test]
    fn test_non_empty_input_never_yields_empty_list() {
        for raw in ["...", "-", "•", ": :", "(", "x", "Missing Skills: ...\n..."] {
            assert!(!parse_skills(raw).is_empty(), "empty result for {raw:?}");
        }
    }

    #[test]
    fn test_no_deduplication() {
        assert_eq!(parse_skills("- SQL\n- SQL"), vec!["SQL", "SQL"]);
    }
}
