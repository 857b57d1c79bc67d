//! Plain-text and JSON rendering of an analysis snapshot.

use std::fmt;

use crate::analysis::{AnalysisSnapshot, Section, SectionState, SectionStatus};

pub fn render_json(snapshot: &AnalysisSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}

pub fn render_text(snapshot: &AnalysisSnapshot) -> String {
    TextReport(snapshot).to_string()
}

/// Human-readable report, one block per section.
pub struct TextReport<'a>(pub &'a AnalysisSnapshot);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        writeln!(f, "Skill gap report for \"{}\"", snapshot.job_title)?;

        section(f, "Missing skills", &snapshot.skills, |f, skills| {
            for skill in skills {
                writeln!(f, "  - {skill}")?;
            }
            Ok(())
        })?;

        section(f, "Courses", &snapshot.courses, |f, courses| {
            for course in courses {
                let price = if course.is_free { "free" } else { "paid" };
                writeln!(f, "  - {} [{}, {price}]", course.title, course.platform)?;
                if !course.link.is_empty() {
                    writeln!(f, "    {}", course.link)?;
                }
            }
            Ok(())
        })?;

        section(f, "Videos", &snapshot.videos, |f, videos| {
            for video in videos {
                writeln!(f, "  - {} ({})", video.title, video.channel)?;
                writeln!(f, "    {}", video.watch_url())?;
            }
            Ok(())
        })?;

        section(f, "Job recommendations", &snapshot.jobs, |f, jobs| {
            for (i, job) in jobs.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, job.title)?;
                writeln!(f, "     Description: {}", job.description)?;
                writeln!(f, "     Key skills: {}", job.skills)?;
                writeln!(f, "     Career path: {}", job.career_path)?;
            }
            Ok(())
        })?;

        section(f, "Project ideas", &snapshot.projects, |f, projects| {
            for (i, project) in projects.iter().enumerate() {
                writeln!(f, "  {}. {} [{}]", i + 1, project.title, project.difficulty)?;
                writeln!(f, "     Description: {}", project.description)?;
                writeln!(f, "     Skills: {}", project.skills)?;
                writeln!(f, "     Impact: {}", project.impact)?;
            }
            Ok(())
        })
    }
}

/// One line describing where `section` stands, used for progress output.
pub fn describe_transition(snapshot: &AnalysisSnapshot, section: Section) -> String {
    match snapshot.state(section) {
        SectionState::Loading => format!("{section}: loading"),
        SectionState::Completed => format!("{section}: completed"),
        SectionState::Error => {
            let error = snapshot.error(section).unwrap_or(section.failure_message());
            match snapshot.detail(section) {
                Some(detail) => format!("{section}: {error} ({detail})"),
                None => format!("{section}: {error}"),
            }
        }
    }
}

fn section<I>(
    f: &mut fmt::Formatter<'_>,
    heading: &str,
    status: &SectionStatus<Vec<I>>,
    body: impl FnOnce(&mut fmt::Formatter<'_>, &[I]) -> fmt::Result,
) -> fmt::Result {
    writeln!(f, "\n{heading}")?;
    match status.state {
        SectionState::Loading => writeln!(f, "  (still loading)"),
        SectionState::Error => {
            let error = status.error.as_deref().unwrap_or("Failed");
            match status.detail.as_deref() {
                Some(detail) => writeln!(f, "  ! {error}: {detail}"),
                None => writeln!(f, "  ! {error}"),
            }
        }
        SectionState::Completed if status.data.is_empty() => writeln!(f, "  (none)"),
        SectionState::Completed => body(f, &status.data),
    }
}
