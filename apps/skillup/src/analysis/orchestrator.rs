//! Analysis session: drives the five backend calls of one submission.
//!
//! Resume analysis, course fetch and video fetch start together. Job matching
//! and project generation start together once resume analysis succeeds.
//!
//! Sections are published through a `watch` channel. Every update is a
//! read-modify-write of the whole snapshot. Runs are never cancelled: a retry
//! starts a fresh run next to any run still in flight, and whichever response
//! settles last owns the section.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analysis::state::{AnalysisSnapshot, Section};
use crate::api_client::{AnalysisBackend, JobMatchRequest};
use crate::courses::generate_fallback_courses;
use crate::models::{CourseRecord, Submission};
use crate::parsing::{parse_job_recommendations, parse_project_ideas, parse_skills};

/// Detail attached to the dependent sections when resume analysis fails.
pub const RESUME_DEPENDENCY_DETAIL: &str =
    "Resume analysis failed, so there were no skills to base this section on.";

/// A single submission and the live state of its analysis.
///
/// Cheap to clone; clones share the backend, the submission and the board.
#[derive(Clone)]
pub struct AnalysisSession {
    inner: Arc<Inner>,
}

struct Inner {
    backend: Arc<dyn AnalysisBackend>,
    submission: Submission,
    board: watch::Sender<AnalysisSnapshot>,
    runs: AtomicU64,
}

impl AnalysisSession {
    pub fn new(backend: Arc<dyn AnalysisBackend>, submission: Submission) -> Self {
        let (board, _) = watch::channel(AnalysisSnapshot::new(&submission.job_title));
        Self {
            inner: Arc::new(Inner {
                backend,
                submission,
                board,
                runs: AtomicU64::new(0),
            }),
        }
    }

    /// Receiver that observes every section update.
    pub fn subscribe(&self) -> watch::Receiver<AnalysisSnapshot> {
        self.inner.board.subscribe()
    }

    pub fn snapshot(&self) -> AnalysisSnapshot {
        self.inner.board.borrow().clone()
    }

    /// Runs the full analysis once. Returns when every call of this run has
    /// settled and its outcome has been written to the board.
    pub async fn run(&self) {
        let run = self.inner.runs.fetch_add(1, Ordering::Relaxed) + 1;
        let span = info_span!(
            "analysis",
            run_id = %Uuid::new_v4(),
            run,
            job_title = %self.inner.submission.job_title
        );

        async {
            info!("Starting analysis");
            tokio::join!(
                self.resume_branch(),
                self.courses_branch(),
                self.videos_branch()
            );
            info!("Analysis run settled");
        }
        .instrument(span)
        .await
    }

    /// Puts `section` back into loading and replays the whole analysis for
    /// the original submission. Sibling sections are re-fetched as well.
    pub async fn retry(&self, section: Section) {
        info!(%section, "Retrying section");
        self.update(|s| s.reload(section));
        self.run().await
    }

    /// Fire-and-forget form of [`AnalysisSession::retry`].
    pub fn spawn_retry(&self, section: Section) -> JoinHandle<()> {
        let session = self.clone();
        tokio::spawn(async move { session.retry(section).await })
    }

    fn update(&self, merge: impl FnOnce(&mut AnalysisSnapshot)) {
        self.inner.board.send_modify(merge);
    }

    async fn resume_branch(&self) {
        let submission = &self.inner.submission;

        let analysis = match self.inner.backend.analyze_resume(submission).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("Resume analysis failed, skipping job matching and project generation: {e}");
                let detail = e.user_message();
                self.update(|s| {
                    s.skills.fail(Section::Skills.failure_message(), Some(detail));
                    s.jobs
                        .fail(Section::Jobs.failure_message(), Some(RESUME_DEPENDENCY_DETAIL));
                    s.projects.fail(
                        Section::Projects.failure_message(),
                        Some(RESUME_DEPENDENCY_DETAIL),
                    );
                });
                return;
            }
        };

        let skills = parse_skills(&analysis.missing_skills);
        info!(skills = skills.len(), "Resume analysis completed");

        let request = JobMatchRequest {
            skills: skills.clone(),
            job_title: Some(submission.job_title.clone()),
            extracted_text: Some(analysis.extracted_text.clone()),
        };
        self.update(|s| {
            s.skills.complete(skills.clone());
            s.extracted_text = analysis.extracted_text;
        });

        tokio::join!(self.jobs_branch(request), self.projects_branch(skills));
    }

    async fn courses_branch(&self) {
        let job_title = &self.inner.submission.job_title;

        let courses = match self.inner.backend.fetch_courses(job_title).await {
            Ok(courses) if !courses.is_empty() => {
                info!(courses = courses.len(), "Course fetch completed");
                courses
            }
            Ok(_) => {
                info!("Course fetch returned no courses, generating fallback");
                self.fallback_courses()
            }
            Err(e) => {
                warn!("Course fetch failed, generating fallback: {e}");
                self.fallback_courses()
            }
        };

        self.update(|s| s.courses.complete(courses));
    }

    /// Uses whatever skills the board holds right now, which is an empty list
    /// when the resume analysis has not completed yet.
    fn fallback_courses(&self) -> Vec<CourseRecord> {
        let skills = self.inner.board.borrow().skills.data.clone();
        generate_fallback_courses(&skills, &self.inner.submission.job_title)
    }

    async fn videos_branch(&self) {
        let job_title = &self.inner.submission.job_title;

        match self.inner.backend.fetch_videos(job_title).await {
            Ok(videos) => {
                info!(videos = videos.len(), "Video fetch completed");
                self.update(|s| s.videos.complete(videos));
            }
            Err(e) => {
                warn!("Video fetch failed: {e}");
                let detail = e.user_message();
                self.update(|s| s.videos.fail(Section::Videos.failure_message(), Some(detail)));
            }
        }
    }

    async fn jobs_branch(&self, request: JobMatchRequest) {
        match self.inner.backend.match_jobs(&request).await {
            Ok(text) => {
                let jobs = parse_job_recommendations(&text);
                info!(jobs = jobs.len(), "Job matching completed");
                self.update(|s| {
                    s.jobs.complete(jobs);
                    s.job_recommendations_text = text;
                });
            }
            Err(e) => {
                warn!("Job matching failed: {e}");
                let detail = e.user_message();
                self.update(|s| s.jobs.fail(Section::Jobs.failure_message(), Some(detail)));
            }
        }
    }

    async fn projects_branch(&self, skills: Vec<String>) {
        match self.inner.backend.generate_projects(&skills).await {
            Ok(text) => {
                let projects = parse_project_ideas(&text);
                info!(projects = projects.len(), "Project generation completed");
                self.update(|s| {
                    s.projects.complete(projects);
                    s.project_ideas_text = text;
                });
            }
            Err(e) => {
                warn!("Project generation failed: {e}");
                let detail = e.user_message();
                self.update(|s| {
                    s.projects
                        .fail(Section::Projects.failure_message(), Some(detail))
                });
            }
        }
    }
}
