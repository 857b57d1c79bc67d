//! Analysis orchestration: the five sections of a run, their states, and the
//! session that drives the backend calls and publishes results.

pub mod orchestrator;
pub mod state;

pub use orchestrator::AnalysisSession;
pub use state::{AnalysisSnapshot, Section, SectionState, SectionStatus};
