//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "skillup")]
#[command(about = "Resume skill-gap analysis with course, video, job and project suggestions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a resume against a target job title
    Analyze {
        /// Path to the resume (PDF or DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Target job title, e.g. "Software Engineer"
        #[arg(short, long)]
        job_title: String,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Retry rounds for sections that end in error
        #[arg(long, default_value_t = 0)]
        retries: u32,
    },

    /// Check that the analysis backend is reachable
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
