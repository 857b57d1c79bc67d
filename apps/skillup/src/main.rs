use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillup::analysis::{AnalysisSession, AnalysisSnapshot, Section, SectionState};
use skillup::api_client::HttpBackend;
use skillup::cli::{Cli, Command, OutputFormat};
use skillup::config::Config;
use skillup::models::Submission;
use skillup::report;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting SkillUp v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Analysis backend: {} ({})",
        config.api_base_url, config.environment
    );

    let backend = HttpBackend::new(&config)?;

    match cli.command {
        Command::Health => {
            backend.health().await?;
            println!("Backend at {} is healthy", config.api_base_url);
        }
        Command::Analyze {
            resume,
            job_title,
            format,
            retries,
        } => {
            // Validation fails here, before any request is sent
            let submission = Submission::from_path(&resume, &job_title).await?;
            let session = AnalysisSession::new(Arc::new(backend), submission);
            let mut progress = Progress::default();

            with_progress(&session, &mut progress, session.run()).await;

            for round in 1..=retries {
                let failed = session.snapshot().failed_sections();
                let Some(&first) = failed.first() else {
                    break;
                };
                info!(round, failed = failed.len(), "Retrying failed sections");
                with_progress(&session, &mut progress, session.retry(first)).await;
            }

            let snapshot = session.snapshot();
            info!(
                settled = snapshot.is_settled(),
                failed = snapshot.failed_sections().len(),
                "Analysis finished"
            );
            match format {
                OutputFormat::Text => print!("{}", report::render_text(&snapshot)),
                OutputFormat::Json => println!("{}", report::render_json(&snapshot)?),
            }
        }
    }

    Ok(())
}

/// Drives `run` to completion while printing section transitions to stderr.
async fn with_progress(
    session: &AnalysisSession,
    progress: &mut Progress,
    run: impl Future<Output = ()>,
) {
    let mut board = session.subscribe();
    tokio::pin!(run);

    loop {
        tokio::select! {
            _ = &mut run => break,
            Ok(()) = board.changed() => {
                let snapshot = board.borrow_and_update().clone();
                progress.observe(&snapshot);
            }
        }
    }

    progress.observe(&session.snapshot());
}

/// Last state printed per section.
#[derive(Default)]
struct Progress {
    seen: HashMap<Section, SectionState>,
}

impl Progress {
    fn observe(&mut self, snapshot: &AnalysisSnapshot) {
        for section in Section::ALL {
            let state = snapshot.state(section);
            if self.seen.insert(section, state) != Some(state) {
                eprintln!("{}", report::describe_transition(snapshot, section));
            }
        }
    }
}
