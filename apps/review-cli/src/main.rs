//! Contract review CLI
//!
//! Loads a contract, prints its structured form and the issue checklist,
//! optionally applying fixes first.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use review_engine::{render, ClassifierConfig, FixOutcome, ReviewEngine, SessionState};
use shared_pdf::{ExtractionConfig, FallbackChain};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "review-cli")]
#[command(version, about = "Structure a contract and flag common drafting issues")]
struct Args {
    /// Contract file; .txt is read as text, anything else as PDF
    file: PathBuf,

    /// Apply the fix for an issue id (repeatable, applied in order)
    #[arg(long = "fix", value_name = "ISSUE_ID")]
    fixes: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Lower bound on sentences kept across all sections
    #[arg(long, default_value_t = 80)]
    min_sentences: usize,

    /// Upper bound on sentences kept across all sections
    #[arg(long, default_value_t = 300)]
    max_sentences: usize,

    /// Largest accepted PDF in bytes
    #[arg(long, default_value_t = 10 * 1024 * 1024)]
    max_bytes: usize,

    /// Do not fall back to raw byte scanning for damaged PDFs
    #[arg(long)]
    no_byte_scan: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig {
            min_budget: self.min_sentences,
            max_budget: self.max_sentences,
            ..Default::default()
        }
    }

    fn extraction_config(&self) -> ExtractionConfig {
        ExtractionConfig {
            max_bytes: self.max_bytes,
            enable_byte_scan: !self.no_byte_scan,
            ..Default::default()
        }
    }
}

fn is_plain_text(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the report; logs go to stderr
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let bytes = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let engine = ReviewEngine::new(args.classifier_config());
    let mut session = engine.session();

    if is_plain_text(&args.file) {
        session.ingest_text(String::from_utf8_lossy(&bytes).into_owned());
    } else {
        let chain = FallbackChain::new(args.extraction_config());
        session.ingest(&chain, &bytes).await;
    }

    if session.state() == SessionState::Error {
        eprintln!("error: {}", session.error().unwrap_or("extraction failed"));
        std::process::exit(1);
    }

    for id in &args.fixes {
        match session.try_apply_fix(id)? {
            FixOutcome::Applied => tracing::info!(issue = %id, "fix applied"),
            FixOutcome::AlreadyResolved => tracing::info!(issue = %id, "already resolved"),
            FixOutcome::UnknownIssue => tracing::warn!(issue = %id, "no such issue, skipping"),
        }
    }

    match args.format {
        OutputFormat::Json => {
            let report = session.report().context("no document loaded")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if let Some(warning) = session.warning() {
                eprintln!("warning: {}", warning);
            }
            let doc = session.structured_doc().context("no document loaded")?;
            println!("{}", render::to_text(doc));
            println!("Issues");
            println!("------");
            print!("{}", render::issues_to_text(session.issues()));
        }
    }

    Ok(())
}
