use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use dialog2rasa_convert::Orchestrator;
use dialog2rasa_core::config::{ConversionContext, DEFAULT_LANGUAGE};
use dialog2rasa_core::diagnostics::TracingDiagnostics;
use dialog2rasa_core::storage::FsSink;

use crate::output::{format_report, OutputFormat};

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to the extracted Dialogflow agent directory
    #[arg(short, long)]
    pub path: PathBuf,

    /// Language code of the source files to convert
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,
}

pub fn run(args: &ConvertArgs, format: OutputFormat) -> Result<()> {
    if !args.path.is_dir() {
        anyhow::bail!("Agent directory not found: {}", args.path.display());
    }

    let ctx = ConversionContext::new(&args.path, &args.language)
        .context("Invalid conversion settings")?;
    let diagnostics = TracingDiagnostics;
    tracing::debug!(agent = %ctx.agent_dir.display(), language = %ctx.language, "converting");

    let report = Orchestrator::new(&ctx, &diagnostics, FsSink)
        .run()
        .with_context(|| format!("Failed to convert agent at {}", args.path.display()))?;

    println!("{}", format_report(&report, format));
    Ok(())
}
