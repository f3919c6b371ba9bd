// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Command-Line Front End
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! `rippletruth` — analyze one text, file, URL or image and print the
//! intelligence report as markdown or JSON.
//!
//! Exit codes: 0 on success, 1 on a usage / configuration / input error,
//! 3 when a collaborator returned a sentinel instead of text.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};

use rippletruth_core::{render_markdown, RipplePipeline};
use rippletruth_ingest::{EnhanceMode, InputResolver, InputSource, LlmEnhancer, OcrService};
use rippletruth_types::{RippleConfig, RippleError};

const SENTINEL_EXIT: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

/// RippleTruth - narrative intelligence report for a piece of text
#[derive(Parser, Debug)]
#[command(name = "rippletruth", version, about, long_about = None)]
struct Args {
    /// Text to analyze
    #[arg(long, group = "input")]
    text: Option<String>,

    /// Read the text to analyze from a file
    #[arg(long, group = "input")]
    file: Option<PathBuf>,

    /// Fetch and analyze an article URL
    #[arg(long, group = "input")]
    url: Option<String>,

    /// Run OCR on an image file and analyze the result
    #[arg(long, group = "input")]
    image: Option<PathBuf>,

    /// JSON config file (missing fields take defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Language-model enhancement: summary, counter, expand or brief
    #[arg(long)]
    enhance: Option<String>,

    /// API key for enhancement (falls back to OPENAI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Skip the fact-stack stage
    #[arg(long)]
    no_fact_stack: bool,

    /// Skip the linguistic force stage
    #[arg(long)]
    no_force: bool,
}

fn load_config(path: Option<&Path>) -> Result<RippleConfig> {
    let Some(path) = path else {
        return Ok(RippleConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = RippleConfig::from_json(&raw)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn build_config(args: &Args) -> Result<RippleConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if args.no_fact_stack {
        config.enable_fact_stack = false;
    }
    if args.no_force {
        config.enable_linguistic_force = false;
    }
    config.validate()?;
    Ok(config)
}

fn input_source(args: &Args) -> Result<InputSource> {
    if let Some(text) = &args.text {
        return Ok(InputSource::Text(text.clone()));
    }
    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading input file {}", path.display()))?;
        return Ok(InputSource::Text(text));
    }
    if let Some(url) = &args.url {
        return Ok(InputSource::Url(url.clone()));
    }
    if let Some(path) = &args.image {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading image {}", path.display()))?;
        return Ok(InputSource::Image(bytes));
    }
    Err(RippleError::InputUnavailable.into())
}

fn run(args: Args) -> Result<ExitCode> {
    let config = build_config(&args)?;
    let mode = args
        .enhance
        .as_deref()
        .map(str::parse::<EnhanceMode>)
        .transpose()?;

    let source = input_source(&args)?;
    let resolver = InputResolver::from_config(&config, Arc::new(OcrService::default()))?;
    let text = resolver.resolve_input(&source)?;

    let pipeline = RipplePipeline::new(config.clone());
    let mut report = match pipeline.analyze_resolved(&text) {
        Ok(report) => report,
        Err(RippleError::Extraction(sentinel)) => {
            warn!("Input could not be resolved to text");
            println!("{sentinel}");
            return Ok(ExitCode::from(SENTINEL_EXIT));
        }
        Err(e) => return Err(e.into()),
    };
    info!(
        "Analyzed {} input: RippleScore={:.4} reliability={:.1}",
        source.kind(),
        report.metrics.ripple_score,
        report.traceback.reliability_index
    );

    if let Some(mode) = mode {
        let api_key = args
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok());
        let enhancer = LlmEnhancer::from_config(&config)?;
        let enhancement = enhancer.enhance(&text, &report.metrics, mode, api_key.as_deref());
        report = report.with_enhancement(enhancement);
    }

    match args.format {
        Format::Markdown => print!("{}", render_markdown(&report)),
        Format::Json => println!("{}", report.to_json()?),
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run(Args::parse())
}
