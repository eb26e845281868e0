//! CLI binary for pdf2spec.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ExtractionConfig`, validates inputs at the upload boundary, and prints
//! results.

use anyhow::{bail, Context, Result};
use clap::Parser;
use futures::stream::{self, StreamExt};
use pdf2spec::{catalog_json, extract_file, ExtractionConfig, ExtractionOutput, GeminiModel};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic extraction (stdout)
  pdf2spec section.pdf

  # Write to a file
  pdf2spec section.pdf -o section.json

  # Use the premium model
  pdf2spec --model gemini-2.5-pro section.pdf

  # Batch mode: results land next to each input as <name>.json
  pdf2spec specs/*.pdf --concurrency 8

  # Upload-boundary envelope: {"data": ...} / {"error": ...}
  pdf2spec --envelope section.pdf

  # List the model catalog as JSON
  pdf2spec --list-models

SUPPORTED MODELS:
  Identifier               Tier      Best for
  ───────────────────      ────────  ─────────────────────────────────────
  gemini-2.5-flash-lite    Economy   Short, cleanly formatted sections
  gemini-2.5-flash         Balanced  Default — most documents
  gemini-2.5-pro           Premium   Long sections, dense clause nesting

ENVIRONMENT VARIABLES:
  GEMINI_API_KEY   Google Gemini API key (required)
  RUST_LOG         Log filter, e.g. RUST_LOG=pdf2spec=debug
"#;

/// Extract structured construction-spec JSON from PDF documents.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2spec",
    version,
    about = "Extract structured construction-spec JSON from PDF documents using the Gemini API",
    after_help = AFTER_HELP
)]
struct Cli {
    /// PDF files to extract.
    #[arg(required_unless_present = "list_models")]
    inputs: Vec<PathBuf>,

    /// Model identifier (or alias: lite, flash, pro).
    #[arg(short, long, default_value = "gemini-2.5-flash")]
    model: String,

    /// Write the result to this file instead of stdout (single input only).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap output the way the upload boundary does: {"data": <result>} on
    /// success, {"error": <message>} on failure.
    #[arg(long)]
    envelope: bool,

    /// Concurrent extractions when multiple inputs are given.
    #[arg(long, default_value_t = 4)]
    concurrency: usize,

    /// Print the model catalog as JSON and exit.
    #[arg(long)]
    list_models: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_models {
        println!("{}", serde_json::to_string_pretty(&catalog_json())?);
        return Ok(());
    }

    let model: GeminiModel = cli.model.parse()?;
    let config = ExtractionConfig::builder().model(model).build();

    if cli.inputs.len() == 1 {
        extract_single(&cli.inputs[0], &config, cli.output.as_deref(), cli.envelope).await
    } else {
        if cli.output.is_some() {
            bail!("--output requires a single input; got {}", cli.inputs.len());
        }
        extract_batch(&cli.inputs, &config, cli.concurrency.max(1), cli.envelope).await
    }
}

/// Render an extraction for output, honouring the envelope flag.
fn render(output: &ExtractionOutput, envelope: bool) -> String {
    if envelope {
        json!({ "data": output.result.text() }).to_string()
    } else {
        output.result.text().to_string()
    }
}

async fn extract_single(
    input: &Path,
    config: &ExtractionConfig,
    output_path: Option<&Path>,
    envelope: bool,
) -> Result<()> {
    match extract_file(input, config).await {
        Ok(output) => {
            let rendered = render(&output, envelope);
            match output_path {
                Some(path) => std::fs::write(path, rendered)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => println!("{rendered}"),
            }
            if !output.result.is_structured() {
                eprintln!(
                    "{}",
                    dim("note: model output was not valid JSON; returned raw text")
                );
            }
            Ok(())
        }
        Err(e) => {
            if envelope {
                println!("{}", json!({ "error": e.to_string() }));
            }
            Err(e.into())
        }
    }
}

async fn extract_batch(
    inputs: &[PathBuf],
    config: &ExtractionConfig,
    concurrency: usize,
    envelope: bool,
) -> Result<()> {
    let results: Vec<(PathBuf, Result<ExtractionOutput, pdf2spec::ExtractError>)> =
        stream::iter(inputs.iter().cloned().map(|path| {
            let config = config.clone();
            async move {
                let result = extract_file(&path, &config).await;
                (path, result)
            }
        }))
        .buffer_unordered(concurrency)
        .collect()
        .await;

    let mut failed = 0usize;
    for (path, result) in &results {
        match result {
            Ok(output) => {
                let dest = path.with_extension("json");
                std::fs::write(&dest, render(output, envelope))
                    .with_context(|| format!("failed to write {}", dest.display()))?;
                eprintln!(
                    "  {} {}  {}",
                    green("✓"),
                    path.display(),
                    dim(&format!("→ {} ({}ms)", dest.display(), output.duration_ms)),
                );
            }
            Err(e) => {
                failed += 1;
                eprintln!("  {} {}  {}", red("✗"), path.display(), red(&e.to_string()));
            }
        }
    }

    if failed > 0 {
        bail!("{failed}/{} documents failed", results.len());
    }
    Ok(())
}
