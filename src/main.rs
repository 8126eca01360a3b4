use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::info;

use spanfix::{config, pipeline, CorrectionRecord, CorrectionReport, Segment};

#[derive(Parser, Debug)]
#[command(name = "spanfix")]
#[command(about = "Apply correction rules to text and print highlight segments")]
#[command(version)]
struct Args {
    /// Text to check (reads --input or stdin when omitted)
    text: Option<String>,

    /// Read the text to check from a file
    #[arg(long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Rule set file (.toml or .json); built-in rules when omitted
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Render a stored correction-service response instead of running rules
    #[arg(long, conflicts_with_all = ["text", "input", "rules"])]
    response: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Full report as pretty-printed JSON
    Json,
    /// Corrected text plus the original with [[marked]] corrections
    Text,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let report = match &args.response {
        Some(path) => {
            let body = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read response file: {}", path.display()))?;
            let record = CorrectionRecord::from_json(&body)
                .with_context(|| format!("Invalid response file: {}", path.display()))?;
            pipeline::render(&record)?
        }
        None => {
            let rules = config::load_rule_set(args.rules.as_deref())?;
            let text = read_text(&args).await?;
            pipeline::check(&text, &rules)
        }
    };

    info!(annotated = report.annotated_count(), "Correction report ready");

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", format_text(&report)),
    }

    Ok(())
}

async fn read_text(args: &Args) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.input {
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .context("Failed to read text from stdin")?;
    // WHY: trailing newline from the shell is not part of the text
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn format_text(report: &CorrectionReport) -> String {
    let segments = report.segments();
    let mut marked = String::new();
    let mut notes = String::new();
    let mut number = 0usize;

    for segment in &segments {
        match segment {
            Segment::Plain { text, .. } => marked.push_str(text),
            Segment::Annotated { text, start, end, category, .. } => {
                number += 1;
                marked.push_str(&format!("[[{text}]]"));
                let tooltip = segment.tooltip().unwrap_or_default();
                notes.push_str(&format!("{number}. [{start},{end}) {category}: {tooltip}\n"));
            }
        }
    }

    format!("{}\n{}\n{}", report.corrected_text, marked, notes)
}
