//! Batch converter from PowerPoint archives to plain-text transcripts.

mod walker;

use anyhow::{Context, Result};
use clap::Parser;
use slidetext_core::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use slidetext_core::{BatchConfig, BatchReport, Error};
use slidetext_pptx::SlideTextExtractor;
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert every .pptx under a directory into a .txt transcript of its slides.
#[derive(Parser, Debug)]
#[command(name = "slidetext")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory scanned recursively for .pptx files
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Directory receiving the .txt transcripts (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Print the batch report as JSON instead of per-file lines
    #[arg(long)]
    json: bool,

    /// Exit with a failure status if any file could not be converted
    #[arg(long)]
    strict: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = BatchConfig::new()
        .with_input_dir(&args.input)
        .with_output_dir(&args.output);
    let extractor = SlideTextExtractor::new();

    log::debug!(
        "Converting {} into {}",
        config.input_dir.display(),
        config.output_dir.display()
    );

    let report = match walker::run_batch(&config, &extractor) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e);
            if matches!(e, Error::WalkError { .. }) {
                println!("Processing complete.");
            }
            return Ok(exit_code(args.strict, true));
        }
    };

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize batch report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    Ok(exit_code(args.strict, report.has_failures()))
}

/// Print one line per failure and the completion line.
fn print_report(report: &BatchReport) {
    for (outcome, error) in report.failures() {
        eprintln!("Failed to process file {}: {}", outcome.input.display(), error);
    }

    if let Some(walk_error) = &report.walk_error {
        eprintln!("{}", walk_error);
    }

    if report.failed() > 0 {
        log::info!("{} converted, {} failed", report.converted(), report.failed());
    }

    println!("Processing complete.");
}

fn exit_code(strict: bool, failed: bool) -> ExitCode {
    if fails_run(strict, failed) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Failures only change the exit status when `--strict` is given.
fn fails_run(strict: bool, failed: bool) -> bool {
    strict && failed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["slidetext"]);
        assert_eq!(args.input, PathBuf::from("./input"));
        assert_eq!(args.output, PathBuf::from("./output"));
        assert!(!args.json);
        assert!(!args.strict);
    }

    #[test]
    fn test_args_override() {
        let args = Args::parse_from(["slidetext", "-i", "decks", "-o", "out", "--strict"]);
        assert_eq!(args.input, PathBuf::from("decks"));
        assert_eq!(args.output, PathBuf::from("out"));
        assert!(args.strict);
    }

    #[test]
    fn test_exit_code_is_success_unless_strict() {
        assert!(!fails_run(false, true));
        assert!(!fails_run(true, false));
        assert!(fails_run(true, true));
    }
}
