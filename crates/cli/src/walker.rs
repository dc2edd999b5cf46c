//! Recursive batch conversion of an input tree.

use slidetext_core::{BatchConfig, BatchReport, Error, FileOutcome, FileStatus, Result};
use slidetext_pptx::SlideTextExtractor;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Convert every matching presentation under `config.input_dir`.
///
/// Per-file failures are recorded in the report and never stop the batch.
/// Only an uncreatable output directory or an unreadable input root is
/// returned as an error.
pub fn run_batch(config: &BatchConfig, extractor: &SlideTextExtractor) -> Result<BatchReport> {
    fs::create_dir_all(&config.output_dir).map_err(|e| Error::OutputDirError {
        path: config.output_dir.display().to_string(),
        message: e.to_string(),
    })?;

    let mut report = BatchReport::new();

    let walker = WalkDir::new(&config.input_dir)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .unwrap_or(config.input_dir.as_path())
                    .display()
                    .to_string();

                if err.depth() == 0 {
                    return Err(Error::WalkError {
                        path,
                        message: err.to_string(),
                    });
                }

                log::warn!("Stopping walk at {}: {}", path, err);
                report.walk_error = Some(Error::WalkError {
                    path,
                    message: err.to_string(),
                }
                .to_string());
                break;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(stem) = config.match_stem(entry.file_name()) else {
            continue;
        };

        let output = config.output_path_for(stem);
        report.record(process_file(extractor, entry.path(), &output));
    }

    log::info!(
        "Batch finished: {} converted, {} failed",
        report.converted(),
        report.failed()
    );

    Ok(report)
}

/// Convert a single presentation, folding any error into the outcome.
fn process_file(extractor: &SlideTextExtractor, input: &Path, output: &Path) -> FileOutcome {
    let status = match extractor.extract_file(input, output) {
        Ok(transcript) => {
            log::info!("Converted {} -> {}", input.display(), output.display());
            FileStatus::Converted {
                slides: transcript.len(),
                bytes: transcript.text_len(),
            }
        }
        Err(e) => {
            log::warn!("Failed to process file {}: {}", input.display(), e);
            FileStatus::Failed {
                error: e.to_string(),
            }
        }
    };

    FileOutcome {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        status,
    }
}
