//! Slide entry selection and transcript writing.

use slidetext_core::{strip_markup, Error, Result, SlideTranscript};
use std::fs::{self, File};
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Entry-name prefix shared by all slide parts in a presentation package.
pub const DEFAULT_SLIDE_PREFIX: &str = "ppt/slides/slide";

/// Entry-name suffix of slide parts.
pub const DEFAULT_SLIDE_SUFFIX: &str = ".xml";

/// Upper bound on the buffer reserved from an entry's declared size.
const MAX_PREALLOC: usize = 1 << 20;

/// Initial buffer size for an entry; the declared size is not trusted.
fn prealloc_len(declared: u64) -> usize {
    usize::try_from(declared).map_or(MAX_PREALLOC, |n| n.min(MAX_PREALLOC))
}

/// Extracts the text of slide entries from a presentation archive.
///
/// Entries are taken in central-directory order. No numeric sort is applied,
/// so `slide10.xml` precedes `slide2.xml` if the archive stores it first.
#[derive(Debug, Clone)]
pub struct SlideTextExtractor {
    prefix: String,
    suffix: String,
}

impl SlideTextExtractor {
    /// Create an extractor matching `ppt/slides/slide*.xml`.
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_SLIDE_PREFIX.to_string(),
            suffix: DEFAULT_SLIDE_SUFFIX.to_string(),
        }
    }

    /// Match entries starting with `prefix` instead.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Match entries ending with `suffix` instead.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Whether an entry name denotes slide content.
    pub fn is_slide_entry(&self, name: &str) -> bool {
        name.starts_with(&self.prefix) && name.ends_with(&self.suffix)
    }

    /// Extract slide text from an archive reader.
    ///
    /// Fails on the first entry that cannot be opened or read; partial
    /// transcripts are never returned.
    pub fn extract<R: Read + Seek>(&self, reader: R) -> Result<SlideTranscript> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| Error::ArchiveError(e.to_string()))?;

        let mut transcript = SlideTranscript::new();

        for index in 0..archive.len() {
            // Selection uses the central-directory name only, so non-slide
            // parts are never opened.
            let name = match archive.name_for_index(index) {
                Some(name) if self.is_slide_entry(name) => name.to_string(),
                _ => continue,
            };
            log::debug!("Reading slide entry {}", name);

            let mut entry = archive.by_index(index).map_err(|e| Error::EntryError {
                entry: name.clone(),
                message: e.to_string(),
            })?;

            let mut data = Vec::with_capacity(prealloc_len(entry.size()));
            entry
                .read_to_end(&mut data)
                .map_err(|e| Error::EntryError {
                    entry: name.clone(),
                    message: e.to_string(),
                })?;

            transcript.push(name, strip_markup(&data));
        }

        Ok(transcript)
    }

    /// Extract slide text from `input` and write it to `output`.
    ///
    /// The output file is created or truncated only after every slide entry
    /// has been read.
    pub fn extract_file(&self, input: &Path, output: &Path) -> Result<SlideTranscript> {
        let file = File::open(input)?;
        let transcript = self.extract(BufReader::new(file))?;

        fs::write(output, transcript.to_text()).map_err(|e| Error::WriteError {
            path: output.display().to_string(),
            message: e.to_string(),
        })?;

        log::debug!(
            "Wrote {} slide(s) from {} to {}",
            transcript.len(),
            input.display(),
            output.display()
        );

        Ok(transcript)
    }
}

impl Default for SlideTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}
