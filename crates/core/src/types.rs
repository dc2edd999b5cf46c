//! Domain types for extracted transcripts and batch results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Text of every selected slide entry in one archive, in archive order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideTranscript {
    /// Entries in the order they appear in the archive's central directory.
    pub entries: Vec<SlideEntry>,
}

impl SlideTranscript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the stripped text of one entry.
    pub fn push(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.entries.push(SlideEntry {
            name: name.into(),
            text: text.into(),
        });
    }

    /// Number of slide entries collected.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Byte length of [`to_text`](Self::to_text) without rendering it.
    pub fn text_len(&self) -> usize {
        self.entries.iter().map(|e| e.text.len() + 1).sum()
    }

    /// Render the transcript file body: each fragment followed by a newline.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.text_len());
        for entry in &self.entries {
            out.push_str(&entry.text);
            out.push('\n');
        }
        out
    }
}

/// Stripped text of a single slide entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideEntry {
    /// Entry name inside the archive, e.g. `ppt/slides/slide1.xml`.
    pub name: String,

    /// Character data outside all tags, trimmed.
    pub text: String,
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum FileStatus {
    /// A transcript was written.
    Converted { slides: usize, bytes: usize },
    /// Processing stopped; no transcript was written for this input.
    Failed { error: String },
}

impl FileOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self.status, FileStatus::Converted { .. })
    }
}

/// Summary of a batch run, in the order files were visited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,

    /// Set when traversal stopped partway through the input tree.
    pub walk_error: Option<String>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of inputs that produced a transcript.
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    /// Number of inputs that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.converted()
    }

    /// Failed outcomes with their error text.
    pub fn failures(&self) -> impl Iterator<Item = (&FileOutcome, &str)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            FileStatus::Failed { error } => Some((o, error.as_str())),
            FileStatus::Converted { .. } => None,
        })
    }

    /// Whether any file failed or the walk was cut short.
    pub fn has_failures(&self) -> bool {
        self.walk_error.is_some() || self.failed() > 0
    }
}
