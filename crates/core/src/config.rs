//! Batch configuration.

use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Directory scanned for presentations when none is given.
pub const DEFAULT_INPUT_DIR: &str = "./input";

/// Directory receiving transcripts when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Paths and extensions driving a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Root scanned recursively for presentations.
    pub input_dir: PathBuf,

    /// Flat directory receiving one transcript per presentation.
    pub output_dir: PathBuf,

    /// Container extension to match, without the dot. Compared ignoring ASCII case.
    pub extension: String,

    /// Extension given to transcripts, without the dot.
    pub output_extension: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: "pptx".to_string(),
            output_extension: "txt".to_string(),
        }
    }
}

impl BatchConfig {
    /// Create a configuration with the default paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input root.
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Split `file_name` into its stem if its extension matches.
    ///
    /// The extension is whatever follows the last `.`, so `.pptx` matches
    /// with an empty stem. Names that are not valid UTF-8 still match.
    pub fn match_stem<'a>(&self, file_name: &'a OsStr) -> Option<&'a OsStr> {
        let path = Path::new(file_name);
        match path.extension() {
            Some(ext) => ext
                .to_string_lossy()
                .eq_ignore_ascii_case(&self.extension)
                .then(|| path.file_stem())
                .flatten(),
            // `Path` treats a leading-dot name like `.pptx` as all stem.
            None => file_name
                .to_str()
                .and_then(|name| name.strip_prefix('.'))
                .filter(|ext| ext.eq_ignore_ascii_case(&self.extension))
                .map(|_| OsStr::new("")),
        }
    }

    /// Transcript path for an input whose stem is `stem`.
    pub fn output_path_for(&self, stem: &OsStr) -> PathBuf {
        let mut name = stem.to_os_string();
        name.push(".");
        name.push(&self.output_extension);
        self.output_dir.join(name)
    }
}
