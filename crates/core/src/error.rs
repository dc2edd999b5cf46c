//! Error types for slide text extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting presentation archives.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The container could not be opened as a ZIP archive.
    #[error("error opening pptx file: {0}")]
    ArchiveError(String),

    /// A slide entry could not be opened or read.
    #[error("error reading slide {entry}: {message}")]
    EntryError { entry: String, message: String },

    /// The transcript could not be written.
    #[error("error writing {path}: {message}")]
    WriteError { path: String, message: String },

    /// The output directory could not be created.
    #[error("Error creating output directory {path}: {message}")]
    OutputDirError { path: String, message: String },

    /// The input tree could not be traversed.
    #[error("Error walking input directory {path}: {message}")]
    WalkError { path: String, message: String },
}
