//! Core types, configuration, and markup stripping for converting
//! presentation archives into plain-text transcripts.

pub mod config;
pub mod error;
pub mod strip;
pub mod types;

pub use config::BatchConfig;
pub use error::{Error, Result};
pub use strip::strip_markup;
pub use types::{BatchReport, FileOutcome, FileStatus, SlideEntry, SlideTranscript};
