//! PPTX slide-text extraction.
//!
//! Reads .pptx files as ZIP archives and strips the markup from every slide
//! entry, in the order the archive lists them.

pub mod extractor;

pub use extractor::{SlideTextExtractor, DEFAULT_SLIDE_PREFIX, DEFAULT_SLIDE_SUFFIX};
