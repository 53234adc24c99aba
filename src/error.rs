//! Error types for the pdf2xml library.
//!
//! Everything in [`Pdf2XmlError`] is **fatal**: the conversion or validation
//! cannot proceed at all (bad input file, missing config, unparseable XML).
//! Recoverable conditions never reach this type:
//!
//! * A rich-reader failure (backend unavailable, extraction error) is
//!   recovered locally by falling back to the filename-based reader and is
//!   logged as a warning.
//! * A structural-validation failure of the *built* document is recorded as
//!   a warning in the [`crate::report::ConversionReport`]; the XML is still
//!   written.
//!
//! No operation is retried anywhere; every failure is reported after a
//! single attempt.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdf2xml library.
#[derive(Debug, Error)]
pub enum Pdf2XmlError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── Extraction errors ─────────────────────────────────────────────────
    /// The text-extraction backend failed on this document.
    ///
    /// The orchestrator recovers from this by switching to the fallback
    /// reader; it only surfaces to callers invoking a reader directly.
    #[error("Text extraction failed for '{path}': {detail}")]
    ExtractionFailed { path: PathBuf, detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// A config file path was given but no file exists there.
    #[error("Config not found: '{path}'")]
    ConfigNotFound { path: PathBuf },

    /// The config file exists but no supported format could parse it.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── XML errors ────────────────────────────────────────────────────────
    /// An XML file handed to the validator could not be parsed.
    #[error("Failed to parse XML '{path}': {detail}")]
    XmlParse { path: PathBuf, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output XML file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
