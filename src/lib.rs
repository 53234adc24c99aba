//! # pdf2xml
//!
//! Extract bibliographic metadata (title, authors, abstract) from the first
//! pages of a PDF and emit a minimal JATS-like XML article.
//!
//! ## What this crate is (and is not)
//!
//! This is a thin scaffold for turning academic PDFs into structured XML:
//! best-effort regex heuristics over line-segmented page text, a minimal
//! `article → front/body/back` document, and a structural sanity check on
//! the result. It does **not** do layout analysis, OCR, table or figure
//! extraction, or reference parsing — the body is a placeholder paragraph
//! and the reference list is an empty stub. On a clean single-column paper
//! the heuristics work well; on a two-column layout they degrade gracefully
//! rather than fail.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input     validate path + %PDF magic bytes
//!  ├─ 2. Extract   page text (first 3 pages) → title / abstract / authors
//!  ├─ 3. Build     article tree with one <contrib> per detected author
//!  ├─ 4. Validate  root tag + required front/body/back children
//!  └─ 5. Output    pretty-printed UTF-8 XML + conversion report
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2xml::{convert_to_file, Config};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let report = convert_to_file("paper.pdf", "paper.xml", &config)?;
//!     println!("{}", report.summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2xml` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only
//! deps:
//! ```toml
//! pdf2xml = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod article;
pub mod config;
pub mod convert;
pub mod error;
pub mod pipeline;
pub mod report;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use article::Element;
pub use config::Config;
pub use convert::{convert, convert_to_file, split_authors, validate_file, write_formatted};
pub use error::Pdf2XmlError;
pub use pipeline::build::{build_article, split_name, ArticleMeta};
pub use pipeline::reader::{make_reader, DocMeta, FallbackReader, MetadataReader, PdfTextReader};
pub use pipeline::validate::{validate_article, ValidationResult};
pub use report::ConversionReport;
