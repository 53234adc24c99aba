//! Conversion entry points: the pipeline orchestrator.
//!
//! [`convert`] wires reader selection, article building, and structural
//! validation together and produces a [`ConversionReport`]. Everything is
//! synchronous; one document is processed per call with no shared mutable
//! state, so callers may run conversions from multiple threads as long as
//! they serialise writes to any shared output path themselves.

use crate::article::Element;
use crate::config::Config;
use crate::error::Pdf2XmlError;
use crate::pipeline::build::{build_article, ArticleMeta};
use crate::pipeline::reader::{make_reader, DocMeta, FallbackReader, MetadataReader};
use crate::pipeline::input;
use crate::pipeline::validate::{validate_article, ValidationResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::{info, warn};

pub use crate::report::ConversionReport;

/// Author-string separators recognised by the orchestrator: commas or the
/// literal word "and". (The reader already normalised `;` and `&` away.)
static RE_AUTHOR_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*|\s+and\s+").unwrap());

/// Split a combined author string into trimmed, non-empty names.
pub fn split_authors(authors: &str) -> Vec<String> {
    if authors.trim().is_empty() {
        return Vec::new();
    }
    RE_AUTHOR_SPLIT
        .split(authors)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert a PDF file to an article document.
///
/// This is the primary entry point for the library.
///
/// # Errors
/// Returns `Err(Pdf2XmlError)` only for fatal errors (missing/unreadable
/// input, non-PDF file). A rich-reader failure falls back to the
/// filename-based reader with a logged warning, and a failed structural
/// validation of the built document is recorded as a report warning — in
/// both cases the call still succeeds.
pub fn convert(input_str: &str, config: &Config) -> Result<(Element, ConversionReport), Pdf2XmlError> {
    info!("Starting conversion: {}", input_str);

    // ── Step 1: Resolve input ────────────────────────────────────────────
    let pdf_path = input::resolve_input(input_str)?;

    // ── Step 2: Extract metadata (rich failure falls back locally) ───────
    let reader = make_reader(&config.reader);
    let meta = extract_with_fallback(reader.as_ref(), &pdf_path)?;
    info!("Extracted metadata: title='{}'", meta.title);

    // ── Step 3: Derive the author list and legacy fallback fields ────────
    let authors = split_authors(&meta.authors);
    let (fallback_given, fallback_surname) = match authors.first() {
        Some(first) => {
            let tokens: Vec<&str> = first.split_whitespace().collect();
            (
                tokens.first().copied().unwrap_or("Jane").to_string(),
                tokens.last().copied().unwrap_or("Doe").to_string(),
            )
        }
        None => ("Jane".to_string(), "Doe".to_string()),
    };

    // ── Step 4: Build the document ───────────────────────────────────────
    let article_meta = ArticleMeta {
        title: meta.title,
        summary: meta.abstract_text,
        authors,
        fallback_given,
        fallback_surname,
    };
    let doc = build_article(&article_meta);

    // ── Step 5: Validate; failures are warnings, never fatal ─────────────
    let mut report = ConversionReport::new(input_str);
    let vr = validate_article(&doc);
    if vr.ok {
        info!("{}", vr.summary());
    } else {
        warn!("{}", vr.summary());
        report.warnings.push(vr.message);
    }

    Ok((doc, report))
}

/// Convert a PDF and write the pretty-printed XML to `output_path`.
///
/// Uses atomic write (temp file + rename) to prevent partial files; an
/// existing file at `output_path` is overwritten.
pub fn convert_to_file(
    input_str: &str,
    output_path: impl AsRef<Path>,
    config: &Config,
) -> Result<ConversionReport, Pdf2XmlError> {
    let (doc, report) = convert(input_str, config)?;
    let path = output_path.as_ref();
    write_formatted(&doc, path)?;
    info!("Wrote XML -> {}", path.display());
    Ok(report)
}

/// Serialise a document to pretty-printed UTF-8 XML at `path`.
pub fn write_formatted(doc: &Element, path: &Path) -> Result<(), Pdf2XmlError> {
    let xml = doc.to_xml_string()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Pdf2XmlError::OutputWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let tmp_path = path.with_extension("xml.tmp");
    std::fs::write(&tmp_path, xml.as_bytes()).map_err(|e| Pdf2XmlError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, path).map_err(|e| Pdf2XmlError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse an XML file and run the structure validator on it.
///
/// A malformed file is a fatal [`Pdf2XmlError::XmlParse`]; a well-formed
/// file with the wrong structure returns `Ok` with `ok == false`.
pub fn validate_file(path: &Path) -> Result<ValidationResult, Pdf2XmlError> {
    input::require_exists(path)?;
    let doc = Element::from_path(path)?;
    Ok(validate_article(&doc))
}

/// Run the reader, recovering a rich-reader failure with the fallback.
fn extract_with_fallback(
    reader: &dyn MetadataReader,
    path: &Path,
) -> Result<DocMeta, Pdf2XmlError> {
    match reader.extract_meta(path) {
        Ok(meta) => Ok(meta),
        Err(e) if reader.name() != "fallback" => {
            warn!("{} reader failed, falling back: {e}", reader.name());
            FallbackReader.extract_meta(path)
        }
        Err(e) => Err(e),
    }
}
