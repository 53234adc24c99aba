//! Metadata readers: pull title, abstract, and authors out of a PDF.
//!
//! Two readers implement [`MetadataReader`]:
//!
//! * [`PdfTextReader`] — the rich path. Extracts per-page text (first three
//!   pages only), normalises it line by line, and runs regex heuristics to
//!   locate the title, the abstract paragraph, and the author block.
//! * [`FallbackReader`] — the degraded path. Derives a title from the file
//!   name and leaves abstract/authors empty. Used when rich extraction is
//!   unavailable or fails.
//!
//! The heuristics are best-effort line scanning, not layout analysis: a
//! two-column paper or a title spanning several lines will confuse them.
//! They are kept as small pure functions over line slices so each one can
//! be tested without a PDF in sight.

use crate::error::Pdf2XmlError;
use crate::pipeline::text::{
    collapse_whitespace, fix_ligatures, strip_superscript_digits, unhyphenate,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};

/// Bibliographic metadata for one document.
///
/// Produced once per input by a reader, immutable afterwards, consumed by
/// the article builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocMeta {
    /// Document title; never empty ("Untitled" when nothing was found).
    pub title: String,
    /// Abstract paragraph; empty when no abstract heading was found.
    pub abstract_text: String,
    /// Comma-joined candidate author names; empty when none were found.
    pub authors: String,
}

/// Capability to extract [`DocMeta`] from a document path.
pub trait MetadataReader {
    fn extract_meta(&self, path: &Path) -> Result<DocMeta, Pdf2XmlError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

// ── Heuristic patterns ───────────────────────────────────────────────────

/// A line that terminates abstract/author-block scanning.
static RE_SECTION_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(abstract|index terms|keywords|introduction|1\.|i\.)\b").unwrap());

/// An "Abstract" heading on a line of its own, optional trailing `:` or `-`.
static RE_ABSTRACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^abstract\b[:\-]?\s*$").unwrap());

static RE_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

/// Institutional keywords marking a line (or name fragment) as an
/// affiliation rather than a person.
static RE_AFFILIATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(university|institute|department|school|hospital|laborator(y|ies)|center|centre|graduate|college)\b",
    )
    .unwrap()
});

/// Fragment separators inside an author block: commas, semicolons, the word
/// "and", ampersands.
static RE_NAME_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[,;]\s*|\s+and\s+|\s+&\s+").unwrap());

/// Pages scanned for metadata. Front matter lives on page one; the window
/// covers title pages and abstracts pushed to page two or three.
const MAX_PAGES: usize = 3;
/// Lines scanned for an abstract heading.
const ABSTRACT_SCAN_WINDOW: usize = 300;
/// Lines collected after an abstract heading.
const ABSTRACT_BODY_WINDOW: usize = 150;
/// Lines scanned after the title for the author block.
const AUTHOR_BLOCK_WINDOW: usize = 40;
/// Cap on extracted author names.
const MAX_AUTHORS: usize = 16;

fn is_affiliation_line(line: &str) -> bool {
    if RE_AFFILIATION.is_match(line) || line.contains('@') {
        return true;
    }
    let lower = line.to_lowercase();
    lower.starts_with("corresponding author")
        || lower.starts_with("copyright")
        || lower.starts_with('©')
}

/// Title heuristic: the first surviving line.
fn find_title(lines: &[String]) -> String {
    lines
        .first()
        .cloned()
        .unwrap_or_else(|| "Untitled".to_string())
}

/// Abstract heuristic: text following an "Abstract" heading, up to a blank
/// line or the next section boundary.
fn find_abstract(lines: &[String]) -> String {
    for (i, line) in lines.iter().take(ABSTRACT_SCAN_WINDOW).enumerate() {
        if !RE_ABSTRACT.is_match(line) {
            continue;
        }
        let mut buf: Vec<&str> = Vec::new();
        for next in lines.iter().skip(i + 1).take(ABSTRACT_BODY_WINDOW) {
            if next.trim().is_empty() || RE_SECTION_BREAK.is_match(next) {
                break;
            }
            buf.push(next);
        }
        return unhyphenate(buf);
    }
    String::new()
}

/// Author-block heuristic: lines strictly between the title and the
/// abstract heading (or next section boundary), minus affiliation lines and
/// long all-caps running headers.
fn author_block_lines<'a>(lines: &'a [String], title: &str) -> Vec<&'a str> {
    let title_idx = lines.iter().position(|l| l == title).unwrap_or(0);
    let mut block = Vec::new();
    for line in lines.iter().skip(title_idx + 1).take(AUTHOR_BLOCK_WINDOW) {
        if RE_ABSTRACT.is_match(line) || RE_SECTION_BREAK.is_match(line) {
            break;
        }
        if is_affiliation_line(line) {
            continue;
        }
        if line.len() > 80 && line.to_uppercase() == *line {
            continue;
        }
        block.push(line.as_str());
    }
    block
}

/// Extract a ", "-joined author-name string from the page lines.
fn extract_authors(lines: &[String], title: &str) -> String {
    let block_lines = author_block_lines(lines, title);
    if block_lines.is_empty() {
        return String::new();
    }
    let block = block_lines.join(" ");
    let block = RE_EMAIL.replace_all(&block, "");
    let block = strip_superscript_digits(&block);

    let mut names: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for part in RE_NAME_SPLIT.split(&block) {
        let part = part.trim();
        if part.is_empty() || RE_AFFILIATION.is_match(part) {
            continue;
        }
        let tokens: Vec<&str> = part.split_whitespace().collect();
        if tokens.is_empty() || tokens.len() > 3 {
            continue;
        }
        let name = tokens.join(" ");
        let key = name.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        names.push(name);
        if names.len() == MAX_AUTHORS {
            break;
        }
    }
    names.join(", ")
}

// ── Rich reader ──────────────────────────────────────────────────────────

/// Rich reader backed by the `pdf-extract` text-extraction backend.
pub struct PdfTextReader;

impl PdfTextReader {
    /// Construct the reader.
    ///
    /// The backend is compiled in, so construction only fails for documents
    /// later, at extraction time — the factory still treats this as
    /// fallible to keep the fallback policy in one place.
    pub fn new() -> Result<Self, Pdf2XmlError> {
        Ok(Self)
    }

    /// Normalise one page of raw text into non-empty lines.
    fn page_lines(page_text: &str) -> Vec<String> {
        page_text
            .lines()
            .map(|l| collapse_whitespace(&fix_ligatures(l)))
            .filter(|l| !l.is_empty())
            .collect()
    }
}

impl MetadataReader for PdfTextReader {
    fn extract_meta(&self, path: &Path) -> Result<DocMeta, Pdf2XmlError> {
        let pages = pdf_extract::extract_text_by_pages(path).map_err(|e| {
            Pdf2XmlError::ExtractionFailed {
                path: path.to_path_buf(),
                detail: e.to_string(),
            }
        })?;

        let mut lines: Vec<String> = Vec::new();
        for page in pages.iter().take(MAX_PAGES) {
            lines.extend(Self::page_lines(page));
        }
        debug!("Extracted {} non-empty lines from first pages", lines.len());

        let title = find_title(&lines);
        let abstract_text = find_abstract(&lines);
        let authors = extract_authors(&lines, &title);

        Ok(DocMeta {
            title: if title.is_empty() {
                "Untitled".to_string()
            } else {
                title
            },
            abstract_text,
            authors,
        })
    }

    fn name(&self) -> &'static str {
        "pdf-extract"
    }
}

// ── Fallback reader ──────────────────────────────────────────────────────

/// Fallback reader: guess a title from the file name.
pub struct FallbackReader;

impl MetadataReader for FallbackReader {
    fn extract_meta(&self, path: &Path) -> Result<DocMeta, Pdf2XmlError> {
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().replace(['_', '-'], " ").trim().to_string())
            .unwrap_or_default();
        Ok(DocMeta {
            title: if title.is_empty() {
                "Untitled".to_string()
            } else {
                title
            },
            abstract_text: String::new(),
            authors: String::new(),
        })
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}

// ── Factory ──────────────────────────────────────────────────────────────

/// Select a reader by configured name (case-insensitive).
///
/// `"pdf-extract"` selects the rich reader; any other value (including
/// `"dummy"` and the empty string) selects [`FallbackReader`]. A rich
/// reader that fails to construct logs a warning and falls back locally —
/// this never surfaces as an error to the caller.
pub fn make_reader(name: &str) -> Box<dyn MetadataReader> {
    if name.eq_ignore_ascii_case("pdf-extract") {
        match PdfTextReader::new() {
            Ok(reader) => {
                debug!("Using PdfTextReader");
                return Box::new(reader);
            }
            Err(e) => {
                warn!("Falling back to FallbackReader: {e}");
            }
        }
    }
    debug!("Using FallbackReader");
    Box::new(FallbackReader)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn title_is_first_line() {
        let ls = lines(&["Deep Learning for Cats", "Jane Doe"]);
        assert_eq!(find_title(&ls), "Deep Learning for Cats");
    }

    #[test]
    fn title_defaults_to_untitled() {
        assert_eq!(find_title(&[]), "Untitled");
    }

    #[test]
    fn abstract_collected_until_section_break() {
        let ls = lines(&[
            "A Title",
            "Abstract",
            "We study the frobnication of",
            "widgets under load.",
            "Keywords: widgets",
            "never reached",
        ]);
        assert_eq!(
            find_abstract(&ls),
            "We study the frobnication of widgets under load."
        );
    }

    #[test]
    fn abstract_heading_must_be_alone_on_its_line() {
        let ls = lines(&["A Title", "Abstract of a different paper we cite"]);
        assert_eq!(find_abstract(&ls), "");
    }

    #[test]
    fn abstract_unhyphenates_wrapped_words() {
        let ls = lines(&["T", "Abstract:", "an experi-", "mental method"]);
        assert_eq!(find_abstract(&ls), "an experimental method");
    }

    #[test]
    fn affiliation_lines_detected() {
        assert!(is_affiliation_line("Department of Computer Science"));
        assert!(is_affiliation_line("MIT Media Laboratory"));
        assert!(is_affiliation_line("jane@example.org"));
        assert!(is_affiliation_line("Corresponding author: J. Doe"));
        assert!(is_affiliation_line("© 2024 The Authors"));
        assert!(!is_affiliation_line("Jane Doe and John Smith"));
    }

    #[test]
    fn authors_extracted_between_title_and_abstract() {
        let ls = lines(&[
            "A Grand Title",
            "Jane Doe, John Q Smith and Ada Lovelace",
            "Department of Rocketry, Example University",
            "Abstract",
            "Words.",
        ]);
        assert_eq!(
            extract_authors(&ls, "A Grand Title"),
            "Jane Doe, John Q Smith, Ada Lovelace"
        );
    }

    #[test]
    fn authors_strip_emails_and_markers() {
        let ls = lines(&[
            "Title",
            "Jane Doe1 and John Smith2",
            "jane.doe@lab.example.com",
            "Abstract",
        ]);
        assert_eq!(extract_authors(&ls, "Title"), "Jane Doe, John Smith");
    }

    #[test]
    fn authors_deduplicated_case_insensitively() {
        let ls = lines(&["Title", "Jane Doe, JANE DOE, John Smith", "Abstract"]);
        assert_eq!(extract_authors(&ls, "Title"), "Jane Doe, John Smith");
    }

    #[test]
    fn author_fragments_longer_than_three_words_dropped() {
        let ls = lines(&["Title", "Jane Doe, A Very Long Committee Name", "Abstract"]);
        assert_eq!(extract_authors(&ls, "Title"), "Jane Doe");
    }

    #[test]
    fn authors_capped_at_sixteen() {
        // Letters only: digits would be stripped as superscript markers.
        let many = (0..30)
            .map(|i: u8| {
                let a = (b'A' + i / 10) as char;
                let b = (b'A' + i % 10) as char;
                format!("A{a} B{b}")
            })
            .collect::<Vec<_>>()
            .join(", ");
        let ls = lines(&["Title", &many, "Abstract"]);
        let out = extract_authors(&ls, "Title");
        assert_eq!(out.split(", ").count(), 16);
    }

    #[test]
    fn fallback_reader_title_from_file_name() {
        let meta = FallbackReader
            .extract_meta(Path::new("/tmp/My_Sample-Paper.pdf"))
            .unwrap();
        assert_eq!(meta.title, "My Sample Paper");
        assert_eq!(meta.abstract_text, "");
        assert_eq!(meta.authors, "");
    }

    #[test]
    fn factory_selects_fallback_for_unknown_names() {
        assert_eq!(make_reader("dummy").name(), "fallback");
        assert_eq!(make_reader("").name(), "fallback");
        assert_eq!(make_reader("PDF-EXTRACT").name(), "pdf-extract");
    }
}
