//! Configuration for PDF-to-XML conversion.
//!
//! All conversion behaviour is controlled through [`Config`], loaded from an
//! optional config file. Keeping every knob in one struct makes it trivial to
//! share configs across calls, serialise them for logging, and diff two runs
//! to understand why their outputs differ.
//!
//! # File format
//! [`Config::load`] is format-agnostic. It tries, in order:
//!
//! 1. **JSON** — `{"reader": "dummy", "timeout_sec": 30}`
//! 2. **TOML** — `reader = "dummy"`
//! 3. **`key: value` lines** — one option per line, `#` comments ignored
//!
//! The first format that yields a mapping wins. Unknown keys are ignored so
//! a config written for a newer version still loads.

use crate::error::Pdf2XmlError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a PDF-to-XML conversion.
///
/// Only `reader` is consulted by the core pipeline today; the remaining
/// options are parsed and carried so config files written against the full
/// option surface keep loading, but no component acts on them yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Metadata reader to use: `"pdf-extract"` (rich, page-text heuristics)
    /// or `"dummy"` (filename-based fallback). Any unrecognised value
    /// selects the fallback reader.
    pub reader: String,

    /// Run OCR on image-only pages. Reserved; not consulted by the core.
    pub enable_ocr: bool,

    /// Table-extraction backend name. Reserved; not consulted by the core.
    pub table_extractor: String,

    /// Page ranges to process, e.g. `"all"` or `"1-3"`. Reserved.
    pub page_ranges: String,

    /// Detect multi-column layouts. Reserved.
    pub detect_columns: bool,

    /// Strip running headers and footers. Reserved.
    pub strip_headers_footers: bool,

    /// Normalise affiliation strings. Reserved.
    pub normalize_affiliations: bool,

    /// Reference-list parsing style. Reserved.
    pub reference_style: String,

    /// Emit figures as base64 data URIs. Reserved.
    pub emit_base64_figures: bool,

    /// Emit tables as embedded HTML. Reserved.
    pub emit_tables_as_html: bool,

    /// Nominal per-document timeout in seconds. Parsed and carried but not
    /// enforced by any component yet.
    pub timeout_sec: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reader: "pdf-extract".to_string(),
            enable_ocr: false,
            table_extractor: "auto".to_string(),
            page_ranges: "all".to_string(),
            detect_columns: true,
            strip_headers_footers: true,
            normalize_affiliations: true,
            reference_style: "auto".to_string(),
            emit_base64_figures: false,
            emit_tables_as_html: true,
            timeout_sec: 120,
        }
    }
}

impl Config {
    /// Load a config from an optional file path.
    ///
    /// `None` returns the defaults. A path that does not exist is a fatal
    /// [`Pdf2XmlError::ConfigNotFound`] — a caller who asked for a specific
    /// config should never silently run with defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, Pdf2XmlError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Err(Pdf2XmlError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Pdf2XmlError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::parse(&raw)
    }

    /// Parse config text, trying JSON, then TOML, then `key: value` lines.
    pub fn parse(raw: &str) -> Result<Self, Pdf2XmlError> {
        if let Ok(cfg) = serde_json::from_str::<Config>(raw) {
            return Ok(cfg);
        }
        if let Ok(cfg) = toml::from_str::<Config>(raw) {
            return Ok(cfg);
        }
        Self::parse_kv_lines(raw)
    }

    /// Parse the simple `key: value` line format.
    ///
    /// Blank lines and `#` comments are skipped; values may be wrapped in
    /// single or double quotes. Unknown keys are ignored.
    fn parse_kv_lines(raw: &str) -> Result<Self, Pdf2XmlError> {
        let mut cfg = Self::default();
        for line in raw.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            match key {
                "reader" => cfg.reader = value.to_string(),
                "enable_ocr" => cfg.enable_ocr = parse_bool(value, cfg.enable_ocr),
                "table_extractor" => cfg.table_extractor = value.to_string(),
                "page_ranges" => cfg.page_ranges = value.to_string(),
                "detect_columns" => cfg.detect_columns = parse_bool(value, cfg.detect_columns),
                "strip_headers_footers" => {
                    cfg.strip_headers_footers = parse_bool(value, cfg.strip_headers_footers)
                }
                "normalize_affiliations" => {
                    cfg.normalize_affiliations = parse_bool(value, cfg.normalize_affiliations)
                }
                "reference_style" => cfg.reference_style = value.to_string(),
                "emit_base64_figures" => {
                    cfg.emit_base64_figures = parse_bool(value, cfg.emit_base64_figures)
                }
                "emit_tables_as_html" => {
                    cfg.emit_tables_as_html = parse_bool(value, cfg.emit_tables_as_html)
                }
                "timeout_sec" => {
                    cfg.timeout_sec = value.parse().map_err(|_| {
                        Pdf2XmlError::InvalidConfig(format!(
                            "timeout_sec must be an integer, got '{value}'"
                        ))
                    })?
                }
                _ => {}
            }
        }
        Ok(cfg)
    }
}

/// Lenient bool parsing: `1`, `true`, `yes`, `on` (case-insensitive) are
/// true; everything else falls back to the default.
fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.reader, "pdf-extract");
        assert_eq!(cfg.timeout_sec, 120);
        assert!(cfg.detect_columns);
        assert!(!cfg.enable_ocr);
    }

    #[test]
    fn load_none_is_defaults() {
        let cfg = Config::load(None).unwrap();
        assert_eq!(cfg.reader, Config::default().reader);
    }

    #[test]
    fn missing_path_is_fatal() {
        let err = Config::load(Some(Path::new("/nonexistent/pdf2xml.toml"))).unwrap_err();
        assert!(matches!(err, Pdf2XmlError::ConfigNotFound { .. }));
    }

    #[test]
    fn parse_json() {
        let cfg = Config::parse(r#"{"reader": "dummy", "timeout_sec": 30}"#).unwrap();
        assert_eq!(cfg.reader, "dummy");
        assert_eq!(cfg.timeout_sec, 30);
        // Unset keys keep defaults
        assert_eq!(cfg.page_ranges, "all");
    }

    #[test]
    fn parse_toml() {
        let cfg = Config::parse("reader = \"dummy\"\nenable_ocr = true\n").unwrap();
        assert_eq!(cfg.reader, "dummy");
        assert!(cfg.enable_ocr);
    }

    #[test]
    fn parse_kv_lines() {
        let raw = "# comment\n\nreader: dummy\nenable_ocr: yes\ntimeout_sec: 15\n";
        let cfg = Config::parse(raw).unwrap();
        assert_eq!(cfg.reader, "dummy");
        assert!(cfg.enable_ocr);
        assert_eq!(cfg.timeout_sec, 15);
    }

    #[test]
    fn kv_values_may_be_quoted() {
        let cfg = Config::parse("reader: \"dummy\"\nreference_style: 'ieee'\n").unwrap();
        assert_eq!(cfg.reader, "dummy");
        assert_eq!(cfg.reference_style, "ieee");
    }

    #[test]
    fn kv_unknown_keys_ignored() {
        let cfg = Config::parse("does_not_exist: 42\nreader: dummy\n").unwrap();
        assert_eq!(cfg.reader, "dummy");
    }

    #[test]
    fn bool_parsing_is_lenient() {
        assert!(parse_bool("TRUE", false));
        assert!(parse_bool("on", false));
        assert!(!parse_bool("off", true));
        // Unparseable keeps the default
        assert!(parse_bool("maybe", true));
    }
}
