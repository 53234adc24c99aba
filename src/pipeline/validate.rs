//! Structure validator: minimal sanity checks on a built (or parsed)
//! article document.
//!
//! This is deliberately shallow — it confirms the root tag and the
//! presence of the three required top-level sections, nothing more. It
//! does not check child ordering beyond presence, nor nested element
//! shapes. Deeper schema validation is out of scope.

use crate::article::Element;
use serde::Serialize;

/// Required direct children of `<article>`.
const REQUIRED_CHILDREN: [&str; 3] = ["front", "body", "back"];

/// Outcome of one validation call.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub message: String,
}

impl ValidationResult {
    fn pass(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    /// Human-readable summary line.
    pub fn summary(&self) -> &str {
        &self.message
    }
}

/// Validate the document's basic structure.
///
/// Fails when the root tag is not `article` (message names the actual
/// root) or when any required top-level child is absent (message lists the
/// missing tags).
pub fn validate_article(doc: &Element) -> ValidationResult {
    if doc.name != "article" {
        return ValidationResult::fail(format!(
            "Root must be <article>, got <{}>",
            doc.name
        ));
    }

    let missing: Vec<&str> = REQUIRED_CHILDREN
        .iter()
        .filter(|&&tag| doc.child(tag).is_none())
        .copied()
        .collect();
    if !missing.is_empty() {
        return ValidationResult::fail(format!("Missing required children: {missing:?}"));
    }

    ValidationResult::pass("XML well-formed and basic structure OK")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_article() -> Element {
        let mut doc = Element::new("article");
        doc.push(Element::new("front"));
        doc.push(Element::new("body"));
        doc.push(Element::new("back"));
        doc
    }

    #[test]
    fn valid_article_passes() {
        let result = validate_article(&minimal_article());
        assert!(result.ok);
        assert_eq!(result.summary(), "XML well-formed and basic structure OK");
    }

    #[test]
    fn wrong_root_names_actual_tag() {
        let result = validate_article(&Element::new("bookmark"));
        assert!(!result.ok);
        assert!(result.message.contains("<bookmark>"), "got: {}", result.message);
    }

    #[test]
    fn missing_children_are_listed() {
        let mut doc = Element::new("article");
        doc.push(Element::new("front"));
        let result = validate_article(&doc);
        assert!(!result.ok);
        assert!(result.message.contains("body"));
        assert!(result.message.contains("back"));
        assert!(!result.message.contains("front"));
    }

    #[test]
    fn extra_children_do_not_fail() {
        let mut doc = minimal_article();
        doc.push(Element::new("floats-group"));
        assert!(validate_article(&doc).ok);
    }
}
