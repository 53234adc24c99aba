//! Article builder: turn extracted metadata into the XML document tree.
//!
//! The output follows a minimal journal-article shape:
//!
//! ```text
//! article
//! ├── front
//! │   └── article-meta
//! │       ├── title-group / article-title
//! │       └── contrib-group / contrib* / name / {surname, given-names}
//! ├── body
//! │   └── p                 (placeholder paragraph)
//! └── back
//!     └── ref-list          (empty stub)
//! ```
//!
//! The builder never fails: every missing input degrades to a stated
//! default rather than an error.

use crate::article::Element;

/// Body text used when no abstract was extracted.
pub const PLACEHOLDER_BODY: &str =
    "This is a placeholder body; later steps will emit full sections.";

/// Inputs to [`build_article`].
#[derive(Debug, Clone)]
pub struct ArticleMeta {
    /// Article title; empty falls back to "Untitled".
    pub title: String,
    /// Body paragraph text (the abstract, or [`PLACEHOLDER_BODY`]).
    pub summary: String,
    /// Author names in discovery order; one `<contrib>` each.
    pub authors: Vec<String>,
    /// Given names for the single fallback contributor when `authors` is empty.
    pub fallback_given: String,
    /// Surname for the single fallback contributor when `authors` is empty.
    pub fallback_surname: String,
}

impl Default for ArticleMeta {
    fn default() -> Self {
        Self {
            title: String::new(),
            summary: String::new(),
            authors: Vec::new(),
            fallback_given: "Jane".to_string(),
            fallback_surname: "Doe".to_string(),
        }
    }
}

/// Split a name into (given names, surname) by the naive last-token rule:
/// every token but the last is a given name. A single-token name has empty
/// given names; an empty name defaults to "Jane" / "Doe".
pub fn split_name(name: &str) -> (String, String) {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    match tokens.as_slice() {
        [] => ("Jane".to_string(), "Doe".to_string()),
        [only] => (String::new(), (*only).to_string()),
        [given @ .., last] => (given.join(" "), (*last).to_string()),
    }
}

fn contrib(given: &str, surname: &str) -> Element {
    let mut contrib = Element::new("contrib");
    let name = contrib.push(Element::new("name"));
    name.push(Element::with_text("surname", surname));
    name.push(Element::with_text("given-names", given));
    contrib
}

/// Build the article document tree. Never fails.
pub fn build_article(meta: &ArticleMeta) -> Element {
    let mut article = Element::new("article");

    let front = article.push(Element::new("front"));
    let article_meta = front.push(Element::new("article-meta"));

    let title_group = article_meta.push(Element::new("title-group"));
    let title = if meta.title.is_empty() {
        "Untitled"
    } else {
        &meta.title
    };
    title_group.push(Element::with_text("article-title", title));

    let contrib_group = article_meta.push(Element::new("contrib-group"));
    if meta.authors.is_empty() {
        contrib_group.push(contrib(&meta.fallback_given, &meta.fallback_surname));
    } else {
        for author in &meta.authors {
            let (given, surname) = split_name(author);
            contrib_group.push(contrib(&given, &surname));
        }
    }

    let body = article.push(Element::new("body"));
    let summary = if meta.summary.is_empty() {
        PLACEHOLDER_BODY
    } else {
        &meta.summary
    };
    body.push(Element::with_text("p", summary));

    let back = article.push(Element::new("back"));
    back.push(Element::new("ref-list"));

    article
}
