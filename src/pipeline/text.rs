//! Text normalisation: deterministic cleanup of raw PDF page text.
//!
//! PDF extraction output carries typographic artefacts that break the
//! downstream line heuristics — ligature code points that defeat keyword
//! matching, runs of whitespace from column layouts, words hyphenated
//! across line wraps, and superscript affiliation markers glued to author
//! names. Each rule here is a pure `&str → String` function with no shared
//! state, independently testable, applied by the reader in a fixed order.

use once_cell::sync::Lazy;
use regex::Regex;

/// Ligature and typographic replacements applied by [`fix_ligatures`].
///
/// The last two entries repair mojibake sequences (UTF-8 read as Latin-1)
/// that show up in text extracted from certain producers.
const LIGATURES: &[(&str, &str)] = &[
    ("\u{FB01}", "fi"),
    ("\u{FB02}", "fl"),
    ("\u{FB00}", "ff"),
    ("\u{FB03}", "ffi"),
    ("\u{FB04}", "ffl"),
    ("\u{FB05}", "ft"),
    ("\u{FB06}", "st"),
    ("\u{2019}", "'"),
    ("\u{201C}", "\""),
    ("\u{201D}", "\""),
    ("\u{2014}", "-"),
    ("\u{2013}", "-"),
    ("\u{00A0}", " "),
    ("Ã—", "×"),
    ("ï¬", "fi"),
];

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static RE_HYPHEN_WRAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\n([a-z])").unwrap());

static RE_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

static RE_SUPERSCRIPTS: Lazy<Regex> = Lazy::new(|| {
    // Digits, Latin-1 superscripts, the Unicode super/subscript block, and
    // dagger footnote markers.
    Regex::new(r"[0-9\x{00B2}\x{00B3}\x{00B9}\x{2070}-\x{209F}\x{2020}\x{2021}]+").unwrap()
});

/// Replace typographic ligatures and punctuation with ASCII equivalents.
pub fn fix_ligatures(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in LIGATURES {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

/// Collapse every run of whitespace to a single space and trim the ends.
///
/// Idempotent: applying it twice yields the same result as once.
pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Join wrapped lines back into flowing text.
///
/// A trailing hyphen directly before a lowercase letter on the next line is
/// a word wrap and is removed; remaining line breaks become spaces.
pub fn unhyphenate<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let text = lines
        .into_iter()
        .map(|l| l.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let text = RE_HYPHEN_WRAP.replace_all(&text, "$1");
    let text = RE_NEWLINES.replace_all(&text, " ");
    collapse_whitespace(&text)
}

/// Remove digit runs and superscript/footnote markers, then collapse
/// whitespace. Used to strip affiliation numerals from author blocks.
pub fn strip_superscript_digits(text: &str) -> String {
    let stripped = RE_SUPERSCRIPTS.replace_all(text, "");
    collapse_whitespace(&stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_ligatures() {
        assert_eq!(fix_ligatures("e\u{FB03}cient \u{FB01}eld"), "efficient field");
        assert_eq!(fix_ligatures("\u{201C}quoted\u{201D}"), "\"quoted\"");
        assert_eq!(fix_ligatures("a\u{00A0}b"), "a b");
    }

    #[test]
    fn test_fix_ligatures_mojibake() {
        assert_eq!(fix_ligatures("128Ã—128"), "128×128");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn test_collapse_whitespace_idempotent() {
        let once = collapse_whitespace("  a \t b\n c ");
        assert_eq!(collapse_whitespace(&once), once);
    }

    #[test]
    fn test_fix_then_collapse_leaves_no_ligatures() {
        let input = "a\u{FB01}\u{00A0}\u{FB02}  b";
        let out = collapse_whitespace(&fix_ligatures(input));
        for (from, _) in LIGATURES {
            assert!(!out.contains(from), "ligature {from:?} survived: {out:?}");
        }
    }

    #[test]
    fn test_unhyphenate_rejoins_wrapped_words() {
        let lines = ["experi-", "mental results con-", "firm the effect"];
        assert_eq!(
            unhyphenate(lines),
            "experimental results confirm the effect"
        );
    }

    #[test]
    fn test_unhyphenate_keeps_hyphen_before_uppercase() {
        // A hyphen before an uppercase letter is a real compound, not a wrap.
        let lines = ["the Wilcoxon-", "Mann test"];
        assert_eq!(unhyphenate(lines), "the Wilcoxon- Mann test");
    }

    #[test]
    fn test_strip_superscript_digits() {
        assert_eq!(strip_superscript_digits("Jane Doe1,2"), "Jane Doe,");
        assert_eq!(strip_superscript_digits("John Smith\u{2020}"), "John Smith");
        assert_eq!(strip_superscript_digits("Ada\u{00B9} Lovelace"), "Ada Lovelace");
    }
}
