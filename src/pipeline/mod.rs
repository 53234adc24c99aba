//! Pipeline stages for PDF-to-XML conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping
//! stages separate makes each independently testable and lets us swap
//! implementations (e.g. a different extraction backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ reader ──▶ build ──▶ validate
//! (path)    (text +    (XML      (structure
//!           heuristics) tree)     check)
//! ```
//!
//! 1. [`input`]    — validate the user-supplied path (existence, `%PDF` magic)
//! 2. [`text`]     — normalisation primitives used by the reader
//! 3. [`reader`]   — extract title/abstract/authors from the first pages
//! 4. [`build`]    — assemble the article document tree
//! 5. [`validate`] — structural sanity check on the result

pub mod build;
pub mod input;
pub mod reader;
pub mod text;
pub mod validate;
