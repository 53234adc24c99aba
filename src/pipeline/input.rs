//! Input resolution: validate a user-supplied PDF path before extraction.
//!
//! We check the magic bytes (`%PDF`) up front so callers get a meaningful
//! error instead of a confusing extraction failure deep inside the reader.
//! The checks map directly onto the fatal input variants of
//! [`Pdf2XmlError`]; nothing here is recovered.

use crate::error::Pdf2XmlError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a local file path, validating existence and PDF magic bytes.
pub fn resolve_input(path_str: &str) -> Result<PathBuf, Pdf2XmlError> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(Pdf2XmlError::FileNotFound { path });
    }

    match std::fs::File::open(&path) {
        Ok(mut f) => {
            use std::io::Read;
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(Pdf2XmlError::NotAPdf { path, magic });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Pdf2XmlError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(Pdf2XmlError::FileNotFound { path });
        }
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(path)
}

/// Check a path without opening it (used by the validate command, which
/// accepts XML rather than PDF input).
pub fn require_exists(path: &Path) -> Result<(), Pdf2XmlError> {
    if path.exists() {
        Ok(())
    } else {
        Err(Pdf2XmlError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_not_found() {
        let err = resolve_input("/nonexistent/paper.pdf").unwrap_err();
        assert!(matches!(err, Pdf2XmlError::FileNotFound { .. }));
    }

    #[test]
    fn non_pdf_magic_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"<html>not a pdf</html>")
            .unwrap();
        let err = resolve_input(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, Pdf2XmlError::NotAPdf { .. }));
    }

    #[test]
    fn pdf_magic_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ok.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"%PDF-1.4\n%%EOF\n")
            .unwrap();
        let resolved = resolve_input(path.to_str().unwrap()).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    fn short_file_passes_magic_check() {
        // Fewer than four bytes: read_exact fails, the check is skipped and
        // the reader decides later.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.pdf");
        std::fs::File::create(&path).unwrap().write_all(b"%P").unwrap();
        assert!(resolve_input(path.to_str().unwrap()).is_ok());
    }
}
