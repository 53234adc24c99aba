//! Per-conversion report: placeholder counts and accumulated warnings.

use serde::Serialize;

/// Summary of one conversion.
///
/// The section/figure/table/reference counts are placeholders — counting
/// logic does not exist yet, so they are always zero. Warnings carry
/// non-fatal conditions (currently only structural-validation failures of
/// the built document).
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// Input path as given by the caller.
    pub source: String,
    pub sections: usize,
    pub figures: usize,
    pub tables: usize,
    pub references: usize,
    pub warnings: Vec<String>,
}

impl ConversionReport {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            sections: 0,
            figures: 0,
            tables: 0,
            references: 0,
            warnings: Vec::new(),
        }
    }

    /// Multi-line human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "File: {}\nSections: {}, Figures: {}, Tables: {}, References: {}\nWarnings: {}",
            self.source,
            self.sections,
            self.figures,
            self.tables,
            self.references,
            self.warnings.len()
        )
    }
}
