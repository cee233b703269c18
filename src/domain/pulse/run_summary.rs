// ============================================================
// RUN SUMMARY
// ============================================================
// Counts reported at the end of an ingestion run

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{DatasetKind, SkipKind, SkippedFile};

/// One dataset artifact as written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenArtifact {
    pub dataset: DatasetKind,
    pub path: PathBuf,
    pub rows: usize,
    /// SHA-256 of the exact bytes written
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub files_enumerated: usize,
    pub files_extracted: usize,
    pub rows: BTreeMap<DatasetKind, usize>,
    pub skipped: BTreeMap<SkipKind, usize>,
    pub skipped_files: Vec<SkippedFile>,
    pub artifacts: Vec<WrittenArtifact>,
}

impl Default for RunSummary {
    fn default() -> Self {
        Self {
            files_enumerated: 0,
            files_extracted: 0,
            rows: DatasetKind::ALL.iter().map(|kind| (*kind, 0)).collect(),
            skipped: SkipKind::ALL.iter().map(|kind| (*kind, 0)).collect(),
            skipped_files: Vec::new(),
            artifacts: Vec::new(),
        }
    }
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_skip(&mut self, skipped: SkippedFile) {
        *self.skipped.entry(skipped.kind).or_insert(0) += 1;
        self.skipped_files.push(skipped);
    }

    pub fn skipped_count(&self, kind: SkipKind) -> usize {
        self.skipped.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_skipped(&self) -> usize {
        self.skipped.values().sum()
    }

    pub fn row_count(&self, kind: DatasetKind) -> usize {
        self.rows.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_rows(&self) -> usize {
        self.rows.values().sum()
    }
}
