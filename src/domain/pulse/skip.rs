// ============================================================
// SKIP TAXONOMY
// ============================================================
// Per-file conditions that drop a file from every dataset

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a file contributed no rows. None of these abort a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipKind {
    /// Year directory or quarter file name is not numeric
    BadPathMetadata,
    /// File could not be read, decoded or parsed as JSON
    LoadError,
    /// Valid JSON without a usable `data` object
    EmptyDocument,
    /// Path names no known section/category pair
    UnrecognizedShape,
}

impl SkipKind {
    pub const ALL: [SkipKind; 4] = [
        SkipKind::BadPathMetadata,
        SkipKind::LoadError,
        SkipKind::EmptyDocument,
        SkipKind::UnrecognizedShape,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkipKind::BadPathMetadata => "bad_path_metadata",
            SkipKind::LoadError => "load_error",
            SkipKind::EmptyDocument => "empty_document",
            SkipKind::UnrecognizedShape => "unrecognized_shape",
        }
    }
}

impl fmt::Display for SkipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub kind: SkipKind,
    pub reason: String,
}

impl SkippedFile {
    pub fn new(path: impl Into<PathBuf>, kind: SkipKind, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            reason: reason.into(),
        }
    }
}

/// Read or parse failure for a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub path: PathBuf,
    pub cause: String,
}

impl LoadError {
    pub fn new(path: &Path, cause: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            cause: cause.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load {}: {}", self.path.display(), self.cause)
    }
}

impl std::error::Error for LoadError {}

impl From<LoadError> for SkippedFile {
    fn from(err: LoadError) -> Self {
        SkippedFile::new(err.path, SkipKind::LoadError, err.cause)
    }
}
