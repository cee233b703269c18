// ============================================================
// SOURCE DOCUMENTS
// ============================================================
// Path-derived metadata and the parsed payload it tags

use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use super::{Category, Section};

/// Year and quarter taken from a document's storage path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Period {
    pub year: i32,
    pub quarter: u32,
}

impl Period {
    /// Read `<year>/<quarter>.<ext>` from the tail of a path.
    ///
    /// The year is the name of the directory holding the file and the quarter
    /// is the file stem. Both must be plain integers.
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| "file name is not valid UTF-8".to_string())?;
        let year_dir = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .ok_or_else(|| "file has no parent directory to read the year from".to_string())?;

        let year = year_dir
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("year directory '{}' is not numeric", year_dir))?;
        let quarter = stem
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("quarter file name '{}' is not numeric", stem))?;

        Ok(Self { year, quarter })
    }
}

/// One enumerated input file with every tag the extractor needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub period: Period,
    /// `None` when no path segment names a known section
    pub section: Option<Section>,
    /// `None` when no path segment names a known category
    pub category: Option<Category>,
}

/// A loaded document. Consumed once by the extractor.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub file: SourceFile,
    pub payload: Value,
}

impl SourceDocument {
    pub fn new(file: SourceFile, payload: Value) -> Self {
        Self { file, payload }
    }
}
