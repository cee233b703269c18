// ============================================================
// DOCUMENT LOADER
// ============================================================
// Read and parse one JSON document; failures stay per-file

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use serde_json::Value;

use crate::domain::pulse::LoadError;

/// JSON document loader with byte-order-mark detection
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and parse a JSON file.
    ///
    /// A document whose `data` is null or missing still loads successfully;
    /// deciding that it carries no rows is the extractor's job.
    pub fn load(&self, path: &Path) -> Result<Value, LoadError> {
        let bytes = fs::read(path).map_err(|e| LoadError::new(path, format!("read failed: {}", e)))?;
        let content = Self::decode(&bytes).map_err(|cause| LoadError::new(path, cause))?;
        Self::load_str(&content).map_err(|cause| LoadError::new(path, cause))
    }

    /// Parse in-memory JSON content
    pub fn load_str(content: &str) -> Result<Value, String> {
        serde_json::from_str(content).map_err(|e| format!("invalid JSON: {}", e))
    }

    /// Decode bytes honoring a UTF-8 or UTF-16 byte-order mark. Without a
    /// BOM the content must be valid UTF-8.
    fn decode(bytes: &[u8]) -> Result<String, String> {
        let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
        encoding
            .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
            .map(|text| text.into_owned())
            .ok_or_else(|| format!("content is not valid {}", encoding.name()))
    }
}
