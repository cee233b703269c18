// ============================================================
// DOCUMENT SHAPE TAGS
// ============================================================
// Section, category and level tags resolved from the storage path

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting granularity of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Country or state totals broken down by category
    Aggregated,

    /// Per-state hover figures
    Map,

    /// Ranked entities at state, district and pincode level
    Top,
}

impl Section {
    /// Resolution priority when several keywords appear in one path
    pub const PRIORITY: [Section; 3] = [Section::Aggregated, Section::Map, Section::Top];

    pub fn keyword(&self) -> &'static str {
        match self {
            Section::Aggregated => "aggregated",
            Section::Map => "map",
            Section::Top => "top",
        }
    }

    /// Resolve the section from directory segments.
    ///
    /// Every keyword in [`Section::PRIORITY`] order is tried against all
    /// segments; a segment matches when it contains the keyword.
    pub fn resolve<S: AsRef<str>>(segments: &[S]) -> Option<Self> {
        resolve_by_keyword(&Self::PRIORITY, segments, Self::keyword)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Subject domain of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transaction,
    User,
    Insurance,
}

impl Category {
    pub const PRIORITY: [Category; 3] = [Category::Transaction, Category::User, Category::Insurance];

    pub fn keyword(&self) -> &'static str {
        match self {
            Category::Transaction => "transaction",
            Category::User => "user",
            Category::Insurance => "insurance",
        }
    }

    pub fn resolve<S: AsRef<str>>(segments: &[S]) -> Option<Self> {
        resolve_by_keyword(&Self::PRIORITY, segments, Self::keyword)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Sub-granularity inside the top section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    State,
    District,
    Pincode,
}

impl Level {
    /// Levels in the order their lists are read from a document
    pub const ALL: [Level; 3] = [Level::State, Level::District, Level::Pincode];

    /// Key of this level's entry list inside the document's `data` object
    pub fn list_key(&self) -> &'static str {
        match self {
            Level::State => "states",
            Level::District => "districts",
            Level::Pincode => "pincodes",
        }
    }

    /// Tag written to the `level` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::State => "state",
            Level::District => "district",
            Level::Pincode => "pincode",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn resolve_by_keyword<T: Copy, S: AsRef<str>>(
    candidates: &[T],
    segments: &[S],
    keyword: impl Fn(&T) -> &'static str,
) -> Option<T> {
    let lowered: Vec<String> = segments
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();

    candidates
        .iter()
        .find(|candidate| {
            let needle = keyword(*candidate);
            lowered.iter().any(|segment| segment.contains(needle))
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_resolves_from_segments() {
        let segments = ["aggregated", "transaction", "country", "india", "2023"];
        assert_eq!(Section::resolve(&segments), Some(Section::Aggregated));
        assert_eq!(Category::resolve(&segments), Some(Category::Transaction));
    }

    #[test]
    fn test_section_priority_beats_segment_order() {
        // "top" appears before "map" in the path, but map has priority.
        let segments = ["top", "map", "user"];
        assert_eq!(Section::resolve(&segments), Some(Section::Map));
    }

    #[test]
    fn test_keyword_match_is_case_insensitive_substring() {
        let segments = ["Hover-MAP", "USERS"];
        assert_eq!(Section::resolve(&segments), Some(Section::Map));
        assert_eq!(Category::resolve(&segments), Some(Category::User));
    }

    #[test]
    fn test_unmatched_segments_resolve_to_none() {
        let segments = ["misc", "country", "2021"];
        assert_eq!(Section::resolve(&segments), None);
        assert_eq!(Category::resolve(&segments), None);
    }

    #[test]
    fn test_level_tags() {
        assert_eq!(Level::State.list_key(), "states");
        assert_eq!(Level::Pincode.as_str(), "pincode");
        assert_eq!(Level::District.to_string(), "district");
    }
}
