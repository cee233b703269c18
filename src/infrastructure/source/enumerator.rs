// ============================================================
// SOURCE ENUMERATOR
// ============================================================
// Walk the document tree and tag every JSON file with its
// period, section and category

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::domain::error::{AppError, Result};
use crate::domain::pulse::{Category, Period, Section, SkipKind, SkippedFile, SourceFile};

/// Lazily enumerates `<root>/.../<year>/<quarter>.json` files
#[derive(Debug, Clone)]
pub struct SourceEnumerator {
    root: PathBuf,
    follow_links: bool,
}

impl SourceEnumerator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_links: false,
        }
    }

    /// Override whether symlinks are followed during the walk
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Fail fast when the root cannot be walked at all
    pub fn check_root(&self) -> Result<()> {
        let meta = fs::metadata(&self.root).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::NotFound(format!("input root {}", self.root.display()))
            } else {
                AppError::IoError(format!(
                    "Failed to stat input root {}: {}",
                    self.root.display(),
                    e
                ))
            }
        })?;
        if !meta.is_dir() {
            return Err(AppError::ValidationError(format!(
                "input root {} is not a directory",
                self.root.display()
            )));
        }
        fs::read_dir(&self.root).map_err(|e| {
            AppError::IoError(format!(
                "Failed to read input root {}: {}",
                self.root.display(),
                e
            ))
        })?;
        Ok(())
    }

    /// Walk the tree in lexicographic order. Each call starts a fresh walk.
    ///
    /// Files whose path carries no numeric year/quarter come back as
    /// `Err(SkippedFile)` with [`SkipKind::BadPathMetadata`].
    pub fn iter(&self) -> impl Iterator<Item = std::result::Result<SourceFile, SkippedFile>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    None
                }
            })
            .filter(is_json_file)
            .map(move |entry| self.describe(entry.path()))
    }

    /// Tag a single path found under the root
    pub fn describe(&self, path: &Path) -> std::result::Result<SourceFile, SkippedFile> {
        let period = Period::from_path(path)
            .map_err(|reason| SkippedFile::new(path, SkipKind::BadPathMetadata, reason))?;

        let segments = self.directory_segments(path);
        Ok(SourceFile {
            path: path.to_path_buf(),
            period,
            section: Section::resolve(&segments),
            category: Category::resolve(&segments),
        })
    }

    /// Directory names between the root and the file
    fn directory_segments(&self, path: &Path) -> Vec<String> {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .parent()
            .map(|dir| {
                dir.components()
                    .filter_map(|component| match component {
                        Component::Normal(name) => Some(name.to_string_lossy().to_string()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn is_json_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{}").unwrap();
    }

    #[test]
    fn test_enumerates_json_files_with_tags() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "aggregated/transaction/country/india/2023/1.json");
        touch(temp.path(), "aggregated/transaction/country/india/2023/notes.txt");

        let enumerator = SourceEnumerator::new(temp.path());
        let items: Vec<_> = enumerator.iter().collect();
        assert_eq!(items.len(), 1);

        let file = items[0].as_ref().unwrap();
        assert_eq!(file.period.year, 2023);
        assert_eq!(file.period.quarter, 1);
        assert_eq!(file.section, Some(Section::Aggregated));
        assert_eq!(file.category, Some(Category::Transaction));
    }

    #[test]
    fn test_order_is_lexicographic_and_restartable() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "top/user/2019/2.json");
        touch(temp.path(), "map/user/2019/1.json");
        touch(temp.path(), "aggregated/user/2019/3.json");

        let enumerator = SourceEnumerator::new(temp.path());
        let first: Vec<PathBuf> = enumerator.iter().map(|r| r.unwrap().path).collect();
        let second: Vec<PathBuf> = enumerator.iter().map(|r| r.unwrap().path).collect();

        assert_eq!(first, second);
        let sections: Vec<String> = first
            .iter()
            .map(|p| {
                p.strip_prefix(temp.path())
                    .unwrap()
                    .components()
                    .next()
                    .unwrap()
                    .as_os_str()
                    .to_string_lossy()
                    .to_string()
            })
            .collect();
        assert_eq!(sections, vec!["aggregated", "map", "top"]);
    }

    #[test]
    fn test_bad_quarter_is_reported_not_dropped() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "map/transaction/2021/q4.json");

        let items: Vec<_> = SourceEnumerator::new(temp.path()).iter().collect();
        assert_eq!(items.len(), 1);
        let skipped = items[0].as_ref().unwrap_err();
        assert_eq!(skipped.kind, SkipKind::BadPathMetadata);
    }

    #[test]
    fn test_root_location_does_not_influence_tags() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("top_level_map_export");
        touch(&root, "misc/2020/1.json");

        let items: Vec<_> = SourceEnumerator::new(&root).iter().collect();
        let file = items[0].as_ref().unwrap();
        assert_eq!(file.section, None);
        assert_eq!(file.category, None);
    }

    #[test]
    fn test_check_root_missing_is_fatal() {
        let temp = TempDir::new().unwrap();
        let enumerator = SourceEnumerator::new(temp.path().join("absent"));
        assert!(matches!(enumerator.check_root(), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_check_root_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "file.json");
        let enumerator = SourceEnumerator::new(temp.path().join("file.json"));
        assert!(matches!(
            enumerator.check_root(),
            Err(AppError::ValidationError(_))
        ));
    }
}
