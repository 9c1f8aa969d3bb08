//! Recent-documents list persisted as TOML.

use crate::storage::AtomicTomlFile;
use chrono::Utc;
use mdpad_core::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentDocument {
    pub path: PathBuf,
    /// RFC 3339 timestamp of the last successful open or save.
    pub opened_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RecentDocumentsFile {
    #[serde(default, rename = "document")]
    documents: Vec<RecentDocument>,
}

/// Most-recent-first list of documents, deduplicated by path and capped.
pub struct RecentDocuments {
    file: AtomicTomlFile<RecentDocumentsFile>,
    limit: usize,
}

impl RecentDocuments {
    pub fn new(path: PathBuf, limit: usize) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
            limit,
        }
    }

    /// Moves `path` to the front of the list, dropping the oldest entries
    /// beyond the limit.
    pub fn add(&self, path: &Path) -> Result<()> {
        let limit = self.limit;
        let entry = RecentDocument {
            path: path.to_path_buf(),
            opened_at: Utc::now().to_rfc3339(),
        };

        self.file.update(RecentDocumentsFile::default(), |recent| {
            recent.documents.retain(|doc| doc.path != entry.path);
            recent.documents.insert(0, entry);
            recent.documents.truncate(limit);
        })?;
        Ok(())
    }

    pub fn list(&self) -> Result<Vec<RecentDocument>> {
        Ok(self
            .file
            .load()?
            .map(|recent| recent.documents)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(recent: &RecentDocuments) -> Vec<PathBuf> {
        recent.list().unwrap().into_iter().map(|d| d.path).collect()
    }

    #[test]
    fn test_empty_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let recent = RecentDocuments::new(temp_dir.path().join("recent.toml"), 5);
        assert!(recent.list().unwrap().is_empty());
    }

    #[test]
    fn test_most_recent_first_without_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let recent = RecentDocuments::new(temp_dir.path().join("recent.toml"), 5);

        recent.add(Path::new("/tmp/a.md")).unwrap();
        recent.add(Path::new("/tmp/b.md")).unwrap();
        recent.add(Path::new("/tmp/a.md")).unwrap();

        assert_eq!(
            paths(&recent),
            vec![PathBuf::from("/tmp/a.md"), PathBuf::from("/tmp/b.md")]
        );
    }

    #[test]
    fn test_list_is_capped() {
        let temp_dir = TempDir::new().unwrap();
        let recent = RecentDocuments::new(temp_dir.path().join("recent.toml"), 2);

        for name in ["a", "b", "c"] {
            recent.add(&PathBuf::from(format!("/tmp/{}.md", name))).unwrap();
        }

        assert_eq!(
            paths(&recent),
            vec![PathBuf::from("/tmp/c.md"), PathBuf::from("/tmp/b.md")]
        );
    }
}
