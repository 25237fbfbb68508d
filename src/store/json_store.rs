//! JSON-fillagring: ett bibliotek per fil i datakatalogen

use std::path::{Path, PathBuf};

use crate::models::Entry;
use crate::store::LibraryStore;
use crate::utils::error::{AppError, AppResult};
use crate::utils::path::sanitize_filename;

/// Lagrar varje bibliotek som `<namn>.json` under en rotkatalog
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Öppna eller skapa lagringskatalogen
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn library_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_filename(name)))
    }
}

impl LibraryStore for JsonStore {
    fn list_libraries(&self) -> AppResult<Vec<String>> {
        let mut names = Vec::new();
        for dir_entry in std::fs::read_dir(&self.root)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn load_library(&self, name: &str) -> AppResult<Option<Vec<Entry>>> {
        let path = self.library_path(name);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        let entries: Vec<Entry> = serde_json::from_str(&content)?;
        Ok(Some(entries))
    }

    fn save_library(&self, name: &str, entries: &[Entry]) -> AppResult<()> {
        let path = self.library_path(name);
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&path, content)?;
        tracing::debug!("Sparade {} poster till {:?}", entries.len(), path);
        Ok(())
    }

    fn delete_library(&self, name: &str) -> AppResult<()> {
        let path = self.library_path(name);
        if !path.exists() {
            return Err(AppError::not_found(format!("biblioteket \"{}\"", name)));
        }
        std::fs::remove_file(&path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(author: &str) -> Entry {
        Entry {
            author: author.into(),
            ..Entry::new()
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        let entries = vec![entry("A"), entry("B")];
        store.save_library("Hyllan", &entries).unwrap();

        let loaded = store.load_library("Hyllan").unwrap().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_load_missing_library_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        assert!(store.load_library("Finns inte").unwrap().is_none());
    }

    #[test]
    fn test_list_is_sorted_and_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        store.save_library("Skönlitteratur", &[]).unwrap();
        store.save_library("Deckare", &[]).unwrap();
        std::fs::write(dir.path().join("anteckning.txt"), "hej").unwrap();

        let names = store.list_libraries().unwrap();
        assert_eq!(names, vec!["Deckare", "Skönlitteratur"]);
    }

    #[test]
    fn test_delete_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        store.save_library("Tillfällig", &[]).unwrap();
        store.delete_library("Tillfällig").unwrap();

        assert!(store.list_libraries().unwrap().is_empty());
        assert!(store.delete_library("Tillfällig").is_err());
    }

    #[test]
    fn test_save_writes_pretty_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        store.save_library("Format", &[entry("A")]).unwrap();
        let content =
            std::fs::read_to_string(dir.path().join("Format.json")).unwrap();
        assert!(content.trim_start().starts_with('['));
        assert!(content.contains('\n')); // indenterad, inte kompakt
    }

    #[test]
    fn test_corrupt_file_surfaces_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        std::fs::write(dir.path().join("Trasig.json"), "{inte json").unwrap();
        assert!(matches!(
            store.load_library("Trasig"),
            Err(AppError::Json(_))
        ));
    }
}
