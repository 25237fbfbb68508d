//! Redigeringsoperationer på det aktiva biblioteket
//!
//! Varje operation muterar biblioteket, återställer id-invarianten och
//! sparar exakt en gång via lagringen.

use crate::models::{Entry, Library};
use crate::store::LibraryStore;
use crate::utils::error::{AppError, AppResult};

pub struct EntryEditor<'a> {
    store: &'a dyn LibraryStore,
}

impl<'a> EntryEditor<'a> {
    pub fn new(store: &'a dyn LibraryStore) -> Self {
        Self { store }
    }

    /// Lägg till en tom post först i biblioteket
    pub fn add_entry(&self, library: &mut Library) -> AppResult<()> {
        library.insert_blank_front();
        self.save(library)
    }

    /// Ta bort posten på positionen (inte id — id ändras vid omindexering)
    pub fn delete_entry(&self, library: &mut Library, index: usize) -> AppResult<()> {
        library
            .remove(index)
            .ok_or_else(|| AppError::validation(format!("Ogiltig postposition: {}", index)))?;
        self.save(library)
    }

    /// Sätt bilddata på en post
    pub fn set_image(
        &self,
        library: &mut Library,
        index: usize,
        data_url: String,
    ) -> AppResult<()> {
        let entry = library
            .entries
            .get_mut(index)
            .ok_or_else(|| AppError::validation(format!("Ogiltig postposition: {}", index)))?;
        entry.image = data_url;
        self.save(library)
    }

    /// Ersätt hela postsekvensen (import)
    pub fn replace_entries(&self, library: &mut Library, entries: Vec<Entry>) -> AppResult<()> {
        library.replace_entries(entries);
        self.save(library)
    }

    /// Spara biblioteket efter en fältredigering som redan skett på plats
    pub fn commit_edits(&self, library: &Library) -> AppResult<()> {
        self.save(library)
    }

    fn save(&self, library: &Library) -> AppResult<()> {
        self.store.save_library(&library.name, &library.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn entry(author: &str) -> Entry {
        Entry {
            author: author.into(),
            ..Entry::new()
        }
    }

    #[test]
    fn test_add_entry_persists_and_reindexes() {
        let store = MemoryStore::new();
        let editor = EntryEditor::new(&store);
        let mut lib = Library::new("Test");

        editor.add_entry(&mut lib).unwrap();
        editor.add_entry(&mut lib).unwrap();

        assert!(lib.ids_are_contiguous());
        assert_eq!(store.save_count(), 2);
        let (name, saved) = store.last_save().unwrap();
        assert_eq!(name, "Test");
        assert_eq!(saved.len(), 2);
    }

    #[test]
    fn test_delete_entry_saves_exactly_once_with_result() {
        let store = MemoryStore::new();
        let editor = EntryEditor::new(&store);
        let mut lib =
            Library::with_entries("Test", vec![entry("A"), entry("B")]);
        lib.reindex();

        // Ta bort posten med id 1 (position 0)
        editor.delete_entry(&mut lib, 0).unwrap();

        assert_eq!(store.save_count(), 1);
        let (_, saved) = store.last_save().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].author, "B");
        assert_eq!(saved[0].id, 1);
    }

    #[test]
    fn test_delete_invalid_index_does_not_save() {
        let store = MemoryStore::new();
        let editor = EntryEditor::new(&store);
        let mut lib = Library::with_entries("Test", vec![entry("A")]);
        lib.reindex();

        assert!(editor.delete_entry(&mut lib, 3).is_err());
        assert_eq!(store.save_count(), 0);
        assert_eq!(lib.len(), 1);
    }

    #[test]
    fn test_delete_only_entry_then_add_gives_id_one() {
        let store = MemoryStore::new();
        let editor = EntryEditor::new(&store);
        let mut lib = Library::with_entries("Test", vec![entry("Ensam")]);
        lib.reindex();

        editor.delete_entry(&mut lib, 0).unwrap();
        assert!(lib.is_empty());

        editor.add_entry(&mut lib).unwrap();
        assert_eq!(lib.entries[0].id, 1);
    }

    #[test]
    fn test_set_image_stores_data_url() {
        let store = MemoryStore::new();
        let editor = EntryEditor::new(&store);
        let mut lib = Library::with_entries("Test", vec![entry("A")]);
        lib.reindex();

        editor
            .set_image(&mut lib, 0, "data:image/png;base64,QUJD".into())
            .unwrap();

        assert!(lib.entries[0].has_image());
        let (_, saved) = store.last_save().unwrap();
        assert!(saved[0].has_image());
    }

    #[test]
    fn test_replace_entries_reindexes_and_saves() {
        let store = MemoryStore::new();
        let editor = EntryEditor::new(&store);
        let mut lib = Library::with_entries("Test", vec![entry("Gammal")]);
        lib.reindex();

        let imported = vec![
            Entry { id: 42, ..entry("Ny1") },
            Entry { id: 7, ..entry("Ny2") },
        ];
        editor.replace_entries(&mut lib, imported).unwrap();

        assert!(lib.ids_are_contiguous());
        assert_eq!(lib.len(), 2);
        assert_eq!(store.save_count(), 1);
    }
}
