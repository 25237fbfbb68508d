use serde::{Deserialize, Serialize};

use super::Entry;

/// Ett namngivet bibliotek med ordnade poster
///
/// Invariant: efter varje strukturell ändring (insättning, borttagning,
/// ersättning) gäller `entries[i].id == i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Library {
    /// Nytt tomt bibliotek
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entries(name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Nästa id som en ny post skulle få
    pub fn next_id(&self) -> u32 {
        self.entries.len() as u32 + 1
    }

    /// Tilldela id sekventiellt från 1 i aktuell ordning
    pub fn reindex(&mut self) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.id = i as u32 + 1;
        }
    }

    /// Lägg en tom post först i sekvensen och omindexera
    pub fn insert_blank_front(&mut self) {
        self.entries.insert(0, Entry::new());
        self.reindex();
    }

    /// Ta bort posten på positionen och omindexera.
    /// Returnerar `None` om index ligger utanför sekvensen.
    pub fn remove(&mut self, index: usize) -> Option<Entry> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        self.reindex();
        Some(removed)
    }

    /// Ersätt hela postsekvensen (import) och omindexera
    pub fn replace_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.reindex();
    }

    /// Kontrollera id-invarianten (används i tester och felsökning)
    pub fn ids_are_contiguous(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, e)| e.id == i as u32 + 1)
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
    fn test_ids_contiguous_after_any_sequence() {
        let mut lib = Library::new("Test");

        lib.insert_blank_front();
        assert!(lib.ids_are_contiguous());

        lib.insert_blank_front();
        lib.insert_blank_front();
        assert!(lib.ids_are_contiguous());
        assert_eq!(lib.len(), 3);

        lib.remove(1);
        assert!(lib.ids_are_contiguous());
        assert_eq!(lib.len(), 2);

        lib.insert_blank_front();
        lib.remove(0);
        lib.remove(1);
        assert!(lib.ids_are_contiguous());
        assert_eq!(lib.next_id(), lib.len() as u32 + 1);
    }

    #[test]
    fn test_insert_front_puts_new_entry_first() {
        let mut lib = Library::with_entries("Test", vec![entry("A"), entry("B")]);
        lib.reindex();

        lib.insert_blank_front();
        assert_eq!(lib.entries[0].id, 1);
        assert!(lib.entries[0].author.is_empty());
        assert_eq!(lib.entries[1].author, "A");
        assert_eq!(lib.entries[1].id, 2);
        assert_eq!(lib.entries[2].id, 3);
    }

    #[test]
    fn test_remove_only_entry_resets_ids() {
        let mut lib = Library::new("Test");
        lib.insert_blank_front();
        assert_eq!(lib.entries[0].id, 1);

        lib.remove(0);
        assert!(lib.is_empty());
        assert_eq!(lib.next_id(), 1);

        lib.insert_blank_front();
        assert_eq!(lib.entries[0].id, 1);
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let mut lib = Library::with_entries("Test", vec![entry("A")]);
        lib.reindex();
        assert!(lib.remove(5).is_none());
        assert_eq!(lib.len(), 1);
        assert!(lib.ids_are_contiguous());
    }

    #[test]
    fn test_replace_entries_renumbers() {
        let mut lib = Library::new("Test");
        let imported = vec![
            Entry { id: 17, ..entry("A") },
            Entry { id: 3, ..entry("B") },
            Entry { id: 99, ..entry("C") },
        ];

        lib.replace_entries(imported);
        assert!(lib.ids_are_contiguous());
        assert_eq!(lib.entries[0].author, "A");
        assert_eq!(lib.entries[2].id, 3);
    }
}
