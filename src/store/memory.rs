//! Minneslagring — reservlösning när datakatalogen inte kan skapas,
//! och fixtur för tester

use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::Entry;
use crate::store::LibraryStore;
use crate::utils::error::{AppError, AppResult};

/// Bibliotek i en mutex-skyddad map. Loggar varje sparning så att tester
/// kan räkna persistensanrop.
#[derive(Default)]
pub struct MemoryStore {
    libraries: Mutex<HashMap<String, Vec<Entry>>>,
    save_log: Mutex<Vec<(String, Vec<Entry>)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Antal sparningar sedan start
    pub fn save_count(&self) -> usize {
        self.save_log.lock().unwrap().len()
    }

    /// Senast sparade (namn, poster), om någon sparning skett
    pub fn last_save(&self) -> Option<(String, Vec<Entry>)> {
        self.save_log.lock().unwrap().last().cloned()
    }
}

impl LibraryStore for MemoryStore {
    fn list_libraries(&self) -> AppResult<Vec<String>> {
        let mut names: Vec<String> =
            self.libraries.lock().unwrap().keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn load_library(&self, name: &str) -> AppResult<Option<Vec<Entry>>> {
        Ok(self.libraries.lock().unwrap().get(name).cloned())
    }

    fn save_library(&self, name: &str, entries: &[Entry]) -> AppResult<()> {
        self.libraries
            .lock()
            .unwrap()
            .insert(name.to_string(), entries.to_vec());
        self.save_log
            .lock()
            .unwrap()
            .push((name.to_string(), entries.to_vec()));
        Ok(())
    }

    fn delete_library(&self, name: &str) -> AppResult<()> {
        if self.libraries.lock().unwrap().remove(name).is_none() {
            return Err(AppError::not_found(format!("biblioteket \"{}\"", name)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basics() {
        let store = MemoryStore::new();
        assert!(store.list_libraries().unwrap().is_empty());

        store.save_library("B", &[]).unwrap();
        store.save_library("A", &[]).unwrap();
        assert_eq!(store.list_libraries().unwrap(), vec!["A", "B"]);
        assert_eq!(store.save_count(), 2);

        store.delete_library("A").unwrap();
        assert_eq!(store.list_libraries().unwrap(), vec!["B"]);
        assert!(store.delete_library("A").is_err());
    }
}
