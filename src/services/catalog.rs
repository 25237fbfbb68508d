//! Bibliotekskatalogen: skapa, byta namn på, ta bort och ladda bibliotek

use crate::models::Library;
use crate::store::LibraryStore;
use crate::utils::error::{AppError, AppResult};

pub struct CatalogService<'a> {
    store: &'a dyn LibraryStore,
}

impl<'a> CatalogService<'a> {
    pub fn new(store: &'a dyn LibraryStore) -> Self {
        Self { store }
    }

    /// Alla kända biblioteksnamn, sorterade
    pub fn list(&self) -> AppResult<Vec<String>> {
        self.store.list_libraries()
    }

    /// Skapa och spara ett nytt tomt bibliotek
    pub fn create(&self, name: &str) -> AppResult<Library> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Biblioteksnamn får inte vara tomt"));
        }
        let library = Library::new(name);
        self.store.save_library(&library.name, &library.entries)?;
        tracing::info!("Skapade bibliotek \"{}\"", name);
        Ok(library)
    }

    /// Ladda ett bibliotek, `None` om det inte finns
    pub fn load(&self, name: &str) -> AppResult<Option<Library>> {
        Ok(self
            .store
            .load_library(name)?
            .map(|entries| Library::with_entries(name, entries)))
    }

    /// Byt namn på det aktiva biblioteket.
    ///
    /// Sparar under det nya namnet innan det gamla tas bort, så att en
    /// krasch mittemellan aldrig lämnar datat utan något namn alls.
    pub fn rename(&self, library: &mut Library, new_name: &str) -> AppResult<()> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(AppError::validation("Biblioteksnamn får inte vara tomt"));
        }
        if new_name == library.name {
            return Ok(());
        }

        let old_name = library.name.clone();
        self.store.save_library(new_name, &library.entries)?;
        self.store.delete_library(&old_name)?;
        library.name = new_name.to_string();
        tracing::info!("Bytte namn på \"{}\" till \"{}\"", old_name, new_name);
        Ok(())
    }

    /// Ta bort ett bibliotek ur lagringen
    pub fn delete(&self, name: &str) -> AppResult<()> {
        self.store.delete_library(name)?;
        tracing::info!("Tog bort bibliotek \"{}\"", name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;
    use crate::store::MemoryStore;

    fn entry(author: &str) -> Entry {
        Entry {
            author: author.into(),
            ..Entry::new()
        }
    }

    #[test]
    fn test_create_and_list() {
        let store = MemoryStore::new();
        let catalog = CatalogService::new(&store);

        let lib = catalog.create("Min hylla").unwrap();
        assert!(lib.is_empty());
        assert_eq!(catalog.list().unwrap(), vec!["Min hylla"]);
    }

    #[test]
    fn test_create_blank_name_changes_nothing() {
        let store = MemoryStore::new();
        let catalog = CatalogService::new(&store);

        assert!(catalog.create("").is_err());
        assert!(catalog.create("   ").is_err());
        assert!(catalog.list().unwrap().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_create_trims_name() {
        let store = MemoryStore::new();
        let catalog = CatalogService::new(&store);

        let lib = catalog.create("  Hyllan  ").unwrap();
        assert_eq!(lib.name, "Hyllan");
        assert_eq!(catalog.list().unwrap(), vec!["Hyllan"]);
    }

    #[test]
    fn test_rename_moves_entries_to_new_name() {
        let store = MemoryStore::new();
        let catalog = CatalogService::new(&store);

        let entries = vec![entry("A"), entry("B")];
        store.save_library("Test", &entries).unwrap();
        let mut lib = catalog.load("Test").unwrap().unwrap();

        catalog.rename(&mut lib, "Test2").unwrap();

        assert_eq!(lib.name, "Test2");
        assert_eq!(catalog.list().unwrap(), vec!["Test2"]);
        let reloaded = catalog.load("Test2").unwrap().unwrap();
        assert_eq!(reloaded.entries, entries);
        assert!(catalog.load("Test").unwrap().is_none());
    }

    #[test]
    fn test_rename_to_same_name_is_noop() {
        let store = MemoryStore::new();
        let catalog = CatalogService::new(&store);

        let mut lib = catalog.create("Test").unwrap();
        let saves_before = store.save_count();
        catalog.rename(&mut lib, "Test").unwrap();
        assert_eq!(store.save_count(), saves_before);
    }

    #[test]
    fn test_delete_missing_library_is_error() {
        let store = MemoryStore::new();
        let catalog = CatalogService::new(&store);
        assert!(catalog.delete("Finns inte").is_err());
    }
}
