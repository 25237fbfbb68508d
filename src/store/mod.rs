//! Lagring av bibliotek
//!
//! Appen pratar med lagringen genom [`LibraryStore`] så att UI-logiken
//! kan testas mot [`MemoryStore`] medan den riktiga appen använder
//! [`JsonStore`] med en JSON-fil per bibliotek.

pub mod json_store;
pub mod memory;

pub use json_store::JsonStore;
pub use memory::MemoryStore;

use crate::models::Entry;
use crate::utils::AppResult;

/// Persistenstjänsten: namngivna bibliotek med ordnade poster
pub trait LibraryStore {
    /// Namnen på alla kända bibliotek, sorterade
    fn list_libraries(&self) -> AppResult<Vec<String>>;

    /// Ladda ett biblioteks poster, `None` om det inte finns
    fn load_library(&self, name: &str) -> AppResult<Option<Vec<Entry>>>;

    /// Spara (skriv över) ett bibliotek
    fn save_library(&self, name: &str, entries: &[Entry]) -> AppResult<()>;

    /// Ta bort ett bibliotek
    fn delete_library(&self, name: &str) -> AppResult<()>;
}
