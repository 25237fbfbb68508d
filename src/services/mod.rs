//! Tjänster för Boklib
//!
//! Innehåller logik som inte hör hemma i UI eller lagring.

pub mod catalog;
pub mod editor;
pub mod transfer;

pub use catalog::CatalogService;
pub use editor::EntryEditor;
