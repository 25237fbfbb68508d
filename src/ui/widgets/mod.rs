//! Återanvändbara UI-komponenter

pub mod entry_table;

pub use entry_table::EntryTable;
