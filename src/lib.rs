//! Boklib - Bokkatalog för personliga bibliotek
//!
//! En native desktop-applikation byggd med Rust och egui.

#![allow(dead_code)]

pub mod models;
pub mod services;
pub mod store;
pub mod ui;
pub mod utils;

// Re-exports
pub use models::*;
pub use store::LibraryStore;
pub use ui::AppState;
