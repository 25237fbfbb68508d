pub mod config;
pub mod entry;
pub mod library;

pub use config::*;
pub use entry::*;
pub use library::*;
