//! Vyer

pub mod library_view;

pub use library_view::LibraryView;
