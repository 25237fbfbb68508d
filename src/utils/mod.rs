pub mod error;
pub mod image;
pub mod path;

pub use error::{AppError, AppResult};
