//! Modala dialoger

pub mod confirm_dialog;
pub mod image_modal;
pub mod prompt_dialog;

pub use confirm_dialog::ConfirmDialog;
pub use image_modal::ImageModal;
pub use prompt_dialog::PromptDialog;
