pub mod common;
pub mod delete_confirmation_dialog;
pub mod error_banner;

pub use delete_confirmation_dialog::DeleteConfirmationDialog;
pub use error_banner::ErrorBanner;
