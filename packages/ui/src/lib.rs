//! This crate contains all shared UI for the workspace.

pub mod form_fields;
pub mod location;
pub mod views;

mod map_preview;
pub use map_preview::MapPreview;

mod record_table;
pub use record_table::RecordTable;

mod providers;
pub use providers::AppProviders;

pub mod toast;
pub use toast::{notify, use_toasts, Toast, ToastProvider, Toasts};
