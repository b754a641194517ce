pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{dialog_root, error_page, toasts_oob, DialogVm};
pub use layouts::site::site_layout;
