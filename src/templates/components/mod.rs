pub mod card;
pub mod dialog;
pub mod error;
pub mod footer;
pub mod navbar;
pub mod toast;

pub use card::listing_card;
pub use dialog::{dialog_root, DialogVm};
pub use error::error_page;
pub use footer::footer;
pub use navbar::navbar;
pub use toast::{toasts, toasts_oob};
