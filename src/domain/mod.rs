pub mod catalog;
pub mod listing;

pub use catalog::{ListingProvider, StaticListings};
pub use listing::{Listing, Market};
