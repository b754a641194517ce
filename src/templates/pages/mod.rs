pub mod landing;

pub use landing::{landing_page, LandingVm};
