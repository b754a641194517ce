// src/domain/listing.rs
use serde::Serialize;

/// A property card as shown on the landing page.
/// Listings have no stable id; they are addressed by position in their list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub image: &'static str,
    pub price: &'static str,
    pub beds: u32,
    pub baths: u32,
    /// Living area in square feet.
    pub area: u32,
    pub location: &'static str,
}

/// Which side of the market a listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    Buy,
    Rent,
}

impl Market {
    pub const ALL: [Market; 2] = [Market::Buy, Market::Rent];

    /// Path segment used in routes and element ids.
    pub fn slug(self) -> &'static str {
        match self {
            Market::Buy => "buy",
            Market::Rent => "rent",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "buy" => Some(Market::Buy),
            "rent" => Some(Market::Rent),
            _ => None,
        }
    }
}
