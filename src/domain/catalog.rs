// src/domain/catalog.rs
use crate::domain::listing::{Listing, Market};

/// Supplies the listings shown for each market, in display order.
pub trait ListingProvider: Send + Sync {
    fn listings(&self, market: Market) -> &[Listing];

    fn get(&self, market: Market, index: usize) -> Option<&Listing> {
        self.listings(market).get(index)
    }
}

/// The fixed catalog bundled with the site.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticListings;

impl ListingProvider for StaticListings {
    fn listings(&self, market: Market) -> &[Listing] {
        match market {
            Market::Buy => &FOR_SALE,
            Market::Rent => &FOR_RENT,
        }
    }
}

static FOR_SALE: [Listing; 6] = [
    Listing {
        image: "https://i.pinimg.com/474x/01/fe/59/01fe59728e8fde7a4f98a4d1f54a42ea.jpg",
        price: "$275,000",
        beds: 3,
        baths: 2,
        area: 1900,
        location: "Austin, TX",
    },
    Listing {
        image: "https://i.pinimg.com/236x/7a/19/ac/7a19acb2c3234631c63a3b083d3bd034.jpg",
        price: "$340,000",
        beds: 4,
        baths: 3,
        area: 2300,
        location: "Seattle, WA",
    },
    Listing {
        image: "https://i.pinimg.com/236x/08/3d/d1/083dd1764351dc30d981fef31467a6c1.jpg",
        price: "$180,000",
        beds: 2,
        baths: 1,
        area: 1300,
        location: "Denver, CO",
    },
    Listing {
        image: "https://i.pinimg.com/236x/ad/70/ff/ad70ff7cdb0dd4f5cd40a78fbc5c6aed.jpg",
        price: "$480,000",
        beds: 5,
        baths: 4,
        area: 3100,
        location: "Atlanta, GA",
    },
    Listing {
        image: "https://i.pinimg.com/474x/e0/46/b8/e046b8ae32f5d5f9a9eb9eb79816e151.jpg",
        price: "$620,000",
        beds: 6,
        baths: 5,
        area: 4200,
        location: "Boston, MA",
    },
    Listing {
        image: "https://i.pinimg.com/236x/71/4d/ab/714dab0db35a79b425fa3aa2c714eeac.jpg",
        price: "$750,000",
        beds: 5,
        baths: 4,
        area: 3700,
        location: "San Diego, CA",
    },
];

// Rent prices are per day.
static FOR_RENT: [Listing; 6] = [
    Listing {
        image: "https://i.pinimg.com/474x/0b/06/c4/0b06c4a42c2d66d765e94bc268981d5c.jpg",
        price: "$250",
        beds: 3,
        baths: 2,
        area: 1800,
        location: "New York, NY",
    },
    Listing {
        image: "https://i.pinimg.com/474x/95/8f/1d/958f1da47a87363d203b048bee3b48f4.jpg",
        price: "$320",
        beds: 4,
        baths: 3,
        area: 2200,
        location: "Los Angeles, CA",
    },
    Listing {
        image: "https://i.pinimg.com/736x/42/19/f9/4219f9548b8b61162e34dd99638ae04c.jpg",
        price: "$150",
        beds: 2,
        baths: 1,
        area: 1200,
        location: "Houston, TX",
    },
    Listing {
        image: "https://i.pinimg.com/236x/c6/43/82/c643826265a25958e520e17937328a5b.jpg",
        price: "$450",
        beds: 5,
        baths: 4,
        area: 3000,
        location: "Chicago, IL",
    },
    Listing {
        image: "https://i.pinimg.com/236x/1e/97/3b/1e973bde8c7ddd94cc1b7e4e3ce3135a.jpg",
        price: "$600",
        beds: 6,
        baths: 5,
        area: 4000,
        location: "Miami, FL",
    },
    Listing {
        image: "https://i.pinimg.com/474x/49/c8/93/49c8930905de59661305414c9810c5de.jpg",
        price: "$700",
        beds: 5,
        baths: 4,
        area: 3500,
        location: "San Francisco, CA",
    },
];
