// src/forms/flow.rs
use crate::domain::{Listing, Market};
use crate::forms::schema::{Schema, BOOKING, INQUIRY};
use std::fmt;

/// Everything that distinguishes the purchase inquiry from the rental booking.
pub struct Flow {
    pub market: Market,
    pub schema: &'static Schema,
    /// Dialog title is "{title_prefix} {location}".
    pub title_prefix: &'static str,
    pub blurb: &'static str,
    pub open_label: &'static str,
    pub submit_label: &'static str,
    pub success_title: &'static str,
    success_description: fn(&Listing) -> String,
}

impl Flow {
    pub fn for_market(market: Market) -> &'static Flow {
        match market {
            Market::Buy => &INQUIRY_FLOW,
            Market::Rent => &BOOKING_FLOW,
        }
    }

    pub fn title(&self, listing: Option<&Listing>) -> String {
        let subject = listing.map(|l| l.location).unwrap_or("Property");
        format!("{} {}", self.title_prefix, subject)
    }

    pub fn success_description(&self, listing: &Listing) -> String {
        (self.success_description)(listing)
    }
}

impl fmt::Debug for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flow")
            .field("market", &self.market)
            .field("title_prefix", &self.title_prefix)
            .finish_non_exhaustive()
    }
}

pub static INQUIRY_FLOW: Flow = Flow {
    market: Market::Buy,
    schema: &INQUIRY,
    title_prefix: "Inquire About",
    blurb: "Fill out the form below to schedule a viewing or request more information.",
    open_label: "Schedule Viewing",
    submit_label: "Submit Inquiry",
    success_title: "Inquiry submitted!",
    success_description: |listing| {
        format!(
            "We've received your inquiry for the property in {}. A real estate agent will contact you shortly.",
            listing.location
        )
    },
};

pub static BOOKING_FLOW: Flow = Flow {
    market: Market::Rent,
    schema: &BOOKING,
    title_prefix: "Book",
    blurb: "Fill out the form below to request a booking for this property.",
    open_label: "Book Villa",
    submit_label: "Book Now",
    success_title: "Booking request submitted!",
    success_description: |listing| {
        format!(
            "We've received your booking request for a property in {}. We'll contact you shortly.",
            listing.location
        )
    },
};
