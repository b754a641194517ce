// templates/pages/landing.rs

use crate::domain::{Listing, Market};
use crate::forms::Notice;
use crate::templates::components::{dialog_root, listing_card, toasts, DialogVm};
use crate::templates::site_layout;
use maud::{html, Markup};

pub const HERO_IMAGE: &str =
    "https://i.pinimg.com/736x/7c/19/ba/7c19bac944b10c4c5264e5b777649d32.jpg";

pub struct LandingVm<'a> {
    pub for_sale: &'a [Listing],
    pub for_rent: &'a [Listing],
    pub dialog: Option<DialogVm<'a>>,
    pub toasts: Vec<Notice>,
}

fn section_heading(market: Market) -> &'static str {
    match market {
        Market::Buy => "Premium Properties For Sale",
        Market::Rent => "Most Demanding Villa For Rent",
    }
}

fn listing_section(market: Market, listings: &[Listing]) -> Markup {
    html! {
        section id=(market.slug()) {
            h1 class="section-title" { (section_heading(market)) }
            div class="grid" {
                @for (index, listing) in listings.iter().enumerate() {
                    (listing_card(market, index, listing))
                }
            }
        }
    }
}

pub fn landing_page(vm: &LandingVm) -> Markup {
    site_layout(
        "RentAHouse - Find Your Perfect Home Easily!",
        html! {
            div class="container" id="home" {
                section class="hero" {
                    div {
                        h1 { "RentAHouse - Find Your Perfect Home Easily!" }
                        p {
                            "RentAHouse simplifies your home search by offering a wide range of rental properties. "
                            "Browse listings, compare prices, and find the perfect place to call home all in one convenient platform."
                        }
                        a href="tel:+11234567890" class="btn" { "Contact Agent" }
                    }
                    div {
                        img alt="hero" src=(HERO_IMAGE);
                    }
                }

                (listing_section(Market::Buy, vm.for_sale))
                (listing_section(Market::Rent, vm.for_rent))
            }

            (dialog_root(vm.dialog.as_ref()))
            (toasts(&vm.toasts))
        },
    )
}
