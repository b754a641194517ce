use crate::domain::{Listing, Market};
use crate::forms::Flow;
use maud::{html, Markup};

/// Button that opens the flow's dialog for the listing at `index`.
/// Works as a plain form post; htmx swaps the dialog in place.
fn open_button(flow: &Flow, index: usize) -> Markup {
    let action = format!("/{}/{}/open", flow.market.slug(), index);
    html! {
        form method="post" action=(action) hx-post=(action) hx-target="#dialog-root" hx-swap="outerHTML" {
            button type="submit" class="btn block" { (flow.open_label) }
        }
    }
}

pub fn listing_card(market: Market, index: usize, listing: &Listing) -> Markup {
    match market {
        Market::Buy => sale_card(index, listing),
        Market::Rent => rental_card(index, listing),
    }
}

pub fn sale_card(index: usize, listing: &Listing) -> Markup {
    html! {
        div class="listing" {
            div class="photo" {
                img src=(listing.image) alt="House";
                div class="badge" { "For Sale" }
            }
            div class="listing-head" {
                div {
                    h2 { "Luxury Home" }
                    p class="meta" { (listing.location) }
                }
                p class="price" { (listing.price) }
            }
            div class="meta listing-facts" {
                span { (listing.beds) " beds" }
                span { (listing.baths) " bath" }
                span { (listing.area) " sqft" }
            }
            (open_button(Flow::for_market(Market::Buy), index))
        }
    }
}

pub fn rental_card(index: usize, listing: &Listing) -> Markup {
    html! {
        div class="listing" {
            img src=(listing.image) alt="House";
            h2 { "Luxury Villa" }
            p class="price" { (listing.price) " / Day" }
            p class="meta" {
                (listing.beds) " beds • " (listing.baths) " bath • " (listing.area) " sqft"
            }
            p class="meta" { (listing.location) }
            (open_button(Flow::for_market(Market::Rent), index))
        }
    }
}
