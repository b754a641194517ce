use chrono::{Datelike, Local};
use maud::{html, Markup};

const POPULAR_LOCATIONS: &[&str] = &[
    "New York, NY",
    "Los Angeles, CA",
    "Miami, FL",
    "San Francisco, CA",
];

pub fn footer() -> Markup {
    let year = Local::now().year();

    html! {
        footer id="contact" {
            div class="container" {
                div class="columns" {
                    div {
                        h3 { "RentAHouse" }
                        p { "Find your perfect property with our extensive listings and expert agents." }
                    }
                    div {
                        h3 { "Quick Links" }
                        ul {
                            li { a href="#home" { "Home" } }
                            li { a href="#buy" { "Properties" } }
                            li { a href="#contact" { "Contact" } }
                        }
                    }
                    div {
                        h3 { "Popular Locations" }
                        ul {
                            @for location in POPULAR_LOCATIONS {
                                li { (location) }
                            }
                        }
                    }
                    div {
                        h3 { "Contact Us" }
                        address {
                            p { "123 Real Estate Ave" }
                            p { "New York, NY 10001" }
                            p { "Email: info@rentahouse.com" }
                            p { "Phone: (123) 456-7890" }
                        }
                    }
                }
                div class="legal" {
                    p { "© " (year) " RentAHouse. All rights reserved." }
                }
            }
        }
    }
}
