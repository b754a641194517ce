use maud::{html, Markup};

fn home_icon() -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="#524ed2"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        {
            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
        }
    }
}

pub fn navbar() -> Markup {
    html! {
        header class="navbar" {
            a href="/" class="brand" {
                (home_icon())
                span { "RentAHouse" }
            }
            nav {
                ul {
                    li { a href="#home" { "Home" } }
                    li { a href="#buy" { "Buy" } }
                    li { a href="#rent" { "Rent" } }
                    li { a href="#contact" { "Contact" } }
                }
            }
            a href="tel:+11234567890" class="btn" { "Contact Agent" }
        }
    }
}
