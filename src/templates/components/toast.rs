use crate::forms::Notice;
use maud::{html, Markup};

fn toast(notice: &Notice) -> Markup {
    html! {
        div class="toast" role="status" {
            strong { (notice.title) }
            p { (notice.description) }
        }
    }
}

/// Toast container for a full page.
pub fn toasts(notices: &[Notice]) -> Markup {
    html! {
        div id="toasts" class="toasts" aria-live="polite" {
            @for notice in notices {
                (toast(notice))
            }
        }
    }
}

/// Out-of-band fragment appending to the page's toast container.
pub fn toasts_oob(notices: &[Notice]) -> Markup {
    html! {
        @if !notices.is_empty() {
            div id="toasts" hx-swap-oob="beforeend" {
                @for notice in notices {
                    (toast(notice))
                }
            }
        }
    }
}
