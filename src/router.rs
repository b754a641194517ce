use crate::app::App;
use crate::domain::Market;
use crate::errors::{ResultResp, ServerError};
use crate::forms::SubmitOutcome;
use crate::responses::{css_response, html_response, see_other};
use crate::templates::pages::{landing_page, LandingVm};
use crate::templates::{dialog_root, toasts_oob, DialogVm};
use crate::visitors::token::generate_token_default;
use crate::visitors::{set_cookie, token_from_cookie_header, Visitor};
use astra::Request;
use chrono::NaiveDate;
use maud::{html, Markup};
use std::io::Read;
use tracing::{debug, info};

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Form bodies larger than this are refused.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let htmx = req.headers().contains_key("HX-Request");
    debug!("➡️ {method} {path}{}", if htmx { " (htmx)" } else { "" });

    if method == "GET" && path == "/static/main.css" {
        return css_response(MAIN_CSS);
    }

    let existing = req
        .headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(token_from_cookie_header)
        .map(str::to_string);
    let issued = existing.is_none();
    let token = existing.unwrap_or_else(generate_token_default);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut resp = match (method.as_str(), segments.as_slice()) {
        ("GET", []) => landing(app, &token),
        ("POST", [market, index, "open"]) => open(app, &token, market, index, htmx),
        ("POST", [market, "submit"]) => {
            let fields = read_form(req)?;
            submit(app, &token, market, &fields, htmx)
        }
        ("POST", [market, "cancel"]) => cancel(app, &token, market, htmx),
        _ => Err(ServerError::NotFound),
    }?;

    if issued {
        let cookie = set_cookie(&token, app.config.visitor_ttl_secs);
        resp.headers_mut().insert(
            "set-cookie",
            cookie.parse().map_err(|_| ServerError::InternalError)?,
        );
    }

    Ok(resp)
}

fn market_from(slug: &str) -> Result<Market, ServerError> {
    Market::from_slug(slug).ok_or(ServerError::NotFound)
}

fn read_form(req: Request) -> Result<Vec<(String, String)>, ServerError> {
    let mut body = req.into_body();
    let mut buf = Vec::new();
    body.reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if buf.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::PayloadTooLarge {
            limit: MAX_FORM_BYTES,
        });
    }

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}

/// Dialog region plus any toasts queued by the last action.
fn dialog_partial(visitor: &mut Visitor, today: NaiveDate) -> Markup {
    let toasts = visitor.take_toasts();
    let vm = visitor
        .open_session()
        .and_then(|s| DialogVm::from_session(s, today));

    html! {
        (dialog_root(vm.as_ref()))
        (toasts_oob(&toasts))
    }
}

/// htmx gets the fragment; plain form posts go back to the page.
fn respond(partial: Option<Markup>) -> ResultResp {
    match partial {
        Some(markup) => html_response(markup),
        None => see_other("/"),
    }
}

fn landing(app: &App, token: &str) -> ResultResp {
    let today = app.today();
    let markup = app.visitors.peek_visitor(token, app.now_unix(), |visitor| {
        let (dialog, toasts) = match visitor {
            Some(visitor) => {
                let toasts = visitor.take_toasts();
                let dialog = visitor
                    .open_session()
                    .and_then(|s| DialogVm::from_session(s, today));
                (dialog, toasts)
            }
            None => (None, Vec::new()),
        };

        landing_page(&LandingVm {
            for_sale: app.listings.listings(Market::Buy),
            for_rent: app.listings.listings(Market::Rent),
            dialog,
            toasts,
        })
    })?;

    html_response(markup)
}

fn open(app: &App, token: &str, market: &str, index: &str, htmx: bool) -> ResultResp {
    let market = market_from(market)?;
    let listing = index
        .parse::<usize>()
        .ok()
        .and_then(|i| app.listings.get(market, i))
        .ok_or(ServerError::NotFound)?
        .clone();

    let today = app.today();
    let partial = app.visitors.with_visitor(token, app.now_unix(), |visitor| {
        visitor.open(market, listing);
        htmx.then(|| dialog_partial(visitor, today))
    })?;

    respond(partial)
}

fn submit(
    app: &App,
    token: &str,
    market: &str,
    fields: &[(String, String)],
    htmx: bool,
) -> ResultResp {
    let market = market_from(market)?;
    let today = app.today();

    let partial = app
        .visitors
        .with_visitor(token, app.now_unix(), |visitor| -> Result<_, ServerError> {
            // The posted form is the whole draft: a field left out (an unchecked
            // radio group) means nothing is selected.
            let session = visitor.session_mut(market);
            let inputs = session.flow().schema.fields.iter().map(|spec| {
                let raw = fields
                    .iter()
                    .find(|(name, _)| name == spec.name)
                    .map_or("", |(_, value)| value.as_str());
                (spec.name, raw)
            });
            session.set_inputs(inputs)?;

            match visitor.submit(market, today)? {
                SubmitOutcome::Accepted { listing } => {
                    info!("✅ {} request accepted for {}", market.slug(), listing.location);
                }
                SubmitOutcome::Rejected(result) => {
                    debug!(
                        "invalid fields: {:?}",
                        result.errors().map(|(f, _)| f).collect::<Vec<_>>()
                    );
                }
                SubmitOutcome::Failed(_) => {}
            }

            Ok(htmx.then(|| dialog_partial(visitor, today)))
        })??;

    respond(partial)
}

fn cancel(app: &App, token: &str, market: &str, htmx: bool) -> ResultResp {
    let market = market_from(market)?;
    let today = app.today();

    let partial = app.visitors.with_visitor(token, app.now_unix(), |visitor| {
        visitor.session_mut(market).cancel();
        htmx.then(|| dialog_partial(visitor, today))
    })?;

    respond(partial)
}
