use crate::app::App;
use crate::config::AppConfig;
use crate::dates::Clock;
use crate::errors::ResultResp;
use crate::router::handle;
use astra::{Body, Response};
use chrono::NaiveDate;
use http::{Method, Request};
use std::io::Read;

/// Fixed "today" so date rules don't drift.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn test_app() -> App {
    App::new(AppConfig::default()).with_clock(Clock::Fixed(today()))
}

pub fn body_string(resp: Response) -> String {
    let mut body = resp.into_body();
    let mut out = String::new();
    body.reader().read_to_string(&mut out).unwrap();
    out
}

/// Drives `handle` like a browser would: keeps the visitor cookie between requests.
pub struct Browser<'a> {
    app: &'a App,
    cookie: Option<String>,
}

impl<'a> Browser<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app, cookie: None }
    }

    pub fn get(&mut self, path: &str) -> ResultResp {
        let req = self.request(Method::GET, path, false).body(Body::empty()).unwrap();
        self.send(req)
    }

    /// POST as htmx does (partial responses).
    pub fn hx_post(&mut self, path: &str, form: &str) -> ResultResp {
        self.post(path, form, true)
    }

    /// POST as a plain HTML form (redirect responses).
    pub fn form_post(&mut self, path: &str, form: &str) -> ResultResp {
        self.post(path, form, false)
    }

    fn post(&mut self, path: &str, form: &str, htmx: bool) -> ResultResp {
        let req = self
            .request(Method::POST, path, htmx)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(form.as_bytes().to_vec()))
            .unwrap();
        self.send(req)
    }

    fn request(&self, method: Method, path: &str, htmx: bool) -> http::request::Builder {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header("Cookie", cookie.as_str());
        }
        if htmx {
            builder = builder.header("HX-Request", "true");
        }
        builder
    }

    fn send(&mut self, req: Request<Body>) -> ResultResp {
        let resp = handle(req, self.app)?;
        if let Some(set) = resp.headers().get("set-cookie") {
            let pair = set.to_str().unwrap().split(';').next().unwrap().to_string();
            self.cookie = Some(pair);
        }
        Ok(resp)
    }
}

pub const CONTACT: &str = "name=Jo&email=a%40b.com&phone=1234567890";
