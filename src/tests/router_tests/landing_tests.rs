use crate::errors::ServerError;
use crate::tests::utils::{body_string, test_app, Browser};

#[test]
fn landing_page_lists_both_markets() {
    let app = test_app();
    let mut browser = Browser::new(&app);

    let resp = browser.get("/").expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(cookie.starts_with("rah_visitor="));

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Premium Properties For Sale"));
    assert!(body.contains("Most Demanding Villa For Rent"));
    assert!(body.contains("Austin, TX"));
    assert!(body.contains("San Francisco, CA"));
    assert!(body.contains("$250 / Day"));
    assert!(body.contains("Schedule Viewing"));
    assert!(body.contains("Book Villa"));
    assert!(body.contains(r#"action="/rent/5/open""#));

    // Nothing open yet.
    assert!(!body.contains(r#"role="dialog""#));
}

#[test]
fn returning_visitor_keeps_cookie() {
    let app = test_app();
    let mut browser = Browser::new(&app);

    browser.get("/").unwrap();
    let resp = browser.get("/").unwrap();

    assert!(resp.headers().get("set-cookie").is_none());
    assert_eq!(app.visitors.len(), 1);
}

#[test]
fn stylesheet_is_served() {
    let app = test_app();
    let mut browser = Browser::new(&app);

    let resp = browser.get("/static/main.css").unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/css"));
    assert!(body_string(resp).contains(".dialog"));
}

#[test]
fn unknown_routes_are_not_found() {
    let app = test_app();
    let mut browser = Browser::new(&app);

    for path in ["/about", "/buy", "/static/htmx.js"] {
        match browser.get(path) {
            Err(ServerError::NotFound) => {}
            other => panic!("{path}: expected NotFound, got {:?}", other.map(|r| r.status())),
        }
    }
    match browser.form_post("/sell/0/open", "") {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn browsing_does_not_store_visitors() {
    let app = test_app();
    for _ in 0..3 {
        Browser::new(&app).get("/").unwrap();
    }
    assert_eq!(app.visitors.len(), 0);

    let mut browser = Browser::new(&app);
    browser.get("/").unwrap();
    browser.hx_post("/buy/0/open", "").unwrap();
    assert_eq!(app.visitors.len(), 1);

    let page = body_string(browser.get("/").unwrap());
    assert!(page.contains("Inquire About Austin, TX"));
}

#[test]
fn in_page_links_have_targets() {
    let app = test_app();
    let body = body_string(Browser::new(&app).get("/").unwrap());

    for link in body.split(r##"href="#"##).skip(1) {
        let anchor = link.split('"').next().unwrap();
        assert!(
            body.contains(&format!(r#"id="{anchor}""#)),
            "#{anchor} has no target"
        );
    }
    assert!(!body.contains("style="));
}
