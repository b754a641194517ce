use crate::errors::ServerError;
use crate::forms::FormError;
use crate::tests::utils::{body_string, test_app, Browser, CONTACT};

fn inquiry(extra: &str) -> String {
    format!("{CONTACT}&budget=%241&financing=cash{extra}")
}

#[test]
fn open_returns_dialog_partial_for_htmx() {
    let app = test_app();
    let mut browser = Browser::new(&app);

    let resp = browser.hx_post("/buy/0/open", "").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Inquire About Austin, TX"));
    assert!(body.contains("Preferred Viewing Date"));
    assert!(body.contains(r#"min="2026-10-19""#));
    assert!(body.contains("Cash Purchase"));

    // Partial only, for swapping into #dialog-root.
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn open_with_bad_index_is_not_found() {
    let app = test_app();
    let mut browser = Browser::new(&app);

    for path in ["/buy/6/open", "/buy/first/open"] {
        match browser.hx_post(path, "") {
            Err(ServerError::NotFound) => {}
            other => panic!("{path}: expected NotFound, got {:?}", other.map(|r| r.status())),
        }
    }
}

#[test]
fn missing_date_is_reported_inline_and_dialog_stays() {
    let app = test_app();
    let mut browser = Browser::new(&app);
    browser.hx_post("/buy/0/open", "").unwrap();

    let body = body_string(browser.hx_post("/buy/submit", &inquiry("")).unwrap());

    assert!(body.contains("Please select a preferred viewing date"));
    assert!(body.contains("Inquire About Austin, TX"));
    // Entered values are kept.
    assert!(body.contains(r#"value="1234567890""#));
    assert!(!body.contains("Inquiry submitted!"));
}

#[test]
fn valid_inquiry_closes_dialog_and_shows_toast_once() {
    let app = test_app();
    let mut browser = Browser::new(&app);
    browser.hx_post("/buy/1/open", "").unwrap();

    let body = body_string(
        browser
            .hx_post("/buy/submit", &inquiry("&preferredDate=2026-10-25"))
            .unwrap(),
    );
    assert!(!body.contains(r#"role="dialog""#));
    assert!(body.contains("Inquiry submitted!"));
    assert!(body.contains("the property in Seattle, WA"));
    assert!(body.contains(r#"hx-swap-oob="beforeend""#));

    let page = body_string(browser.get("/").unwrap());
    assert!(!page.contains(r#"role="dialog""#));
    assert!(!page.contains("Inquiry submitted!"));
}

#[test]
fn reopening_replaces_the_listing() {
    let app = test_app();
    let mut browser = Browser::new(&app);
    browser.hx_post("/buy/0/open", "").unwrap();
    browser.hx_post("/buy/3/open", "").unwrap();

    let page = body_string(browser.get("/").unwrap());
    assert!(page.contains("Inquire About Atlanta, GA"));
    assert!(!page.contains("Inquire About Austin, TX"));
}

#[test]
fn plain_form_posts_redirect_and_state_survives() {
    let app = test_app();
    let mut browser = Browser::new(&app);

    let resp = browser.form_post("/buy/2/open", "").unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").and_then(|v| v.to_str().ok()),
        Some("/")
    );

    let resp = browser.form_post("/buy/submit", "name=J").unwrap();
    assert_eq!(resp.status(), 303);

    let page = body_string(browser.get("/").unwrap());
    assert!(page.contains("Inquire About Denver, CO"));
    assert!(page.contains("Name must be at least 2 characters"));
    assert!(page.contains("Please select a financing option"));
}

#[test]
fn submit_without_open_dialog_is_a_conflict() {
    let app = test_app();
    let mut browser = Browser::new(&app);

    match browser.hx_post("/buy/submit", &inquiry("&preferredDate=2026-10-25")) {
        Err(err @ ServerError::Form(FormError::DialogClosed)) => assert_eq!(err.status(), 409),
        other => panic!("expected DialogClosed, got {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn visitors_do_not_share_dialogs() {
    let app = test_app();
    let mut alice = Browser::new(&app);
    let mut bob = Browser::new(&app);

    alice.hx_post("/buy/0/open", "").unwrap();
    let page = body_string(bob.get("/").unwrap());

    assert!(!page.contains(r#"role="dialog""#));
}
