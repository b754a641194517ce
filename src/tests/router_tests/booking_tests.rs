use crate::errors::ServerError;
use crate::forms::FormError;
use crate::tests::utils::{body_string, test_app, Browser, CONTACT};

fn booking(check_in: &str, check_out: &str) -> String {
    format!("{CONTACT}&guests=2&checkIn={check_in}&checkOut={check_out}&specialRequests=")
}

#[test]
fn check_out_on_check_in_day_is_rejected() {
    let app = test_app();
    let mut browser = Browser::new(&app);
    browser.hx_post("/rent/0/open", "").unwrap();

    let body = body_string(
        browser
            .hx_post("/rent/submit", &booking("2026-11-02", "2026-11-02"))
            .unwrap(),
    );

    assert!(body.contains("Book New York, NY"));
    assert!(body.contains("Check-out must be after check-in"));
    // Check-out picker starts the day after check-in.
    assert!(body.contains(r#"min="2026-11-03""#));
}

#[test]
fn past_check_in_is_rejected() {
    let app = test_app();
    let mut browser = Browser::new(&app);
    browser.hx_post("/rent/0/open", "").unwrap();

    let body = body_string(
        browser
            .hx_post("/rent/submit", &booking("2026-10-01", "2026-10-05"))
            .unwrap(),
    );
    assert!(body.contains("Date cannot be in the past"));
}

#[test]
fn valid_booking_is_accepted() {
    let app = test_app();
    let mut browser = Browser::new(&app);
    browser.hx_post("/rent/4/open", "").unwrap();

    let body = body_string(
        browser
            .hx_post("/rent/submit", &booking("2026-10-20", "2026-10-23"))
            .unwrap(),
    );

    assert!(body.contains("Booking request submitted!"));
    assert!(body.contains("a property in Miami, FL"));
    assert!(!body.contains(r#"role="dialog""#));
}

#[test]
fn opening_a_booking_closes_an_open_inquiry() {
    let app = test_app();
    let mut browser = Browser::new(&app);
    browser.hx_post("/buy/0/open", "").unwrap();

    let body = body_string(browser.hx_post("/rent/1/open", "").unwrap());
    assert!(body.contains("Book Los Angeles, CA"));

    let page = body_string(browser.get("/").unwrap());
    assert!(page.contains("Book Los Angeles, CA"));
    assert!(!page.contains("Inquire About"));
}

#[test]
fn cancel_closes_and_discards_the_draft() {
    let app = test_app();
    let mut browser = Browser::new(&app);
    browser.hx_post("/rent/2/open", "").unwrap();
    browser
        .hx_post("/rent/submit", &booking("2026-10-20", ""))
        .unwrap();

    let body = body_string(browser.hx_post("/rent/cancel", "").unwrap());
    assert!(!body.contains(r#"role="dialog""#));

    let body = body_string(browser.hx_post("/rent/2/open", "").unwrap());
    assert!(!body.contains(r#"value="1234567890""#));
    assert!(!body.contains("Please select a check-out date"));
}

#[test]
fn malformed_date_is_a_bad_request() {
    let app = test_app();
    let mut browser = Browser::new(&app);
    browser.hx_post("/rent/0/open", "").unwrap();

    match browser.hx_post("/rent/submit", &booking("next-friday", "")) {
        Err(err @ ServerError::Form(FormError::InvalidDate { field: "checkIn", .. })) => {
            assert_eq!(err.status(), 400)
        }
        other => panic!("expected InvalidDate, got {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn malformed_date_leaves_the_draft_untouched() {
    let app = test_app();
    let mut browser = Browser::new(&app);
    browser.hx_post("/rent/0/open", "").unwrap();

    let posted = "name=Mallory&email=m%40example.com&phone=5550001111&guests=4\
                  &checkIn=garbage&checkOut=2026-10-25&specialRequests=late+arrival";
    assert!(browser.hx_post("/rent/submit", posted).is_err());

    let page = body_string(browser.get("/").unwrap());
    assert!(page.contains("Book New York, NY"));
    assert!(!page.contains("Mallory"));
    assert!(!page.contains("late arrival"));
    assert!(!page.contains(r#"value="4""#));
}

#[test]
fn oversized_form_is_refused_whole() {
    let app = test_app();
    let mut browser = Browser::new(&app);
    browser.hx_post("/rent/0/open", "").unwrap();

    let long_request = format!("{}END", "a".repeat(70 * 1024));
    let posted = format!("{}{long_request}", booking("2026-10-20", "2026-10-23"));

    match browser.hx_post("/rent/submit", &posted) {
        Err(err @ ServerError::PayloadTooLarge { .. }) => assert_eq!(err.status(), 413),
        other => panic!("expected PayloadTooLarge, got {:?}", other.map(|r| r.status())),
    }

    // Nothing was submitted: the dialog is still open and blank.
    let page = body_string(browser.get("/").unwrap());
    assert!(page.contains("Book New York, NY"));
    assert!(!page.contains("Booking request submitted!"));
    assert!(!page.contains(r#"value="1234567890""#));
}

#[test]
fn form_at_the_size_limit_is_accepted() {
    let app = test_app();
    let mut browser = Browser::new(&app);
    browser.hx_post("/rent/0/open", "").unwrap();

    let base = booking("2026-10-20", "2026-10-23");
    let posted = format!("{base}{}", "a".repeat(64 * 1024 - base.len()));

    let body = body_string(browser.hx_post("/rent/submit", &posted).unwrap());
    assert!(body.contains("Booking request submitted!"));
}
