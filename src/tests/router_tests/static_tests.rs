// src/tests/router_tests/static_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app, StubSource};

#[test]
fn serves_page_helpers() {
    let app = test_app(StubSource::new(Ok(vec![])), None);

    let resp = handle(get("/static/main.js"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("application/javascript"));

    let body = body_string(resp);
    for helper in [
        "function showLoader",
        "function hideLoader",
        "function scrollToElement",
        "function animateOnScroll",
        "function validateForm",
        "function filterItems",
        "function loadFragments",
    ] {
        assert!(body.contains(helper), "missing {helper}");
    }
}

#[test]
fn serves_stylesheet() {
    let app = test_app(StubSource::new(Ok(vec![])), None);

    let resp = handle(get("/static/main.css"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/css"));
    let body = body_string(resp);
    for rule in [".spinner-overlay", ".volunteer-grid", ".bg-emerald-100", ".bg-amber-100", ".animate__fadeInUp"] {
        assert!(body.contains(rule), "missing {rule}");
    }
}
