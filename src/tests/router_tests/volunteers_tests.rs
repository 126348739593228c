// src/tests/router_tests/volunteers_tests.rs

use crate::router::handle;
use crate::tests::utils::{
    body_string, get, refused_base_url, serve_once, test_app, volunteer, HangingSource,
    StubSource,
};
use crate::volunteers::{ApiClient, FetchFailure};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn success_renders_one_card() {
    let mut ana = volunteer(1, "Ana Lee", "Coordinator", "Active");
    ana.city = Some("Austin".to_string());
    ana.state = Some("TX".to_string());

    let source = StubSource::new(Ok(vec![ana]));
    let app = test_app(source.clone(), None);

    let resp = handle(get("/volunteers"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert_eq!(body.matches("<article").count(), 1);
    assert!(body.contains(">Ana Lee</h3>"));
    assert!(body.contains(">Coordinator</p>"));
    assert!(body.contains(">Austin, TX</span>"));
    assert!(body.contains("bg-emerald-100"));
    assert!(body.contains(">Active</span>"));
    assert!(body.contains(">No email</span>"));
    assert!(body.contains(">No phone</span>"));
    assert!(!body.contains("Loading..."));
    assert_eq!(source.calls(), 1);
}

#[test]
fn empty_collection_renders_empty_grid() {
    let app = test_app(StubSource::new(Ok(vec![])), None);

    let body = body_string(handle(get("/volunteers"), &app).unwrap());

    assert!(body.contains("volunteer-grid"));
    assert!(!body.contains("<article"));
    assert!(!body.contains("Loading..."));
    assert!(!body.contains("list-error"));
}

#[test]
fn transport_failure_renders_error_panel() {
    let source = StubSource::new(Err(FetchFailure::network("connection refused")));
    let app = test_app(source, None);

    let resp = handle(get("/volunteers"), &app).unwrap();
    // The failure is part of the page, not an HTTP error.
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("list-error"));
    assert!(body.contains("Error: Network error: connection refused"));
    assert!(!body.contains("<article"));
}

#[test]
fn each_request_mounts_a_fresh_view() {
    let source = StubSource::new(Ok(vec![volunteer(1, "A", "R", "Active")]));
    let app = test_app(source.clone(), None);

    let first = body_string(handle(get("/volunteers"), &app).unwrap());
    let second = body_string(handle(get("/volunteers"), &app).unwrap());

    assert_eq!(first, second);
    assert_eq!(source.calls(), 2);
}

#[test]
fn slow_backend_still_renders_cards() {
    let (source, tx) = HangingSource::gated();
    let app = test_app(source, None);

    let sender = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(200));
        tx.send(Ok(vec![volunteer(8, "Slow Sam", "Runner", "Active")]))
            .unwrap();
    });

    let body = body_string(handle(get("/volunteers"), &app).unwrap());
    sender.join().unwrap();

    assert!(body.contains(r#"data-key="8""#));
    assert!(body.contains(">Slow Sam</h3>"));
    assert!(!body.contains("Loading..."));
}

#[test]
fn render_wait_cap_renders_loading_placeholder() {
    let (source, tx) = HangingSource::gated();
    let app = test_app(source, Some(Duration::from_millis(50)));

    let body = body_string(handle(get("/volunteers"), &app).unwrap());

    assert!(body.contains("Loading..."));
    assert!(!body.contains("volunteer-grid"));

    // The late result lands on an unmounted view and is dropped.
    let _ = tx.send(Ok(vec![volunteer(1, "Late", "R", "Active")]));
}

#[test]
fn real_client_against_unreachable_api() {
    let client = ApiClient::new(&refused_base_url()).unwrap();
    let app = test_app(Arc::new(client), None);

    let body = body_string(handle(get("/volunteers"), &app).unwrap());

    assert!(body.contains("Error: Network error"));
    assert!(!body.contains("<article"));
}

#[test]
fn real_client_against_stub_api() {
    let base = serve_once(
        "200 OK",
        r#"[{"id": 5, "full_name": "Kim", "role": "Usher", "status": "Standby",
             "city": null, "state": "WA", "email": "kim@example.org",
             "availability": ["Fri", "Sun"]}]"#,
    );
    let client = ApiClient::new(&base).unwrap();
    let app = test_app(Arc::new(client), None);

    let body = body_string(handle(get("/volunteers"), &app).unwrap());

    assert!(body.contains(r#"data-key="5""#));
    assert!(body.contains(">—, WA</span>"));
    assert!(body.contains(">kim@example.org</span>"));
    assert!(body.contains(">No phone</span>"));
    assert!(body.contains("bg-amber-100"));
    assert!(body.contains("Available: Fri, Sun"));
}
