// src/tests/router_tests/pages_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, status_of, test_state};
use http::Method;

#[test]
fn every_page_renders() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state("pages");

    for path in ["/", "/about", "/services", "/contact", "/properties"] {
        let resp = handle(get(path), &state)?;
        assert_eq!(resp.status(), 200, "{path}");
        assert_eq!(header(&resp, "Content-Type"), "text/html; charset=utf-8");
        assert!(header(&resp, "Accept-CH").contains("Sec-CH-Viewport-Width"));
        assert!(body_string(resp).starts_with("<!DOCTYPE html>"));
    }
    Ok(())
}

#[test]
fn home_carousels_page_independently() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state("home");

    let body = body_string(handle(get("/?featured=2&faq=1"), &state)?);
    // Five listings at three per page.
    assert!(body.contains("02 of 02"));
    assert!(body.contains("Skyline Luxury Penthouse"));
    assert!(!body.contains(">Seaside Serenity Villa<"));
    assert!(body.contains(r#"href="/?featured=2&amp;faq=2#faqs""#));
    Ok(())
}

#[test]
fn healthz_is_plain_text() -> Result<(), Box<dyn std::error::Error>> {
    let resp = handle(get("/healthz"), &test_state("health"))?;
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
    Ok(())
}

#[test]
fn unknown_path_is_404_and_wrong_method_is_405() {
    let state = test_state("status");

    assert_eq!(status_of(handle(get("/nowhere"), &state)), 404);

    let mut req = get("/about");
    *req.method_mut() = Method::DELETE;
    assert_eq!(status_of(handle(req, &state)), 405);

    let mut req = get("/properties/metropolitan-haven");
    *req.method_mut() = Method::POST;
    assert_eq!(status_of(handle(req, &state)), 405);
}

#[test]
fn banner_hides_after_dismissal() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state("banner");

    let resp = handle(get("/banner/dismiss"), &state)?;
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/");
    assert!(header(&resp, "Set-Cookie").starts_with("banner=dismissed"));

    let mut req = get("/about");
    req.headers_mut()
        .insert("Cookie", "banner=dismissed".parse().unwrap());
    let body = body_string(handle(req, &state)?);
    assert!(!body.contains("/banner/dismiss"));

    let body = body_string(handle(get("/about"), &state)?);
    assert!(body.contains("/banner/dismiss"));
    Ok(())
}

#[test]
fn about_clients_carousel_pages_two_at_a_time() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state("clients");

    let body = body_string(handle(get("/about?clients=2"), &state)?);
    assert!(body.contains("02 of 02"));
    assert!(body.contains("BluePeak Holdings"));
    assert!(!body.contains("ABC Corporation"));

    let mut req = get("/about");
    req.headers_mut()
        .insert("Sec-CH-Viewport-Width", "800".parse().unwrap());
    let body = body_string(handle(req, &state)?);
    assert!(body.contains("01 of 02"));
    assert!(body.contains("carousel-grid cols-2"));
    Ok(())
}
