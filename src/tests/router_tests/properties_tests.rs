// src/tests/router_tests/properties_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, status_of, test_state};

#[test]
fn search_text_is_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state("search");

    for q in ["villa", "VILLA", "ViLLa"] {
        let body = body_string(handle(get(&format!("/properties?q={q}")), &state)?);
        assert!(body.contains("Seaside Serenity Villa"), "{q}");
        assert!(!body.contains("Rustic Retreat Cottage"), "{q}");
    }
    Ok(())
}

#[test]
fn filters_combine() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state("filters");

    let body = body_string(handle(get("/properties?location=new-york-usa&price=300%2B"), &state)?);
    assert!(body.contains("Metropolitan Haven"));
    assert!(!body.contains("Skyline Luxury Penthouse"));

    let body = body_string(handle(get("/properties?type=castle"), &state)?);
    assert!(body.contains("No properties match your search"));
    Ok(())
}

#[test]
fn viewport_hint_controls_page_size() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state("viewport");

    let mut req = get("/properties");
    req.headers_mut()
        .insert("Sec-CH-Viewport-Width", "800".parse().unwrap());
    let body = body_string(handle(req, &state)?);
    assert!(body.contains("carousel-grid cols-2"));
    assert!(body.contains("01 of 03"));

    let body = body_string(handle(get("/properties?vw=375"), &state)?);
    assert!(body.contains("carousel-grid cols-1"));
    assert!(body.contains("01 of 05"));
    Ok(())
}

#[test]
fn out_of_range_page_is_clamped() -> Result<(), Box<dyn std::error::Error>> {
    let body = body_string(handle(get("/properties?page=99"), &test_state("clamp"))?);
    assert!(body.contains("02 of 02"));
    Ok(())
}

#[test]
fn details_page_and_unknown_listing() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state("details");

    let resp = handle(get("/properties/lakeside-modern-mansion?img=4"), &state)?;
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("<h1>Lakeside Modern Mansion</h1>"));
    assert!(body.contains("$3,800,000"));

    assert_eq!(status_of(handle(get("/properties/castle-on-a-hill"), &state)), 404);
    assert_eq!(status_of(handle(get("/properties/castle/extra"), &state)), 404);
    Ok(())
}

#[test]
fn api_returns_filtered_listing_json() -> Result<(), Box<dyn std::error::Error>> {
    let resp = handle(get("/api/properties?price=100-300"), &test_state("api"))?;
    assert_eq!(header(&resp, "Content-Type"), "application/json");

    let listings: serde_json::Value = serde_json::from_str(&body_string(resp))?;
    let listings = listings.as_array().ok_or("expected an array")?;
    // Every listing is priced above $300k.
    assert!(listings.is_empty());

    let resp = handle(get("/api/properties?type=cottage"), &test_state("api2"))?;
    let listings: serde_json::Value = serde_json::from_str(&body_string(resp))?;
    assert_eq!(listings[0]["id"], "rustic-retreat-cottage");
    assert_eq!(listings[0]["type"], "cottage");
    assert_eq!(listings[0]["price"], "$350,000");
    assert_eq!(listings.as_array().map(Vec::len), Some(1));
    Ok(())
}
