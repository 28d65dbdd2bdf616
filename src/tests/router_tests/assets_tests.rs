// src/tests/router_tests/assets_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, status_of, test_state};

#[test]
fn serves_files_with_guessed_type() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state("assets");

    let resp = handle(get("/static/main.css"), &state)?;
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "text/css");
    assert_eq!(header(&resp, "Cache-Control"), "public, max-age=3600");
    assert_eq!(body_string(resp), "body { margin: 0; }");

    let resp = handle(get("/static/properties/pd-1.png"), &state)?;
    assert_eq!(header(&resp, "Content-Type"), "image/png");
    Ok(())
}

#[test]
fn missing_and_escaping_paths_are_404() {
    let state = test_state("traversal");

    assert_eq!(status_of(handle(get("/static/nope.css"), &state)), 404);
    assert_eq!(status_of(handle(get("/static/../Cargo.toml"), &state)), 404);
    assert_eq!(status_of(handle(get("/static/properties"), &state)), 404);
    assert_eq!(status_of(handle(get("/static/"), &state)), 404);
}
