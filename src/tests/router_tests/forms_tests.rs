// src/tests/router_tests/forms_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, post_form, status_of, test_state};

const CONTACT_OK: &str =
    "first_name=Ana&last_name=Lee&email=ana%40example.com&message=Hello&inquiry_type=buying&agreed=on";

#[test]
fn contact_form_accepts_complete_submission() -> Result<(), Box<dyn std::error::Error>> {
    let resp = handle(post_form("/contact", CONTACT_OK), &test_state("contact-ok"))?;
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Thank you, Ana!"));
    Ok(())
}

#[test]
fn contact_form_rejects_missing_fields() {
    let state = test_state("contact-bad");
    let result = handle(post_form("/contact", "first_name=Ana&email=ana%40example.com"), &state);
    assert_eq!(status_of(result), 400);

    let result = handle(post_form("/contact", "first_name=Ana&last_name=Lee&email=ana&message=Hi&agreed=on"), &state);
    assert_eq!(status_of(result), 400);
}

#[test]
fn property_inquiry_validates_options() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state("inquiry");

    let ok = "first_name=Sam&last_name=Ng&email=sam%40example.com&budget=100-300&contact_method=email&agreed=on";
    let resp = handle(post_form("/properties/inquiry", ok), &state)?;
    assert!(body_string(resp).contains("Thank you, Sam!"));

    let bad = "first_name=Sam&last_name=Ng&email=sam%40example.com&budget=lots&agreed=on";
    assert_eq!(status_of(handle(post_form("/properties/inquiry", bad), &state)), 400);
    Ok(())
}

#[test]
fn details_inquiry_is_tied_to_its_listing() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state("details-inquiry");
    let body = "property_id=skyline-luxury-penthouse&first_name=Kim&last_name=Ro&email=kim%40example.com&agreed=on";

    let resp = handle(post_form("/properties/skyline-luxury-penthouse/inquiry", body), &state)?;
    assert!(body_string(resp).contains("Skyline Luxury Penthouse"));

    let mismatched = handle(post_form("/properties/metropolitan-haven/inquiry", body), &state);
    assert_eq!(status_of(mismatched), 400);

    let unknown = handle(post_form("/properties/castle/inquiry", body), &state);
    assert_eq!(status_of(unknown), 404);
    Ok(())
}

#[test]
fn oversized_body_is_rejected() {
    let huge = format!("message={}", "a".repeat(70 * 1024));
    let result = handle(post_form("/contact", &huge), &test_state("huge"));
    assert_eq!(status_of(result), 400);
}
