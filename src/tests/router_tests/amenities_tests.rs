// src/tests/router_tests/amenities_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, ready_gallery};

fn tag_count(body: &str) -> usize {
    body.matches("class=\"amenity-tag\"").count()
}

#[test]
fn card_starts_collapsed_with_toggle() {
    let gallery = ready_gallery();

    let body = body_string(handle(get("/listings?q=Retreat%200"), &gallery).unwrap());
    assert_eq!(tag_count(&body), 5);
    assert!(body.contains("Show 3 more amenities"));
    assert!(body.contains("hx-get=\"/listings/0/amenities?expanded=true\""));
}

#[test]
fn toggle_expands_then_restores_initial_state() {
    let gallery = ready_gallery();

    let collapsed = body_string(handle(get("/listings/0/amenities"), &gallery).unwrap());
    assert_eq!(tag_count(&collapsed), 5);
    assert!(collapsed.contains("Show 3 more amenities"));
    assert!(collapsed.contains("data-expanded=\"false\""));

    let expanded =
        body_string(handle(get("/listings/0/amenities?expanded=true"), &gallery).unwrap());
    assert_eq!(tag_count(&expanded), 8);
    assert!(expanded.contains("Show less"));
    assert!(expanded.contains("Hair dryer"));
    assert!(expanded.contains("hx-get=\"/listings/0/amenities?expanded=false\""));

    let again =
        body_string(handle(get("/listings/0/amenities?expanded=false"), &gallery).unwrap());
    assert_eq!(again, collapsed);
}

#[test]
fn each_card_targets_its_own_section() {
    let gallery = ready_gallery();

    let body = body_string(handle(get("/"), &gallery).unwrap());
    assert!(body.contains("id=\"amenities-0\""));
    assert!(body.contains("id=\"amenities-2\""));
    assert_eq!(body.matches("hx-target=\"#amenities-0\"").count(), 1);
}

#[test]
fn short_and_malformed_lists_have_no_toggle() {
    let gallery = ready_gallery();

    let two = body_string(handle(get("/listings/2/amenities?expanded=true"), &gallery).unwrap());
    assert_eq!(tag_count(&two), 2);
    assert!(!two.contains("amenities-toggle"));

    let broken = body_string(handle(get("/listings/1/amenities"), &gallery).unwrap());
    assert_eq!(tag_count(&broken), 0);
    assert!(broken.contains("Amenities"));
}

#[test]
fn bad_indexes() {
    let gallery = ready_gallery();

    assert!(matches!(
        handle(get("/listings/50/amenities"), &gallery),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/listings/abc/amenities"), &gallery),
        Err(ServerError::BadRequest(_))
    ));
}
