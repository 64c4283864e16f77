// src/tests/router_tests/gallery_tests.rs

use crate::dataset::DatasetSource;
use crate::domain::filter::filter;
use crate::domain::format::parse_price;
use crate::errors::ServerError;
use crate::gallery::{Gallery, LOADING_MESSAGE, LOAD_ERROR_MESSAGE};
use crate::router::handle;
use crate::templates::components::listings::NO_RESULTS_MESSAGE;
use crate::tests::utils::{body_string, get, ready_gallery};
use scraper::{ElementRef, Html, Selector};
use std::path::PathBuf;

struct CardSummary {
    name: String,
    price: String,
    neighbourhood: String,
    host: String,
}

fn text_of(card: &ElementRef, selector: &str) -> String {
    let selector = Selector::parse(selector).unwrap();
    let text = card
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();
    text
}

fn cards(body: &str) -> Vec<CardSummary> {
    let doc = Html::parse_document(body);
    let card_selector = Selector::parse(".listing-card").unwrap();

    let summaries = doc
        .select(&card_selector)
        .map(|card| CardSummary {
            name: text_of(&card, ".listing-name"),
            price: text_of(&card, ".listing-price")
                .trim_end_matches("/night")
                .to_string(),
            neighbourhood: text_of(&card, ".neighborhood"),
            host: text_of(&card, ".host-name"),
        })
        .collect();
    summaries
}

#[test]
fn home_page_shows_first_fifty_in_dataset_order() {
    let gallery = ready_gallery();

    let resp = handle(get("/"), &gallery).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    let shown = cards(&body);
    assert_eq!(shown.len(), 50);
    assert_eq!(shown[0].name, "Golden Gate Park Retreat 0");
    assert_eq!(shown[49].name, "Golden Gate Park Retreat 49");
    assert!(body.contains("id=\"search-input\""));
    assert!(body.contains("id=\"sort-select\""));
    assert!(!body.contains(LOADING_MESSAGE));
}

#[test]
fn search_park_sorted_by_price_high() {
    let gallery = ready_gallery();

    let resp = handle(get("/listings?q=park&sort=price-high"), &gallery).unwrap();
    let shown = cards(&body_string(resp));

    let all = gallery.view("", Default::default()).display.all().to_vec();
    let expected = filter(&all, "park").len();
    assert!(expected > 5);
    assert_eq!(shown.len(), expected);

    for card in &shown {
        let hit = [&card.name, &card.neighbourhood, &card.host]
            .iter()
            .any(|field| field.to_lowercase().contains("park"));
        assert!(hit, "{} does not match 'park'", card.name);
        // Record 56 is past the fifty-record cut.
        assert!(!card.name.ends_with(" 56"));
    }

    let prices: Vec<f64> = shown
        .iter()
        .map(|card| parse_price(Some(&card.price)))
        .collect();
    assert!(
        prices.windows(2).all(|w| w[0] >= w[1]),
        "prices not descending: {prices:?}"
    );
}

#[test]
fn search_is_case_insensitive_and_url_decoded() {
    let gallery = ready_gallery();

    let resp = handle(get("/listings?q=Cozy%20STUDIO"), &gallery).unwrap();
    let shown = cards(&body_string(resp));

    assert!(!shown.is_empty());
    assert!(shown.iter().all(|c| c.name.starts_with("Cozy Studio")));
}

#[test]
fn rating_sort_puts_unrated_last() {
    let gallery = ready_gallery();

    let resp = handle(get("/listings?sort=rating"), &gallery).unwrap();
    let body = body_string(resp);
    let doc = Html::parse_document(&body);
    let card_selector = Selector::parse(".listing-card").unwrap();

    let ratings: Vec<f64> = doc
        .select(&card_selector)
        .map(|card| text_of(&card, ".rating-value").parse().unwrap_or(0.0))
        .collect();

    assert_eq!(ratings.len(), 50);
    assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(ratings.last(), Some(&0.0));
}

#[test]
fn no_matches_shows_single_message() {
    let gallery = ready_gallery();

    let resp = handle(get("/listings?q=zzzz-nothing"), &gallery).unwrap();
    let body = body_string(resp);

    assert!(cards(&body).is_empty());
    assert_eq!(body.matches(NO_RESULTS_MESSAGE).count(), 1);
    assert!(body.contains("grid-column: 1/-1"));
}

#[test]
fn card_shows_formatted_fields() {
    let gallery = ready_gallery();

    let body = body_string(handle(get("/listings?q=Retreat%200"), &gallery).unwrap());

    assert!(body.contains("Golden Gate Park Retreat 0"));
    assert!(body.contains("$1,200.00<span>/night</span>"));
    assert!(body.contains("Lovely place number 0"));
    assert!(!body.contains("<b>place</b>"));
    assert!(body.contains("Hosted by Alex"));
    assert!(body.contains("SUPERHOST"));
    assert!(body.contains("Host since March 2015"));
    assert!(body.contains("(0 reviews)"));
    assert!(body.contains("3.00"));
    assert!(body.contains("data:image/svg+xml;base64,"));
}

#[test]
fn loading_state_polls_until_ready() {
    let gallery = Gallery::new();

    let body = body_string(handle(get("/"), &gallery).unwrap());
    assert!(body.contains(LOADING_MESSAGE));
    assert!(body.contains("hx-trigger=\"every 1s\""));
    assert!(cards(&body).is_empty());
}

#[test]
fn load_failure_shows_error_and_stays_inert() {
    let gallery = Gallery::new();
    gallery.load_blocking(&DatasetSource::File(PathBuf::from("/missing/listings.json")), 50);

    let body = body_string(handle(get("/"), &gallery).unwrap());
    assert!(body.contains(LOAD_ERROR_MESSAGE));
    assert!(!body.contains(LOADING_MESSAGE));
    assert!(!body.contains("every 1s"));

    let searched = body_string(handle(get("/listings?q=park"), &gallery).unwrap());
    assert!(cards(&searched).is_empty());
    assert!(searched.contains(LOAD_ERROR_MESSAGE));
}

#[test]
fn selected_sort_is_preserved_in_page() {
    let gallery = ready_gallery();

    let body = body_string(handle(get("/?q=mission&sort=price-low"), &gallery).unwrap());
    assert!(body.contains("value=\"mission\""));
    assert!(body.contains("<option value=\"price-low\" selected>"));
}

#[test]
fn health_and_unknown_routes() {
    let gallery = ready_gallery();

    let resp = handle(get("/health"), &gallery).unwrap();
    assert_eq!(body_string(resp), "ok");

    assert!(matches!(
        handle(get("/nope"), &gallery),
        Err(ServerError::NotFound)
    ));
}
