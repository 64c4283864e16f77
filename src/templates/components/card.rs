use crate::domain::CardView;
use crate::templates::components::{amenities_details, amenities_section};
use crate::templates::RenderMode;
use maud::{html, Markup};

/// Swaps a broken image for the inline placeholder, once.
fn fallback_handler(placeholder: &str) -> String {
    format!("this.onerror=null;this.src='{placeholder}';")
}

pub fn listing_card(card: &CardView, mode: RenderMode) -> Markup {
    html! {
        div class="listing-card" {
            img
                class="listing-image"
                src=(card.image_url)
                alt=(card.name)
                onerror=(fallback_handler(&card.image_fallback));

            div class="listing-content" {
                div class="listing-header" {
                    h3 class="listing-name" { (card.name) }
                    div class="listing-price" { (card.price) span { "/night" } }
                }

                @if let Some(rating) = &card.rating {
                    div class="rating" {
                        span class="stars" { (rating.stars) }
                        span class="rating-value" { (rating.value) }
                        " "
                        span class="review-count" { (rating.reviews) }
                    }
                }

                p class="listing-description" { (card.description) }

                div class="host-info" {
                    img
                        class="host-photo"
                        src=(card.host.photo_url)
                        alt=(card.host.name)
                        onerror=(fallback_handler(&card.host.photo_fallback));
                    div class="host-details" {
                        div class="host-name" {
                            (card.host.greeting)
                            @if card.host.is_superhost {
                                span class="superhost-badge" { "SUPERHOST" }
                            }
                        }
                        div class="host-since" { (card.host.since) }
                    }
                }

                @match mode {
                    RenderMode::Live => { (amenities_section(card.index, &card.amenities)) },
                    RenderMode::Static => { (amenities_details(&card.amenities)) },
                }

                div class="neighborhood" { (card.neighbourhood) }
            }
        }
    }
}
