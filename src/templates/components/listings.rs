use crate::domain::{CardView, LoadPhase, SortKey};
use crate::gallery::{GalleryView, LOADING_MESSAGE};
use crate::templates::components::listing_card;
use crate::templates::RenderMode;
use maud::{html, Markup};
use url::form_urlencoded::Serializer;

pub const NO_RESULTS_MESSAGE: &str = "No listings found matching your search.";

/// `/listings` URL for a query/sort pair.
fn listings_url(query: &str, sort: SortKey) -> String {
    let params = Serializer::new(String::new())
        .append_pair("q", query)
        .append_pair("sort", sort.as_str())
        .finish();
    format!("/listings?{params}")
}

/// `/` URL that reopens the page with the same search and sort. Empty
/// values are left out.
pub fn page_url(query: &str, sort: SortKey) -> String {
    let mut params = Serializer::new(String::new());
    if !query.is_empty() {
        params.append_pair("q", query);
    }
    if sort != SortKey::Original {
        params.append_pair("sort", sort.as_str());
    }

    let params = params.finish();
    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{params}")
    }
}

/// The whole `#listings-container`. Search and sort swap it out wholesale.
/// While the dataset is still loading a live container polls itself until
/// the load settles.
pub fn listings_container(view: &GalleryView, mode: RenderMode) -> Markup {
    html! {
        @match (&view.phase, mode) {
            (LoadPhase::Loading, RenderMode::Live) => {
                div
                    id="listings-container"
                    class="listings-grid"
                    hx-get=(listings_url(&view.query, view.sort))
                    hx-trigger="every 1s"
                    hx-swap="outerHTML"
                {
                    div id="loading" class="loading" { (LOADING_MESSAGE) }
                }
            },
            (LoadPhase::Loading, RenderMode::Static) => {
                div id="listings-container" class="listings-grid" {
                    div id="loading" class="loading" { (LOADING_MESSAGE) }
                }
            },
            (LoadPhase::Error(message), _) => {
                div id="listings-container" class="listings-grid" {
                    div id="loading" class="loading error" { (message) }
                }
            },
            (LoadPhase::Ready, _) => {
                div id="listings-container" class="listings-grid" {
                    (render_list(&view.cards(), mode))
                }
            },
        }
    }
}

fn render_list(cards: &[CardView], mode: RenderMode) -> Markup {
    html! {
        @if cards.is_empty() {
            p class="no-results" style="text-align: center; grid-column: 1/-1; padding: 2rem; color: #666;" {
                (NO_RESULTS_MESSAGE)
            }
        } @else {
            @for card in cards {
                (listing_card(card, mode))
            }
        }
    }
}
