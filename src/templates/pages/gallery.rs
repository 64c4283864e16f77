// templates/pages/gallery.rs

use crate::domain::SortKey;
use crate::gallery::GalleryView;
use crate::templates::layouts::desktop::CONTROLS_FORM_ID;
use crate::templates::{components::listings_container, desktop_layout, RenderMode};
use crate::theme::Theme;
use maud::{html, Markup};

pub const PAGE_TITLE: &str = "San Francisco Listings";

pub fn gallery_page(view: &GalleryView, theme: Theme) -> Markup {
    desktop_layout(
        PAGE_TITLE,
        theme,
        RenderMode::Live,
        html! {
            main {
                (controls(&view.query, view.sort))
                (listings_container(view, RenderMode::Live))
            }
        },
    )
}

/// The page as a standalone file. Search and sort are fixed at render time,
/// so the controls are left out.
pub fn static_gallery_page(view: &GalleryView) -> Markup {
    desktop_layout(
        PAGE_TITLE,
        Theme::default(),
        RenderMode::Static,
        html! {
            main {
                (listings_container(view, RenderMode::Static))
            }
        },
    )
}

/// Search box and sort selector. Each re-requests the listing container with
/// the other control's current value; without scripting the form submits to `/`.
fn controls(query: &str, sort: SortKey) -> Markup {
    html! {
        form id=(CONTROLS_FORM_ID) class="controls" method="get" action="/" {
            label class="sr-only" for="search-input" { "Search listings" }
            input
                type="search"
                id="search-input"
                name="q"
                value=(query)
                placeholder="Search by name, neighborhood, or host..."
                autocomplete="off"
                hx-get="/listings"
                hx-trigger="input changed delay:200ms, search"
                hx-target="#listings-container"
                hx-swap="outerHTML"
                hx-include="#sort-select";

            select
                id="sort-select"
                name="sort"
                hx-get="/listings"
                hx-trigger="change"
                hx-target="#listings-container"
                hx-swap="outerHTML"
                hx-include="#search-input"
            {
                @for key in SortKey::ALL {
                    option value=(key.as_str()) selected[key == sort] { (key.label()) }
                }
            }
        }
    }
}
