// src/domain/card_view.rs

use crate::domain::format::{
    format_host_since, format_rating, generate_stars, host_placeholder, listing_placeholder,
    parse_amenities, strip_markup,
};
use crate::domain::listing::Listing;

/// Tags shown before the amenities list is expanded.
pub const COLLAPSED_AMENITIES: usize = 5;

/// Expand/collapse state of one card's amenity tags.
#[derive(Debug, Clone, PartialEq)]
pub struct AmenitiesWidget {
    items: Vec<String>,
    expanded: bool,
}

impl AmenitiesWidget {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            expanded: false,
        }
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded && self.is_collapsible();
        self
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_collapsible(&self) -> bool {
        self.items.len() > COLLAPSED_AMENITIES
    }

    pub fn hidden_count(&self) -> usize {
        self.items.len().saturating_sub(COLLAPSED_AMENITIES)
    }

    pub fn visible(&self) -> &[String] {
        if self.expanded {
            &self.items
        } else {
            &self.items[..self.items.len().min(COLLAPSED_AMENITIES)]
        }
    }

    /// Tags past the collapsed cut, whatever the current state.
    pub fn overflow(&self) -> &[String] {
        &self.items[self.items.len().min(COLLAPSED_AMENITIES)..]
    }

    /// `None` when everything already fits.
    pub fn toggle_label(&self) -> Option<String> {
        if !self.is_collapsible() {
            return None;
        }
        Some(if self.expanded {
            "Show less".to_string()
        } else {
            format!("Show {} more amenities", self.hidden_count())
        })
    }

    pub fn toggle(&mut self) {
        if self.is_collapsible() {
            self.expanded = !self.expanded;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingView {
    pub stars: String,
    pub value: String,
    pub reviews: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostView {
    pub photo_url: String,
    pub photo_fallback: String,
    pub name: String,
    pub greeting: String,
    pub is_superhost: bool,
    pub since: String,
}

/// Everything a listing card shows, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Position in the loaded dataset; addresses the card's amenities fragment.
    pub index: usize,
    pub image_url: String,
    pub image_fallback: String,
    pub name: String,
    pub price: String,
    pub rating: Option<RatingView>,
    pub description: String,
    pub host: HostView,
    pub amenities: AmenitiesWidget,
    pub neighbourhood: String,
}

impl CardView {
    pub fn from_listing(listing: &Listing) -> Self {
        let host_name = listing.display_host_name().to_string();

        let rating = listing.shown_rating().map(|value| RatingView {
            stars: generate_stars(Some(value)),
            value: format_rating(value),
            reviews: format!("({} reviews)", listing.review_count()),
        });

        Self {
            index: listing.position,
            image_url: listing.picture().to_string(),
            image_fallback: listing_placeholder(),
            name: listing.display_name().to_string(),
            price: listing.display_price().to_string(),
            rating,
            description: strip_markup(listing.description.as_deref()),
            host: HostView {
                photo_url: listing.host_photo().to_string(),
                photo_fallback: host_placeholder(),
                greeting: format!("Hosted by {host_name}"),
                name: host_name,
                is_superhost: listing.is_superhost(),
                since: format!(
                    "Host since {}",
                    format_host_since(listing.host_since.as_deref())
                ),
            },
            amenities: AmenitiesWidget::new(parse_amenities(listing.amenities.as_deref())),
            neighbourhood: listing.display_neighbourhood().to_string(),
        }
    }
}
