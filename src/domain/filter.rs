// src/domain/filter.rs

use crate::domain::format::parse_price;
use crate::domain::listing::Listing;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering selected in the sort dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Dataset order, restricted to matches.
    #[default]
    Original,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Original,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Original => "",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Original => "Sort by...",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Rating",
        }
    }

    /// Unknown values fall back to dataset order.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            _ => SortKey::Original,
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::parse(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive substring match on name, neighbourhood or host name.
/// A blank query keeps everything.
pub fn filter(all: &[Listing], query: &str) -> Vec<Listing> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return all.to_vec();
    }

    all.iter()
        .filter(|listing| matches(listing, &term))
        .cloned()
        .collect()
}

fn matches(listing: &Listing, term: &str) -> bool {
    let name = listing.name.as_deref().unwrap_or("");
    let host = listing.host_name.as_deref().unwrap_or("");
    [name, listing.display_neighbourhood(), host]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

/// Stable sort into a new Vec; the input is left untouched.
pub fn sort(listings: &[Listing], key: SortKey) -> Vec<Listing> {
    let mut sorted = listings.to_vec();

    match key {
        SortKey::Original => {}
        SortKey::PriceLow => sorted.sort_by(|a, b| compare_keys(price_key(a), price_key(b))),
        SortKey::PriceHigh => sorted.sort_by(|a, b| compare_keys(price_key(b), price_key(a))),
        SortKey::Rating => {
            sorted.sort_by(|a, b| compare_keys(b.rating_or_zero(), a.rating_or_zero()))
        }
    }

    sorted
}

/// The only way the displayed list is derived.
pub fn derive(all: &[Listing], query: &str, key: SortKey) -> Vec<Listing> {
    sort(&filter(all, query), key)
}

/// Unparseable prices rank below every real price.
fn price_key(listing: &Listing) -> f64 {
    let price = parse_price(listing.price.as_deref());
    if price.is_nan() {
        f64::NEG_INFINITY
    } else {
        price
    }
}

fn compare_keys(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
