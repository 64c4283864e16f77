// src/domain/listing.rs

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const UNNAMED_LISTING: &str = "Unnamed Listing";
pub const UNKNOWN_HOST: &str = "Unknown";
pub const MISSING_PRICE: &str = "N/A";
pub const DEFAULT_NEIGHBOURHOOD: &str = "San Francisco";

/// One record of the listings dataset.
///
/// Every field is optional. A value of the wrong JSON type is treated the same
/// as a missing one, so a single odd record never fails the whole document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Listing {
    /// Position in the loaded dataset. The source has no declared key.
    #[serde(skip)]
    pub position: usize,

    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// HTML-bearing text.
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    /// Currency formatted, e.g. "$1,234.00".
    #[serde(deserialize_with = "lenient_string")]
    pub price: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub neighbourhood_cleansed: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub neighbourhood: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub picture_url: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub host_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub host_thumbnail_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub host_picture_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub host_since: Option<String>,
    /// "t" marks a superhost.
    #[serde(deserialize_with = "lenient_string")]
    pub host_is_superhost: Option<String>,

    /// 0–5 when present.
    #[serde(deserialize_with = "lenient_f64")]
    pub review_scores_rating: Option<f64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub number_of_reviews: Option<i64>,

    /// Python-style list literal: "['Wifi', 'Kitchen']".
    #[serde(deserialize_with = "lenient_string")]
    pub amenities: Option<String>,
}

impl Listing {
    pub fn display_name(&self) -> &str {
        non_empty(&self.name).unwrap_or(UNNAMED_LISTING)
    }

    pub fn display_host_name(&self) -> &str {
        non_empty(&self.host_name).unwrap_or(UNKNOWN_HOST)
    }

    pub fn display_price(&self) -> &str {
        non_empty(&self.price).unwrap_or(MISSING_PRICE)
    }

    /// Cleansed neighbourhood, then the raw one, then the city default.
    pub fn display_neighbourhood(&self) -> &str {
        non_empty(&self.neighbourhood_cleansed)
            .or_else(|| non_empty(&self.neighbourhood))
            .unwrap_or(DEFAULT_NEIGHBOURHOOD)
    }

    pub fn picture(&self) -> &str {
        non_empty(&self.picture_url).unwrap_or("")
    }

    pub fn host_photo(&self) -> &str {
        non_empty(&self.host_thumbnail_url)
            .or_else(|| non_empty(&self.host_picture_url))
            .unwrap_or("")
    }

    pub fn is_superhost(&self) -> bool {
        self.host_is_superhost.as_deref() == Some("t")
    }

    /// Rating as it should be shown. Zero counts as "no rating".
    pub fn shown_rating(&self) -> Option<f64> {
        self.review_scores_rating
            .filter(|r| r.is_finite() && *r != 0.0)
    }

    /// Rating used for ordering; absent is 0.
    pub fn rating_or_zero(&self) -> f64 {
        self.review_scores_rating
            .filter(|r| r.is_finite())
            .unwrap_or(0.0)
    }

    pub fn review_count(&self) -> i64 {
        self.number_of_reviews.unwrap_or(0)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
