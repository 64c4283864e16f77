// loader.rs
use crate::dataset::LoadError;
use crate::domain::Listing;
use reqwest::blocking::Client;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Records kept from the head of the dataset.
pub const DEFAULT_LIMIT: usize = 50;

const USER_AGENT: &str = concat!("listings_gallery/", env!("CARGO_PKG_VERSION"));

/// Where the static JSON document lives.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl FromStr for DatasetSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(DatasetSource::Url(s.to_string()))
        } else {
            Ok(DatasetSource::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Url(url) => f.write_str(url),
        }
    }
}

pub struct DatasetLoader {
    client: Client,
    limit: usize,
}

impl DatasetLoader {
    pub fn new(limit: usize) -> Result<Self, LoadError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        Ok(Self { client, limit })
    }

    /// One read of the source, decoded and truncated to the limit.
    pub fn load(&self, source: &DatasetSource) -> Result<Vec<Listing>, LoadError> {
        let text = match source {
            DatasetSource::File(path) => {
                std::fs::read_to_string(path).map_err(|e| LoadError::Io(e.to_string()))?
            }
            DatasetSource::Url(url) => self.fetch(url)?,
        };

        let listings = parse_dataset(&text, self.limit)?;
        tracing::info!(%source, count = listings.len(), "dataset loaded");
        Ok(listings)
    }

    fn fetch(&self, url: &str) -> Result<String, LoadError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        resp.text().map_err(|e| LoadError::Network(e.to_string()))
    }
}

/// Decodes the document and keeps the first `limit` records in source order.
///
/// The top level must be an array. A record that isn't an object is kept as
/// an all-absent listing so positions still match the source.
pub fn parse_dataset(text: &str, limit: usize) -> Result<Vec<Listing>, LoadError> {
    let data: Value =
        serde_json::from_str(text).map_err(|e| LoadError::JsonParse(e.to_string()))?;

    let records = match data {
        Value::Array(records) => records,
        other => {
            return Err(LoadError::UnexpectedShape(format!(
                "expected an array of listings, found {}",
                json_kind(&other)
            )))
        }
    };

    let listings = records
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(position, record)| {
            let mut listing = match record {
                Value::Object(_) => serde_json::from_value(record).unwrap_or_else(|e| {
                    tracing::debug!(position, error = %e, "record could not be read");
                    Listing::default()
                }),
                _ => {
                    tracing::debug!(position, "record is not an object");
                    Listing::default()
                }
            };
            listing.position = position;
            listing
        })
        .collect();

    Ok(listings)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
