use crate::domain::format::parse_amenities;
use crate::domain::{AmenitiesWidget, SortKey};
use crate::errors::ServerError;
use crate::gallery::Gallery;
use crate::responses::{html_response, redirect_response, text_response, ResultResp};
use crate::templates::{self, RenderMode};
use crate::theme::Theme;
use astra::Request;
use std::collections::HashMap;

pub fn handle(req: Request, gallery: &Gallery) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    tracing::debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => {
            let (query, sort) = search_params(&params);
            let view = gallery.view(query, sort);
            html_response(templates::gallery_page(&view, request_theme(&req)))
        }

        ("GET", "/listings") => {
            let (query, sort) = search_params(&params);
            let view = gallery.view(query, sort);
            html_response(templates::listings_container(&view, RenderMode::Live))
        }

        ("GET", "/theme") => {
            let next = match params.get("next") {
                Some(value) => Theme::parse(value)
                    .ok_or_else(|| ServerError::BadRequest(format!("Unknown theme: {value}")))?,
                None => request_theme(&req).toggled(),
            };
            let (query, sort) = search_params(&params);
            redirect_response(&templates::page_url(query, sort), Some(next.set_cookie()))
        }

        ("GET", "/health") => text_response("ok"),

        ("GET", _) => match amenities_index(path) {
            Some(index) => amenities_fragment(gallery, index, &params),
            None => Err(ServerError::NotFound),
        },

        _ => Err(ServerError::NotFound),
    }
}

/// `/listings/{index}/amenities` -> the raw index segment.
fn amenities_index(path: &str) -> Option<&str> {
    path.strip_prefix("/listings/")?
        .strip_suffix("/amenities")
        .filter(|segment| !segment.is_empty() && !segment.contains('/'))
}

fn amenities_fragment(
    gallery: &Gallery,
    index: &str,
    params: &HashMap<String, String>,
) -> ResultResp {
    let index: usize = index
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("Invalid listing index: {index}")))?;

    let listing = gallery.listing(index).ok_or(ServerError::NotFound)?;
    let expanded = params.get("expanded").map(String::as_str) == Some("true");

    let widget = AmenitiesWidget::new(parse_amenities(listing.amenities.as_deref()))
        .with_expanded(expanded);

    html_response(templates::amenities_section(index, &widget))
}

fn search_params(params: &HashMap<String, String>) -> (&str, SortKey) {
    let query = params.get("q").map(String::as_str).unwrap_or("");
    let sort = params
        .get("sort")
        .map(|s| SortKey::parse(s))
        .unwrap_or_default();
    (query, sort)
}

fn request_theme(req: &Request) -> Theme {
    let cookie = req
        .headers()
        .get("Cookie")
        .and_then(|value| value.to_str().ok());
    Theme::from_cookie_header(cookie)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
