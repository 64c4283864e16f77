use crate::dataset::{parse_dataset, DEFAULT_LIMIT};
use crate::gallery::Gallery;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{json, Value};
use std::io::{Read, Write};
use std::net::TcpListener;

pub const EIGHT_AMENITIES: &str =
    "['Wifi', 'Kitchen', 'Heating', 'Washer', 'Dryer', 'Essentials', 'Hair dryer', 'Iron']";

fn price_text(dollars: usize) -> String {
    if dollars >= 1000 {
        format!("${},{:03}.00", dollars / 1000, dollars % 1000)
    } else {
        format!("${dollars}.00")
    }
}

/// Sixty varied records; only the first fifty are ever loaded.
pub fn sample_records() -> Vec<Value> {
    (0..60usize)
        .map(|i| {
            let name = if i % 7 == 0 {
                format!("Golden Gate Park Retreat {i}")
            } else if i % 5 == 0 {
                format!("Cozy Studio {i}")
            } else {
                format!("Sunny Flat {i}")
            };
            let neighbourhood = match i % 6 {
                1 => json!("Parkside"),
                4 => Value::Null,
                _ => json!("Mission"),
            };
            let host = if i % 9 == 2 { "Parker" } else { "Alex" };
            let dollars = if i % 11 == 0 { 1200 + i } else { 50 + (i * 37) % 400 };
            let rating = if i % 8 == 3 {
                Value::Null
            } else {
                json!(3.0 + (i % 20) as f64 * 0.1)
            };
            let superhost = if i % 2 == 0 { "t" } else { "f" };
            let amenities = match i {
                0 => EIGHT_AMENITIES,
                1 => "not json",
                _ => "['Wifi', 'Kitchen']",
            };

            json!({
                "name": name,
                "description": format!("<p>Lovely <b>place</b> number {i}</p>"),
                "price": price_text(dollars),
                "neighbourhood_cleansed": neighbourhood,
                "picture_url": format!("https://img.example/{i}.jpg"),
                "host_name": host,
                "host_thumbnail_url": format!("https://img.example/host-{i}.jpg"),
                "host_since": "2015-03-14",
                "host_is_superhost": superhost,
                "review_scores_rating": rating,
                "number_of_reviews": i * 3,
                "amenities": amenities,
            })
        })
        .collect()
}

/// A gallery that finished loading the sample dataset.
pub fn ready_gallery() -> Gallery {
    let text = serde_json::to_string(&sample_records()).unwrap();
    let listings = parse_dataset(&text, DEFAULT_LIMIT).unwrap();
    Gallery::with_listings(listings)
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// Answers exactly one HTTP request on a loopback port with `status` and
/// `body`, then closes. Returns the URL to fetch.
pub fn serve_once(status: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let reply = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            let _ = stream.write_all(reply.as_bytes());
        }
    });

    format!("http://{addr}/listings.json")
}
