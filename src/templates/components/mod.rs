pub mod amenities;
pub mod card;
pub mod error;
pub mod listings;

pub use amenities::{amenities_details, amenities_section};
pub use card::listing_card;
pub use error::error_page;
pub use listings::{listings_container, page_url};
