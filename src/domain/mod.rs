pub mod card_view;
pub mod display;
pub mod filter;
pub mod format;
pub mod listing;

pub use card_view::{AmenitiesWidget, CardView};
pub use display::{DisplayState, LoadPhase};
pub use filter::SortKey;
pub use listing::Listing;
