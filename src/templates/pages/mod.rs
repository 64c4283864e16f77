pub mod gallery;

pub use gallery::{gallery_page, static_gallery_page};
