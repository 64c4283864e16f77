pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{amenities_section, listings_container, page_url};
pub use layouts::desktop::desktop_layout;
pub use pages::{gallery_page, static_gallery_page};

/// Whether markup may call back into the server. `Static` output is a
/// standalone file: no htmx requests, no routes to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Live,
    Static,
}
