use crate::domain::AmenitiesWidget;
use maud::{html, Markup};

fn amenities_section_id(index: usize) -> String {
    format!("amenities-{index}")
}

/// One card's amenities block. The toggle swaps just this block for the same
/// list in the opposite state, so each card keeps its own state.
pub fn amenities_section(index: usize, widget: &AmenitiesWidget) -> Markup {
    let section_id = amenities_section_id(index);
    let expanded = if widget.is_expanded() { "true" } else { "false" };

    let mut next = widget.clone();
    next.toggle();

    html! {
        div class="amenities-section" id=(section_id) {
            h4 { "Amenities" }
            div class="amenities-list" data-expanded=(expanded) {
                @for amenity in widget.visible() {
                    span class="amenity-tag" { (amenity) }
                }
            }
            @if let Some(label) = widget.toggle_label() {
                button
                    type="button"
                    class="amenities-toggle"
                    hx-get=(format!("/listings/{index}/amenities?expanded={}", next.is_expanded()))
                    hx-target=(format!("#{section_id}"))
                    hx-swap="outerHTML"
                {
                    (label)
                }
            }
        }
    }
}

/// Self-contained variant for static pages: the overflow tags sit in a
/// `<details>` element, so expanding needs neither script nor server.
pub fn amenities_details(widget: &AmenitiesWidget) -> Markup {
    let mut opened = widget.clone();
    opened.toggle();

    html! {
        div class="amenities-section" {
            h4 { "Amenities" }
            div class="amenities-list" {
                @for amenity in widget.visible() {
                    span class="amenity-tag" { (amenity) }
                }
            }
            @if let (Some(closed_label), Some(open_label)) =
                (widget.toggle_label(), opened.toggle_label())
            {
                details class="amenities-more" {
                    summary class="amenities-toggle" {
                        span class="when-closed" { (closed_label) }
                        span class="when-open" { (open_label) }
                    }
                    div class="amenities-list" {
                        @for amenity in widget.overflow() {
                            span class="amenity-tag" { (amenity) }
                        }
                    }
                }
            }
        }
    }
}
