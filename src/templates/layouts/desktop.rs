use crate::templates::RenderMode;
use crate::theme::Theme;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// The search/sort form. The theme toggle submits it to `/theme` so the
/// current search survives the redirect.
pub const CONTROLS_FORM_ID: &str = "gallery-controls";

const STYLES: &str = r#"
:root { --bg: #f7f7f7; --fg: #222; --card: #fff; --muted: #666; --accent: #ff385c; --tag: #f0f0f0; }
[data-theme="dark"] { --bg: #121212; --fg: #eee; --card: #1e1e1e; --muted: #aaa; --tag: #2c2c2c; }
body { font-family: system-ui, sans-serif; margin: 0; background: var(--bg); color: var(--fg); }
header { display: flex; align-items: center; justify-content: space-between; padding: 1rem 2rem; }
.controls { display: flex; gap: 1rem; padding: 0 2rem 1rem; }
.controls input { flex: 1; padding: .6rem; font-size: 1rem; }
.listings-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem; padding: 0 2rem 2rem; }
.loading { grid-column: 1/-1; text-align: center; padding: 2rem; color: var(--muted); }
.listing-card { background: var(--card); border-radius: 12px; overflow: hidden; box-shadow: 0 2px 8px rgba(0,0,0,.1); }
.listing-image { width: 100%; height: 200px; object-fit: cover; }
.listing-content { padding: 1rem; }
.listing-header { display: flex; justify-content: space-between; gap: .5rem; }
.listing-name { margin: 0; font-size: 1.1rem; }
.listing-price { font-weight: 700; white-space: nowrap; }
.listing-price span { font-weight: 400; color: var(--muted); }
.stars { color: var(--accent); margin-right: .25rem; }
.review-count, .host-since, .neighborhood { color: var(--muted); font-size: .9rem; }
.listing-description { display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden; }
.host-info { display: flex; gap: .75rem; align-items: center; margin: 1rem 0; }
.host-photo { width: 48px; height: 48px; border-radius: 50%; object-fit: cover; }
.superhost-badge { margin-left: .5rem; font-size: .7rem; padding: .1rem .4rem; border-radius: 4px; background: var(--accent); color: #fff; }
.amenities-list { display: flex; flex-wrap: wrap; gap: .4rem; }
.amenity-tag { background: var(--tag); border-radius: 999px; padding: .2rem .6rem; font-size: .8rem; }
.amenities-toggle { margin-top: .5rem; background: none; border: none; color: var(--accent); cursor: pointer; padding: 0; }
.amenities-more > summary { list-style: none; margin-bottom: .4rem; }
.amenities-more > summary::-webkit-details-marker { display: none; }
.amenities-more[open] .when-closed, .amenities-more:not([open]) .when-open { display: none; }
#theme-toggle-btn { background: none; border: none; font-size: 1.5rem; cursor: pointer; }
"#;

pub fn desktop_layout(title: &str, theme: Theme, mode: RenderMode, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" data-theme=(theme.as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
                @if mode == RenderMode::Live {
                    script src=(HTMX_SRC) defer {}
                }
            }
            body {
                header {
                    h1 { (title) }
                    @if mode == RenderMode::Live {
                        button
                            type="submit"
                            id="theme-toggle-btn"
                            form=(CONTROLS_FORM_ID)
                            formaction="/theme"
                            name="next"
                            value=(theme.toggled().as_str())
                            aria-label=(theme.toggle_label())
                        {
                            (theme.icon())
                        }
                    }
                }
                (content)
            }
        }
    }
}
