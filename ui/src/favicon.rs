//! The tab icon alternates between two emoji while the app is open.

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;

pub const FAVICON_ID: &str = "dynamic-favicon";
pub const FRAMES: [&str; 2] = ["📰", "🤖"];
const FRAME_MILLIS: u32 = 1_000;

/// SVG data URI drawing one emoji, for use as a favicon `href`.
pub fn frame_href(frame: usize) -> String {
    let emoji = FRAMES[frame % FRAMES.len()];
    format!(
        "data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 \
         viewBox=%220 0 100 100%22><text y=%22.9em%22 \
         font-size=%2290%22>{emoji}</text></svg>"
    )
}

fn set_favicon(href: &str) {
    let link = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(FAVICON_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlLinkElement>().ok());
    match link {
        Some(link) => link.set_href(href),
        None => tracing::debug!("no #{FAVICON_ID} link element"),
    }
}

/// Start swapping the favicon every second. Dropping the returned interval
/// stops the animation.
pub fn start_animation() -> Interval {
    let mut frame = 0usize;
    Interval::new(FRAME_MILLIS, move || {
        set_favicon(&frame_href(frame));
        frame = (frame + 1) % FRAMES.len();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_alternate() {
        assert!(frame_href(0).contains("📰"));
        assert!(frame_href(1).contains("🤖"));
        assert_eq!(frame_href(2), frame_href(0));
    }

    #[test]
    fn href_is_an_svg_data_uri() {
        let href = frame_href(0);
        assert!(href.starts_with("data:image/svg+xml,<svg "));
        assert!(href.ends_with("</text></svg>"));
    }
}
