use yew::prelude::*;

const SITE_NAME: &str = "Newsletter";

/// Sets the document title to "{title} | Newsletter". No cleanup on unmount
/// since each page sets its own title.
#[hook]
pub fn use_title(title: &str) {
    let title = if title.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{title} | {SITE_NAME}")
    };
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
