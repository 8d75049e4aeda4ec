//! Renders a news body.
//!
//! The HTML comes from [`markdown_html::render_markdown`] and is inserted
//! without sanitization: raw HTML in a post is rendered as written, so post
//! bodies must come from trusted authors.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The markdown text to render.
    pub text: AttrValue,
    /// Additional CSS classes for the container.
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn MarkdownText(props: &Props) -> Html {
    let html_content = use_memo(props.text.clone(), |text| {
        markdown_html::render_markdown(text)
    });

    let base_classes = classes!(
        "prose",
        "prose-neutral",
        "prose-sm",
        "sm:prose-lg",
        "max-w-none",
        "text-justify",
        props.class.clone()
    );

    html! {
        <div class={base_classes}>
            { Html::from_html_unchecked(AttrValue::from((*html_content).clone())) }
        </div>
    }
}
