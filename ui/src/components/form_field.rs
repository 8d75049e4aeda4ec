use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_else(|| AttrValue::from("text"))]
    pub input_type: AttrValue,
    /// Render a `<textarea>` with this many rows instead of an `<input>`.
    #[prop_or_default]
    pub rows: Option<u32>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub readonly: bool,
    #[prop_or_default]
    pub disabled: bool,
}

/// Labelled input with an inline error below it.
#[function_component]
pub fn FormField(props: &Props) -> Html {
    let border = if props.error.is_some() {
        "border-red-400 focus:ring-red-500"
    } else {
        "border-neutral-300 focus:ring-neutral-500"
    };
    let class = classes!(
        "w-full", "px-3", "py-2", "border", "rounded-md", "shadow-sm",
        "bg-white", "text-neutral-900", "focus:outline-none", "focus:ring-2",
        "read-only:bg-neutral-100", "disabled:opacity-50", border
    );

    let field = match props.rows {
        Some(rows) => {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                on_change.emit(input.value());
            });
            html! {
                <textarea
                    id={props.id.clone()}
                    rows={rows.to_string()}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    readonly={props.readonly}
                    disabled={props.disabled}
                    {oninput}
                    {class}
                />
            }
        }
        None => {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit(input.value());
            });
            html! {
                <input
                    id={props.id.clone()}
                    type={props.input_type.clone()}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    readonly={props.readonly}
                    disabled={props.disabled}
                    {oninput}
                    {class}
                />
            }
        }
    };

    html! {
        <div>
            <label for={props.id.clone()} class="block text-sm font-medium text-neutral-700 mb-2">
                {&props.label}
            </label>
            {field}
            if let Some(error) = &props.error {
                <p class="mt-1 text-sm text-red-600">{error}</p>
            }
        </div>
    }
}
