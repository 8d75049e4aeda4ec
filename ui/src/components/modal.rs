use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A modal overlay that closes on backdrop clicks.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Modal content (passed as children)
    pub children: Html,
    /// Called when user clicks backdrop or closes the modal
    pub on_close: Callback<()>,
    /// Maximum width class (default: "max-w-md")
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
    /// Whether to allow closing by clicking backdrop (default: true)
    #[prop_or(true)]
    pub close_on_backdrop: bool,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        let close_on_backdrop = props.close_on_backdrop;

        Callback::from(move |e: MouseEvent| {
            if !close_on_backdrop {
                return;
            }

            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref.clone()}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex
                   items-center justify-center p-4"
        >
            <div
                class={format!(
                    "bg-white rounded-lg shadow-xl w-full p-6 {}",
                    props.max_width
                )}
            >
                {props.children.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MessageModalProps {
    pub title: AttrValue,
    pub message: AttrValue,
    /// Extra content below the message, such as a link.
    #[prop_or_default]
    pub children: Html,
    #[prop_or_else(|| AttrValue::from("Close"))]
    pub close_text: AttrValue,
    pub on_close: Callback<()>,
}

/// Confirmation shown after a successful submit.
#[function_component]
pub fn MessageModal(props: &MessageModalProps) -> Html {
    let on_close_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal on_close={props.on_close.clone()}>
            <h3 class="text-lg font-semibold text-neutral-900 mb-2">
                {&props.title}
            </h3>
            <p class="text-sm text-neutral-600">{&props.message}</p>
            {props.children.clone()}
            <div class="flex justify-end mt-6">
                <button
                    onclick={on_close_click}
                    class="px-4 py-2 text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800 rounded-md
                           transition-colors"
                >
                    {&props.close_text}
                </button>
            </div>
        </Modal>
    }
}
