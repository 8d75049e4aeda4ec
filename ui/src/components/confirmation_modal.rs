use yew::prelude::*;

use crate::components::Modal;

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    /// Modal title (e.g., "Delete post")
    pub title: AttrValue,
    /// Warning message explaining consequences
    pub message: AttrValue,
    /// Confirm button text (e.g., "Delete")
    pub confirm_text: AttrValue,
    /// Called when user confirms the action
    pub on_confirm: Callback<()>,
    /// Called when user cancels or clicks backdrop
    pub on_close: Callback<()>,
    /// Whether a delete/confirm operation is in progress
    #[prop_or_default]
    pub is_loading: bool,
}

#[function_component]
pub fn ConfirmationModal(props: &ConfirmationModalProps) -> Html {
    let on_confirm_click = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal on_close={props.on_close.clone()}>
            <h3 class="text-lg font-semibold text-neutral-900 mb-4">
                {&props.title}
            </h3>

            <p class="text-sm text-neutral-600">
                {&props.message}{" "}
                <span class="font-semibold text-red-600">
                    {"This action cannot be undone."}
                </span>
            </p>

            <div class="flex justify-end gap-3 mt-6">
                <button
                    onclick={on_cancel_click}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-neutral-700
                           bg-white border border-neutral-300
                           rounded-md hover:bg-neutral-50
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_confirm_click}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-white
                           bg-red-600 hover:bg-red-700
                           rounded-md disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                >
                    {if props.is_loading { "Deleting..." } else { props.confirm_text.as_str() }}
                </button>
            </div>
        </Modal>
    }
}
