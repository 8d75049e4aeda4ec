use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct MenuItem {
    pub label: AttrValue,
    pub on_click: Callback<()>,
    pub danger: bool,
}

/// Kebab menu whose open state belongs to the parent, so a list can keep at
/// most one menu open.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub items: Vec<MenuItem>,
    pub is_open: bool,
    pub on_toggle: Callback<()>,
    /// Called for clicks outside the open menu.
    pub on_close: Callback<()>,
}

#[function_component]
pub fn OverflowMenu(props: &Props) -> Html {
    // Don't render if no items
    if props.items.is_empty() {
        return html! {};
    }

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle.emit(());
        })
    };

    let on_backdrop_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="relative">
            <button
                onclick={on_toggle}
                class="p-2 rounded hover:bg-neutral-100 text-neutral-600"
                aria-label="More options"
            >
                // Vertical ellipsis (kebab menu)
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="h-5 w-5"
                    viewBox="0 0 20 20"
                    fill="currentColor"
                >
                    <path d="M10 6a2 2 0 110-4 2 2 0 010 4zM10 12a2 2 0 110-4 2 2 0 010 4zM10 18a2 2 0 110-4 2 2 0 010 4z" />
                </svg>
            </button>

            if props.is_open {
                <>
                // Backdrop to catch clicks outside menu
                <div onclick={on_backdrop_click} class="fixed inset-0 z-40" />

                <div class="absolute right-0 mt-1 py-1 w-40 bg-white rounded-md
                            shadow-lg border border-neutral-200 z-50">
                    {props.items.iter().map(|item| {
                        let on_click = item.on_click.clone();
                        let on_close = props.on_close.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            on_close.emit(());
                            on_click.emit(());
                        });

                        let text_class = if item.danger {
                            "text-red-600"
                        } else {
                            "text-neutral-700"
                        };

                        html! {
                            <button
                                {onclick}
                                class={classes!(
                                    "w-full", "px-4", "py-2", "text-sm",
                                    "text-left", "hover:bg-neutral-100",
                                    text_class
                                )}
                            >
                                {&item.label}
                            </button>
                        }
                    }).collect::<Html>()}
                </div>
                </>
            }
        </div>
    }
}
