use yew::prelude::*;

use crate::components::layout::Sidebar;

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Html,
}

/// Layout for `/admin/*`: a header with a drawer toggle.
#[function_component]
pub fn AdminLayout(props: &AdminLayoutProps) -> Html {
    let drawer_open = use_state(|| false);

    let toggle_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(!*drawer_open))
    };

    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| drawer_open.set(false))
    };

    html! {
        <div class="flex flex-col min-h-screen">
            <header class="bg-white shadow p-4 flex items-center">
                <button
                    onclick={toggle_drawer}
                    class="text-neutral-600 hover:text-neutral-800 text-2xl leading-none"
                    title="Open menu"
                    aria-label="Open menu"
                >
                    {"☰"}
                </button>
                <h1 class="ml-auto text-lg font-bold">{"Admin panel 📰🤖"}</h1>
            </header>

            <Sidebar is_open={*drawer_open} on_close={close_drawer} />

            <main class="flex-grow max-w-5xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {props.children.clone()}
            </main>
        </div>
    }
}
