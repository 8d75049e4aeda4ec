use yew::prelude::*;

use crate::components::layout::Header;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Html,
}

/// Layout for the public pages.
#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    html! {
        <>
            <Header />
            <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {props.children.clone()}
            </main>
        </>
    }
}
