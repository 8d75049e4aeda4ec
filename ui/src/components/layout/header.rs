use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{Route, State};

const LINK_CLASSES: &str =
    "text-sm font-medium text-neutral-600 hover:text-neutral-900";

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();

    html! {
        <header class="bg-white border-b border-neutral-200">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="text-xl font-semibold text-neutral-900">
                        {"📰🤖 Newsletter"}
                    </Link<Route>>
                    <nav class="flex items-center space-x-6">
                        <Link<Route> to={Route::News} classes={classes!(LINK_CLASSES)}>
                            {"News"}
                        </Link<Route>>
                        if state.is_admin() {
                            <Link<Route> to={Route::Admin} classes={classes!(LINK_CLASSES)}>
                                {"Admin"}
                            </Link<Route>>
                        } else {
                            <Link<Route> to={Route::Login} classes={classes!(LINK_CLASSES)}>
                                {"Log in"}
                            </Link<Route>>
                        }
                    </nav>
                </div>
            </div>
        </header>
    }
}
