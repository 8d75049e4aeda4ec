use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Not found");

    html! {
        <div class="text-center space-y-4">
            <h1 class="text-4xl font-bold text-neutral-900">{"404"}</h1>
            <p class="text-neutral-600">{"Page not found"}</p>
            <Link<Route> to={Route::Home} classes="text-sm font-medium underline text-neutral-900">
                {"Back to the start page"}
            </Link<Route>>
        </div>
    }
}
