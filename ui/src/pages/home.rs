use payloads::requests;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{FormField, MessageModal};
use crate::hooks::use_title;

pub const SUBSCRIBE_FAILED: &str =
    "We could not sign you up right now. Please try again later.";

/// Landing page with the newsletter sign-up form.
#[function_component]
pub fn HomePage() -> Html {
    use_title("");

    let email = use_state(String::new);
    let error_message = use_state(|| None::<AttrValue>);
    let is_loading = use_state(|| false);
    let show_confirmation = use_state(|| false);

    let on_email_change = {
        let email = email.clone();
        let error_message = error_message.clone();
        Callback::from(move |value: String| {
            email.set(value);
            error_message.set(None);
        })
    };

    let on_submit = {
        let email = email.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let show_confirmation = show_confirmation.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let details = match requests::Subscribe::new(&email) {
                Ok(details) => details,
                Err(message) => {
                    error_message.set(Some(message.into()));
                    return;
                }
            };

            let email = email.clone();
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let show_confirmation = show_confirmation.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client = crate::get_api_client();
                match api_client.subscribe(&details).await {
                    Ok(()) => {
                        email.set(String::new());
                        show_confirmation.set(true);
                    }
                    Err(e) => {
                        tracing::error!("subscribe failed: {e}");
                        error_message.set(Some(SUBSCRIBE_FAILED.into()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    let close_confirmation = {
        let show_confirmation = show_confirmation.clone();
        Callback::from(move |_: ()| show_confirmation.set(false))
    };

    html! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-4xl font-bold text-neutral-900 mb-4">
                {"Stay in the loop 📰🤖"}
            </h1>
            <p class="text-neutral-600 mb-8 max-w-xl">
                {"Get our latest news straight to your inbox. No spam, just the \
                  updates worth reading."}
            </p>

            <form onsubmit={on_submit} class="w-full max-w-md space-y-4 text-left">
                <FormField
                    id="subscribe-email"
                    label="Email"
                    input_type="email"
                    placeholder="you@example.com"
                    value={(*email).clone()}
                    on_change={on_email_change}
                    error={(*error_message).clone()}
                    disabled={*is_loading}
                />
                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full py-2 px-4 rounded-md shadow-sm text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors duration-200"
                >
                    if *is_loading {
                        {"Subscribing..."}
                    } else {
                        {"Subscribe"}
                    }
                </button>
            </form>

            <Link<Route> to={Route::News} classes="mt-8 text-sm font-medium text-neutral-700 underline hover:text-neutral-900">
                {"Read the latest news"}
            </Link<Route>>

            if *show_confirmation {
                <MessageModal
                    title="You're subscribed!"
                    message="Thanks for signing up. The next issue will land in your inbox."
                    on_close={close_confirmation}
                >
                    <p class="mt-4 text-sm">
                        <Link<Route> to={Route::News} classes="font-medium text-neutral-900 underline">
                            {"Browse past news"}
                        </Link<Route>>
                    </p>
                </MessageModal>
            }
        </div>
    }
}
