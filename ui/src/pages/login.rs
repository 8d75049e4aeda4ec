use payloads::requests::LoginCredentials;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::FormField;
use crate::hooks::use_title;
use crate::session::{
    BrowserSession, LoginOutcome, PASSWORD_RECOVERY_UNAVAILABLE, check_login,
    complete_login,
};
use crate::state::State;

/// Demo login: credentials are compared in the browser against the bundled
/// `logins.json`.
#[function_component]
pub fn LoginPage() -> Html {
    use_title("Log in");

    let navigator = use_navigator();
    let (_, dispatch) = use_store::<State>();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error_message = use_state(|| None::<&'static str>);
    let notice = use_state(|| None::<&'static str>);
    let is_loading = use_state(|| false);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let credentials = LoginCredentials {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let logins = crate::get_api_client().fetch_logins().await;
                let outcome = check_login(logins, &credentials);

                match complete_login(&outcome, &BrowserSession) {
                    Some(route) => {
                        if let LoginOutcome::LoggedIn(email) = outcome {
                            tracing::info!("logged in as {email}");
                            dispatch.reduce_mut(|state| state.login(email));
                        }
                        if let Some(navigator) = &navigator {
                            navigator.push(&route);
                        }
                    }
                    None => error_message.set(outcome.error_message()),
                }

                is_loading.set(false);
            });
        })
    };

    let on_forgot_password = {
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            notice.set(Some(PASSWORD_RECOVERY_UNAVAILABLE));
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-6 bg-white rounded-lg shadow p-8">
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-neutral-900">{"Admin log in"}</h1>
                    <p class="mt-2 text-sm text-neutral-600">
                        {"Demo authentication only. Credentials are checked in your browser."}
                    </p>
                </div>

                <form onsubmit={on_submit} class="space-y-4">
                    <FormField
                        id="login-email"
                        label="Email"
                        input_type="email"
                        value={(*email).clone()}
                        on_change={on_email_change}
                        disabled={*is_loading}
                    />
                    <FormField
                        id="login-password"
                        label="Password"
                        input_type="password"
                        value={(*password).clone()}
                        on_change={on_password_change}
                        disabled={*is_loading}
                    />

                    if let Some(error) = *error_message {
                        <div class="p-3 rounded-md bg-red-50 border border-red-200">
                            <p class="text-sm text-red-700">{error}</p>
                        </div>
                    }

                    <button
                        type="submit"
                        disabled={*is_loading}
                        class="w-full py-2 px-4 rounded-md shadow-sm text-sm font-medium text-white
                               bg-neutral-900 hover:bg-neutral-800
                               disabled:opacity-50 disabled:cursor-not-allowed
                               transition-colors duration-200"
                    >
                        if *is_loading {
                            {"Checking..."}
                        } else {
                            {"Log in"}
                        }
                    </button>
                </form>

                <div class="text-center space-y-2">
                    <button
                        type="button"
                        onclick={on_forgot_password}
                        class="text-sm font-medium text-neutral-900 hover:text-neutral-700 underline"
                    >
                        {"Forgot your password?"}
                    </button>
                    if let Some(notice) = *notice {
                        <p class="text-sm text-neutral-600">{notice}</p>
                    }
                </div>
            </div>
        </div>
    }
}
