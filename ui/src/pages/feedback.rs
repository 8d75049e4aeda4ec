use payloads::{
    NewsId,
    requests::{FeedbackForm, FeedbackFormErrors},
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{FormField, MessageModal, StarRating};
use crate::hooks::use_title;
use crate::logs::log_failure;
use crate::utils::query_param;

/// Where the feedback page goes on cancel or after a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackExit {
    /// Return to the page the reader came from.
    Back,
    NewsList,
}

/// Readers arriving from a newsletter link (email in the query string)
/// have no history inside the app, so they go to the news list instead.
pub fn feedback_exit(prefilled_email: bool) -> FeedbackExit {
    if prefilled_email {
        FeedbackExit::NewsList
    } else {
        FeedbackExit::Back
    }
}

fn email_from_location() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    query_param(&search, "email").filter(|email| !email.is_empty())
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub news_id: NewsId,
}

#[function_component]
pub fn FeedbackPage(props: &Props) -> Html {
    use_title("Feedback");

    let navigator = use_navigator();
    let prefilled = use_memo((), |_| email_from_location());

    let form = {
        let prefilled = prefilled.clone();
        use_state(move || FeedbackForm {
            email: (*prefilled).clone().unwrap_or_default(),
            ..Default::default()
        })
    };
    let errors = use_state(FeedbackFormErrors::default);
    let is_loading = use_state(|| false);
    let show_success = use_state(|| false);

    let leave = {
        let exit = feedback_exit(prefilled.is_some());
        Callback::from(move |_: ()| {
            let Some(navigator) = &navigator else {
                return;
            };
            match exit {
                FeedbackExit::Back => navigator.back(),
                FeedbackExit::NewsList => navigator.push(&Route::News),
            }
        })
    };

    let on_email_change = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            form.set(FeedbackForm {
                email: value,
                ..(*form).clone()
            });
            errors.set(FeedbackFormErrors {
                email: None,
                ..(*errors).clone()
            });
        })
    };

    let on_feedback_change = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            form.set(FeedbackForm {
                feedback: value,
                ..(*form).clone()
            });
            errors.set(FeedbackFormErrors {
                feedback: None,
                ..(*errors).clone()
            });
        })
    };

    let on_stars_change = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |stars: u8| {
            form.set(FeedbackForm {
                stars,
                ..(*form).clone()
            });
            errors.set(FeedbackFormErrors {
                stars: None,
                ..(*errors).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let is_loading = is_loading.clone();
        let show_success = show_success.clone();
        let news_id = props.news_id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let details = match form.validate() {
                Ok(details) => details,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };

            let is_loading = is_loading.clone();
            let show_success = show_success.clone();
            let news_id = news_id.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);

                let api_client = crate::get_api_client();
                match api_client.submit_feedback(&news_id, &details).await {
                    Ok(()) => show_success.set(true),
                    Err(e) => log_failure("submitting feedback", &e),
                }

                is_loading.set(false);
            });
        })
    };

    let on_cancel = leave.reform(|_: MouseEvent| ());
    let on_success_close = leave.clone();

    html! {
        <div class="max-w-xl mx-auto bg-white rounded-lg shadow p-8">
            <h1 class="text-2xl font-bold text-neutral-900 mb-6">{"Leave feedback"}</h1>

            <form onsubmit={on_submit} class="space-y-4">
                <FormField
                    id="feedback-email"
                    label="Email"
                    input_type="email"
                    value={form.email.clone()}
                    on_change={on_email_change}
                    error={errors.email.map(AttrValue::from)}
                    readonly={prefilled.is_some()}
                    disabled={*is_loading}
                />
                <FormField
                    id="feedback-text"
                    label="Feedback"
                    rows={5}
                    value={form.feedback.clone()}
                    on_change={on_feedback_change}
                    error={errors.feedback.map(AttrValue::from)}
                    disabled={*is_loading}
                />

                <div>
                    <span class="block text-sm font-medium text-neutral-700 mb-2">
                        {"Rating"}
                    </span>
                    <StarRating
                        value={form.stars}
                        on_change={on_stars_change}
                        disabled={*is_loading}
                    />
                    if let Some(error) = errors.stars {
                        <p class="mt-1 text-sm text-red-600">{error}</p>
                    }
                </div>

                <div class="flex justify-end gap-3 pt-2">
                    <button
                        type="button"
                        onclick={on_cancel}
                        class="px-4 py-2 text-sm font-medium text-neutral-700 bg-white
                               border border-neutral-300 rounded-md hover:bg-neutral-50
                               transition-colors"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={*is_loading}
                        class="px-4 py-2 text-sm font-medium text-white bg-neutral-900
                               hover:bg-neutral-800 rounded-md
                               disabled:opacity-50 disabled:cursor-not-allowed
                               transition-colors"
                    >
                        if *is_loading {
                            {"Sending..."}
                        } else {
                            {"Send feedback"}
                        }
                    </button>
                </div>
            </form>

            if *show_success {
                <MessageModal
                    title="Thank you!"
                    message="Your feedback has been sent."
                    on_close={on_success_close}
                >
                    <p class="mt-4 text-sm">
                        <Link<Route> to={Route::News} classes="font-medium text-neutral-900 underline">
                            {"Read the latest news"}
                        </Link<Route>>
                    </p>
                </MessageModal>
            }
        </div>
    }
}
