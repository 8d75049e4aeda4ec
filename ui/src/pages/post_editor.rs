use payloads::{
    NewsId,
    requests::{EditorMode, PostForm, PostFormErrors},
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{FormField, MessageModal};
use crate::hooks::use_title;
use crate::logs::log_failure;

/// How long the success message stays up before returning to the list.
const RETURN_DELAY_MS: u32 = 2000;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Post to edit; a new post is created when unset.
    #[prop_or_default]
    pub news_id: Option<NewsId>,
}

fn form_setter<F>(
    form: &UseStateHandle<PostForm>,
    errors: &UseStateHandle<PostFormErrors>,
    apply: F,
) -> Callback<String>
where
    F: Fn(&mut PostForm, &mut PostFormErrors, String) + 'static,
{
    let form = form.clone();
    let errors = errors.clone();
    Callback::from(move |value: String| {
        let mut next_form = (*form).clone();
        let mut next_errors = (*errors).clone();
        apply(&mut next_form, &mut next_errors, value);
        form.set(next_form);
        errors.set(next_errors);
    })
}

#[function_component]
pub fn PostEditorPage(props: &Props) -> Html {
    let mode = EditorMode::from_route_id(props.news_id.clone());
    use_title(if mode.is_editing() { "Edit post" } else { "New post" });

    let navigator = use_navigator();
    let form = use_state(PostForm::default);
    let errors = use_state(PostFormErrors::default);
    let load_error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let show_success = use_state(|| false);

    // Populate the form from the stored post when editing
    {
        let form = form.clone();
        let load_error = load_error.clone();
        use_effect_with(mode.clone(), move |mode| {
            if let EditorMode::Edit(news_id) = mode {
                let news_id = news_id.clone();
                yew::platform::spawn_local(async move {
                    match crate::get_api_client().get_news(&news_id).await {
                        Ok(post) => form.set(PostForm::from(post)),
                        Err(e) => {
                            log_failure("loading post", &e);
                            load_error.set(Some(e.to_string()));
                        }
                    }
                });
            }
        });
    }

    let on_title_change = form_setter(&form, &errors, |form, errors, value| {
        form.title = value;
        errors.title = None;
    });
    let on_body_change = form_setter(&form, &errors, |form, errors, value| {
        form.body = value;
        errors.body = None;
    });
    let on_subject_change = form_setter(&form, &errors, |form, errors, value| {
        form.subject = value;
        errors.subject = None;
    });
    let on_email_body_change =
        form_setter(&form, &errors, |form, errors, value| {
            form.email_body = value;
            errors.email_body = None;
        });

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.back();
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let is_loading = is_loading.clone();
        let show_success = show_success.clone();
        let mode = mode.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let submission = match form.validate(&mode) {
                Ok(submission) => submission,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };

            let is_loading = is_loading.clone();
            let show_success = show_success.clone();
            let navigator = navigator.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);

                let api_client = crate::get_api_client();
                match api_client.submit_post(&submission).await {
                    Ok(()) => {
                        show_success.set(true);
                        gloo_timers::future::TimeoutFuture::new(RETURN_DELAY_MS)
                            .await;
                        if let Some(navigator) = &navigator {
                            navigator.back();
                        }
                    }
                    Err(e) => log_failure("saving post", &e),
                }

                is_loading.set(false);
            });
        })
    };

    let close_success = {
        let show_success = show_success.clone();
        Callback::from(move |_: ()| show_success.set(false))
    };

    let (heading, success_message) = if mode.is_editing() {
        ("Edit post", "The post has been updated.")
    } else {
        ("New post", "The post is published and the newsletter is on its way.")
    };

    html! {
        <div class="max-w-3xl mx-auto bg-white rounded-lg shadow p-8">
            <h1 class="text-2xl font-bold text-neutral-900 mb-6">{heading}</h1>

            if let Some(error) = &*load_error {
                <div class="mb-4 p-3 rounded-md bg-red-50 border border-red-200">
                    <p class="text-sm text-red-700">
                        {format!("Error loading post: {error}")}
                    </p>
                </div>
            }

            <form onsubmit={on_submit} class="space-y-4">
                <FormField
                    id="post-title"
                    label="Title"
                    value={form.title.clone()}
                    on_change={on_title_change}
                    error={errors.title.clone().map(AttrValue::from)}
                    disabled={*is_loading}
                />
                <FormField
                    id="post-body"
                    label="Body (markdown)"
                    rows={12}
                    value={form.body.clone()}
                    on_change={on_body_change}
                    error={errors.body.clone().map(AttrValue::from)}
                    disabled={*is_loading}
                />

                if !mode.is_editing() {
                    <>
                    <FormField
                        id="post-subject"
                        label="Email subject"
                        value={form.subject.clone()}
                        on_change={on_subject_change}
                        error={errors.subject.clone().map(AttrValue::from)}
                        disabled={*is_loading}
                    />
                    <FormField
                        id="post-email-body"
                        label="Email body"
                        rows={6}
                        value={form.email_body.clone()}
                        on_change={on_email_body_change}
                        error={errors.email_body.clone().map(AttrValue::from)}
                        disabled={*is_loading}
                    />
                    </>
                }

                <div class="flex justify-end gap-3 pt-2">
                    <button
                        type="button"
                        onclick={on_cancel}
                        disabled={*is_loading}
                        class="px-4 py-2 text-sm font-medium text-neutral-700 bg-white
                               border border-neutral-300 rounded-md hover:bg-neutral-50
                               disabled:opacity-50 disabled:cursor-not-allowed
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
                            {"Saving..."}
                        } else if mode.is_editing() {
                            {"Save changes"}
                        } else {
                            {"Publish"}
                        }
                    </button>
                </div>
            </form>

            if *show_success {
                <MessageModal
                    title="Saved"
                    message={success_message}
                    on_close={close_success}
                />
            }
        </div>
    }
}
