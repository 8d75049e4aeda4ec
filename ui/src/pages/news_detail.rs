use payloads::{Feedback, NewsId};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::MarkdownText;
use crate::hooks::{use_feedbacks, use_news_post, use_title};
use crate::state::State;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub news_id: NewsId,
}

#[function_component]
pub fn NewsDetailPage(props: &Props) -> Html {
    let post = use_news_post(props.news_id.clone());
    let feedbacks = use_feedbacks(props.news_id.clone());
    let (state, _) = use_store::<State>();
    let show_feedback = use_state(|| false);

    let title = post
        .data
        .as_ref()
        .map(|post| post.title.clone())
        .unwrap_or_else(|| "News".to_string());
    use_title(&title);

    let toggle_feedback = {
        let show_feedback = show_feedback.clone();
        Callback::from(move |_: MouseEvent| show_feedback.set(!*show_feedback))
    };

    let news_id = props.news_id.clone();
    let is_admin = state.is_admin();

    html! {
        <div class="space-y-8">
            <Link<Route> to={Route::News} classes="text-sm text-neutral-600 hover:text-neutral-900">
                {"← All news"}
            </Link<Route>>

            {post.render("news post", |post| html! {
                <article class="bg-white rounded-lg shadow p-8">
                    <h1 class="text-3xl font-bold text-neutral-900 mb-6 break-words">
                        {&post.title}
                    </h1>
                    <MarkdownText text={post.body.clone()} />
                </article>
            })}

            <section class="space-y-4">
                <div class="flex items-center justify-between">
                    <button
                        onclick={toggle_feedback}
                        class="text-sm font-medium text-neutral-900 underline hover:text-neutral-700"
                    >
                        if *show_feedback {
                            {"Hide feedback"}
                        } else {
                            {"Show feedback"}
                        }
                    </button>
                    if !is_admin {
                        <Link<Route>
                            to={Route::Feedback { id: news_id.clone() }}
                            classes="px-4 py-2 text-sm font-medium text-white bg-neutral-900
                                     hover:bg-neutral-800 rounded-md transition-colors"
                        >
                            {"Leave feedback"}
                        </Link<Route>>
                    }
                </div>

                if *show_feedback {
                    {feedbacks.render("feedback", |feedbacks| feedback_list(feedbacks))}
                }
            </section>
        </div>
    }
}

fn feedback_list(feedbacks: &[Feedback]) -> Html {
    if feedbacks.is_empty() {
        return html! {
            <p class="text-sm text-neutral-600">{"No feedback yet."}</p>
        };
    }

    html! {
        <ul class="space-y-3">
            {feedbacks.iter().map(|feedback| html! {
                <li key={feedback.id.to_string()} class="bg-white rounded-lg shadow p-4">
                    <div class="flex justify-between text-sm">
                        <span class="font-medium text-neutral-900">{&feedback.email}</span>
                        <span class="text-yellow-500" aria-label={format!("{} stars", feedback.stars)}>
                            {("★".repeat(feedback.stars.into()))}
                        </span>
                    </div>
                    <p class="mt-2 text-sm text-neutral-700 whitespace-pre-wrap">
                        {&feedback.feedback}
                    </p>
                </li>
            }).collect::<Html>()}
        </ul>
    }
}
