use payloads::{ClientError, NewsId, NewsSummary};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{ConfirmationModal, MenuItem, OverflowMenu};
use crate::hooks::{use_news_list, use_push_route, use_title};
use crate::logs::log_failure;
use crate::utils::truncate_title;

/// Rows, the one open row menu and the pending delete of the admin list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostListState {
    pub posts: Vec<NewsSummary>,
    pub open_menu: Option<NewsId>,
    pub confirm_delete: Option<NewsId>,
    pub deleting: Option<NewsId>,
}

pub enum PostListAction {
    Loaded(Vec<NewsSummary>),
    ToggleMenu(NewsId),
    CloseMenu,
    AskDelete(NewsId),
    CancelDelete,
    DeleteStarted(NewsId),
    DeleteFinished {
        news_id: NewsId,
        outcome: Result<(), ClientError>,
    },
}

impl Reducible for PostListState {
    type Action = PostListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PostListAction::Loaded(posts) => next.posts = posts,
            PostListAction::ToggleMenu(news_id) => {
                next.open_menu = if next.open_menu.as_ref() == Some(&news_id) {
                    None
                } else {
                    Some(news_id)
                };
            }
            PostListAction::CloseMenu => next.open_menu = None,
            PostListAction::AskDelete(news_id) => {
                next.open_menu = None;
                next.confirm_delete = Some(news_id);
            }
            PostListAction::CancelDelete => next.confirm_delete = None,
            PostListAction::DeleteStarted(news_id) => {
                next.deleting = Some(news_id);
            }
            PostListAction::DeleteFinished { news_id, outcome } => {
                // the row goes away even when the API call failed
                if let Err(e) = &outcome {
                    log_failure("deleting post", e);
                }
                next.posts.retain(|post| post.id != news_id);
                next.confirm_delete = None;
                next.deleting = None;
            }
        }
        Rc::new(next)
    }
}

#[function_component]
pub fn AdminPostsPage() -> Html {
    use_title("Posts");

    let news = use_news_list();
    let list = use_reducer(PostListState::default);
    let push_route = use_push_route();

    {
        let list = list.clone();
        use_effect_with(news.data.clone(), move |data| {
            if let Some(posts) = data.as_ref() {
                list.dispatch(PostListAction::Loaded(posts.clone()));
            }
        });
    }

    let on_confirm_delete = {
        let list = list.clone();
        Callback::from(move |_: ()| {
            let Some(news_id) = list.confirm_delete.clone() else {
                return;
            };
            list.dispatch(PostListAction::DeleteStarted(news_id.clone()));

            let list = list.clone();
            yew::platform::spawn_local(async move {
                let outcome = crate::get_api_client().delete_news(&news_id).await;
                list.dispatch(PostListAction::DeleteFinished { news_id, outcome });
            });
        })
    };

    let on_cancel_delete = {
        let list = list.clone();
        Callback::from(move |_: ()| list.dispatch(PostListAction::CancelDelete))
    };

    let on_close_menu = {
        let list = list.clone();
        Callback::from(move |_: ()| list.dispatch(PostListAction::CloseMenu))
    };

    let on_new_post = push_route.reform(|_: MouseEvent| Route::NewPost);

    let rows = list
        .posts
        .iter()
        .map(|post| {
            let on_toggle = {
                let list = list.clone();
                let news_id = post.id.clone();
                Callback::from(move |_: ()| {
                    list.dispatch(PostListAction::ToggleMenu(news_id.clone()))
                })
            };

            let items = vec![
                MenuItem {
                    label: "Edit".into(),
                    on_click: {
                        let id = post.id.clone();
                        push_route.reform(move |_: ()| Route::EditPost { id: id.clone() })
                    },
                    danger: false,
                },
                MenuItem {
                    label: "Delete".into(),
                    on_click: {
                        let list = list.clone();
                        let news_id = post.id.clone();
                        Callback::from(move |_: ()| {
                            list.dispatch(PostListAction::AskDelete(news_id.clone()))
                        })
                    },
                    danger: true,
                },
            ];

            html! {
                <li key={post.id.to_string()} class="flex items-center justify-between px-6 py-3">
                    <Link<Route>
                        to={Route::NewsDetail { id: post.id.clone() }}
                        classes="flex-1 min-w-0 text-neutral-900 hover:underline break-words"
                    >
                        {truncate_title(&post.title)}
                    </Link<Route>>
                    <OverflowMenu
                        {items}
                        is_open={list.open_menu.as_ref() == Some(&post.id)}
                        {on_toggle}
                        on_close={on_close_menu.clone()}
                    />
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-neutral-900">{"Posts"}</h1>

            {news.render("posts", |_| {
                if list.posts.is_empty() {
                    html! { <p class="text-neutral-600">{"No posts yet."}</p> }
                } else {
                    html! {
                        <ul class="divide-y divide-neutral-200 bg-white rounded-lg shadow">
                            {rows.clone()}
                        </ul>
                    }
                }
            })}

            <button
                onclick={on_new_post}
                aria-label="New post"
                class="fixed bottom-8 right-8 w-14 h-14 rounded-full shadow-lg text-3xl
                       text-white bg-neutral-900 hover:bg-neutral-800 transition-colors"
            >
                {"+"}
            </button>

            if list.confirm_delete.is_some() {
                <ConfirmationModal
                    title="Delete post"
                    message="Are you sure you want to delete this post?"
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete}
                    on_close={on_cancel_delete}
                    is_loading={list.deleting.is_some()}
                />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str) -> NewsSummary {
        NewsSummary {
            id: NewsId::from(id),
            title: format!("Post {id}"),
        }
    }

    fn loaded() -> Rc<PostListState> {
        Rc::new(PostListState::default()).reduce(PostListAction::Loaded(vec![
            summary("1"),
            summary("2"),
        ]))
    }

    #[test]
    fn only_one_menu_is_open() {
        let state = loaded()
            .reduce(PostListAction::ToggleMenu(NewsId::from("1")))
            .reduce(PostListAction::ToggleMenu(NewsId::from("2")));
        assert_eq!(state.open_menu, Some(NewsId::from("2")));
    }

    #[test]
    fn toggling_an_open_menu_closes_it() {
        let state = loaded()
            .reduce(PostListAction::ToggleMenu(NewsId::from("1")))
            .reduce(PostListAction::ToggleMenu(NewsId::from("1")));
        assert_eq!(state.open_menu, None);
    }

    #[test]
    fn asking_to_delete_closes_the_menu() {
        let state = loaded()
            .reduce(PostListAction::ToggleMenu(NewsId::from("1")))
            .reduce(PostListAction::AskDelete(NewsId::from("1")));
        assert_eq!(state.open_menu, None);
        assert_eq!(state.confirm_delete, Some(NewsId::from("1")));
    }

    #[test]
    fn failed_delete_still_removes_the_row() {
        let state = loaded()
            .reduce(PostListAction::AskDelete(NewsId::from("1")))
            .reduce(PostListAction::DeleteStarted(NewsId::from("1")))
            .reduce(PostListAction::DeleteFinished {
                news_id: NewsId::from("1"),
                outcome: Err(ClientError::APIError(
                    reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    "boom".into(),
                )),
            });
        assert_eq!(state.posts, vec![summary("2")]);
        assert_eq!(state.confirm_delete, None);
        assert_eq!(state.deleting, None);
    }

    #[test]
    fn cancel_keeps_every_row() {
        let state = loaded()
            .reduce(PostListAction::AskDelete(NewsId::from("2")))
            .reduce(PostListAction::CancelDelete);
        assert_eq!(state.posts.len(), 2);
        assert_eq!(state.confirm_delete, None);
    }
}
