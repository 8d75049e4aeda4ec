use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{use_news_list, use_title};
use crate::utils::truncate_title;

#[function_component]
pub fn NewsListPage() -> Html {
    use_title("News");
    let news = use_news_list();

    html! {
        <div>
            <h1 class="text-3xl font-bold text-neutral-900 mb-6">{"Latest news"}</h1>
            {news.render("news", |posts| {
                if posts.is_empty() {
                    return html! {
                        <p class="text-neutral-600">{"Nothing published yet."}</p>
                    };
                }
                html! {
                    <ul class="divide-y divide-neutral-200 bg-white rounded-lg shadow">
                        {posts.iter().map(|post| html! {
                            <li key={post.id.to_string()}>
                                <Link<Route>
                                    to={Route::NewsDetail { id: post.id.clone() }}
                                    classes="block px-6 py-4 hover:bg-neutral-50 text-neutral-900 break-words"
                                >
                                    {truncate_title(&post.title)}
                                </Link<Route>>
                            </li>
                        }).collect::<Html>()}
                    </ul>
                }
            })}
        </div>
    }
}
