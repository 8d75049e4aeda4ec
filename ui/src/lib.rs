use payloads::{APIClient, NewsId};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod favicon;
mod hooks;
mod logs;
mod pages;
mod session;
mod state;
mod utils;

pub(crate) use state::State;

use components::layout::{AdminLayout, MainLayout};
use pages::{
    AdminDashboardPage, AdminPostsPage, FeedbackPage, HomePage,
    NewsDetailPage, NewsListPage, LoginPage, NotFoundPage, PostEditorPage,
};

fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(page_origin);

    APIClient {
        address,
        // logins.json is bundled with the UI, not served by the API
        asset_address: page_origin(),
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| {
        logs::init_logging();
        let interval = favicon::start_animation();
        move || drop(interval)
    });

    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-neutral-50 text-neutral-900">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/news")]
    News,
    #[at("/news/:id")]
    NewsDetail { id: NewsId },
    #[at("/news/:id/feedback")]
    Feedback { id: NewsId },
    #[at("/login")]
    Login,
    #[at("/admin")]
    Admin,
    #[at("/admin/posts")]
    AdminPosts,
    #[at("/admin/posts/new")]
    NewPost,
    #[at("/admin/posts/:id/edit")]
    EditPost { id: NewsId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <MainLayout><HomePage /></MainLayout> },
        Route::News => html! { <MainLayout><NewsListPage /></MainLayout> },
        Route::NewsDetail { id } => html! {
            <MainLayout><NewsDetailPage news_id={id} /></MainLayout>
        },
        Route::Feedback { id } => html! {
            <MainLayout><FeedbackPage news_id={id} /></MainLayout>
        },
        Route::Login => html! { <MainLayout><LoginPage /></MainLayout> },
        Route::Admin => html! {
            <AdminLayout><AdminDashboardPage /></AdminLayout>
        },
        Route::AdminPosts => html! {
            <AdminLayout><AdminPostsPage /></AdminLayout>
        },
        Route::NewPost => html! {
            <AdminLayout><PostEditorPage /></AdminLayout>
        },
        Route::EditPost { id } => html! {
            <AdminLayout><PostEditorPage news_id={Some(id)} /></AdminLayout>
        },
        Route::NotFound => html! { <MainLayout><NotFoundPage /></MainLayout> },
    }
}
