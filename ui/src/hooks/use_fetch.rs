use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub error: Option<String>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + error: "Error loading {context}: ..."
    /// - No data yet: "Loading {context}..."
    /// - Has data: `render_fn(data)`
    ///
    /// Views degrade to showing nothing but the message when a fetch fails.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T) -> Html,
    {
        match self.data.as_ref() {
            Some(data) => render_fn(data),
            None if self.error.is_some() => {
                let error = self.error.clone().unwrap_or_default();
                html! {
                    <div class="p-4 rounded-md bg-red-50 border border-red-200">
                        <p class="text-sm text-red-700">
                            {format!("Error loading {context}: {error}")}
                        </p>
                    </div>
                }
            }
            None => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600">
                        {format!("Loading {context}...")}
                    </p>
                </div>
            },
        }
    }
}

/// Generic fetch hook composer.
///
/// Fetches on mount and whenever `deps` change; nothing is cached between
/// mounts, so every visit to a page hits the API again. The fetch function
/// captures dependencies from the closure, and `deps` is used only for
/// dependency tracking.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_news_post(news_id: NewsId) -> FetchHookReturn<NewsPost> {
///     use_fetch(news_id.clone(), move || {
///         let news_id = news_id.clone();
///         async move {
///             get_api_client()
///                 .get_news(&news_id)
///                 .await
///                 .map_err(|e| e.to_string())
///         }
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);

    let fetch = {
        let data = data.clone();
        let error = error.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let fetch_fn = fetch_fn.clone();

            yew::platform::spawn_local(async move {
                error.set(None);

                match fetch_fn().await {
                    Ok(result) => {
                        data.set(FetchState::Fetched(result));
                    }
                    Err(e) => {
                        tracing::error!("fetch failed: {e}");
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    // Fetch on mount and when deps change
    use_effect_with(deps, move |_| {
        fetch.emit(());
    });

    FetchHookReturn {
        data: (*data).clone(),
        error: (*error).clone(),
    }
}
