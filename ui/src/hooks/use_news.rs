use payloads::{Feedback, NewsId, NewsPost, NewsSummary};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch};

/// `GET /news`, refetched on every mount.
#[hook]
pub fn use_news_list() -> FetchHookReturn<Vec<NewsSummary>> {
    use_fetch((), || async {
        get_api_client()
            .list_news()
            .await
            .map_err(|e| e.to_string())
    })
}

#[hook]
pub fn use_news_post(news_id: NewsId) -> FetchHookReturn<NewsPost> {
    use_fetch(news_id.clone(), move || {
        let news_id = news_id.clone();
        async move {
            get_api_client()
                .get_news(&news_id)
                .await
                .map_err(|e| e.to_string())
        }
    })
}

#[hook]
pub fn use_feedbacks(news_id: NewsId) -> FetchHookReturn<Vec<Feedback>> {
    use_fetch(news_id.clone(), move || {
        let news_id = news_id.clone();
        async move {
            get_api_client()
                .list_feedbacks(&news_id)
                .await
                .map_err(|e| e.to_string())
        }
    })
}
