pub mod use_fetch;
pub mod use_logout;
pub mod use_news;
pub mod use_push_route;
pub mod use_title;

pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_logout::use_logout;
pub use use_news::{use_feedbacks, use_news_list, use_news_post};
pub use use_push_route::use_push_route;
pub use use_title::use_title;

/// Distinguishes "not fetched yet" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetched_empty_differs_from_not_fetched() {
        let pending: FetchState<Vec<u32>> = FetchState::default();
        assert_eq!(pending.as_ref(), None);

        let empty = FetchState::Fetched(Vec::<u32>::new());
        assert_eq!(empty.as_ref(), Some(&Vec::new()));
    }
}
