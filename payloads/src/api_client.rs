use crate::{NewsId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// A client for the news API.
///
/// `address` is the API base URL; `asset_address` is the origin static assets
/// such as `logins.json` are served from (the UI's own origin in the browser).
pub struct APIClient {
    pub address: String,
    pub asset_address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", self.address.trim_end_matches('/'))
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn patch(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .patch(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        self.inner_client.delete(self.format_url(path)).send().await
    }
}

/// Methods on the news API
impl APIClient {
    /// Subscribe an email address to the newsletter.
    pub async fn subscribe(
        &self,
        details: &requests::Subscribe,
    ) -> Result<(), ClientError> {
        let response = self.post("users", details).await?;
        ok_empty(response).await
    }

    pub async fn list_news(
        &self,
    ) -> Result<Vec<responses::NewsSummary>, ClientError> {
        let response = self.get("news").await?;
        ok_body(response).await
    }

    pub async fn get_news(
        &self,
        news_id: &NewsId,
    ) -> Result<responses::NewsPost, ClientError> {
        let response = self.get(&format!("news/{news_id}")).await?;
        ok_body(response).await
    }

    /// Publish a post. The API sends the newsletter email as a side effect.
    pub async fn create_news(
        &self,
        details: &requests::CreateNews,
    ) -> Result<(), ClientError> {
        let response = self.post("news", details).await?;
        ok_empty(response).await
    }

    pub async fn update_news(
        &self,
        news_id: &NewsId,
        details: &requests::UpdateNews,
    ) -> Result<(), ClientError> {
        let response = self.patch(&format!("news/{news_id}"), details).await?;
        ok_empty(response).await
    }

    /// Send whichever request a validated editor form produced.
    pub async fn submit_post(
        &self,
        submission: &requests::PostSubmission,
    ) -> Result<(), ClientError> {
        match submission {
            requests::PostSubmission::Create(details) => {
                self.create_news(details).await
            }
            requests::PostSubmission::Update(news_id, details) => {
                self.update_news(news_id, details).await
            }
        }
    }

    pub async fn delete_news(&self, news_id: &NewsId) -> Result<(), ClientError> {
        let response = self.delete(&format!("news/{news_id}")).await?;
        ok_empty(response).await
    }

    pub async fn list_feedbacks(
        &self,
        news_id: &NewsId,
    ) -> Result<Vec<responses::Feedback>, ClientError> {
        let response = self.get(&format!("news/{news_id}/feedbacks")).await?;
        ok_body(response).await
    }

    pub async fn submit_feedback(
        &self,
        news_id: &NewsId,
        details: &requests::CreateFeedback,
    ) -> Result<(), ClientError> {
        let response =
            self.post(&format!("news/{news_id}/feedback"), details).await?;
        ok_empty(response).await
    }

    /// Fetch the static demo login list. Not part of the API.
    pub async fn fetch_logins(
        &self,
    ) -> Result<Vec<responses::LoginRecord>, ClientError> {
        let url = format!(
            "{}/logins.json",
            self.asset_address.trim_end_matches('/')
        );
        let response = self.inner_client.get(url).send().await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
