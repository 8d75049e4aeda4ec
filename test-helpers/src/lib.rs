pub mod mock;

use mock_api::{Config, store::Store, telemetry};
use payloads::{NewsId, requests};
use reqwest::StatusCode;
use std::sync::Arc;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    /// The server's store, for assertions the API does not expose.
    pub store: Arc<Store>,
}

impl TestApp {
    pub async fn subscribe_reader(&self, email: &str) -> anyhow::Result<()> {
        self.client
            .subscribe(&requests::Subscribe {
                email: email.to_string(),
            })
            .await?;
        Ok(())
    }

    /// Create a post through the API and look up the id it was given.
    pub async fn create_post(
        &self,
        details: &requests::CreateNews,
    ) -> anyhow::Result<NewsId> {
        self.client.create_news(details).await?;
        let news = self.client.list_news().await?;
        let created = news
            .iter()
            .rev()
            .find(|summary| summary.title == details.title)
            .ok_or_else(|| anyhow::anyhow!("created post missing from list"))?;
        Ok(created.id.clone())
    }

    pub async fn create_test_post(&self) -> anyhow::Result<NewsId> {
        self.create_post(&post_details_a()).await
    }

    pub async fn leave_test_feedback(
        &self,
        news_id: &NewsId,
    ) -> anyhow::Result<()> {
        self.client
            .submit_feedback(news_id, &feedback_details_a())
            .await?;
        Ok(())
    }
}

/// Start the mock api on a given port (0 for an OS-assigned one).
pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
        logins_file: None,
    };
    let store = Arc::new(Store::new(mock_api::default_logins()));

    let server = mock_api::build(&mut config, store.clone()).unwrap();
    tokio::spawn(server);

    let address = format!("http://127.0.0.1:{}", config.port);
    TestApp {
        port: config.port,
        client: payloads::APIClient {
            asset_address: address.clone(),
            address,
            inner_client: reqwest::Client::new(),
        },
        store,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn post_details_a() -> requests::CreateNews {
    requests::CreateNews {
        title: "Spring release notes".into(),
        body: "# Spring release\n\nEverything is **faster** now :rocket:"
            .into(),
        subject: "What's new this spring".into(),
        email_body: "Our spring release is out, read all about it.".into(),
    }
}

pub fn post_details_b() -> requests::CreateNews {
    requests::CreateNews {
        title: "Maintenance window".into(),
        body: "::: warning\nThe service is offline on Sunday.\n:::".into(),
        subject: "Planned maintenance".into(),
        email_body: "We will be offline for maintenance on Sunday.".into(),
    }
}

pub fn feedback_details_a() -> requests::CreateFeedback {
    requests::CreateFeedback {
        email: "reader@example.com".into(),
        feedback: "Great update, thanks!".into(),
        stars: 5,
    }
}
