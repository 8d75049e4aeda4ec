use payloads::requests;
use reqwest::StatusCode;

use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn subscribe_reader() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.subscribe_reader("reader@example.com").await?;

    assert_eq!(app.store.subscribers(), vec!["reader@example.com"]);
    Ok(())
}

#[tokio::test]
async fn malformed_email_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = requests::Subscribe {
        email: "not-an-email".into(),
    };
    let result = app.client.subscribe(&body).await;

    assert_status_code(result, StatusCode::BAD_REQUEST);
    assert!(app.store.subscribers().is_empty());
    Ok(())
}

#[tokio::test]
async fn duplicate_subscription_conflicts() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.subscribe_reader("reader@example.com").await?;

    let body = requests::Subscribe {
        email: "reader@example.com".into(),
    };
    let result = app.client.subscribe(&body).await;

    match result {
        Err(payloads::ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::CONFLICT);
            assert_eq!(text, "Conflict: Email address already subscribed");
        }
        _ => panic!("Expected APIError"),
    }
    Ok(())
}
