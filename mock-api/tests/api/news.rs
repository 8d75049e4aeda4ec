use payloads::{NewsId, requests};
use reqwest::StatusCode;

use test_helpers::{
    assert_status_code, post_details_a, post_details_b, spawn_app,
};

#[tokio::test]
async fn create_and_list_news() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let first = app.create_post(&post_details_a()).await?;
    let second = app.create_post(&post_details_b()).await?;

    let news = app.client.list_news().await?;
    assert_eq!(news.len(), 2);
    assert_eq!(news[0].id, first);
    assert_eq!(news[1].id, second);
    assert_eq!(news[1].title, post_details_b().title);
    Ok(())
}

#[tokio::test]
async fn get_news_returns_creation_fields() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let news_id = app.create_test_post().await?;

    let post = app.client.get_news(&news_id).await?;
    let details = post_details_a();
    assert_eq!(post.title, details.title);
    assert_eq!(post.body, details.body);
    assert_eq!(post.subject, Some(details.subject));
    assert_eq!(post.email_body, Some(details.email_body));
    Ok(())
}

#[tokio::test]
async fn unknown_news_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.get_news(&NewsId::from("missing")).await;

    assert_status_code(result, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn creating_news_sends_newsletter() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.subscribe_reader("alice@example.com").await?;
    app.subscribe_reader("bob@example.com").await?;

    let news_id = app.create_test_post().await?;

    let outbox = app.store.outbox();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].news_id, news_id);
    assert_eq!(outbox[0].subject, post_details_a().subject);
    assert_eq!(
        outbox[0].recipients,
        vec!["alice@example.com", "bob@example.com"]
    );
    Ok(())
}

#[tokio::test]
async fn editor_submission_create_then_update() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let form = requests::PostForm {
        title: "Hello!".into(),
        body: "A body of at least twenty characters".into(),
        subject: "Subject line".into(),
        email_body: "An email body of at least twenty".into(),
    };
    let submission = form.validate(&requests::EditorMode::Create).unwrap();
    app.client.submit_post(&submission).await?;

    let news = app.client.list_news().await?;
    assert_eq!(news.len(), 1);
    let news_id = news[0].id.clone();

    let loaded = app.client.get_news(&news_id).await?;
    let mut form = requests::PostForm::from(loaded);
    form.title = "Hello again".into();
    let submission = form
        .validate(&requests::EditorMode::Edit(news_id.clone()))
        .unwrap();
    app.client.submit_post(&submission).await?;

    let news = app.client.list_news().await?;
    assert_eq!(news.len(), 1, "editing must not create a new post");
    let updated = app.client.get_news(&news_id).await?;
    assert_eq!(updated.title, "Hello again");
    assert_eq!(updated.subject.as_deref(), Some("Subject line"));
    // editing does not send another newsletter
    assert_eq!(app.store.outbox().len(), 1);
    Ok(())
}

#[tokio::test]
async fn update_unknown_news_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = requests::UpdateNews {
        title: "Hello!".into(),
        body: "A body of at least twenty characters".into(),
        subject: None,
        email_body: None,
    };
    let result = app.client.update_news(&NewsId::from("42"), &body).await;

    assert_status_code(result, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn empty_title_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = requests::CreateNews {
        title: " ".into(),
        ..post_details_a()
    };
    let result = app.client.create_news(&body).await;

    assert_status_code(result, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn delete_news() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let news_id = app.create_test_post().await?;

    app.client.delete_news(&news_id).await?;

    assert!(app.client.list_news().await?.is_empty());
    let result = app.client.delete_news(&news_id).await;
    assert_status_code(result, StatusCode::NOT_FOUND);
    Ok(())
}
