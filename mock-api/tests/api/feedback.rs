use payloads::{NewsId, requests};
use reqwest::StatusCode;

use test_helpers::{assert_status_code, feedback_details_a, spawn_app};

#[tokio::test]
async fn submit_and_list_feedback() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let news_id = app.create_test_post().await?;
    assert!(app.client.list_feedbacks(&news_id).await?.is_empty());

    app.leave_test_feedback(&news_id).await?;

    let feedbacks = app.client.list_feedbacks(&news_id).await?;
    assert_eq!(feedbacks.len(), 1);
    let details = feedback_details_a();
    assert_eq!(feedbacks[0].email, details.email);
    assert_eq!(feedbacks[0].feedback, details.feedback);
    assert_eq!(feedbacks[0].stars, details.stars);
    Ok(())
}

#[tokio::test]
async fn validated_form_is_accepted() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let news_id = app.create_test_post().await?;

    let form = requests::FeedbackForm {
        email: "reader@example.com".into(),
        feedback: "  Short and sweet  ".into(),
        stars: 1,
    };
    let details = form.validate().unwrap();
    app.client.submit_feedback(&news_id, &details).await?;

    assert_eq!(app.client.list_feedbacks(&news_id).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn out_of_range_stars_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let news_id = app.create_test_post().await?;

    for stars in [0, 6] {
        let body = requests::CreateFeedback {
            stars,
            ..feedback_details_a()
        };
        let result = app.client.submit_feedback(&news_id, &body).await;
        assert_status_code(result, StatusCode::BAD_REQUEST);
    }
    assert!(app.client.list_feedbacks(&news_id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn feedback_for_unknown_news_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let missing = NewsId::from("missing");

    let result = app
        .client
        .submit_feedback(&missing, &feedback_details_a())
        .await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    let result = app.client.list_feedbacks(&missing).await;
    assert_status_code(result, StatusCode::NOT_FOUND);
    Ok(())
}
