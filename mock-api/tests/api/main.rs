mod feedback;
mod logins;
mod news;
mod subscribe;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = reqwest::get(format!("{}/health_check", app.client.address))
        .await?;
    assert!(response.status().is_success());
    assert_eq!(response.text().await?, "healthy");

    Ok(())
}
