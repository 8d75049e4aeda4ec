use payloads::{requests, responses::find_login};

use test_helpers::spawn_app;

#[tokio::test]
async fn fetch_demo_logins() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let logins = app.client.fetch_logins().await?;

    assert_eq!(logins, mock_api::default_logins());
    Ok(())
}

#[tokio::test]
async fn credentials_checked_against_fetched_list() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let logins = app.client.fetch_logins().await?;

    let good = requests::LoginCredentials {
        email: "admin@example.com".into(),
        password: "admin123".into(),
    };
    let bad = requests::LoginCredentials {
        password: "admin1234".into(),
        ..good.clone()
    };

    assert!(find_login(&logins, &good).is_some());
    assert!(find_login(&logins, &bad).is_none());
    Ok(())
}

#[tokio::test]
async fn unreachable_asset_host_is_a_network_error() -> anyhow::Result<()> {
    let mut app = spawn_app().await;
    app.client.asset_address = "http://127.0.0.1:1".into();

    let result = app.client.fetch_logins().await;

    assert!(matches!(result, Err(payloads::ClientError::Network(_))));
    Ok(())
}
