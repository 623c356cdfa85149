use wallet_exchange_client::auth::EnvConfig;
use wallet_exchange_client::rest::ExchangeRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("EXCHANGE_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let config = match EnvConfig::try_from_env() {
        Some(config) => config,
        None => return Ok(()),
    };
    let client = ExchangeRestClient::builder().env_config(&config).build()?;

    let status = client.get_exchange_status().await?;
    assert!(status.status.is_some() || !status.extra.is_empty());

    let symbols = client.get_symbols().await?;
    assert!(!symbols.is_empty());

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    if EnvConfig::try_from_env().is_none() {
        return Ok(());
    }
    let client = ExchangeRestClient::from_env()?;

    let _balances = client.get_balances(None).await?;
    assert!(client.api_key().is_some());

    Ok(())
}
