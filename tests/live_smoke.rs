use std::sync::Arc;

use address_api_client::AddressClient;
use address_api_client::auth::EnvCredentials;

fn live_tests_enabled() -> bool {
    std::env::var("ADDRESS_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_read_only_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let coin = std::env::var("ADDRESS_COIN").unwrap_or_else(|_| "btc".to_string());
    let client = AddressClient::builder()
        .coin(coin)
        .credentials(Arc::new(credentials))
        .build()?;

    let coins = client.get_coins().await?;
    assert!(!coins.is_null());
    let _wallets = client.get_wallets().await?;

    Ok(())
}
