#![allow(dead_code)]

use std::sync::Arc;

use wiremock::MockServer;

use address_api_client::AddressClient;
use address_api_client::auth::StaticCredentials;

pub const API_TOKEN: &str = "test_token";
pub const SECRET_TOKEN: &str = "test_secret";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn build_client(server: &MockServer, coin: &str) -> AddressClient {
    init_tracing();
    let credentials = Arc::new(StaticCredentials::new(API_TOKEN, SECRET_TOKEN));
    AddressClient::builder()
        .base_url(format!("{}/api/", server.uri()))
        .coin(coin)
        .credentials(credentials)
        .build()
        .unwrap()
}

pub fn build_unsigned_client(server: &MockServer, coin: &str) -> AddressClient {
    init_tracing();
    let credentials = Arc::new(StaticCredentials::token_only(API_TOKEN));
    AddressClient::builder()
        .base_url(format!("{}/api", server.uri()))
        .coin(coin)
        .credentials(credentials)
        .build()
        .unwrap()
}
