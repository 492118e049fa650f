mod common;

use wiremock::matchers::{body_string, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use address_api_client::auth::sign;
use address_api_client::types::{SendRequest, TransactionsRequest};

use common::{API_TOKEN, SECRET_TOKEN, build_client};

#[tokio::test]
async fn test_account_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/coins/ltc/wallets/4/accounts/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "id": 1 }])),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/coins/ltc/wallets/4/accounts/"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({ "id": 2, "address": "Lxyz" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/coins/ltc/wallets/4/accounts/2/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "id": 2, "address": "Lxyz" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/coins/ltc/wallets/4/accounts/2/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = build_client(&server, "ltc");

    let accounts = client.get_accounts(4).await.unwrap();
    assert_eq!(accounts[0]["id"], 1);

    let created = client.create_account(4).await.unwrap();
    assert_eq!(created["address"], "Lxyz");

    let account = client.get_account(4, 2).await.unwrap();
    assert_eq!(account["id"], 2);

    assert!(client.delete_account(4, 2).await.unwrap().is_null());
}

#[tokio::test]
async fn test_archive_accounts() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/coins/ltc/wallets/4/accounts/archive/"))
        .and(body_string(
            "accounts%5B%5D=5&accounts%5B%5D=6&accounts%5B%5D=9",
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "archived": 3 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server, "ltc");
    let result = client.archive_accounts(4, &[5, 6, 9]).await.unwrap();
    assert_eq!(result["archived"], 3);
}

#[tokio::test]
async fn test_account_transactions() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/coins/ltc/wallets/4/accounts/2/transactions/"))
        .and(body_string("limit=25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server, "ltc");
    let request = TransactionsRequest::new(25);
    client
        .get_account_transactions(4, 2, Some(&request))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_send_from_account_end_to_end() {
    let server = MockServer::start().await;
    let request = SendRequest::new("1.5".parse().unwrap(), "abc");
    let signature = sign(&request.to_params(), SECRET_TOKEN).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/coins/eth/wallets/5/accounts/9/send/"))
        .and(header("X-Api-Token", API_TOKEN))
        .and(body_string_contains("amount=1.5"))
        .and(body_string_contains("recepient=abc"))
        .and(body_string_contains(format!("sign={}", signature)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "txid": "0xfeed" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server, "eth");
    let result = client.send_from_account(5, 9, &request).await.unwrap();
    assert_eq!(result["txid"], "0xfeed");
}
