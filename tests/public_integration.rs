use rust_decimal::Decimal;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wallet_exchange_client::error::ExchangeError;
use wallet_exchange_client::rest::{ExchangeClient, ExchangeRestClient};
use wallet_exchange_client::types::Side;

const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn build_public_client(server: &MockServer) -> ExchangeRestClient {
    ExchangeRestClient::builder()
        .private_key(TEST_KEY)
        .base_url(server.uri())
        .build()
        .unwrap()
}

/// Public calls must neither provision a key nor send one.
async fn assert_no_api_key_traffic(server: &MockServer) {
    let requests = server.received_requests().await.unwrap();
    for request in requests {
        assert_ne!(request.url.path(), "/apikeys");
        assert!(request.headers.get("API-Key").is_none());
    }
}

#[tokio::test]
async fn test_get_exchange_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "online", "serverTime": 1700000000000u64 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let status = client.get_exchange_status().await.unwrap();

    assert_eq!(status.status.as_deref(), Some("online"));
    assert!(status.extra.contains_key("serverTime"));
    assert!(client.api_key().is_none());
    assert_no_api_key_traffic(&server).await;
}

#[tokio::test]
async fn test_get_orderbooks() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        { "pair": "ETH-USDC", "base": "ETH", "quote": "USDC", "status": "open" },
        { "pair": "BTC-USDC", "base": "BTC", "quote": "USDC", "status": "halted" }
    ]);

    Mock::given(method("GET"))
        .and(path("/orderbooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let books = client.get_orderbooks().await.unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].pair.as_deref(), Some("ETH-USDC"));
    assert_eq!(books[1].status.as_deref(), Some("halted"));
    assert_no_api_key_traffic(&server).await;
}

#[tokio::test]
async fn test_get_orderbook_info() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orderbooks/ETH-USDC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pair": "ETH-USDC",
            "base": "ETH",
            "quote": "USDC",
            "minAmount": "0.01"
        })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let info = client.get_orderbook_info("ETH-USDC").await.unwrap();

    assert_eq!(info.base.as_deref(), Some("ETH"));
    assert_eq!(info.extra["minAmount"], "0.01");
}

#[tokio::test]
async fn test_get_orderbook_depth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orderbooks/ETH-USDC/depth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pair": "ETH-USDC",
            "bids": [{ "price": "1999.5", "amount": "2" }],
            "asks": [{ "price": "2000.5", "amount": "1.25" }]
        })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let depth = client.get_orderbook_depth("ETH-USDC").await.unwrap();

    assert_eq!(depth.best_bid().unwrap().price, Decimal::new(19995, 1));
    assert_eq!(depth.best_ask().unwrap().amount, Decimal::new(125, 2));
    assert_eq!(depth.spread(), Some(Decimal::ONE));
}

#[tokio::test]
async fn test_get_orderbook_quote() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orderbooks/ETH-USDC/quote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pair": "ETH-USDC",
            "bid": "1999.5",
            "ask": 2000.5
        })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let quote = client.get_orderbook_quote("ETH-USDC").await.unwrap();

    assert_eq!(quote.bid, Some(Decimal::new(19995, 1)));
    assert_eq!(quote.ask, Some(Decimal::new(20005, 1)));
}

#[tokio::test]
async fn test_get_trade_history_with_date() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orderbooks/ETH-USDC/trades"))
        .and(query_param("date", "2024-01-02"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "price": "2000", "amount": "0.5", "side": "bid" },
            { "id": 2, "price": "2001", "amount": "0.1", "side": "ask" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let trades = client
        .get_trade_history("ETH-USDC", Some("2024-01-02"))
        .await
        .unwrap();

    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].id.as_deref(), Some("1"));
    assert_eq!(trades[1].parsed_side(), Some(Side::Ask));
}

#[tokio::test]
async fn test_get_trade_history_default_window() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orderbooks/ETH-USDC/trades"))
        .and(query_param_is_missing("date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let trades = client.get_trade_history("ETH-USDC", None).await.unwrap();
    assert!(trades.is_empty());
}

#[tokio::test]
async fn test_get_symbols_and_symbol_info() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/symbols"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "symbol": "ETH", "decimals": 18 },
            { "symbol": "USDC", "decimals": 6 }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/symbols/USDC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "symbol": "USDC",
            "decimals": 6,
            "contract": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"
        })))
        .mount(&server)
        .await;

    let client = build_public_client(&server);

    let symbols = client.get_symbols().await.unwrap();
    assert_eq!(symbols.len(), 2);
    assert_eq!(symbols[0].decimal_places(), Some(18));

    let usdc = client.get_symbol_info("USDC").await.unwrap();
    assert_eq!(usdc.symbol.as_deref(), Some("USDC"));
    assert!(usdc.extra.contains_key("contract"));

    assert_no_api_key_traffic(&server).await;
}

#[tokio::test]
async fn test_path_parameter_is_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orderbooks/ETH%2FUSDC/quote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "pair": "ETH/USDC" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let quote = client.get_orderbook_quote("ETH/USDC").await.unwrap();
    assert_eq!(quote.pair.as_deref(), Some("ETH/USDC"));
}

#[tokio::test]
async fn test_http_error_is_propagated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orderbooks/NOPE/depth"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({ "message": "Unknown pair" })),
        )
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_orderbook_depth("NOPE").await.unwrap_err();

    match err {
        ExchangeError::Api(api_error) => {
            assert_eq!(api_error.status, 404);
            assert!(api_error.is_not_found());
            assert_eq!(api_error.message().as_deref(), Some("Unknown pair"));
            assert!(api_error.body.contains("Unknown pair"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orderbooks/ETH-USDC/depth"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_orderbook_depth("ETH-USDC").await.unwrap_err();

    match err {
        ExchangeError::InvalidResponse(message) => assert!(message.contains("maintenance")),
        other => panic!("unexpected error: {other:?}"),
    }
}

async fn listed_pairs<C: ExchangeClient>(client: &C) -> Result<Vec<String>, ExchangeError> {
    let books = client.get_orderbooks().await?;
    Ok(books.into_iter().filter_map(|book| book.pair).collect())
}

#[tokio::test]
async fn test_client_trait_generic_usage() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orderbooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "pair": "ETH-USDC" },
            { "status": "open" }
        ])))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let pairs = listed_pairs(&client).await.unwrap();
    assert_eq!(pairs, vec!["ETH-USDC".to_string()]);
}
