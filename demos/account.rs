//! Example: Private account and trading endpoints.
//!
//! Without `EXCHANGE_API_KEY`, the first private call provisions a key by
//! signing a nonce with the wallet.
//!
//! Run with: cargo run --example account

use wallet_exchange_client::auth::EnvConfig;
use wallet_exchange_client::rest::ExchangeRestClient;
use wallet_exchange_client::rest::private::{DepositsRequest, OrdersRequest, TradesRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match EnvConfig::try_from_env() {
        Some(config) => config,
        None => {
            println!("Set EXCHANGE_PRIVATE_KEY to run this example.");
            return Ok(());
        }
    };

    let client = ExchangeRestClient::builder()
        .env_config(&config)
        .user_agent("wallet-exchange-client-demos/account")
        .build()?;
    println!("Wallet: {}", client.address());

    println!("=== Balances ===");
    let balances = client.get_balances(None).await?;
    for balance in &balances {
        println!(
            "{:?}: available={:?}, locked={:?}",
            balance.symbol, balance.available, balance.locked
        );
    }
    println!("API key provisioned: {}", client.api_key().is_some());

    println!("\n=== Deposits (January 2024, ETH) ===");
    let request = DepositsRequest::new("2024-01-01-00:00:00", "2024-01-31-23:59:59", "ETH");
    let deposits = client.get_deposits(Some(&request)).await?;
    println!("Deposits: {}", deposits.len());

    println!("\n=== Withdrawals ===");
    let withdrawals = client.get_withdraws(None).await?;
    println!("Withdrawals: {}", withdrawals.len());

    println!("\n=== Open Orders ===");
    let request = OrdersRequest {
        status: Some("open".into()),
        ..Default::default()
    };
    // Partial filters fall back to the full listing.
    let orders = client.get_orders(Some(&request)).await?;
    for order in orders.iter().take(5) {
        println!(
            "{:?}: {:?} {:?} @ {:?} ({:?})",
            order.identifier(), order.side, order.amount, order.price, order.status
        );
    }

    println!("\n=== Trades ===");
    let trades = client.get_trades(None::<&TradesRequest>).await?;
    println!("Trades: {}", trades.len());

    Ok(())
}
