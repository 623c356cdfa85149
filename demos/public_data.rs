//! Example: Fetching public market data.
//!
//! Public endpoints never send or provision an API key, but the client is
//! still identified by a wallet.
//!
//! Run with: cargo run --example public_data

use wallet_exchange_client::auth::EnvConfig;
use wallet_exchange_client::rest::ExchangeRestClient;

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
    let client = ExchangeRestClient::builder().env_config(&config).build()?;

    println!("=== Exchange Status ===");
    let status = client.get_exchange_status().await?;
    println!("Status: {:?}", status.status);

    println!("\n=== Symbols ===");
    let symbols = client.get_symbols().await?;
    for symbol in symbols.iter().take(5) {
        println!("{:?}: decimals={:?}", symbol.symbol, symbol.decimals);
    }

    println!("\n=== Order Books ===");
    let books = client.get_orderbooks().await?;
    for book in books.iter().take(5) {
        println!("{:?}: base={:?}, quote={:?}", book.pair, book.base, book.quote);
    }

    let Some(pair) = books.iter().find_map(|book| book.pair.clone()) else {
        println!("No order books listed.");
        return Ok(());
    };

    println!("\n=== Quote ({pair}) ===");
    let quote = client.get_orderbook_quote(&pair).await?;
    println!("Bid: {:?}  Ask: {:?}", quote.bid, quote.ask);

    println!("\n=== Depth ({pair}) ===");
    let depth = client.get_orderbook_depth(&pair).await?;
    println!("Best bid: {:?}", depth.best_bid());
    println!("Best ask: {:?}", depth.best_ask());
    println!("Spread: {:?}", depth.spread());

    println!("\n=== Recent Trades ({pair}) ===");
    let trades = client.get_trade_history(&pair, None).await?;
    for trade in trades.iter().take(5) {
        println!(
            "{:?} {:?} @ {:?} ({:?})",
            trade.side, trade.amount, trade.price, trade.created_at
        );
    }

    Ok(())
}
