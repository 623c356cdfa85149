//! Public REST API endpoints (no authentication required).
//!
//! None of these methods provision or send an API key.

mod types;

pub use types::*;

use crate::error::ExchangeError;
use crate::rest::ExchangeRestClient;
use crate::rest::endpoints::public;
use crate::types::serde_helpers::OneOrMany;

impl ExchangeRestClient {
    /// List all order books.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use wallet_exchange_client::rest::ExchangeRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = ExchangeRestClient::from_env()?;
    ///     for book in client.get_orderbooks().await? {
    ///         println!("{:?}: {:?}", book.pair, book.status);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_orderbooks(&self) -> Result<Vec<OrderbookInfo>, ExchangeError> {
        let url = self.endpoint_url(&[public::ORDERBOOKS])?;
        let books: OneOrMany<OrderbookInfo> = self.public_get(url).await?;
        Ok(books.into())
    }

    /// Get the summary of one order book.
    pub async fn get_orderbook_info(&self, pair: &str) -> Result<OrderbookInfo, ExchangeError> {
        let url = self.endpoint_url(&[public::ORDERBOOKS, pair])?;
        self.public_get(url).await
    }

    /// Get the depth of one order book.
    pub async fn get_orderbook_depth(&self, pair: &str) -> Result<OrderbookDepth, ExchangeError> {
        let url = self.endpoint_url(&[public::ORDERBOOKS, pair, public::DEPTH])?;
        self.public_get(url).await
    }

    /// Get the best bid and ask of one order book.
    pub async fn get_orderbook_quote(&self, pair: &str) -> Result<Quote, ExchangeError> {
        let url = self.endpoint_url(&[public::ORDERBOOKS, pair, public::QUOTE])?;
        self.public_get(url).await
    }

    /// Get recent public trades of one order book.
    ///
    /// # Arguments
    ///
    /// * `pair` - Pair identifier.
    /// * `date` - Day to fetch, passed through as `?date=`. Without it the
    ///   exchange applies its default window.
    pub async fn get_trade_history(
        &self,
        pair: &str,
        date: Option<&str>,
    ) -> Result<Vec<PublicTrade>, ExchangeError> {
        let mut url = self.endpoint_url(&[public::ORDERBOOKS, pair, public::TRADES])?;
        if let Some(date) = date {
            url = Self::with_query(url, &TradeHistoryQuery { date })?;
        }
        let trades: OneOrMany<PublicTrade> = self.public_get(url).await?;
        Ok(trades.into())
    }

    /// Get the exchange status.
    pub async fn get_exchange_status(&self) -> Result<ExchangeStatus, ExchangeError> {
        let url = self.endpoint_url(&[public::STATUS])?;
        self.public_get(url).await
    }

    /// List all symbols.
    pub async fn get_symbols(&self) -> Result<Vec<SymbolInfo>, ExchangeError> {
        let url = self.endpoint_url(&[public::SYMBOLS])?;
        let symbols: OneOrMany<SymbolInfo> = self.public_get(url).await?;
        Ok(symbols.into())
    }

    /// Get one symbol by name.
    pub async fn get_symbol_info(&self, name: &str) -> Result<SymbolInfo, ExchangeError> {
        let url = self.endpoint_url(&[public::SYMBOLS, name])?;
        self.public_get(url).await
    }
}
