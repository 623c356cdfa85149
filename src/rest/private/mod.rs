//! Private REST API endpoints (API key required).
//!
//! Every method here attaches the `API-Key` header. When the client holds no
//! key yet, one is provisioned through the wallet before the request is sent.
//! Filter dates are validated before any network traffic.

mod types;

pub use types::*;

use serde::Serialize;

use crate::error::ExchangeError;
use crate::rest::ExchangeRestClient;
use crate::rest::endpoints::private;
use crate::types::serde_helpers::OneOrMany;

impl ExchangeRestClient {
    // ========== Balances ==========

    /// Get account balances.
    ///
    /// With a symbol, only that asset's balance is requested.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use wallet_exchange_client::rest::ExchangeRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = ExchangeRestClient::from_env()?;
    ///
    ///     let balances = client.get_balances(None).await?;
    ///     for balance in balances {
    ///         println!("{:?}: {:?}", balance.symbol, balance.available);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_balances(&self, symbol: Option<&str>) -> Result<Vec<Balance>, ExchangeError> {
        let url = match symbol {
            Some(symbol) => self.endpoint_url(&[private::BALANCES, symbol])?,
            None => self.endpoint_url(&[private::BALANCES])?,
        };
        let balances: OneOrMany<Balance> = self.private_get(url).await?;
        Ok(balances.into())
    }

    // ========== Funding ==========

    /// Get deposit history.
    pub async fn get_deposits(
        &self,
        request: Option<&DepositsRequest>,
    ) -> Result<Vec<Deposit>, ExchangeError> {
        self.transfer_history(private::DEPOSITS, request).await
    }

    /// Get one deposit by transaction ID.
    pub async fn get_deposit_info(&self, tx_id: &str) -> Result<Deposit, ExchangeError> {
        let url = self.endpoint_url(&[private::DEPOSITS, tx_id])?;
        self.private_get(url).await
    }

    /// Get refund history.
    pub async fn get_refunds(
        &self,
        request: Option<&RefundsRequest>,
    ) -> Result<Vec<Refund>, ExchangeError> {
        self.transfer_history(private::REFUNDS, request).await
    }

    /// Get one refund by transaction ID.
    pub async fn get_refund_info(&self, tx_id: &str) -> Result<Refund, ExchangeError> {
        let url = self.endpoint_url(&[private::REFUNDS, tx_id])?;
        self.private_get(url).await
    }

    async fn transfer_history(
        &self,
        endpoint: &str,
        request: Option<&TransferHistoryRequest>,
    ) -> Result<Vec<Transfer>, ExchangeError> {
        let mut url = self.endpoint_url(&[endpoint])?;
        if let Some(query) = request.map(TransferHistoryRequest::query).transpose()?.flatten() {
            url = Self::with_query(url, &query)?;
        }
        let transfers: OneOrMany<Transfer> = self.private_get(url).await?;
        Ok(transfers.into())
    }

    /// Get withdrawal history.
    pub async fn get_withdraws(
        &self,
        request: Option<&WithdrawsRequest>,
    ) -> Result<Vec<Withdrawal>, ExchangeError> {
        let mut url = self.endpoint_url(&[private::WITHDRAWS])?;
        if let Some(query) = request.map(WithdrawsRequest::query).transpose()?.flatten() {
            url = Self::with_query(url, &query)?;
        }
        let withdrawals: OneOrMany<Withdrawal> = self.private_get(url).await?;
        Ok(withdrawals.into())
    }

    /// Request a withdrawal.
    ///
    /// The body is serialized and sent as is. [`WithdrawRequest`] covers the
    /// common fields; any other serializable body (e.g. a `serde_json::Value`)
    /// works too.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use wallet_exchange_client::rest::ExchangeRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = ExchangeRestClient::from_env()?;
    ///     let body = serde_json::json!({ "asset": "ETH", "qty": "0.5", "to": "0x7099..." });
    ///     let withdrawal = client.request_withdraw(&body).await?;
    ///     println!("Withdrawal {:?}", withdrawal.identifier());
    ///     Ok(())
    /// }
    /// ```
    pub async fn request_withdraw<B>(&self, body: &B) -> Result<Withdrawal, ExchangeError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(&[private::WITHDRAWS])?;
        self.private_post(url, body).await
    }

    /// Get one withdrawal by transaction ID.
    pub async fn get_withdraw_info(&self, tx_id: &str) -> Result<Withdrawal, ExchangeError> {
        let url = self.endpoint_url(&[private::WITHDRAWS, tx_id])?;
        self.private_get(url).await
    }

    // ========== Trading ==========

    /// Get orders.
    pub async fn get_orders(
        &self,
        request: Option<&OrdersRequest>,
    ) -> Result<Vec<Order>, ExchangeError> {
        let mut url = self.endpoint_url(&[private::ORDERS])?;
        if let Some(query) = request.map(OrdersRequest::query).transpose()?.flatten() {
            url = Self::with_query(url, &query)?;
        }
        let orders: OneOrMany<Order> = self.private_get(url).await?;
        Ok(orders.into())
    }

    /// Submit a limit order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use rust_decimal::Decimal;
    /// use wallet_exchange_client::rest::ExchangeRestClient;
    /// use wallet_exchange_client::rest::private::LimitOrderRequest;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = ExchangeRestClient::from_env()?;
    ///     let order = LimitOrderRequest::bid("ETH-USDC", Decimal::new(2000, 0), Decimal::new(1, 1));
    ///     let placed = client.submit_limit_order(&order).await?;
    ///     println!("Placed order {:?}", placed.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn submit_limit_order(
        &self,
        request: &LimitOrderRequest,
    ) -> Result<Order, ExchangeError> {
        let url = self.endpoint_url(&[private::ORDERS])?;
        self.private_post(url, request).await
    }

    /// Get one order by ID.
    pub async fn get_order_info(&self, order_id: &str) -> Result<Order, ExchangeError> {
        let url = self.endpoint_url(&[private::ORDERS, order_id])?;
        self.private_get(url).await
    }

    /// Cancel an order.
    ///
    /// Returns the cancelled order if the exchange echoes it, `None` for an
    /// empty response body.
    pub async fn cancel_order(&self, order_id: &str) -> Result<Option<Order>, ExchangeError> {
        let url = self.endpoint_url(&[private::ORDERS, order_id])?;
        self.private_delete(url).await
    }

    /// Get trades.
    pub async fn get_trades(
        &self,
        request: Option<&TradesRequest>,
    ) -> Result<Vec<Trade>, ExchangeError> {
        let mut url = self.endpoint_url(&[private::TRADES])?;
        if let Some(query) = request.map(TradesRequest::query).transpose()?.flatten() {
            url = Self::with_query(url, &query)?;
        }
        let trades: OneOrMany<Trade> = self.private_get(url).await?;
        Ok(trades.into())
    }

    /// Get one trade by ID.
    pub async fn get_trade_info(&self, trade_id: &str) -> Result<Trade, ExchangeError> {
        let url = self.endpoint_url(&[private::TRADES, trade_id])?;
        self.private_get(url).await
    }
}
