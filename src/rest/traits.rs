//! Trait definition for the exchange REST API client.
//!
//! The `ExchangeClient` trait abstracts all REST API operations so code can
//! be written against it and exercised with fake implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use wallet_exchange_client::rest::{ExchangeClient, ExchangeRestClient};
//!
//! async fn print_status<C: ExchangeClient>(client: &C) -> Result<(), wallet_exchange_client::ExchangeError> {
//!     let status = client.get_exchange_status().await?;
//!     println!("Exchange status: {:?}", status.status);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use serde::Serialize;

use crate::error::ExchangeError;
use crate::rest::client::ExchangeRestClient;
use crate::rest::private::{
    Balance, Deposit, DepositsRequest, LimitOrderRequest, Order, OrdersRequest, Refund,
    RefundsRequest, Trade, TradesRequest, Withdrawal, WithdrawsRequest,
};
use crate::rest::public::{
    ExchangeStatus, OrderbookDepth, OrderbookInfo, PublicTrade, Quote, SymbolInfo,
};

/// Trait defining all exchange REST API operations.
///
/// All methods are async and return `Result<T, ExchangeError>`.
pub trait ExchangeClient: Send + Sync {
    // ========== Credential ==========

    /// Obtain a new API key through the wallet and start using it.
    fn generate_api_key(&self) -> impl Future<Output = Result<String, ExchangeError>> + Send;

    /// Replace the API key attached to private requests.
    fn update_api_key(&self, api_key: String);

    // ========== Public Endpoints ==========

    /// List all order books.
    fn get_orderbooks(
        &self,
    ) -> impl Future<Output = Result<Vec<OrderbookInfo>, ExchangeError>> + Send;

    /// Get the summary of one order book.
    fn get_orderbook_info(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<OrderbookInfo, ExchangeError>> + Send;

    /// Get the depth of one order book.
    fn get_orderbook_depth(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<OrderbookDepth, ExchangeError>> + Send;

    /// Get the best bid and ask of one order book.
    fn get_orderbook_quote(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<Quote, ExchangeError>> + Send;

    /// Get recent public trades of one order book.
    fn get_trade_history(
        &self,
        pair: &str,
        date: Option<&str>,
    ) -> impl Future<Output = Result<Vec<PublicTrade>, ExchangeError>> + Send;

    /// Get the exchange status.
    fn get_exchange_status(
        &self,
    ) -> impl Future<Output = Result<ExchangeStatus, ExchangeError>> + Send;

    /// List all symbols.
    fn get_symbols(&self) -> impl Future<Output = Result<Vec<SymbolInfo>, ExchangeError>> + Send;

    /// Get one symbol by name.
    fn get_symbol_info(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<SymbolInfo, ExchangeError>> + Send;

    // ========== Private Endpoints - Funding ==========

    /// Get account balances, optionally for one symbol.
    fn get_balances(
        &self,
        symbol: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Balance>, ExchangeError>> + Send;

    /// Get deposit history.
    fn get_deposits(
        &self,
        request: Option<&DepositsRequest>,
    ) -> impl Future<Output = Result<Vec<Deposit>, ExchangeError>> + Send;

    /// Get one deposit.
    fn get_deposit_info(
        &self,
        tx_id: &str,
    ) -> impl Future<Output = Result<Deposit, ExchangeError>> + Send;

    /// Get refund history.
    fn get_refunds(
        &self,
        request: Option<&RefundsRequest>,
    ) -> impl Future<Output = Result<Vec<Refund>, ExchangeError>> + Send;

    /// Get one refund.
    fn get_refund_info(
        &self,
        tx_id: &str,
    ) -> impl Future<Output = Result<Refund, ExchangeError>> + Send;

    /// Get withdrawal history.
    fn get_withdraws(
        &self,
        request: Option<&WithdrawsRequest>,
    ) -> impl Future<Output = Result<Vec<Withdrawal>, ExchangeError>> + Send;

    /// Request a withdrawal, sending `body` as is.
    fn request_withdraw<B>(
        &self,
        body: &B,
    ) -> impl Future<Output = Result<Withdrawal, ExchangeError>> + Send
    where
        B: Serialize + Sync + ?Sized;

    /// Get one withdrawal.
    fn get_withdraw_info(
        &self,
        tx_id: &str,
    ) -> impl Future<Output = Result<Withdrawal, ExchangeError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// Get orders.
    fn get_orders(
        &self,
        request: Option<&OrdersRequest>,
    ) -> impl Future<Output = Result<Vec<Order>, ExchangeError>> + Send;

    /// Submit a limit order.
    fn submit_limit_order(
        &self,
        request: &LimitOrderRequest,
    ) -> impl Future<Output = Result<Order, ExchangeError>> + Send;

    /// Get one order.
    fn get_order_info(
        &self,
        order_id: &str,
    ) -> impl Future<Output = Result<Order, ExchangeError>> + Send;

    /// Cancel an order.
    fn cancel_order(
        &self,
        order_id: &str,
    ) -> impl Future<Output = Result<Option<Order>, ExchangeError>> + Send;

    /// Get trades.
    fn get_trades(
        &self,
        request: Option<&TradesRequest>,
    ) -> impl Future<Output = Result<Vec<Trade>, ExchangeError>> + Send;

    /// Get one trade.
    fn get_trade_info(
        &self,
        trade_id: &str,
    ) -> impl Future<Output = Result<Trade, ExchangeError>> + Send;
}

impl ExchangeClient for ExchangeRestClient {
    async fn generate_api_key(&self) -> Result<String, ExchangeError> {
        ExchangeRestClient::generate_api_key(self).await
    }

    fn update_api_key(&self, api_key: String) {
        ExchangeRestClient::update_api_key(self, api_key)
    }

    async fn get_orderbooks(&self) -> Result<Vec<OrderbookInfo>, ExchangeError> {
        ExchangeRestClient::get_orderbooks(self).await
    }

    async fn get_orderbook_info(&self, pair: &str) -> Result<OrderbookInfo, ExchangeError> {
        ExchangeRestClient::get_orderbook_info(self, pair).await
    }

    async fn get_orderbook_depth(&self, pair: &str) -> Result<OrderbookDepth, ExchangeError> {
        ExchangeRestClient::get_orderbook_depth(self, pair).await
    }

    async fn get_orderbook_quote(&self, pair: &str) -> Result<Quote, ExchangeError> {
        ExchangeRestClient::get_orderbook_quote(self, pair).await
    }

    async fn get_trade_history(
        &self,
        pair: &str,
        date: Option<&str>,
    ) -> Result<Vec<PublicTrade>, ExchangeError> {
        ExchangeRestClient::get_trade_history(self, pair, date).await
    }

    async fn get_exchange_status(&self) -> Result<ExchangeStatus, ExchangeError> {
        ExchangeRestClient::get_exchange_status(self).await
    }

    async fn get_symbols(&self) -> Result<Vec<SymbolInfo>, ExchangeError> {
        ExchangeRestClient::get_symbols(self).await
    }

    async fn get_symbol_info(&self, name: &str) -> Result<SymbolInfo, ExchangeError> {
        ExchangeRestClient::get_symbol_info(self, name).await
    }

    async fn get_balances(&self, symbol: Option<&str>) -> Result<Vec<Balance>, ExchangeError> {
        ExchangeRestClient::get_balances(self, symbol).await
    }

    async fn get_deposits(
        &self,
        request: Option<&DepositsRequest>,
    ) -> Result<Vec<Deposit>, ExchangeError> {
        ExchangeRestClient::get_deposits(self, request).await
    }

    async fn get_deposit_info(&self, tx_id: &str) -> Result<Deposit, ExchangeError> {
        ExchangeRestClient::get_deposit_info(self, tx_id).await
    }

    async fn get_refunds(
        &self,
        request: Option<&RefundsRequest>,
    ) -> Result<Vec<Refund>, ExchangeError> {
        ExchangeRestClient::get_refunds(self, request).await
    }

    async fn get_refund_info(&self, tx_id: &str) -> Result<Refund, ExchangeError> {
        ExchangeRestClient::get_refund_info(self, tx_id).await
    }

    async fn get_withdraws(
        &self,
        request: Option<&WithdrawsRequest>,
    ) -> Result<Vec<Withdrawal>, ExchangeError> {
        ExchangeRestClient::get_withdraws(self, request).await
    }

    async fn request_withdraw<B>(&self, body: &B) -> Result<Withdrawal, ExchangeError>
    where
        B: Serialize + Sync + ?Sized,
    {
        ExchangeRestClient::request_withdraw(self, body).await
    }

    async fn get_withdraw_info(&self, tx_id: &str) -> Result<Withdrawal, ExchangeError> {
        ExchangeRestClient::get_withdraw_info(self, tx_id).await
    }

    async fn get_orders(&self, request: Option<&OrdersRequest>) -> Result<Vec<Order>, ExchangeError> {
        ExchangeRestClient::get_orders(self, request).await
    }

    async fn submit_limit_order(&self, request: &LimitOrderRequest) -> Result<Order, ExchangeError> {
        ExchangeRestClient::submit_limit_order(self, request).await
    }

    async fn get_order_info(&self, order_id: &str) -> Result<Order, ExchangeError> {
        ExchangeRestClient::get_order_info(self, order_id).await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<Option<Order>, ExchangeError> {
        ExchangeRestClient::cancel_order(self, order_id).await
    }

    async fn get_trades(&self, request: Option<&TradesRequest>) -> Result<Vec<Trade>, ExchangeError> {
        ExchangeRestClient::get_trades(self, request).await
    }

    async fn get_trade_info(&self, trade_id: &str) -> Result<Trade, ExchangeError> {
        ExchangeRestClient::get_trade_info(self, trade_id).await
    }
}
