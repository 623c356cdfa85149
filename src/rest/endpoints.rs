//! Exchange REST API endpoint constants.
//!
//! Endpoints are path segments appended to the base URL, so a base URL with
//! a path prefix (e.g. `/v1`) is preserved.

/// Base URL for the exchange REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.exchange.io/v1";

/// Header carrying the API key on authenticated requests.
pub const API_KEY_HEADER: &str = "API-Key";

/// Header carrying the wallet signature on the key-issuance request.
pub const SIGNATURE_HEADER: &str = "api-sig";

/// Public endpoints (no authentication required).
pub mod public {
    /// Order book listing; `/{pair}` for one book.
    pub const ORDERBOOKS: &str = "orderbooks";
    /// Depth sub-resource of an order book.
    pub const DEPTH: &str = "depth";
    /// Best bid/ask sub-resource of an order book.
    pub const QUOTE: &str = "quote";
    /// Trade history sub-resource of an order book.
    pub const TRADES: &str = "trades";
    /// Exchange status.
    pub const STATUS: &str = "status";
    /// Listed symbols; `/{name}` for one symbol.
    pub const SYMBOLS: &str = "symbols";
}

/// Private endpoints (API key required).
pub mod private {
    /// API-key issuance (wallet signature instead of API key).
    pub const API_KEYS: &str = "apikeys";
    /// Balances; `/{symbol}` for one asset.
    pub const BALANCES: &str = "balances";
    /// Deposits; `/{tx_id}` for one deposit.
    pub const DEPOSITS: &str = "deposits";
    /// Refunds; `/{tx_id}` for one refund.
    pub const REFUNDS: &str = "refunds";
    /// Withdrawals; `/{tx_id}` for one withdrawal.
    pub const WITHDRAWS: &str = "withdraws";
    /// Orders; `/{order_id}` for one order.
    pub const ORDERS: &str = "orders";
    /// Trades; `/{trade_id}` for one trade.
    pub const TRADES: &str = "trades";
}
