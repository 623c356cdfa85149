//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ExchangeError;
use crate::types::serde_helpers::string_or_number;
use crate::types::{Extra, Side, to_iso8601};

// ========== API key ==========

/// Response of the key-issuance endpoint.
///
/// The body is kept as sent. The key is read from `apiKey`, `api_key` or
/// `key`, or the body itself when it is a bare JSON string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ApiKeyResponse {
    /// Raw response body
    pub body: serde_json::Value,
}

impl ApiKeyResponse {
    /// The issued API key, if the body carries one.
    pub fn api_key(&self) -> Option<&str> {
        if let Some(key) = self.body.as_str() {
            return Some(key);
        }
        ["apiKey", "api_key", "key"]
            .iter()
            .find_map(|field| self.body.get(field)?.as_str())
    }
}

// ========== Balances ==========

/// Balance of one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Asset symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Amount free to trade or withdraw
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<Decimal>,
    /// Amount reserved by open orders and pending withdrawals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<Decimal>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Extra,
}

impl Balance {
    /// Available plus locked, when both are reported.
    pub fn total(&self) -> Option<Decimal> {
        Some(self.available? + self.locked?)
    }
}

// ========== Deposits, refunds, withdrawals ==========

/// A funding movement: deposit, refund or withdrawal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Record identifier assigned by the exchange
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// On-chain transaction hash
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    /// Asset symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Transferred amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Processing status
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation time as reported by the exchange
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Extra,
}

impl Transfer {
    /// The transaction hash if reported, otherwise the record identifier.
    pub fn identifier(&self) -> Option<&str> {
        self.tx_id.as_deref().or(self.id.as_deref())
    }
}

/// A deposit record.
pub type Deposit = Transfer;
/// A refund record.
pub type Refund = Transfer;
/// A withdrawal record.
pub type Withdrawal = Transfer;

/// Date-range filter for deposit and refund listings.
///
/// Dates use `YYYY-MM-DD-HH:MM:SS` (UTC). The filter only applies when all
/// three fields are set; otherwise the unfiltered listing is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferHistoryRequest {
    /// Range start
    pub start: Option<String>,
    /// Range end
    pub end: Option<String>,
    /// Asset symbol
    pub symbol: Option<String>,
}

impl TransferHistoryRequest {
    /// Create a complete filter.
    pub fn new(start: impl Into<String>, end: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
            symbol: Some(symbol.into()),
        }
    }

    pub(crate) fn query(&self) -> Result<Option<RangeQuery<'_>>, ExchangeError> {
        let (Some(start), Some(end), Some(symbol)) = (&self.start, &self.end, &self.symbol) else {
            return Ok(None);
        };
        Ok(Some(RangeQuery {
            start: to_iso8601(start)?,
            end: to_iso8601(end)?,
            symbol,
        }))
    }
}

/// Request for deposit history.
pub type DepositsRequest = TransferHistoryRequest;
/// Request for refund history.
pub type RefundsRequest = TransferHistoryRequest;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RangeQuery<'a> {
    pub start: String,
    pub end: String,
    pub symbol: &'a str,
}

/// Filter for the withdrawal listing.
///
/// Applies only when all four fields are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WithdrawsRequest {
    /// Withdrawal status
    pub status: Option<String>,
    /// Range start, `YYYY-MM-DD-HH:MM:SS`
    pub start: Option<String>,
    /// Range end, `YYYY-MM-DD-HH:MM:SS`
    pub end: Option<String>,
    /// Asset symbol
    pub symbol: Option<String>,
}

impl WithdrawsRequest {
    /// Create a complete filter.
    pub fn new(
        status: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            status: Some(status.into()),
            start: Some(start.into()),
            end: Some(end.into()),
            symbol: Some(symbol.into()),
        }
    }

    pub(crate) fn query(&self) -> Result<Option<WithdrawsQuery<'_>>, ExchangeError> {
        let (Some(status), Some(start), Some(end), Some(symbol)) =
            (&self.status, &self.start, &self.end, &self.symbol)
        else {
            return Ok(None);
        };
        Ok(Some(WithdrawsQuery {
            status,
            start: to_iso8601(start)?,
            end: to_iso8601(end)?,
            symbol,
        }))
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WithdrawsQuery<'a> {
    pub status: &'a str,
    pub start: String,
    pub end: String,
    pub symbol: &'a str,
}

/// Withdrawal request body.
///
/// Sent as-is; fields the exchange needs beyond these go in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithdrawRequest {
    /// Asset symbol
    pub symbol: String,
    /// Amount to withdraw
    pub amount: Decimal,
    /// Destination address
    pub address: String,
    /// Additional fields
    #[serde(flatten)]
    pub extra: Extra,
}

impl WithdrawRequest {
    /// Create a withdrawal request.
    pub fn new(symbol: impl Into<String>, amount: Decimal, address: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            address: address.into(),
            extra: Extra::new(),
        }
    }

    /// Add an extra body field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

// ========== Orders ==========

/// An order of the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Order identifier under its long name, when reported separately
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Pair identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    /// Order side as reported
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// Limit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Order amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Amount filled so far
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filled: Option<Decimal>,
    /// Order status
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation time as reported by the exchange
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Extra,
}

impl Order {
    /// `orderId` if reported, otherwise `id`.
    pub fn identifier(&self) -> Option<&str> {
        self.order_id.as_deref().or(self.id.as_deref())
    }

    /// The side parsed into [`Side`], if recognised.
    pub fn parsed_side(&self) -> Option<Side> {
        self.side.as_deref()?.parse().ok()
    }
}

/// Filter for the order listing.
///
/// Applies only when all four fields are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrdersRequest {
    /// Order status
    pub status: Option<String>,
    /// Range start, `YYYY-MM-DD-HH:MM:SS`
    pub start: Option<String>,
    /// Range end, `YYYY-MM-DD-HH:MM:SS`
    pub end: Option<String>,
    /// Pair identifier
    pub pair: Option<String>,
}

impl OrdersRequest {
    /// Create a complete filter.
    pub fn new(
        status: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        pair: impl Into<String>,
    ) -> Self {
        Self {
            status: Some(status.into()),
            start: Some(start.into()),
            end: Some(end.into()),
            pair: Some(pair.into()),
        }
    }

    pub(crate) fn query(&self) -> Result<Option<OrdersQuery<'_>>, ExchangeError> {
        let (Some(status), Some(start), Some(end), Some(pair)) =
            (&self.status, &self.start, &self.end, &self.pair)
        else {
            return Ok(None);
        };
        Ok(Some(OrdersQuery {
            status,
            start: to_iso8601(start)?,
            end: to_iso8601(end)?,
            pair,
        }))
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct OrdersQuery<'a> {
    pub status: &'a str,
    pub start: String,
    pub end: String,
    pub pair: &'a str,
}

/// Limit order submission body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitOrderRequest {
    /// Order amount in base asset
    pub amount: Decimal,
    /// Pair identifier
    pub pair: String,
    /// Limit price in quote asset
    pub price: Decimal,
    /// Order side
    pub side: Side,
}

impl LimitOrderRequest {
    /// Create a limit order.
    pub fn new(pair: impl Into<String>, side: Side, price: Decimal, amount: Decimal) -> Self {
        Self {
            amount,
            pair: pair.into(),
            price,
            side,
        }
    }

    /// Create a buy order.
    pub fn bid(pair: impl Into<String>, price: Decimal, amount: Decimal) -> Self {
        Self::new(pair, Side::Bid, price, amount)
    }

    /// Create a sell order.
    pub fn ask(pair: impl Into<String>, price: Decimal, amount: Decimal) -> Self {
        Self::new(pair, Side::Ask, price, amount)
    }
}

// ========== Trades ==========

/// A trade (fill) of the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Trade identifier
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Trade identifier under its long name, when reported separately
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<String>,
    /// Identifier of the order that was filled
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Pair identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    /// Side of the account's order as reported
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// Execution price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Executed amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Fee charged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Decimal>,
    /// Execution time as reported by the exchange
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Extra,
}

impl Trade {
    /// `tradeId` if reported, otherwise `id`.
    pub fn identifier(&self) -> Option<&str> {
        self.trade_id.as_deref().or(self.id.as_deref())
    }

    /// The side parsed into [`Side`], if recognised.
    pub fn parsed_side(&self) -> Option<Side> {
        self.side.as_deref()?.parse().ok()
    }
}

/// Filter for the trade listing.
///
/// Applies only when all four fields are set; otherwise every trade is
/// listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradesRequest {
    /// Range start, `YYYY-MM-DD-HH:MM:SS`
    pub start: Option<String>,
    /// Range end, `YYYY-MM-DD-HH:MM:SS`
    pub end: Option<String>,
    /// Pair identifier
    pub pair: Option<String>,
    /// Order identifier
    pub order_id: Option<String>,
}

impl TradesRequest {
    /// Create a complete filter.
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        pair: impl Into<String>,
        order_id: impl Into<String>,
    ) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
            pair: Some(pair.into()),
            order_id: Some(order_id.into()),
        }
    }

    pub(crate) fn query(&self) -> Result<Option<TradesQuery<'_>>, ExchangeError> {
        let (Some(start), Some(end), Some(pair), Some(order_id)) =
            (&self.start, &self.end, &self.pair, &self.order_id)
        else {
            return Ok(None);
        };
        Ok(Some(TradesQuery {
            start: to_iso8601(start)?,
            end: to_iso8601(end)?,
            pair,
            order_id,
        }))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TradesQuery<'a> {
    pub start: String,
    pub end: String,
    pub pair: &'a str,
    pub order_id: &'a str,
}
