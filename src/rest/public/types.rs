//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::serde_helpers::string_or_number;
use crate::types::{Extra, Side};

/// Summary of one order book (market).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderbookInfo {
    /// Pair identifier, e.g. `ETH-USDC`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    /// Base asset symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Quote asset symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    /// Trading status of the book
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// A price level of an order book.
///
/// Accepts both `{"price": .., "amount": ..}` and `[price, amount, ..]`.
/// Array entries past the amount are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceLevel {
    /// Level price
    pub price: Decimal,
    /// Total amount resting at this price
    pub amount: Decimal,
}

impl<'de> Deserialize<'de> for PriceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Object { price: Decimal, amount: Decimal },
            Sequence(Vec<serde_json::Value>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Object { price, amount } => Ok(PriceLevel { price, amount }),
            Raw::Sequence(items) => {
                let [price, amount, ..] = items.as_slice() else {
                    return Err(D::Error::custom("price level needs a price and an amount"));
                };
                let decode = |value: &serde_json::Value| {
                    <Decimal as Deserialize>::deserialize(value).map_err(D::Error::custom)
                };
                Ok(PriceLevel {
                    price: decode(price)?,
                    amount: decode(amount)?,
                })
            }
        }
    }
}

/// Order book depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderbookDepth {
    /// Pair identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    /// Bid levels, best first
    #[serde(default)]
    pub bids: Vec<PriceLevel>,
    /// Ask levels, best first
    #[serde(default)]
    pub asks: Vec<PriceLevel>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Extra,
}

impl OrderbookDepth {
    /// Get the best bid level.
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    /// Get the best ask level.
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    /// Get the spread between best ask and best bid.
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()?.price - self.best_bid()?.price)
    }
}

/// Best bid and ask of an order book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Pair identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    /// Best bid price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid: Option<Decimal>,
    /// Best ask price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask: Option<Decimal>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// A public trade on an order book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicTrade {
    /// Trade identifier
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Trade identifier under its long name, when reported separately
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<String>,
    /// Execution price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Executed amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Taker side as reported
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// Execution time as reported by the exchange
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Extra,
}

impl PublicTrade {
    /// `tradeId` if reported, otherwise `id`.
    pub fn identifier(&self) -> Option<&str> {
        self.trade_id.as_deref().or(self.id.as_deref())
    }

    /// The taker side parsed into [`Side`], if recognised.
    pub fn parsed_side(&self) -> Option<Side> {
        self.side.as_deref()?.parse().ok()
    }
}

/// Exchange status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeStatus {
    /// Status label, e.g. `online`
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Extra,
}

/// A listed symbol (asset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    /// Symbol, e.g. `ETH`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Display name, when reported separately
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Decimal places used for amounts, as reported
    #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub decimals: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Extra,
}

impl SymbolInfo {
    /// Decimal places as a number, if reported as an integer.
    pub fn decimal_places(&self) -> Option<u32> {
        self.decimals.as_deref()?.parse().ok()
    }
}

/// Query for [`crate::rest::ExchangeRestClient::get_trade_history`].
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TradeHistoryQuery<'a> {
    pub date: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_level_shapes() {
        let object: PriceLevel = serde_json::from_str(r#"{"price":"100.5","amount":2}"#).unwrap();
        let tuple: PriceLevel = serde_json::from_str(r#"["100.5","2"]"#).unwrap();
        assert_eq!(object, tuple);
        assert_eq!(object.price, Decimal::new(1005, 1));
    }

    #[test]
    fn test_depth_spread() {
        let depth: OrderbookDepth = serde_json::from_value(serde_json::json!({
            "pair": "ETH-USDC",
            "bids": [["2000.0", "1.5"], ["1999.5", "3"]],
            "asks": [["2001.0", "0.7"]],
            "timestamp": 1700000000000u64
        }))
        .unwrap();

        assert_eq!(depth.best_bid().unwrap().amount, Decimal::new(15, 1));
        assert_eq!(depth.spread(), Some(Decimal::new(10, 1)));
        assert!(depth.extra.contains_key("timestamp"));
    }

    #[test]
    fn test_price_level_extra_entries() {
        let level: PriceLevel = serde_json::from_str(r#"["100.5", 2, 1700000000000]"#).unwrap();
        assert_eq!(level.amount, Decimal::new(2, 0));
        assert!(serde_json::from_str::<PriceLevel>(r#"["100.5"]"#).is_err());
    }

    #[test]
    fn test_symbol_info_symbol_and_name() {
        let info: SymbolInfo = serde_json::from_str(
            r#"{"symbol":"ETH","name":"Ether","decimals":18,"contract":"0x0"}"#,
        )
        .unwrap();
        assert_eq!(info.symbol.as_deref(), Some("ETH"));
        assert_eq!(info.name.as_deref(), Some("Ether"));
        assert_eq!(info.decimal_places(), Some(18));
        assert_eq!(info.extra["contract"], "0x0");

        let text_decimals: SymbolInfo = serde_json::from_str(r#"{"decimals":"6"}"#).unwrap();
        assert_eq!(text_decimals.decimal_places(), Some(6));
    }

    #[test]
    fn test_public_trade_with_id_and_trade_id() {
        let trade: PublicTrade = serde_json::from_str(
            r#"{"id":981,"tradeId":"t-981","price":"10","amount":"1","side":"sell","createdAt":1700000000000}"#,
        )
        .unwrap();
        assert_eq!(trade.id.as_deref(), Some("981"));
        assert_eq!(trade.identifier(), Some("t-981"));
        assert_eq!(trade.parsed_side(), Some(Side::Ask));
        assert_eq!(trade.created_at.as_deref(), Some("1700000000000"));
    }

    #[test]
    fn test_numeric_status() {
        let status: ExchangeStatus = serde_json::from_str(r#"{"status":1}"#).unwrap();
        assert_eq!(status.status.as_deref(), Some("1"));
    }
}
