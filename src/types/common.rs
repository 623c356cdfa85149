//! Common domain types for the exchange API.

use serde::{Deserialize, Serialize};

/// Side of an order on the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Bid,
    /// Sell order
    Ask,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Bid => write!(f, "bid"),
            Side::Ask => write!(f, "ask"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bid" | "buy" => Ok(Side::Bid),
            "ask" | "sell" => Ok(Side::Ask),
            other => Err(format!("unknown order side: {other}")),
        }
    }
}

/// Fields of a response record that have no dedicated struct field.
///
/// Records flatten everything they do not name into this map, so no part of
/// the payload is dropped during decoding.
pub type Extra = std::collections::HashMap<String, serde_json::Value>;
