//! Common types used across the exchange client library.

pub mod common;
pub mod datetime;
pub mod serde_helpers;

pub use common::*;
pub use datetime::{format_iso8601, to_iso8601};
