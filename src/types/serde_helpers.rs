//! Serde helpers for the exchange's loosely typed payloads.
//!
//! The exchange does not pin down every payload shape: identifiers may come
//! back as strings or numbers, and a resource may be returned as a single
//! object or as a list. These helpers absorb that variance.

use serde::{Deserialize, Deserializer, Serializer};

/// A payload that is either one record or a list of records.
///
/// Converts into a `Vec<T>` either way.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A JSON array of records
    Many(Vec<T>),
    /// A single JSON object
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Serialize/deserialize an optional identifier that may be a JSON string
/// or a JSON number.
///
/// # Example
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use wallet_exchange_client::types::serde_helpers::string_or_number;
///
/// #[derive(Serialize, Deserialize, Debug)]
/// struct Record {
///     #[serde(default, with = "string_or_number", skip_serializing_if = "Option::is_none")]
///     id: Option<String>,
/// }
///
/// let numeric: Record = serde_json::from_str(r#"{"id":42}"#).unwrap();
/// assert_eq!(numeric.id.as_deref(), Some("42"));
///
/// let text: Record = serde_json::from_str(r#"{"id":"ab-1"}"#).unwrap();
/// assert_eq!(text.id.as_deref(), Some("ab-1"));
/// ```
pub mod string_or_number {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    /// Serialize the identifier as a string.
    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(id) => serializer.serialize_str(id),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize a string, a number, or null.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
            Raw::Text(text) => text,
            Raw::Number(number) => number.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    #[test]
    fn test_one_or_many_list() {
        let parsed: OneOrMany<Item> =
            serde_json::from_str(r#"[{"name":"a"},{"name":"b"}]"#).unwrap();
        let items: Vec<Item> = parsed.into();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "b");
    }

    #[test]
    fn test_one_or_many_single() {
        let parsed: OneOrMany<Item> = serde_json::from_str(r#"{"name":"solo"}"#).unwrap();
        let items: Vec<Item> = parsed.into();
        assert_eq!(items, vec![Item { name: "solo".into() }]);
    }

    #[test]
    fn test_string_or_number_null() {
        #[derive(Deserialize)]
        struct Record {
            #[serde(default, with = "string_or_number")]
            id: Option<String>,
        }

        let record: Record = serde_json::from_str(r#"{"id":null}"#).unwrap();
        assert!(record.id.is_none());
        let record: Record = serde_json::from_str(r#"{}"#).unwrap();
        assert!(record.id.is_none());
    }
}
