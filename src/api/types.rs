//! Wire types shared with the watchlist backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a wallet record, determining its display bucket.
///
/// Tags other than `Watchlist`/`Store` are preserved verbatim so an
/// unrecognized value round-trips through list/update cycles even though no
/// bucket currently renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    Watchlist,
    Store,
    Other(String),
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Watchlist" => Tag::Watchlist,
            "Store" => Tag::Store,
            _ => Tag::Other(s),
        }
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Watchlist => "Watchlist".to_string(),
            Tag::Store => "Store".to_string(),
            Tag::Other(s) => s,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Watchlist => f.write_str("Watchlist"),
            Tag::Store => f.write_str("Store"),
            Tag::Other(s) => f.write_str(s),
        }
    }
}

/// A tagged wallet address as stored by the backend.
///
/// `address` acts as the primary key; the client holds no other identity or
/// version for a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletRecord {
    pub address: String,
    pub tag: Tag,
    /// Set by the backend at creation time; immutable once set.
    pub date_added: DateTime<Utc>,
}

impl WalletRecord {
    /// Calendar date for display. The canonical timestamp is never
    /// reparsed or recomputed from this.
    pub fn display_date(&self) -> String {
        self.date_added.format("%b %e, %Y").to_string()
    }
}

/// One row of a contract-interaction search. Ephemeral: never persisted,
/// replaced wholesale by the next search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionResult {
    pub address: String,
    #[serde(rename = "hasInteracted")]
    pub has_interacted: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddWalletRequest<'a> {
    pub address: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddWalletResponse {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateTagRequest<'a> {
    pub address: &'a str,
    pub tag: &'a Tag,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trips_known_values() {
        assert_eq!(serde_json::to_string(&Tag::Watchlist).unwrap(), "\"Watchlist\"");
        assert_eq!(serde_json::to_string(&Tag::Store).unwrap(), "\"Store\"");
        assert_eq!(
            serde_json::from_str::<Tag>("\"Watchlist\"").unwrap(),
            Tag::Watchlist
        );
        assert_eq!(serde_json::from_str::<Tag>("\"Store\"").unwrap(), Tag::Store);
    }

    #[test]
    fn test_unknown_tag_is_preserved_verbatim() {
        let tag = serde_json::from_str::<Tag>("\"Archived\"").unwrap();
        assert_eq!(tag, Tag::Other("Archived".to_string()));
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"Archived\"");
    }

    #[test]
    fn test_wallet_record_parses_iso_timestamp() {
        let record: WalletRecord = serde_json::from_str(
            r#"{"address":"0xABC","tag":"Watchlist","date_added":"2024-06-01T12:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(record.address, "0xABC");
        assert_eq!(record.tag, Tag::Watchlist);
        assert_eq!(record.display_date(), "Jun  1, 2024");
    }

    #[test]
    fn test_interaction_result_uses_camel_case_flag() {
        let result: InteractionResult =
            serde_json::from_str(r#"{"address":"0x1","hasInteracted":true}"#).unwrap();
        assert!(result.has_interacted);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("hasInteracted"));
    }
}
