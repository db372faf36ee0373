use crate::enums::ConfirmationType;
use crate::types::{ConfirmationId, ConfirmationNonce, ServerTime};
use crate::serialize;
use std::fmt;
use chrono::serde::ts_seconds;
use serde::{Serialize, Deserialize};

/// Mobile confirmation. Used primarily for confirming trade offers or listing items on the
/// market.
///
/// The `id` and `nonce` belong to the listing they were fetched in and are sent back unchanged
/// when accepting or cancelling the confirmation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Confirmation {
    /// The ID of the confirmation.
    #[serde(with = "serialize::string")]
    pub id: ConfirmationId,
    /// The nonce, sometimes called the key of the confirmation.
    #[serde(with = "serialize::string")]
    pub nonce: ConfirmationNonce,
    /// Trade offer ID or market listing ID this confirmation is for.
    #[serde(with = "serialize::string")]
    pub creator_id: u64,
    /// The time the confirmation was created.
    #[serde(with = "ts_seconds")]
    pub creation_time: ServerTime,
    /// The confirmation type.
    #[serde(default)]
    pub r#type: ConfirmationType,
    /// The name of the confirmation type e.g. "Trade Offer".
    #[serde(default)]
    pub type_name: String,
    /// The cancel text.
    #[serde(default)]
    pub cancel: String,
    /// The accept text e.g. "Accept" or "Send Offer".
    #[serde(default)]
    pub accept: String,
    /// `true` if can be confirmed along with other confirmations.
    #[serde(default)]
    pub multi: bool,
    /// The headline, such as the name of the trade partner.
    #[serde(default)]
    pub headline: String,
    /// Lines describing what is being confirmed.
    #[serde(default)]
    pub summary: Vec<String>,
    /// The icon.
    #[serde(default)]
    pub icon: Option<String>,
    /// Warnings.
    #[serde(default)]
    pub warn: Option<Vec<String>>,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.r#type, self.headline)
    }
}

impl Confirmation {
    /// Description for items we are giving in a trade.
    pub fn giving(&self) -> Option<&str> {
        if self.r#type != ConfirmationType::Trade {
            return None;
        }
        
        self.summary.first().map(|s| s.as_str())
    }
    
    /// Description for items we are receiving in a trade.
    pub fn receiving(&self) -> Option<&str> {
        if self.r#type != ConfirmationType::Trade {
            return None;
        }
        
        self.summary.get(1).map(|s| s.as_str())
    }
}

/// The response after accepting or cancelling a confirmation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ConfirmationResult {
    /// Whether the operation succeeded.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub success: bool,
    /// A message describing why the operation failed.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::empty_string_is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn parses_trade_offer_confirmation() {
        let confirmation: Confirmation = serde_json::from_str(include_str!("fixtures/confirmation.json")).unwrap();
        
        assert_eq!(confirmation.id, 13799599785);
        assert_eq!(confirmation.nonce, 9141945700999917347);
        assert_eq!(confirmation.creator_id, 6470237294);
        assert_eq!(confirmation.creation_time.timestamp(), 1700000000);
        assert_eq!(confirmation.r#type, ConfirmationType::Trade);
        assert_eq!(confirmation.giving(), Some("You will give up your 1 item"));
        assert_eq!(confirmation.receiving(), Some("You will receive 2 items"));
        assert_eq!(confirmation.to_string(), "Trade - Gaben");
    }
    
    #[test]
    fn parses_failed_result() {
        let result: ConfirmationResult = serde_json::from_str(r#"{"success":false,"message":""}"#).unwrap();
        
        assert!(!result.success);
        assert_eq!(result.message, None);
    }
}
