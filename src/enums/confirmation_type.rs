use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Serialize, Deserialize};
use strum_macros::Display;

/// The type of a mobile confirmation.
#[derive(Debug, Serialize, Deserialize, Display, FromPrimitive, IntoPrimitive, PartialEq, Eq, Clone, Copy)]
#[repr(u32)]
#[serde(from = "u32", into = "u32")]
pub enum ConfirmationType {
    /// Generic.
    Generic = 1,
    /// Confirmation to confirm a trade.
    Trade = 2,
    /// Confirmation to confirm a listing on the market.
    MarketSell = 3,
    /// Confirmation to opt out of a feature.
    FeatureOptOut = 4,
    /// Confirmation to change the phone number of the account.
    PhoneNumberChange = 5,
    /// Confirmation for account recovery.
    AccountRecovery = 6,
    /// Confirmation to create a Web API key.
    ApiKeyCreation = 9,
    /// A type not known to this crate.
    #[num_enum(catch_all)]
    Unknown(u32),
}

impl Default for ConfirmationType {
    fn default() -> Self {
        Self::Generic
    }
}
