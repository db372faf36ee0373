//! Types for common values in Steam responses.

use std::fmt;

/// Uniquely identifies an application on Steam. For example: 440 for Team Fortress 2.
pub type AppId = u32;
/// A context ID belonging to an [`AppId`].
pub type ContextId = u64;
/// An asset ID unique to an [`AppId`] + [`ContextId`] combination.
pub type AssetId = u64;
/// An amount for stackable items. For non-stackable items this is simply `1`.
pub type Amount = u64;
/// An ID for a [`ClassInfo`](crate::response::ClassInfo) which provides a general overview of
/// an item.
pub type ClassId = u64;
/// A more specific instance of a [`ClassInfo`](crate::response::ClassInfo). `0` when the class
/// has no specific instance.
pub type InstanceId = u64;
/// The ID of a mobile confirmation.
pub type ConfirmationId = u64;
/// The nonce of a mobile confirmation. Sometimes referred to as the confirmation key.
pub type ConfirmationNonce = u64;
/// The ID of a buy order on the Steam Community Market.
pub type BuyOrderId = u64;
/// A time in seconds since the unix epoch, as reported by Steam's servers.
pub type Timestamp = i64;

pub use crate::time::ServerTime;

/// Key for looking up a description within a single inventory page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassInfoKey {
    /// The class ID.
    pub classid: ClassId,
    /// The instance ID.
    pub instanceid: InstanceId,
}

impl ClassInfoKey {
    /// Creates a new [`ClassInfoKey`].
    pub fn new(classid: ClassId, instanceid: InstanceId) -> Self {
        Self {
            classid,
            instanceid,
        }
    }
}

impl From<(ClassId, InstanceId)> for ClassInfoKey {
    fn from((classid, instanceid): (ClassId, InstanceId)) -> Self {
        Self::new(classid, instanceid)
    }
}

impl fmt::Display for ClassInfoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.classid, self.instanceid)
    }
}
