use super::ClassInfo;
use crate::types::{Amount, AppId, AssetId, ClassId, ClassInfoKey, ContextId, InstanceId};
use std::sync::Arc;

/// An item in a user's inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    /// The app ID e.g. 440 for Team Fortress 2 or 730 for Counter-Strike 2.
    pub appid: AppId,
    /// The context ID.
    pub contextid: ContextId,
    /// The unique asset ID. This value is unique to the item's `appid` and `contextid`.
    pub assetid: AssetId,
    /// The ID of the classinfo.
    pub classid: ClassId,
    /// The instance ID of the classinfo.
    pub instanceid: InstanceId,
    /// The amount. If this item is not stackable the amount will be `1`.
    pub amount: Amount,
    /// The description of this item, shared with other items of the same class from the same
    /// page of results. `None` if Steam did not include one.
    pub classinfo: Option<Arc<ClassInfo>>,
}

impl InventoryItem {
    /// The key used to match this item to its classinfo.
    pub fn classinfo_key(&self) -> ClassInfoKey {
        ClassInfoKey::new(self.classid, self.instanceid)
    }
    
    /// Whether this item can be traded. Items without a description are not considered
    /// tradable.
    pub fn is_tradable(&self) -> bool {
        self.classinfo.as_ref().is_some_and(|classinfo| classinfo.tradable)
    }
    
    /// Whether this item can be listed on the Steam Community Market. Items without a
    /// description are not considered marketable.
    pub fn is_marketable(&self) -> bool {
        self.classinfo.as_ref().is_some_and(|classinfo| classinfo.marketable)
    }
    
    /// The market hash name of this item, if it has a description.
    pub fn market_hash_name(&self) -> Option<&str> {
        self.classinfo.as_ref().map(|classinfo| classinfo.market_hash_name.as_str())
    }
}
