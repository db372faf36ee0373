use crate::types::{AppId, ContextId};
use crate::serialize;
use std::collections::HashMap;
use serde::{Serialize, Deserialize};

/// An app shown on a user's inventory page along with its inventory contexts.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AppContext {
    /// The app ID.
    pub appid: AppId,
    /// The name of the app.
    pub name: String,
    /// The URL of the app's icon.
    #[serde(default)]
    pub icon: String,
    /// The URL of the app's store page.
    #[serde(default)]
    pub link: String,
    /// The number of items the user owns in this app across all contexts.
    #[serde(default)]
    pub asset_count: u64,
    /// The URL of the app's inventory logo.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_logo: Option<String>,
    /// Trade permissions e.g. `"FULL"`.
    #[serde(default)]
    pub trade_permissions: String,
    /// Whether Steam failed to load this app's inventory.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub load_failed: bool,
    /// Whether the inventory is only visible to its owner.
    #[serde(default)]
    pub owner_only: bool,
    /// The contexts of this app, keyed by context ID.
    #[serde(default)]
    #[serde(rename = "rgContexts")]
    pub contexts: HashMap<ContextId, InventoryContext>,
}

/// A single inventory context of an app, e.g. the "Backpack" of Team Fortress 2.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct InventoryContext {
    /// The context ID.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub id: ContextId,
    /// The name of the context.
    pub name: String,
    /// The number of items in this context.
    #[serde(default)]
    pub asset_count: u64,
}
