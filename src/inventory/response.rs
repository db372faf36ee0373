use crate::response::ClassInfo;
use crate::types::{Amount, AppId, AssetId, ClassId, ContextId, InstanceId};
use crate::serialize;
use serde::Deserialize;

/// A page of an inventory as returned by Steam.
#[derive(Debug, Deserialize)]
pub struct GetInventoryResponse {
    #[serde(default)]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub success: bool,
    #[serde(default)]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub more_items: bool,
    #[serde(default)]
    pub assets: Vec<RawAsset>,
    #[serde(default)]
    pub descriptions: Vec<ClassInfo>,
    #[serde(default)]
    pub last_assetid: Option<String>,
    #[serde(default)]
    pub total_inventory_count: u64,
    #[serde(default)]
    #[serde(alias = "Error")]
    #[serde(deserialize_with = "serialize::empty_string_is_none")]
    pub error: Option<String>,
}

/// An asset as returned by Steam, before it is matched with its description.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct RawAsset {
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub appid: AppId,
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub contextid: ContextId,
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub assetid: AssetId,
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub classid: ClassId,
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub instanceid: InstanceId,
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub amount: Amount,
}
