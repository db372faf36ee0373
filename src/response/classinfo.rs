use crate::types::{AppId, ClassId, ClassInfoKey, InstanceId};
use crate::serialize;
use serde::{Serialize, Deserialize};

/// Describes an item: its names, icons and market flags. Many items in an inventory can share
/// one [`ClassInfo`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ClassInfo {
    /// The item's app ID.
    #[serde(default)]
    pub appid: Option<AppId>,
    /// The ID for this classinfo.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub classid: ClassId,
    /// The specific instance ID for this classinfo. `0` when there is none.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub instanceid: InstanceId,
    /// The name of the item.
    #[serde(default)]
    pub name: String,
    /// The name of the item on the Steam Community Market.
    #[serde(default)]
    pub market_name: String,
    /// The market hash name. This is used to link to the item on the Steam Community Market.
    #[serde(default)]
    pub market_hash_name: String,
    /// The color of the item's name.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_color: Option<String>,
    /// The background color for the item.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// The URL to the icon for the item.
    #[serde(default)]
    pub icon_url: String,
    /// The URL to the large icon for the item.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url_large: Option<String>,
    /// The item's type e.g. "Level 5 Tool".
    #[serde(default)]
    #[serde(rename = "type")]
    pub r#type: String,
    /// Whether this item can be traded or not.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub tradable: bool,
    /// Whether this item is marketable or not.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub marketable: bool,
    /// Whether this item is a commodity item on the Steam Community Market.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub commodity: bool,
    /// How many days the item has left until it can be traded.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub market_tradable_restriction: u32,
    /// How many days the item has left until it can be listed on the Steam Community Market.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub market_marketable_restriction: u32,
    /// Fraud warnings for this item.
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fraudwarnings: Vec<String>,
    /// Descriptions for this item.
    #[serde(default)]
    pub descriptions: Vec<Description>,
    /// Descriptions only visible to the owner of this item.
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner_descriptions: Vec<Description>,
    /// Tags for this item.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Actions for this item.
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Actions for this item on the Steam Community Market.
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub market_actions: Vec<Action>,
}

impl ClassInfo {
    /// The key used to match assets to this classinfo.
    pub fn key(&self) -> ClassInfoKey {
        ClassInfoKey::new(self.classid, self.instanceid)
    }

    /// Gets the tag belonging to `category`, e.g. "Quality" or "Rarity".
    pub fn get_tag(&self, category: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.category == category)
    }
}

/// A line of descriptive text for an item.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Description {
    /// The kind of text, usually `"text"` or `"html"`.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// The description message.
    pub value: String,
    /// A string representing the color e.g. `"FFFFFF"`.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A tag.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Tag {
    /// The internal name of this tag e.g. "Unique".
    pub internal_name: String,
    /// The display name of this tag.
    #[serde(alias = "localized_tag_name")]
    pub name: String,
    /// The category of this tag e.g. "Quality".
    pub category: String,
    /// The color associated with this tag.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// The display name of the category.
    #[serde(default)]
    #[serde(alias = "localized_category_name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

/// An action.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Action {
    /// The name of the action.
    pub name: String,
    /// The link for the action.
    pub link: String,
}
