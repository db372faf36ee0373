use super::ItemFilter;
use super::response::GetInventoryResponse;
use crate::error::{Error, ParseHtmlError};
use crate::response::{AppContext, ClassInfo, InventoryItem};
use crate::types::{AppId, AssetId, ClassInfoKey};
use std::collections::HashMap;
use std::sync::Arc;
use lazy_regex::regex_captures;

/// A single page of an inventory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryPage {
    /// The items on this page which passed the filter, in the order Steam returned them.
    pub items: Vec<InventoryItem>,
    /// Whether there are more pages after this one.
    pub more_items: bool,
    /// The cursor for the next page. Always present when `more_items` is `true` and `None`
    /// otherwise.
    pub last_assetid: Option<AssetId>,
    /// The total number of items in the inventory.
    pub total_inventory_count: u64,
}

/// Matches the assets of a page with the page's descriptions, keeping the items the filter
/// includes.
pub fn into_inventory_page<F>(
    body: GetInventoryResponse,
    filter: &F,
) -> Result<InventoryPage, Error>
where
    F: ItemFilter + ?Sized,
{
    if !body.success {
        return match body.error {
            Some(message) => Err(Error::Inventory(message)),
            None => {
                // Steam also responds like this for some transient errors.
                log::warn!("Inventory response was unsuccessful without an error message, treating it as empty");
                Ok(InventoryPage::default())
            },
        };
    }
    
    let classinfos = body.descriptions
        .into_iter()
        .map(|classinfo| (classinfo.key(), Arc::new(classinfo)))
        .collect::<HashMap<ClassInfoKey, Arc<ClassInfo>>>();
    let items = body.assets
        .into_iter()
        .map(|asset| {
            let key = ClassInfoKey::new(asset.classid, asset.instanceid);
            
            InventoryItem {
                appid: asset.appid,
                contextid: asset.contextid,
                assetid: asset.assetid,
                classid: asset.classid,
                instanceid: asset.instanceid,
                amount: asset.amount,
                classinfo: classinfos.get(&key).cloned(),
            }
        })
        .filter(|item| filter.includes(item))
        .collect::<Vec<_>>();
    let last_assetid = if body.more_items {
        Some(parse_cursor(body.last_assetid)?)
    } else {
        None
    };
    
    Ok(InventoryPage {
        items,
        more_items: body.more_items,
        last_assetid,
        total_inventory_count: body.total_inventory_count,
    })
}

/// Parses the cursor for the next page. `0` is never a valid cursor since it means to start
/// from the beginning.
fn parse_cursor(last_assetid: Option<String>) -> Result<AssetId, Error> {
    let last_assetid = last_assetid.unwrap_or_default();
    
    match last_assetid.parse::<AssetId>() {
        Ok(0) | Err(_) => Err(Error::InvalidCursor(last_assetid)),
        Ok(assetid) => Ok(assetid),
    }
}

/// Parses the apps and contexts embedded in a user's inventory page.
pub fn parse_inventory_contexts(
    html: &str,
) -> Result<HashMap<AppId, AppContext>, ParseHtmlError> {
    let (_, json) = regex_captures!(r#"g_rgAppContextData\s*=\s*(\{.*?\}|\[\]);\s*\r?\n"#, html)
        .ok_or(ParseHtmlError::Malformed("Missing g_rgAppContextData"))?;
    
    // an inventory without any apps is an empty array
    if json == "[]" {
        return Ok(HashMap::new());
    }
    
    Ok(serde_json::from_str(json)?)
}
