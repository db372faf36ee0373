//! Paginated inventory retrieval.
//!
//! Steam serves inventories a page at a time. Each page carries its own set of descriptions which
//! are matched to the page's assets by class ID and instance ID.

mod builder;
mod filter;
mod helpers;
mod response;

pub use builder::InventoryPagerBuilder;
pub use filter::{filters, FilterChain, ItemFilter};
pub use helpers::InventoryPage;

use response::GetInventoryResponse;
use crate::SteamID;
use crate::enums::Language;
use crate::error::Error;
use crate::helpers::{url_with_params, COMMUNITY_HOSTNAME};
use crate::http::{check_ok, parses_response, HttpExecutor, HttpRequest};
use crate::response::{AppContext, Inventory};
use crate::types::{AppId, AssetId, ContextId};
use std::collections::HashMap;
use std::sync::Arc;
use reqwest::header::REFERER;

/// The number of items requested for the first page.
pub const FIRST_PAGE_COUNT: u32 = 250;
/// The number of items requested for every page after the first.
pub const NEXT_PAGE_COUNT: u32 = 75;

/// Fetches inventories from the Steam Community.
#[derive(Clone)]
pub struct InventoryPager {
    client: Arc<dyn HttpExecutor>,
    language: Language,
}

impl std::fmt::Debug for InventoryPager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryPager")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl InventoryPager {
    /// Builder for constructing an [`InventoryPager`].
    pub fn builder() -> InventoryPagerBuilder {
        InventoryPagerBuilder::new()
    }
    
    /// Creates a new [`InventoryPager`] which makes its requests through `client`.
    pub fn new(client: Arc<dyn HttpExecutor>) -> Self {
        Self {
            client,
            language: Language::default(),
        }
    }
    
    /// Gets a single page of an inventory, keeping only the items `filter` includes.
    /// 
    /// Use `None` (or `Some(0)`) as `start_assetid` to get the first page, then pass the
    /// `last_assetid` of the previous page for each page after it.
    pub async fn get_inventory_page<F>(
        &self,
        steamid: SteamID,
        appid: AppId,
        contextid: ContextId,
        start_assetid: Option<AssetId>,
        filter: &F,
    ) -> Result<InventoryPage, Error>
    where
        F: ItemFilter + ?Sized,
    {
        let sid = u64::from(steamid);
        let start_assetid = start_assetid.filter(|assetid| *assetid != 0);
        let count = match start_assetid {
            Some(_) => NEXT_PAGE_COUNT,
            None => FIRST_PAGE_COUNT,
        };
        let mut query = vec![
            ("l", self.language.to_string()),
            ("count", count.to_string()),
        ];
        
        if let Some(start_assetid) = start_assetid {
            query.push(("start_assetid", start_assetid.to_string()));
        }
        
        log::debug!(
            "Requesting inventory {sid}/{appid}/{contextid} starting at {start_assetid:?} ({count} items)",
        );
        
        let uri = url_with_params(
            &format!("{COMMUNITY_HOSTNAME}/inventory/{sid}/{appid}/{contextid}"),
            query,
        )?;
        let referer = format!("{COMMUNITY_HOSTNAME}/profiles/{sid}/inventory");
        let request = HttpRequest::get(uri)
            .header(REFERER, &referer);
        let response = self.client.execute(request).await?;
        let body: GetInventoryResponse = parses_response(response)?;

        // only a first page can stand for an empty inventory
        if start_assetid.is_some() && !body.success && body.error.is_none() {
            return Err(Error::MalformedResponse("Inventory page failed after more items were promised"));
        }

        helpers::into_inventory_page(body, filter)
    }
    
    /// Gets every page of an inventory, keeping only the items `filter` includes.
    /// 
    /// Pages are requested one after another. If any page fails the items collected so far are
    /// discarded and the error is returned.
    pub async fn get_filtered_inventory<F>(
        &self,
        steamid: SteamID,
        appid: AppId,
        contextid: ContextId,
        filter: &F,
    ) -> Result<Inventory, Error>
    where
        F: ItemFilter + ?Sized,
    {
        let mut inventory = Vec::new();
        let mut start_assetid = None;
        
        loop {
            let page = self.get_inventory_page(
                steamid,
                appid,
                contextid,
                start_assetid,
                filter,
            ).await?;
            
            inventory.extend(page.items);
            
            match page.last_assetid {
                Some(last_assetid) if page.more_items => {
                    // shouldn't occur, but we wouldn't want to request the same page endlessly
                    if start_assetid == Some(last_assetid) {
                        return Err(Error::MalformedResponse("Inventory cursor did not advance"));
                    }
                    
                    start_assetid = Some(last_assetid);
                },
                _ => break,
            }
        }
        
        Ok(inventory)
    }
    
    /// Gets every item in an inventory.
    pub async fn get_inventory(
        &self,
        steamid: SteamID,
        appid: AppId,
        contextid: ContextId,
    ) -> Result<Inventory, Error> {
        self.get_filtered_inventory(steamid, appid, contextid, &FilterChain::new()).await
    }
    
    /// Gets the apps and inventory contexts shown on a user's inventory page, keyed by app ID.
    pub async fn get_inventory_contexts(
        &self,
        steamid: SteamID,
    ) -> Result<HashMap<AppId, AppContext>, Error> {
        let sid = u64::from(steamid);
        let uri = url_with_params(
            &format!("{COMMUNITY_HOSTNAME}/profiles/{sid}/inventory/"),
            [("l", self.language.to_string())],
        )?;
        let response = self.client.execute(HttpRequest::get(uri)).await?;
        let body = check_ok(response)?;
        let html = String::from_utf8_lossy(&body);
        let contexts = helpers::parse_inventory_contexts(&html)?;
        
        Ok(contexts)
    }
}

impl From<InventoryPagerBuilder> for InventoryPager {
    fn from(builder: InventoryPagerBuilder) -> Self {
        Self {
            client: builder.client,
            language: builder.language,
        }
    }
}
