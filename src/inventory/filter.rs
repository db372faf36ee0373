//! Predicates for choosing which items are included when loading an inventory.
//!
//! Any `Fn(&InventoryItem) -> bool` is an [`ItemFilter`]. Combine several with a
//! [`FilterChain`]:
//!
//! ```
//! use steam_community_session::inventory::{filters, FilterChain};
//!
//! let filter = FilterChain::new()
//!     .with(filters::has_amount)
//!     .with(filters::is_tradable)
//!     .with(|item: &steam_community_session::response::InventoryItem| item.appid == 440);
//!
//! assert_eq!(filter.len(), 3);
//! ```

use crate::response::InventoryItem;

/// Decides whether an item is included in the results.
pub trait ItemFilter: Send + Sync {
    /// Returns `true` if the item should be included.
    fn includes(&self, item: &InventoryItem) -> bool;
}

impl<F> ItemFilter for F
where
    F: Fn(&InventoryItem) -> bool + Send + Sync,
{
    fn includes(&self, item: &InventoryItem) -> bool {
        self(item)
    }
}

/// An ordered list of filters. An item is included only if every filter includes it. Filters
/// run in the order they were added and evaluation stops at the first filter which rejects the
/// item. An empty chain includes everything.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn ItemFilter>>,
}

impl FilterChain {
    /// Creates an empty [`FilterChain`].
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Adds a filter to the end of the chain.
    pub fn with<F>(mut self, filter: F) -> Self
    where
        F: ItemFilter + 'static,
    {
        self.push(filter);
        self
    }
    
    /// Adds a filter to the end of the chain.
    pub fn push<F>(&mut self, filter: F)
    where
        F: ItemFilter + 'static,
    {
        self.filters.push(Box::new(filter));
    }
    
    /// The number of filters in the chain.
    pub fn len(&self) -> usize {
        self.filters.len()
    }
    
    /// Whether the chain has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl ItemFilter for FilterChain {
    fn includes(&self, item: &InventoryItem) -> bool {
        self.filters.iter().all(|filter| filter.includes(item))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("len", &self.filters.len())
            .finish()
    }
}

/// Common filters.
pub mod filters {
    use super::ItemFilter;
    use crate::response::InventoryItem;
    
    /// Rejects items with an amount of zero.
    pub fn has_amount(item: &InventoryItem) -> bool {
        item.amount > 0
    }
    
    /// Rejects items which can't be traded, including items without a description.
    pub fn is_tradable(item: &InventoryItem) -> bool {
        item.is_tradable()
    }
    
    /// Rejects items which can't be listed on the market, including items without a
    /// description.
    pub fn is_marketable(item: &InventoryItem) -> bool {
        item.is_marketable()
    }
    
    /// Rejects items without a description.
    pub fn has_classinfo(item: &InventoryItem) -> bool {
        item.classinfo.is_some()
    }
    
    /// Includes only items with the given market hash name.
    pub fn market_hash_name<S>(name: S) -> impl ItemFilter
    where
        S: Into<String>,
    {
        let name = name.into();
        
        move |item: &InventoryItem| item.market_hash_name() == Some(name.as_str())
    }
}
