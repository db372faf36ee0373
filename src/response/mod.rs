//! Models for responses.

mod classinfo;
mod confirmation;
mod inventory_context;
mod inventory_item;
mod market;

pub use classinfo::{Action, ClassInfo, Description, Tag};
pub use confirmation::{Confirmation, ConfirmationResult};
pub use inventory_context::{AppContext, InventoryContext};
pub use inventory_item::InventoryItem;
pub use market::{
    BuyOrder,
    BuyOrderResponse,
    Listing,
    ListingAsset,
    MarketSearchItem,
    MarketSearchResults,
    MyListings,
    PriceOverview,
    PricePoint,
    SearchData,
    SellItemResponse,
};

/// A user's inventory.
pub type Inventory = Vec<InventoryItem>;
