use super::ClassInfo;
use crate::types::{AppId, AssetId, BuyOrderId, ClassId, ContextId, InstanceId};
use crate::serialize;
use std::num::ParseIntError;
use serde::{Serialize, Deserialize};

/// A point in an item's price history.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(try_from = "(String, f64, String)")]
pub struct PricePoint {
    /// The date as displayed by Steam e.g. `"Nov 27 2013 01: +0"`.
    pub date: String,
    /// The median sale price.
    pub price: f64,
    /// The number of items sold.
    pub volume: u64,
}

impl TryFrom<(String, f64, String)> for PricePoint {
    type Error = ParseIntError;
    
    fn try_from((date, price, volume): (String, f64, String)) -> Result<Self, Self::Error> {
        let volume = volume.replace(',', "").parse::<u64>()?;
        
        Ok(Self {
            date,
            price,
            volume,
        })
    }
}

/// A summary of an item's current prices.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PriceOverview {
    /// Whether the request succeeded.
    #[serde(default)]
    pub success: bool,
    /// The lowest listing price, formatted in the requested currency.
    #[serde(default)]
    pub lowest_price: Option<String>,
    /// The median sale price, formatted in the requested currency.
    #[serde(default)]
    pub median_price: Option<String>,
    /// The number of items sold in the last 24 hours.
    #[serde(default)]
    pub volume: Option<String>,
}

/// The response after listing an item for sale.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct SellItemResponse {
    /// Whether the item was listed.
    #[serde(default)]
    pub success: bool,
    /// Whether the listing needs to be confirmed.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub requires_confirmation: bool,
    /// Whether the listing needs to be confirmed using a mobile confirmation.
    #[serde(default)]
    pub needs_mobile_confirmation: bool,
    /// Whether the listing needs to be confirmed by email.
    #[serde(default)]
    pub needs_email_confirmation: bool,
    /// The domain of the email address the confirmation was sent to.
    #[serde(default)]
    pub email_domain: Option<String>,
    /// A message describing why the listing failed.
    #[serde(default)]
    pub message: Option<String>,
}

/// The response after placing a buy order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct BuyOrderResponse {
    /// The result code. `1` on success.
    pub success: i32,
    /// A message describing why the order failed.
    #[serde(default)]
    pub message: Option<String>,
    /// The ID of the created buy order.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub buy_orderid: BuyOrderId,
}

impl BuyOrderResponse {
    /// Whether the buy order was placed.
    pub fn is_success(&self) -> bool {
        self.success == 1
    }
}

/// The user's active market listings and buy orders.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MyListings {
    /// Whether the request succeeded.
    #[serde(default)]
    pub success: bool,
    /// The number of listings requested.
    #[serde(default)]
    pub pagesize: u64,
    /// The total number of active listings.
    #[serde(default)]
    pub total_count: u64,
    /// The index of the first listing.
    #[serde(default)]
    pub start: u64,
    /// The number of active listings.
    #[serde(default)]
    pub num_active_listings: u64,
    /// Active listings.
    #[serde(default)]
    pub listings: Vec<Listing>,
    /// Listings on hold.
    #[serde(default)]
    pub listings_on_hold: Vec<Listing>,
    /// Listings waiting to be confirmed.
    #[serde(default)]
    pub listings_to_confirm: Vec<Listing>,
    /// Buy orders.
    #[serde(default)]
    pub buy_orders: Vec<BuyOrder>,
}

/// A market listing.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Listing {
    /// The ID of the listing.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub listingid: u64,
    /// The time the listing was created.
    #[serde(default)]
    pub time_created: i64,
    /// The listed item.
    pub asset: ListingAsset,
    /// The price the buyer pays, in cents.
    #[serde(default)]
    pub price: u64,
    /// The original price, in cents.
    #[serde(default)]
    pub original_price: u64,
    /// The fee, in cents.
    #[serde(default)]
    pub fee: u64,
    /// The currency ID of the prices.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub currencyid: u32,
    /// The status of the listing.
    #[serde(default)]
    pub status: u32,
    /// Whether the listing is active.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub active: bool,
    /// The time the hold on the listing ends.
    #[serde(default)]
    pub time_finish_hold: u64,
    /// The creation date as displayed by Steam.
    #[serde(default)]
    pub time_created_str: Option<String>,
}

/// The item of a [`Listing`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ListingAsset {
    /// The app ID.
    pub appid: AppId,
    /// The context ID.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub contextid: ContextId,
    /// The asset ID.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub id: AssetId,
    /// The class ID.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub classid: ClassId,
    /// The instance ID.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub instanceid: InstanceId,
    /// The amount listed.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub amount: u64,
    /// The name of the item.
    #[serde(default)]
    pub name: String,
    /// The market hash name.
    #[serde(default)]
    pub market_hash_name: String,
}

/// A buy order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct BuyOrder {
    /// The ID of the buy order.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub buy_orderid: BuyOrderId,
    /// The app ID of the item.
    pub appid: AppId,
    /// The market hash name of the item.
    pub hash_name: String,
    /// The currency of the price.
    #[serde(default)]
    pub wallet_currency: u32,
    /// The price per item, in cents.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub price: u64,
    /// The quantity ordered.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub quantity: u64,
    /// The quantity not bought yet.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub quantity_remaining: u64,
}

/// Results of searching the market.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MarketSearchResults {
    /// Whether the request succeeded.
    #[serde(default)]
    pub success: bool,
    /// The index of the first result.
    #[serde(default)]
    pub start: u64,
    /// The number of results requested.
    #[serde(default)]
    pub pagesize: u64,
    /// The total number of results.
    #[serde(default)]
    pub total_count: u64,
    /// Details about the search.
    #[serde(default)]
    pub searchdata: Option<SearchData>,
    /// The results.
    #[serde(default)]
    pub results: Vec<MarketSearchItem>,
}

/// Details about a market search.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct SearchData {
    /// The search query.
    #[serde(default)]
    pub query: String,
    /// Whether descriptions were searched.
    #[serde(default)]
    pub search_descriptions: bool,
    /// The total number of results.
    #[serde(default)]
    pub total_count: u64,
    /// The number of results requested.
    #[serde(default)]
    pub pagesize: u64,
}

/// An item found by searching the market.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MarketSearchItem {
    /// The name of the item.
    pub name: String,
    /// The market hash name.
    pub hash_name: String,
    /// The number of listings.
    #[serde(default)]
    pub sell_listings: u64,
    /// The lowest listing price, in cents.
    #[serde(default)]
    pub sell_price: u64,
    /// The lowest listing price, formatted.
    #[serde(default)]
    pub sell_price_text: String,
    /// The recent sale price, formatted.
    #[serde(default)]
    pub sale_price_text: String,
    /// The name of the app.
    #[serde(default)]
    pub app_name: String,
    /// The URL of the app's icon.
    #[serde(default)]
    pub app_icon: String,
    /// The description of the item.
    pub asset_description: ClassInfo,
}
