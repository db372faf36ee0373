//! Reads Steam Community inventories, makes market requests and answers mobile confirmations
//! using an existing web session.
//!
//! Logging in is not handled here. Every API takes an [`HttpExecutor`] carrying your session's
//! cookies, usually built with [`helpers::client_from_cookies`].

pub mod enums;
pub mod error;
pub mod helpers;
pub mod http;
pub mod inventory;
pub mod market;
pub mod mobile_api;
pub mod response;
pub mod serialize;
pub mod time;
pub mod types;

#[cfg(test)]
mod test_helpers;

pub use error::Error;
pub use http::HttpExecutor;
pub use inventory::{InventoryPager, InventoryPagerBuilder};
pub use market::{MarketAPI, MarketAPIBuilder};
pub use mobile_api::{MobileAPI, MobileAPIBuilder};
pub use time::{SteamTimeOracle, TimeOracle};
pub use steamid_ng::SteamID;
