//! The Steam Community Market.
//!
//! Each method is a single request decoded into a fixed shape.

mod builder;
mod helpers;

pub use builder::MarketAPIBuilder;
pub use helpers::{clean_price, parse_wallet_balance, CleanedPrice};

use crate::SteamID;
use crate::enums::{Currency, Language};
use crate::error::{Error, ParameterError};
use crate::helpers::{url_with_params, COMMUNITY_HOSTNAME};
use crate::http::{check_ok, parse_body, parses_response, HttpExecutor, HttpRequest};
use crate::response::{
    BuyOrderResponse,
    InventoryItem,
    MarketSearchResults,
    MyListings,
    PriceOverview,
    PricePoint,
    SellItemResponse,
};
use crate::types::{Amount, AppId, BuyOrderId};
use std::sync::Arc;
use reqwest::header::REFERER;
use serde::Deserialize;
use serde_json::value::RawValue;
use url::form_urlencoded;

/// The API for the Steam Community Market.
#[derive(Clone)]
pub struct MarketAPI {
    client: Arc<dyn HttpExecutor>,
    steamid: SteamID,
    sessionid: Option<String>,
    language: Language,
}

impl std::fmt::Debug for MarketAPI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketAPI")
            .field("steamid", &u64::from(self.steamid))
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl MarketAPI {
    /// Builder for constructing a [`MarketAPI`].
    pub fn builder() -> MarketAPIBuilder {
        MarketAPIBuilder::new()
    }
    
    /// Gets the sale history of an item. Each point is the median price and volume for a period.
    pub async fn get_price_history(
        &self,
        appid: AppId,
        market_hash_name: &str,
    ) -> Result<Vec<PricePoint>, Error> {
        #[derive(Deserialize)]
        struct GetPriceHistoryResponse {
            #[serde(default)]
            success: bool,
            #[serde(default)]
            prices: Option<Box<RawValue>>,
        }
        
        let uri = url_with_params(
            &Self::get_url("/market/pricehistory/"),
            [
                ("appid", appid.to_string()),
                ("market_hash_name", market_hash_name.to_string()),
            ],
        )?;
        let response = self.client.execute(HttpRequest::get(uri)).await?;
        let body = check_ok(response)?;
        let body: GetPriceHistoryResponse = parse_body(&body)?;
        
        if !body.success {
            return Err(Error::CannotLoadPrices);
        }
        
        let prices = body.prices
            .ok_or(Error::CannotLoadPrices)?;
        let prices = serde_json::from_str::<Vec<PricePoint>>(prices.get())?;
        
        Ok(prices)
    }
    
    /// Gets the lowest and median prices of an item.
    pub async fn get_price_overview(
        &self,
        appid: AppId,
        country: &str,
        currency: Currency,
        market_hash_name: &str,
    ) -> Result<PriceOverview, Error> {
        let uri = url_with_params(
            &Self::get_url("/market/priceoverview/"),
            [
                ("appid", appid.to_string()),
                ("country", country.to_string()),
                ("currency", currency.id().to_string()),
                ("market_hash_name", market_hash_name.to_string()),
            ],
        )?;
        let response = self.client.execute(HttpRequest::get(uri)).await?;
        let body = check_ok(response)?;
        
        parse_body(&body)
    }
    
    /// Lists an item for sale. `price` is what you receive in cents, before fees are added.
    pub async fn sell_item(
        &self,
        item: &InventoryItem,
        amount: Amount,
        price: u64,
    ) -> Result<SellItemResponse, Error> {
        let sessionid = self.sessionid()?;
        let referer = format!("{COMMUNITY_HOSTNAME}/profiles/{}/inventory/", u64::from(self.steamid));
        
        log::debug!("Listing {}/{}/{} for {price}", item.appid, item.contextid, item.assetid);
        
        let request = HttpRequest::post(Self::get_url("/market/sellitem/"))
            .header(REFERER, &referer)
            .form(vec![
                ("amount", amount.to_string()),
                ("appid", item.appid.to_string()),
                ("assetid", item.assetid.to_string()),
                ("contextid", item.contextid.to_string()),
                ("price", price.to_string()),
                ("sessionid", sessionid.to_string()),
            ]);
        let response = self.client.execute(request).await?;
        let body = check_ok(response)?;
        
        parse_body(&body)
    }
    
    /// Places a buy order. `price_total` is the price of all items together in cents.
    /// 
    /// Check [`BuyOrderResponse::is_success`] to see whether the order was placed.
    pub async fn create_buy_order(
        &self,
        appid: AppId,
        currency: Currency,
        market_hash_name: &str,
        price_total: u64,
        quantity: u32,
    ) -> Result<BuyOrderResponse, Error> {
        let sessionid = self.sessionid()?;
        // spaces are encoded as "+" by the form encoder
        let listing_name = form_urlencoded::byte_serialize(market_hash_name.as_bytes())
            .collect::<String>()
            .replace('+', "%20");
        let referer = Self::get_url(&format!("/market/listings/{appid}/{listing_name}"));
        
        log::debug!("Placing buy order for {quantity} {market_hash_name} at {price_total}");
        
        let request = HttpRequest::post(Self::get_url("/market/createbuyorder/"))
            .header(REFERER, &referer)
            .form(vec![
                ("appid", appid.to_string()),
                ("currency", currency.id().to_string()),
                ("market_hash_name", market_hash_name.to_string()),
                ("price_total", price_total.to_string()),
                ("quantity", quantity.to_string()),
                ("sessionid", sessionid.to_string()),
            ]);
        let response = self.client.execute(request).await?;
        
        parses_response(response)
    }
    
    /// Cancels a buy order.
    pub async fn cancel_buy_order(
        &self,
        buy_orderid: BuyOrderId,
    ) -> Result<(), Error> {
        let sessionid = self.sessionid()?;
        let request = HttpRequest::post(Self::get_url("/market/cancelbuyorder/"))
            .header(REFERER, &Self::get_url("/market"))
            .form(vec![
                ("sessionid", sessionid.to_string()),
                ("buy_orderid", buy_orderid.to_string()),
            ]);
        let response = self.client.execute(request).await?;
        
        check_ok(response)?;
        Ok(())
    }
    
    /// Gets your active listings and buy orders.
    pub async fn get_my_listings(
        &self,
        start: u32,
        count: u32,
    ) -> Result<MyListings, Error> {
        let uri = url_with_params(
            &Self::get_url("/market/mylistings"),
            [
                ("start", start.to_string()),
                ("count", count.to_string()),
                ("norender", "1".to_string()),
                ("l", self.language.to_string()),
            ],
        )?;
        let response = self.client.execute(HttpRequest::get(uri)).await?;
        let body = check_ok(response)?;
        
        parse_body(&body)
    }
    
    /// Gets a page of the items listed on the market for an app.
    pub async fn search_market(
        &self,
        appid: AppId,
        start: u32,
        count: u32,
    ) -> Result<MarketSearchResults, Error> {
        let uri = url_with_params(
            &Self::get_url("/market/search/render/"),
            [
                ("norender", "1".to_string()),
                ("appid", appid.to_string()),
                ("start", start.to_string()),
                ("count", count.to_string()),
                ("l", self.language.to_string()),
            ],
        )?;
        let response = self.client.execute(HttpRequest::get(uri)).await?;
        let body = check_ok(response)?;
        
        parse_body(&body)
    }
    
    /// Gets your wallet balance as displayed on the Steam Community e.g. `"$12.34"`. Use
    /// [`clean_price`] to get the amount and currency.
    pub async fn get_wallet_balance(
        &self,
    ) -> Result<String, Error> {
        let response = self.client.execute(HttpRequest::get(Self::get_url("/"))).await?;
        let body = check_ok(response)?;
        let balance = parse_wallet_balance(&String::from_utf8_lossy(&body))?;
        
        Ok(balance)
    }
    
    fn sessionid(&self) -> Result<&str, ParameterError> {
        self.sessionid.as_deref().ok_or(ParameterError::NoSessionId)
    }
    
    fn get_url(pathname: &str) -> String {
        format!("{COMMUNITY_HOSTNAME}{pathname}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{query_of, MockExecutor};
    use reqwest::{Method, StatusCode};
    
    const STEAMID: u64 = 76561198080179568;
    
    fn market_api(client: &Arc<MockExecutor>) -> MarketAPI {
        MarketAPI::builder()
            .steamid(SteamID::from(STEAMID))
            .sessionid("abc123")
            .client(client.clone())
            .build()
            .unwrap()
    }
    
    fn form_value<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request.form.as_ref()?
            .iter()
            .find(|(key, _value)| *key == name)
            .map(|(_key, value)| value.as_str())
    }
    
    fn item() -> InventoryItem {
        InventoryItem {
            appid: 440,
            contextid: 2,
            assetid: 11040547930,
            classid: 2674,
            instanceid: 0,
            amount: 1,
            classinfo: None,
        }
    }
    
    #[tokio::test]
    async fn gets_price_history() {
        let client = MockExecutor::new()
            .respond_json(include_str!("fixtures/pricehistory.json"));
        let prices = market_api(&client)
            .get_price_history(440, "Mann Co. Supply Crate Key")
            .await
            .unwrap();
        let query = query_of(&client.requests()[0]);
        
        assert_eq!(query["market_hash_name"], "Mann Co. Supply Crate Key");
        assert_eq!(prices.len(), 3);
        assert_eq!(prices[2].price, 2.171);
        assert_eq!(prices[2].volume, 1024);
    }
    
    #[tokio::test]
    async fn unsuccessful_price_history() {
        let client = MockExecutor::new()
            .respond_json(r#"{"success":false,"prices":false}"#);
        let error = market_api(&client)
            .get_price_history(440, "Mann Co. Supply Crate Key")
            .await
            .unwrap_err();
        
        assert!(matches!(error, Error::CannotLoadPrices));
    }
    
    #[tokio::test]
    async fn price_history_with_wrong_shape_is_parse_error() {
        let client = MockExecutor::new()
            .respond_json(r#"{"success":true,"prices":[["Nov 27 2013 01: +0","2.354","1034"]]}"#);
        let error = market_api(&client)
            .get_price_history(440, "Mann Co. Supply Crate Key")
            .await
            .unwrap_err();
        
        assert!(matches!(error, Error::Parse(_)));
    }
    
    #[tokio::test]
    async fn gets_price_overview() {
        let client = MockExecutor::new()
            .respond_json(r#"{"success":true,"lowest_price":"$2.17","volume":"12,345","median_price":"$2.16"}"#);
        let overview = market_api(&client)
            .get_price_overview(440, "US", Currency::USD, "Mann Co. Supply Crate Key")
            .await
            .unwrap();
        let query = query_of(&client.requests()[0]);
        
        assert_eq!(query["currency"], "1");
        assert_eq!(query["country"], "US");
        assert_eq!(overview.lowest_price.as_deref(), Some("$2.17"));
        assert_eq!(overview.volume.as_deref(), Some("12,345"));
    }
    
    #[tokio::test]
    async fn sells_item() {
        let client = MockExecutor::new()
            .respond_json(r#"{"success":true,"requires_confirmation":1,"needs_mobile_confirmation":true,"needs_email_confirmation":false,"email_domain":"example.com"}"#);
        let response = market_api(&client)
            .sell_item(&item(), 1, 150)
            .await
            .unwrap();
        let requests = client.requests();
        let request = &requests[0];
        
        assert!(response.requires_confirmation);
        assert!(response.needs_mobile_confirmation);
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "https://steamcommunity.com/market/sellitem/");
        assert_eq!(request.headers.get(REFERER).unwrap(), "https://steamcommunity.com/profiles/76561198080179568/inventory/");
        assert_eq!(form_value(request, "assetid"), Some("11040547930"));
        assert_eq!(form_value(request, "price"), Some("150"));
        assert_eq!(form_value(request, "sessionid"), Some("abc123"));
    }
    
    #[tokio::test]
    async fn posting_needs_sessionid() {
        let client = MockExecutor::new();
        let market_api = MarketAPI::builder()
            .steamid(SteamID::from(STEAMID))
            .client(client.clone())
            .build()
            .unwrap();
        let error = market_api.cancel_buy_order(5919201371).await.unwrap_err();
        
        assert!(matches!(error, Error::Parameter(ParameterError::NoSessionId)));
        assert!(client.requests().is_empty());
    }
    
    #[tokio::test]
    async fn creates_buy_order() {
        let client = MockExecutor::new()
            .respond_json(r#"{"success":1,"buy_orderid":"5919201371"}"#);
        let response = market_api(&client)
            .create_buy_order(730, Currency::EUR, "StatTrak™ AK-47 | Redline (Field-Tested) #1", 1250, 5)
            .await
            .unwrap();
        let requests = client.requests();
        let request = &requests[0];
        
        assert!(response.is_success());
        assert_eq!(response.buy_orderid, 5919201371);
        assert_eq!(form_value(request, "currency"), Some("3"));
        assert_eq!(form_value(request, "price_total"), Some("1250"));
        assert_eq!(form_value(request, "quantity"), Some("5"));
        assert_eq!(
            request.headers.get(REFERER).unwrap(),
            "https://steamcommunity.com/market/listings/730/StatTrak%E2%84%A2%20AK-47%20%7C%20Redline%20%28Field-Tested%29%20%231",
        );
    }
    
    #[tokio::test]
    async fn buy_order_referer() {
        let client = MockExecutor::new()
            .respond_json(r#"{"success":29,"message":"You already have an active buy order for this item."}"#);
        let response = market_api(&client)
            .create_buy_order(440, Currency::USD, "Mann Co. Supply Crate Key", 217, 1)
            .await
            .unwrap();
        let requests = client.requests();
        
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("You already have an active buy order for this item."));
        assert_eq!(
            requests[0].headers.get(REFERER).unwrap(),
            "https://steamcommunity.com/market/listings/440/Mann%20Co.%20Supply%20Crate%20Key",
        );
    }
    
    #[tokio::test]
    async fn cancel_buy_order_checks_status() {
        let client = MockExecutor::new()
            .respond(StatusCode::BAD_REQUEST, "");
        let error = market_api(&client).cancel_buy_order(5919201371).await.unwrap_err();
        
        assert!(matches!(error, Error::Http(StatusCode::BAD_REQUEST)));
    }
    
    #[tokio::test]
    async fn gets_my_listings() {
        let client = MockExecutor::new()
            .respond_json(include_str!("fixtures/mylistings.json"));
        let listings = market_api(&client).get_my_listings(0, 100).await.unwrap();
        let query = query_of(&client.requests()[0]);
        
        assert_eq!(query["norender"], "1");
        assert_eq!(query["count"], "100");
        assert_eq!(listings.listings.len(), 1);
        assert_eq!(listings.listings[0].listingid, 4385812932485211003);
        assert_eq!(listings.listings[0].asset.market_hash_name, "Refined Metal");
        assert_eq!(listings.buy_orders[0].quantity_remaining, 2);
    }
    
    #[tokio::test]
    async fn searches_market() {
        let client = MockExecutor::new()
            .respond_json(include_str!("fixtures/search.json"));
        let results = market_api(&client).search_market(440, 0, 10).await.unwrap();
        let query = query_of(&client.requests()[0]);
        
        assert_eq!(query["appid"], "440");
        assert_eq!(results.total_count, 29815);
        assert_eq!(results.results[0].hash_name, "Mann Co. Supply Crate Key");
        assert!(results.results[0].asset_description.commodity);
    }
    
    #[tokio::test]
    async fn gets_wallet_balance() {
        let client = MockExecutor::new()
            .respond(StatusCode::OK, include_str!("fixtures/community_home.html"));
        let balance = market_api(&client).get_wallet_balance().await.unwrap();
        
        assert_eq!(balance, "$12.34");
        assert_eq!(client.requests()[0].url, "https://steamcommunity.com/");
    }
}
