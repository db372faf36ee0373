use steam_community_session::MarketAPI;
use steam_community_session::enums::Currency;
use steam_community_session::market::clean_price;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    
    let cookies = std::env::var("COOKIES")
        .expect("COOKIES missing")
        .split("; ")
        .map(String::from)
        .collect::<Vec<_>>();
    let mut builder = MarketAPI::builder()
        .cookies(cookies);
    
    if let Ok(sessionid) = std::env::var("SESSIONID") {
        builder = builder.sessionid(sessionid);
    }
    
    let market_api = builder.build()?;
    let balance = market_api.get_wallet_balance().await?;
    let cleaned = clean_price(&balance);
    
    println!("Wallet balance: {} ({:?})", cleaned.amount, cleaned.currency);
    
    let overview = market_api.get_price_overview(
        440,
        "US",
        Currency::USD,
        "Mann Co. Supply Crate Key",
    ).await?;
    
    println!("Lowest price: {:?}", overview.lowest_price);
    
    let history = market_api.get_price_history(440, "Mann Co. Supply Crate Key").await?;
    
    if let Some(point) = history.last() {
        println!("{}: {} sold at {}", point.date, point.volume, point.price);
    }
    
    let listings = market_api.get_my_listings(0, 100).await?;
    
    println!("{} active listings, {} buy orders", listings.num_active_listings, listings.buy_orders.len());
    
    Ok(())
}
