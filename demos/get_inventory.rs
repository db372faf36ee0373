use steam_community_session::{InventoryPager, SteamID};
use steam_community_session::inventory::{filters, FilterChain};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let steamid = get_steamid("STEAMID");
    // Public inventories can be read without a session.
    let pager = InventoryPager::builder().build();
    let contexts = pager.get_inventory_contexts(steamid).await?;
    
    for app in contexts.values() {
        println!("{} ({}): {} items", app.name, app.appid, app.asset_count);
    }
    
    let tradable = FilterChain::new()
        .with(filters::has_amount)
        .with(filters::is_tradable);
    let inventory = pager.get_filtered_inventory(steamid, 440, 2, &tradable).await?;
    
    println!("{} tradable items in inventory", inventory.len());
    
    if let Some(name) = inventory.first().and_then(|item| item.market_hash_name()) {
        println!("First item: {name}");
    }
    
    Ok(())
}

fn get_steamid(key: &str) -> SteamID {
    dotenv::dotenv().ok();
    
    let sid_str = std::env::var(key)
        .unwrap_or_else(|_| panic!("{key} missing"));
    
    SteamID::from(sid_str.parse::<u64>().unwrap())
}
