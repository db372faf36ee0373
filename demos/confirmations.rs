use steam_community_session::MobileAPI;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    
    let identity_secret = std::env::var("IDENTITY_SECRET")
        .expect("IDENTITY_SECRET missing");
    let mobile_api = MobileAPI::builder()
        .cookies(get_cookies())
        .build()?;
    let confirmations = mobile_api.get_confirmations(&identity_secret).await?;
    
    println!("{} pending confirmations", confirmations.len());
    
    for confirmation in &confirmations {
        println!("{confirmation}");
    }
    
    // Pass "accept" as the first argument to accept the first confirmation.
    if std::env::args().nth(1).as_deref() == Some("accept") {
        if let Some(confirmation) = confirmations.first() {
            mobile_api.accept_confirmation(confirmation, &identity_secret).await?;
            println!("Accepted {}", confirmation.id);
        }
    }
    
    Ok(())
}

fn get_cookies() -> Vec<String> {
    std::env::var("COOKIES")
        .expect("COOKIES missing")
        .split("; ")
        .map(String::from)
        .collect()
}
