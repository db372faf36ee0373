use crate::enums::Currency;
use crate::error::ParseHtmlError;
use lazy_regex::regex_replace_all;
use scraper::{Html, Selector};

/// A price as displayed on the Steam Community split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedPrice {
    /// The digits and separators of the price e.g. `"1,23"`.
    pub amount: String,
    /// The currency symbol e.g. `"zł"`.
    pub symbol: String,
    /// The currency the symbol belongs to, if it is known.
    pub currency: Option<Currency>,
}

/// Splits a displayed price such as `"1,23zł"` or `"$0.03"` into its amount and currency.
///
/// The symbol keeps only letters and currency signs, so `"S/ 1.23"` has the symbol `"S"`.
pub fn clean_price(price: &str) -> CleanedPrice {
    let symbol = regex_replace_all!(r#"[^\p{L}\p{Sc}]"#, price, |_| "")
        .trim()
        .to_string();
    let amount = regex_replace_all!(r#"[^\d,.]"#, price, |_| "").into_owned();
    let currency = Currency::from_symbol(&symbol);
    
    CleanedPrice {
        amount,
        symbol,
        currency,
    }
}

/// Gets the wallet balance shown in the menu of a Steam Community page.
pub fn parse_wallet_balance(html: &str) -> Result<String, ParseHtmlError> {
    let document = Html::parse_document(html);
    let wallet_selector = Selector::parse(".responsive_menu_user_wallet")
        .map_err(|_e| ParseHtmlError::ParseSelector)?;
    let balance_selector = Selector::parse("b")
        .map_err(|_e| ParseHtmlError::ParseSelector)?;
    let balance = document.select(&wallet_selector)
        .last()
        .map(|wallet| wallet
            .select(&balance_selector)
            .flat_map(|element| element.text())
            .collect::<String>()
        )
        .map(|balance| balance.trim().to_string())
        .unwrap_or_default();
    
    if balance.is_empty() {
        return Err(ParseHtmlError::Malformed("Missing wallet balance"));
    }
    
    Ok(balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn cleans_prices() {
        let price = clean_price("1,23zł");
        
        assert_eq!(price.amount, "1,23");
        assert_eq!(price.symbol, "zł");
        assert_eq!(price.currency, Some(Currency::PLN));
        
        let price = clean_price("R$ 10,50");
        
        assert_eq!(price.amount, "10,50");
        assert_eq!(price.currency, Some(Currency::BRL));
        assert_eq!(clean_price("$0.03").currency, Some(Currency::USD));
    }
    
    #[test]
    fn matches_symbols_with_punctuation() {
        let price = clean_price("S/ 1.23");
        
        assert_eq!(price.amount, "1.23");
        assert_eq!(price.symbol, "S");
        assert_eq!(price.currency, Some(Currency::PEN));
        assert_eq!(clean_price("12.50 ر.س").currency, Some(Currency::SAR));
        assert_eq!(clean_price("12.50 د.إ").currency, Some(Currency::AED));
    }
    
    #[test]
    fn unknown_symbol_has_no_currency() {
        let price = clean_price("0.03 BTC");
        
        assert_eq!(price.amount, "0.03");
        assert_eq!(price.symbol, "BTC");
        assert_eq!(price.currency, None);
    }
    
    #[test]
    fn parses_wallet_balance() {
        let balance = parse_wallet_balance(include_str!("fixtures/community_home.html")).unwrap();
        
        assert_eq!(balance, "$12.34");
    }
    
    #[test]
    fn missing_wallet_balance_is_error() {
        let result = parse_wallet_balance("<html><body><div class=\"responsive_menu_user_area\"></div></body></html>");
        
        assert!(matches!(result, Err(ParseHtmlError::Malformed(_))));
    }
}
