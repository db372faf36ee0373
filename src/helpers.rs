use crate::SteamID;
use crate::error::{Error, ParameterError};
use std::sync::Arc;
use lazy_regex::regex_captures;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use url::Url;

/// Hostname for Steam Community requests.
pub const COMMUNITY_HOSTNAME: &str = "https://steamcommunity.com";
/// Hostname for Steam Web API requests.
pub const API_HOSTNAME: &str = "https://api.steampowered.com";
/// The user agent sent with requests made by the default client.
pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Builds a client which sends cookies from `cookie_store`.
///
/// The client does not retry requests. Set timeouts by building your own client and passing
/// it to the builders instead.
pub fn get_default_client<T>(
    cookie_store: Arc<T>,
    user_agent_string: &'static str,
) -> Result<ClientWithMiddleware, Error>
where
    T: CookieStore + 'static,
{
    let mut headers = header::HeaderMap::new();

    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));

    let client = reqwest::ClientBuilder::new()
        .cookie_provider(cookie_store)
        .default_headers(headers)
        .build()?;

    Ok(ClientBuilder::new(client).build())
}

/// Builds a client from a list of cookie strings for `steamcommunity.com`, e.g.
/// `"steamLoginSecure=..."` and `"sessionid=..."`.
pub fn client_from_cookies(
    cookies: &[String],
) -> Result<ClientWithMiddleware, Error> {
    let url = COMMUNITY_HOSTNAME.parse::<Url>()
        .map_err(ParameterError::UrlParse)?;
    let jar = Arc::new(Jar::default());

    for cookie in cookies {
        jar.add_cookie_str(cookie, &url);
    }

    get_default_client(jar, USER_AGENT_STRING)
}

/// Gets the session ID from a list of cookie strings.
pub fn get_sessionid_from_cookies(cookies: &[String]) -> Option<String> {
    cookies
        .iter()
        .filter_map(|cookie| cookie.split(';').next())
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _value)| name.trim() == "sessionid")
        .map(|(_name, value)| value.trim().to_string())
}

/// Gets the SteamID of the logged in user from the `steamLoginSecure` cookie in a list of
/// cookie strings.
pub fn get_steamid_from_cookies(cookies: &[String]) -> Option<SteamID> {
    cookies
        .iter()
        .find_map(|cookie| regex_captures!(r#"^steamLoginSecure=(\d{17})"#, cookie.trim()))
        .and_then(|(_, steamid)| steamid.parse::<u64>().ok())
        .map(SteamID::from)
}

/// Builds a URL with query parameters, encoding each value.
pub fn url_with_params<'a, I>(
    url: &str,
    params: I,
) -> Result<String, ParameterError>
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let url = Url::parse_with_params(url, params)?;

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gets_sessionid() {
        let cookies = vec![
            "steamLoginSecure=76561198000000000%7C%7Ctoken".to_string(),
            "sessionid=abc123; Path=/".to_string(),
        ];

        assert_eq!(get_sessionid_from_cookies(&cookies), Some("abc123".into()));
        assert_eq!(get_sessionid_from_cookies(&cookies[..1]), None);
    }

    #[test]
    fn gets_steamid() {
        let cookies = vec![
            "sessionid=abc123".to_string(),
            "steamLoginSecure=76561198000000000%7C%7Ctoken".to_string(),
        ];

        assert_eq!(get_steamid_from_cookies(&cookies), Some(SteamID::from(76561198000000000)));
        assert_eq!(get_steamid_from_cookies(&cookies[..1]), None);
    }

    #[test]
    fn builds_url_with_encoded_params() {
        let url = url_with_params(
            "https://steamcommunity.com/market/pricehistory/",
            [
                ("appid", 730.to_string()),
                ("market_hash_name", "AK-47 | Redline (Field-Tested)".to_string()),
            ],
        ).unwrap();

        assert_eq!(
            url,
            "https://steamcommunity.com/market/pricehistory/?appid=730&market_hash_name=AK-47+%7C+Redline+%28Field-Tested%29",
        );
    }
}
