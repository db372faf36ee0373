use super::MarketAPI;
use crate::SteamID;
use crate::enums::Language;
use crate::error::{Error, ParameterError};
use crate::helpers::{client_from_cookies, get_sessionid_from_cookies, get_steamid_from_cookies};
use crate::http::HttpExecutor;
use std::sync::Arc;

/// Builder for constructing a [`MarketAPI`].
#[derive(Default)]
pub struct MarketAPIBuilder {
    /// The SteamID of the account.
    steamid: Option<SteamID>,
    /// The session ID. Required for listing items and placing or cancelling buy orders.
    sessionid: Option<String>,
    /// Client to use for requests.
    client: Option<Arc<dyn HttpExecutor>>,
    /// Cookies to build a client from when no client is given.
    cookies: Option<Vec<String>>,
    /// Language for listings and search results.
    language: Language,
}

impl std::fmt::Debug for MarketAPIBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketAPIBuilder")
            .field("steamid", &self.steamid.map(u64::from))
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl MarketAPIBuilder {
    /// Creates a new [`MarketAPIBuilder`].
    pub fn new() -> Self {
        Self::default()
    }
    
    /// The SteamID of the account.
    pub fn steamid(mut self, steamid: SteamID) -> Self {
        self.steamid = Some(steamid);
        self
    }
    
    /// The session ID. Read from the `sessionid` cookie if not set and cookies are given.
    pub fn sessionid<S>(mut self, sessionid: S) -> Self
    where
        S: Into<String>,
    {
        self.sessionid = Some(sessionid.into());
        self
    }
    
    /// Client to use for requests.
    pub fn client(mut self, client: Arc<dyn HttpExecutor>) -> Self {
        self.client = Some(client);
        self
    }
    
    /// Cookies for the account's session. Used to build a client when
    /// [`MarketAPIBuilder::client`] is not set.
    pub fn cookies(mut self, cookies: Vec<String>) -> Self {
        self.cookies = Some(cookies);
        self
    }
    
    /// Language for listings and search results.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
    
    /// Builds the [`MarketAPI`].
    pub fn build(self) -> Result<MarketAPI, Error> {
        let cookies = self.cookies.as_deref().unwrap_or_default();
        let steamid = self.steamid
            .or_else(|| get_steamid_from_cookies(cookies))
            .ok_or(ParameterError::NoSteamId)?;
        let sessionid = self.sessionid
            .or_else(|| get_sessionid_from_cookies(cookies));
        let client: Arc<dyn HttpExecutor> = match self.client {
            Some(client) => client,
            None if self.cookies.is_some() => Arc::new(client_from_cookies(cookies)?),
            None => return Err(ParameterError::NoClient.into()),
        };
        
        Ok(MarketAPI {
            client,
            steamid,
            sessionid,
            language: self.language,
        })
    }
}
