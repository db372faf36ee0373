use super::MobileAPI;
use crate::SteamID;
use crate::error::{Error, ParameterError};
use crate::helpers::{client_from_cookies, get_steamid_from_cookies};
use crate::http::HttpExecutor;
use crate::time::{SteamTimeOracle, TimeOracle};
use std::sync::Arc;
use another_steam_totp::get_device_id;

/// Builder for constructing a [`MobileAPI`].
#[derive(Default)]
pub struct MobileAPIBuilder {
    /// The SteamID of the account.
    steamid: Option<SteamID>,
    /// Client to use for requests. It must send the cookies of the account's session.
    client: Option<Arc<dyn HttpExecutor>>,
    /// Cookies to build a client from when no client is given.
    cookies: Option<Vec<String>>,
    /// Source of Steam's server time. Defaults to querying Steam with the same client.
    time_oracle: Option<Arc<dyn TimeOracle>>,
    /// The device ID sent with each request.
    device_id: Option<String>,
}

impl std::fmt::Debug for MobileAPIBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MobileAPIBuilder")
            .field("steamid", &self.steamid.map(u64::from))
            .field("device_id", &self.device_id)
            .finish_non_exhaustive()
    }
}

impl MobileAPIBuilder {
    /// Creates a new [`MobileAPIBuilder`].
    pub fn new() -> Self {
        Self::default()
    }
    
    /// The SteamID of the account. Read from the `steamLoginSecure` cookie if not set and
    /// cookies are given.
    pub fn steamid(mut self, steamid: SteamID) -> Self {
        self.steamid = Some(steamid);
        self
    }
    
    /// Client to use for requests. It must send the cookies of the account's session.
    pub fn client(mut self, client: Arc<dyn HttpExecutor>) -> Self {
        self.client = Some(client);
        self
    }
    
    /// Cookies for the account's session, e.g. `"steamLoginSecure=..."`. Used to build a client
    /// when [`MobileAPIBuilder::client`] is not set.
    pub fn cookies(mut self, cookies: Vec<String>) -> Self {
        self.cookies = Some(cookies);
        self
    }
    
    /// Source of Steam's server time.
    pub fn time_oracle(mut self, time_oracle: Arc<dyn TimeOracle>) -> Self {
        self.time_oracle = Some(time_oracle);
        self
    }
    
    /// The device ID sent with each request. Defaults to the ID the mobile app derives from the
    /// account's SteamID.
    pub fn device_id<S>(mut self, device_id: S) -> Self
    where
        S: Into<String>,
    {
        self.device_id = Some(device_id.into());
        self
    }
    
    /// Builds the [`MobileAPI`].
    pub fn build(self) -> Result<MobileAPI, Error> {
        let steamid = self.steamid
            .or_else(|| self.cookies.as_deref().and_then(get_steamid_from_cookies))
            .ok_or(ParameterError::NoSteamId)?;
        let client: Arc<dyn HttpExecutor> = match (self.client, self.cookies) {
            (Some(client), _) => client,
            (None, Some(cookies)) => Arc::new(client_from_cookies(&cookies)?),
            (None, None) => return Err(ParameterError::NoClient.into()),
        };
        let time_oracle = self.time_oracle
            .unwrap_or_else(|| Arc::new(SteamTimeOracle::new(Arc::clone(&client))));
        let device_id = self.device_id
            .unwrap_or_else(|| get_device_id(u64::from(steamid)));
        
        Ok(MobileAPI {
            client,
            time_oracle,
            steamid,
            device_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn reads_steamid_from_cookies() {
        let mobile_api = MobileAPIBuilder::new()
            .cookies(vec![
                "sessionid=abc123".into(),
                "steamLoginSecure=76561198080179568%7C%7Ctoken".into(),
            ])
            .build()
            .unwrap();
        
        assert_eq!(u64::from(mobile_api.steamid()), 76561198080179568);
        assert!(mobile_api.device_id().starts_with("android:"));
    }
    
    #[test]
    fn needs_steamid() {
        let result = MobileAPIBuilder::new()
            .client(Arc::new(reqwest::Client::new()))
            .build();
        
        assert!(matches!(result, Err(Error::Parameter(ParameterError::NoSteamId))));
    }
    
    #[test]
    fn needs_client() {
        let result = MobileAPIBuilder::new()
            .steamid(SteamID::from(76561198080179568))
            .build();
        
        assert!(matches!(result, Err(Error::Parameter(ParameterError::NoClient))));
    }
}
