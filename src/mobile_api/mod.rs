//! Mobile confirmations.
//!
//! Each request is authenticated with a key generated from the account's identity secret, a tag
//! naming the kind of request and the current time on Steam's servers. The time is fetched anew
//! for every request and a key generated for one tag is not accepted for another.

mod builder;
mod confirmation_key;
mod operation;

pub use builder::MobileAPIBuilder;
pub use confirmation_key::generate_confirmation_key;
pub use operation::Operation;

use crate::SteamID;
use crate::error::{ConfirmationStep, Error};
use crate::helpers::COMMUNITY_HOSTNAME;
use crate::http::{check_ok, parse_body, HttpExecutor, HttpRequest};
use crate::response::{Confirmation, ConfirmationResult};
use crate::serialize;
use crate::time::TimeOracle;
use std::sync::Arc;
use reqwest::header::HeaderName;
use serde::Deserialize;
use url::form_urlencoded;

/// The tag used when listing confirmations.
const LIST_TAG: &str = "conf";
/// The value of the `m` parameter.
const MOBILE_CLIENT: &str = "react";
/// The value of the `X-Requested-With` header sent by the mobile app.
const REQUESTED_WITH: &str = "com.valvesoftware.android.steam.community";

/// The API for mobile confirmations.
#[derive(Clone)]
pub struct MobileAPI {
    client: Arc<dyn HttpExecutor>,
    time_oracle: Arc<dyn TimeOracle>,
    steamid: SteamID,
    device_id: String,
}

impl std::fmt::Debug for MobileAPI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MobileAPI")
            .field("steamid", &u64::from(self.steamid))
            .field("device_id", &self.device_id)
            .finish_non_exhaustive()
    }
}

impl MobileAPI {
    /// Builder for constructing a [`MobileAPI`].
    pub fn builder() -> MobileAPIBuilder {
        MobileAPIBuilder::new()
    }
    
    /// The SteamID of the account confirmations are made for.
    pub fn steamid(&self) -> SteamID {
        self.steamid
    }
    
    /// The device ID sent with each request.
    pub fn device_id(&self) -> &str {
        &self.device_id
    }
    
    /// Gets the pending confirmations.
    pub async fn get_confirmations(
        &self,
        identity_secret: &str,
    ) -> Result<Vec<Confirmation>, Error> {
        #[derive(Deserialize)]
        struct GetConfirmationsResponse {
            #[serde(default)]
            success: bool,
            #[serde(default)]
            needauth: bool,
            #[serde(default)]
            #[serde(deserialize_with = "serialize::empty_string_is_none")]
            message: Option<String>,
            #[serde(default)]
            conf: Vec<Confirmation>,
        }
        
        log::debug!("Getting confirmations for {}", u64::from(self.steamid));
        
        let query = self.confirmation_query(identity_secret, LIST_TAG, &[]).await?;
        let uri = format!("{COMMUNITY_HOSTNAME}/mobileconf/getlist?{query}");
        let body: GetConfirmationsResponse = self.send(uri).await?;
        
        if body.needauth {
            return Err(Error::NotLoggedIn);
        }
        
        if !body.success {
            return Err(Error::ConfirmationUnsuccessful(body.message));
        }
        
        Ok(body.conf)
    }
    
    /// Sends a decision on a confirmation. The confirmation's `id` and `nonce` are sent exactly as
    /// they were received.
    /// 
    /// Returns the result as decoded. An unsuccessful result is not turned into an error, use
    /// [`MobileAPI::accept_confirmation`] or [`MobileAPI::cancel_confirmation`] for that.
    pub async fn send_confirmation_ajax(
        &self,
        confirmation: &Confirmation,
        operation: Operation,
        identity_secret: &str,
    ) -> Result<ConfirmationResult, Error> {
        log::debug!("Sending {operation} for confirmation {}", confirmation.id);
        
        let query = self.confirmation_query(
            identity_secret,
            operation.tag(),
            &[
                ("op", operation.to_string()),
                ("cid", confirmation.id.to_string()),
                ("ck", confirmation.nonce.to_string()),
            ],
        ).await?;
        let uri = format!("{COMMUNITY_HOSTNAME}/mobileconf/ajaxop?{query}");
        
        self.send(uri).await
    }
    
    /// Accepts a confirmation.
    pub async fn accept_confirmation(
        &self,
        confirmation: &Confirmation,
        identity_secret: &str,
    ) -> Result<(), Error> {
        self.decide(confirmation, Operation::Allow, identity_secret).await
    }
    
    /// Cancels a confirmation.
    pub async fn cancel_confirmation(
        &self,
        confirmation: &Confirmation,
        identity_secret: &str,
    ) -> Result<(), Error> {
        self.decide(confirmation, Operation::Cancel, identity_secret).await
    }
    
    async fn decide(
        &self,
        confirmation: &Confirmation,
        operation: Operation,
        identity_secret: &str,
    ) -> Result<(), Error> {
        let body = self.send_confirmation_ajax(confirmation, operation, identity_secret).await?;
        
        if !body.success {
            return Err(Error::ConfirmationUnsuccessful(body.message));
        }
        
        Ok(())
    }
    
    /// Builds the query string for a confirmation request, fetching the time and generating a
    /// key for `tag` immediately before.
    async fn confirmation_query(
        &self,
        identity_secret: &str,
        tag: &str,
        params: &[(&'static str, String)],
    ) -> Result<String, Error> {
        let time = self.time_oracle.now().await
            .map_err(|error| error.during(ConfirmationStep::FetchTime))?;
        let key = generate_confirmation_key(identity_secret, tag, time)
            .map_err(|error| error.during(ConfirmationStep::DeriveKey))?;
        let head = form_urlencoded::Serializer::new(String::new())
            .append_pair("p", &self.device_id)
            .append_pair("a", &u64::from(self.steamid).to_string())
            .finish();
        let tail = form_urlencoded::Serializer::new(String::new())
            .append_pair("t", &time.to_string())
            .append_pair("m", MOBILE_CLIENT)
            .append_pair("tag", tag)
            .extend_pairs(params)
            .finish();
        
        // the key is already percent-encoded
        Ok(format!("{head}&k={key}&{tail}"))
    }
    
    async fn send<D>(
        &self,
        uri: String,
    ) -> Result<D, Error>
    where
        D: serde::de::DeserializeOwned,
    {
        let request = HttpRequest::get(uri)
            .header(HeaderName::from_static("x-requested-with"), REQUESTED_WITH);
        let response = self.client.execute(request).await
            .map_err(|error| error.during(ConfirmationStep::Request))?;
        let body = check_ok(response)
            .map_err(|error| error.during(ConfirmationStep::Request))?;
        
        parse_body(&body)
            .map_err(|error| error.during(ConfirmationStep::Decode))
    }
}
