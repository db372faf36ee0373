use crate::error::Error;
use crate::types::Timestamp;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha1::Sha1;

/// Tags longer than this many bytes are truncated before hashing.
const MAX_TAG_LENGTH: usize = 32;

/// Generates the key for a confirmation request.
/// 
/// The key is an HMAC-SHA1 of the timestamp (8 bytes, big-endian) followed by the tag, keyed
/// with the base64-decoded `identity_secret`. The result is base64 encoded and then
/// percent-encoded, so it can be placed in a query string as-is.
/// 
/// Tags longer than 32 bytes are truncated, even within a multi-byte character. The only error is an `identity_secret` which is
/// not valid base64.
pub fn generate_confirmation_key(
    identity_secret: &str,
    tag: &str,
    timestamp: Timestamp,
) -> Result<String, Error> {
    let secret = STANDARD.decode(identity_secret)?;
    let tag = tag.as_bytes();
    let tag = &tag[..tag.len().min(MAX_TAG_LENGTH)];
    let mut message = Vec::with_capacity(8 + tag.len());
    
    message.extend_from_slice(&timestamp.to_be_bytes());
    message.extend_from_slice(tag);
    
    let mut mac = Hmac::<Sha1>::new_from_slice(&secret)
        .expect("HMAC accepts keys of any length");
    
    mac.update(&message);
    
    let hash = STANDARD.encode(mac.finalize().into_bytes());
    
    Ok(url::form_urlencoded::byte_serialize(hash.as_bytes()).collect())
}
