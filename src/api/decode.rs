use serde_json::Value;
use tracing::debug;

use super::{
    probe::ShapeProbe,
    response::{ErrorEnvelope, LookupResult, RedirectChain, RedirectHop},
};

const ERROR_DISCRIMINATOR: &str = "detail";
const HOP_DISCRIMINATOR: &str = "status_code";

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    Json(serde_json::Error),
    #[error("error response has an unexpected shape: {0}")]
    ErrorShape(serde_json::Error),
    #[error("redirect chain has an unexpected shape: {0}")]
    HopShape(serde_json::Error),
    #[error("redirect chain is empty")]
    EmptyChain,
    #[error("unrecognized response shape: {0}")]
    Unrecognized(String),
}

/// Decodes a response body into whichever of the two known shapes it has.
///
/// The API does not tag its payloads, so the body is first parsed
/// untyped to look for a discriminator key (`detail` on an object, or
/// `status_code` on the first array element) and then decoded strictly
/// from the original bytes. Only the first hop is sniffed; the remaining
/// hops are trusted to share its shape and are checked by the strict
/// decode alone.
pub fn decode(raw: &[u8]) -> Result<LookupResult, DecodeError> {
    let probe: Value = serde_json::from_slice(raw).map_err(DecodeError::Json)?;

    if probe.has_key(ERROR_DISCRIMINATOR) {
        debug!("Response carries `detail`, decoding as API error");
        let envelope: ErrorEnvelope =
            serde_json::from_slice(raw).map_err(DecodeError::ErrorShape)?;
        return Ok(LookupResult::RemoteError(envelope.detail));
    }

    if probe.is_empty_array() {
        return Err(DecodeError::EmptyChain);
    }

    match probe.first_element() {
        Some(first) if first.has_key(HOP_DISCRIMINATOR) => {
            let hops: Vec<RedirectHop> =
                serde_json::from_slice(raw).map_err(DecodeError::HopShape)?;
            debug!(hops = hops.len(), "Decoded redirect chain");
            RedirectChain::new(hops)
                .map(LookupResult::Redirects)
                .ok_or(DecodeError::EmptyChain)
        }
        Some(first) => Err(DecodeError::Unrecognized(format!(
            "array whose first element is {} without `{}`",
            first.describe(),
            HOP_DISCRIMINATOR
        ))),
        None if probe.is_object() => Err(DecodeError::Unrecognized(format!(
            "object without `{}`",
            ERROR_DISCRIMINATOR
        ))),
        None => Err(DecodeError::Unrecognized(probe.describe().to_string())),
    }
}
