use bytes::Bytes;
use reqwest::{header, Client};
use tracing::{debug, info, instrument, warn};

use super::{decode::decode, request::LookupRequest, response::LookupResult};
use crate::{
    config::ApiConfig,
    error::{CheckRedirectsResult, TransportError},
};

const ACCEPT: &str = "application/json, */*";

/// Talks to the remote redirect-tracing service. The endpoint, timeout and
/// this client's own User-Agent all come from the [`ApiConfig`] it is
/// built with.
#[derive(Clone)]
pub struct RedirectClient {
    client: Client,
    url: String,
}

impl RedirectClient {
    pub fn new(config: &ApiConfig) -> CheckRedirectsResult<Self> {
        debug!(?config, "Creating RedirectClient");

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.client_user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Posts the lookup and returns the raw response body.
    ///
    /// The body is read whatever the HTTP status, since the service reports
    /// its own errors in the body. The response is consumed on every path,
    /// which returns the connection before this function does.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn send(&self, request: &LookupRequest) -> CheckRedirectsResult<Bytes> {
        let body = request.to_json().map_err(TransportError::from)?;

        let resp = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, ACCEPT)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        debug!(?status, headers = ?resp.headers(), "Received API response");

        match resp.bytes().await {
            Ok(bytes) => {
                debug!(len = bytes.len(), "Read response body");
                Ok(bytes)
            }
            Err(e) => {
                warn!(?e, ?status, "Failed to drain response body");
                Err(e.into())
            }
        }
    }

    /// [`send`](Self::send) followed by [`decode`].
    pub async fn lookup(&self, request: &LookupRequest) -> CheckRedirectsResult<LookupResult> {
        info!(domain = %request.domain, user_agent = %request.user_agent, "Looking up redirects");
        let raw = self.send(request).await?;
        let result = decode(&raw)?;
        info!(remote_error = result.is_remote_error(), "Lookup complete");
        Ok(result)
    }
}
