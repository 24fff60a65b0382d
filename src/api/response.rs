use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Error object the API sends in place of a redirect chain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    #[serde(deserialize_with = "null_as_empty")]
    pub error: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(rename = "user-agent", deserialize_with = "null_as_empty")]
    pub user_agent: String,
}

/// The key must be present; an explicit `null` reads as "".
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `{"detail": {...}}` wrapper around [`ApiError`].
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub detail: ApiError,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusCode {
    pub code: String,
    pub phrase: String,
}

impl StatusCode {
    pub fn as_u16(&self) -> Option<u16> {
        self.code.parse().ok()
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.as_u16(), Some(300..=399))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HopHeaders {
    #[serde(alias = "Location")]
    pub location: Option<String>,
    #[serde(alias = "Server")]
    pub server: Option<String>,
    #[serde(alias = "X-Nf-Request-Id", alias = "X-NF-Request-ID")]
    pub x_nf_request_id: Option<String>,
    #[serde(alias = "Date")]
    pub date: Option<String>,
    #[serde(alias = "Content-Length")]
    pub content_length: Option<String>,
    #[serde(alias = "Content-Type")]
    pub content_type: Option<String>,
    #[serde(alias = "Age")]
    pub age: Option<String>,
    #[serde(alias = "Cache-Control")]
    pub cache_control: Option<String>,
    #[serde(alias = "Content-Encoding")]
    pub content_encoding: Option<String>,
    #[serde(alias = "ETag", alias = "Etag")]
    pub etag: Option<String>,
    #[serde(alias = "Permissions-Policy")]
    pub permissions_policy: Option<String>,
    #[serde(alias = "Strict-Transport-Security")]
    pub strict_transport_security: Option<String>,
    #[serde(alias = "Vary")]
    pub vary: Option<String>,
    #[serde(alias = "Transfer-Encoding")]
    pub transfer_encoding: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IpInfo {
    pub ip: Option<String>,
    pub hostname: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub country_name: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub org: Option<String>,
    pub postal: Option<String>,
    pub timezone: Option<String>,
    pub anycast: Option<bool>,
}

/// One response in the redirect chain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RedirectHop {
    pub id: Option<u64>,
    pub hop: Option<u32>,
    pub url: Option<String>,
    pub http_version: Option<String>,
    pub status_code: StatusCode,
    pub headers: Option<HopHeaders>,
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub ipaddr: Option<String>,
    pub time_elapsed: Option<u64>,
    pub body: Option<String>,
    pub ipinfo: Option<IpInfo>,
}

impl RedirectHop {
    /// `<scheme>://<host><path>`
    pub fn destination(&self) -> String {
        format!("{}://{}{}", self.scheme, self.host, self.path)
    }
}

/// Hops in traversal order. Never empty: the final hop is held apart from
/// the ones before it.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectChain {
    earlier: Vec<RedirectHop>,
    last: RedirectHop,
}

impl RedirectChain {
    pub fn new(mut hops: Vec<RedirectHop>) -> Option<Self> {
        let last = hops.pop()?;
        Some(Self {
            earlier: hops,
            last,
        })
    }

    pub fn final_hop(&self) -> &RedirectHop {
        &self.last
    }

    pub fn hops(&self) -> impl Iterator<Item = &RedirectHop> {
        self.earlier.iter().chain(std::iter::once(&self.last))
    }

    pub fn len(&self) -> usize {
        self.earlier.len() + 1
    }

    /// A chain always holds at least its final hop.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Outcome of a lookup the remote service completed.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    Redirects(RedirectChain),
    RemoteError(ApiError),
}

impl LookupResult {
    pub fn is_remote_error(&self) -> bool {
        matches!(self, LookupResult::RemoteError(_))
    }
}
