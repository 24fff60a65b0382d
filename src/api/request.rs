use serde::{Deserialize, Serialize};

use crate::{
    config::DEFAULT_USER_AGENT,
    error::{CheckRedirectsError, CheckRedirectsResult},
};

/// Body of the outbound lookup call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    pub domain: String,
    /// Agent the remote tracer should pretend to be.
    pub user_agent: String,
}

impl LookupRequest {
    pub fn new(domain: impl Into<String>, user_agent: Option<String>) -> CheckRedirectsResult<Self> {
        Self::with_default_user_agent(domain, user_agent, DEFAULT_USER_AGENT)
    }

    pub fn with_default_user_agent(
        domain: impl Into<String>,
        user_agent: Option<String>,
        default_user_agent: &str,
    ) -> CheckRedirectsResult<Self> {
        let domain = domain.into();
        if domain.trim().is_empty() {
            return Err(CheckRedirectsError::InvalidArgument(
                "domain must not be empty".to_string(),
            ));
        }

        Ok(Self {
            domain,
            user_agent: user_agent.unwrap_or_else(|| default_user_agent.to_string()),
        })
    }

    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    #[test]
    fn test_defaults_user_agent_to_chrome() {
        let request = LookupRequest::new("example.com", None).unwrap();
        assert_eq!(request.user_agent, "chrome");
    }

    #[test]
    fn test_configured_default_user_agent() {
        let request =
            LookupRequest::with_default_user_agent("example.com", None, "firefox").unwrap();
        assert_eq!(request.user_agent, "firefox");

        let request = LookupRequest::with_default_user_agent(
            "example.com",
            Some("googlebot".to_string()),
            "firefox",
        )
        .unwrap();
        assert_eq!(request.user_agent, "googlebot");
    }

    #[test]
    fn test_rejects_empty_domain() {
        assert!(matches!(
            LookupRequest::new("", None),
            Err(CheckRedirectsError::InvalidArgument(_))
        ));
        assert!(LookupRequest::new("   ", None).is_err());
    }

    #[test]
    fn test_body_has_exactly_domain_and_user_agent() {
        let request = LookupRequest::new("example.com", Some("safari".to_string())).unwrap();
        let body: Map<String, Value> = serde_json::from_slice(&request.to_json().unwrap()).unwrap();

        assert_eq!(body.len(), 2);
        assert_eq!(body["domain"], "example.com");
        assert_eq!(body["user_agent"], "safari");
    }

    #[test]
    fn test_body_preserves_unusual_strings() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64) \"quoted\" ünïcode";
        let request = LookupRequest::new("xn--bcher-kva.example", Some(ua.to_string())).unwrap();
        let decoded: LookupRequest = serde_json::from_slice(&request.to_json().unwrap()).unwrap();

        assert_eq!(decoded, request);
    }
}
