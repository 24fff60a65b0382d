use std::sync::Once;

use mockito::{Mock, Server, ServerGuard};

use super::response::{RedirectHop, StatusCode};
use crate::config::ApiConfig;

pub const SEARCH_PATH: &str = "/api/search/";

pub const ERROR_PAYLOAD: &str =
    r#"{"detail":{"error":"bad domain","url":"https://x","user-agent":"chrome"}}"#;

pub const TWO_HOP_PAYLOAD: &str = r#"[{"status_code":{"code":"301","phrase":"Moved"},"scheme":"http","host":"a.com","path":"/"},{"status_code":{"code":"200","phrase":"OK"},"scheme":"https","host":"b.com","path":"/home"}]"#;

pub const FULL_HOP_PAYLOAD: &str = r#"[
    {
        "id": 5521,
        "hop": 1,
        "url": "http://example.com/",
        "http_version": "HTTP/1.1",
        "status_code": {"code": "301", "phrase": "Moved Permanently"},
        "headers": {
            "location": "https://www.example.com/",
            "server": "Netlify",
            "x-nf-request-id": "01H8ZK",
            "date": "Tue, 14 Mar 2023 10:00:00 GMT",
            "content-type": "text/plain; charset=utf-8"
        },
        "host": "example.com",
        "path": "/",
        "scheme": "http",
        "ipaddr": "93.184.216.34",
        "time_elapsed": 117,
        "body": "Redirecting to https://www.example.com/",
        "ipinfo": {
            "ip": "93.184.216.34",
            "city": "Norwell",
            "region": "Massachusetts",
            "country": "US",
            "country_name": "United States",
            "latitude": "42.1508",
            "longitude": "-70.8228",
            "org": "AS15133 Edgecast Inc.",
            "timezone": "America/New_York",
            "anycast": true
        }
    }
]"#;

pub fn hop(code: &str, scheme: &str, host: &str, path: &str) -> RedirectHop {
    RedirectHop {
        id: None,
        hop: None,
        url: None,
        http_version: None,
        status_code: StatusCode {
            code: code.to_string(),
            phrase: String::new(),
        },
        headers: None,
        scheme: scheme.to_string(),
        host: host.to_string(),
        path: path.to_string(),
        ipaddr: None,
        time_elapsed: None,
        body: None,
        ipinfo: None,
    }
}

/// Points an [`ApiConfig`] at the search endpoint of a mock server.
pub fn api_config_for(server: &ServerGuard) -> ApiConfig {
    ApiConfig {
        url: format!("{}{}", server.url(), SEARCH_PATH),
        ..ApiConfig::default()
    }
}

/// Mocks one search call answering `body` with `status`.
pub async fn mock_search(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
    server
        .mock("POST", SEARCH_PATH)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

pub async fn spawn_mock_api() -> ServerGuard {
    Server::new_async().await
}

static INIT: Once = Once::new();
pub fn init_test_tracing(level: Option<&str>) {
    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(level.unwrap_or("debug"))
            .try_init();

        // Ignore if it's already been set
        let _ = subscriber;
    });
}
