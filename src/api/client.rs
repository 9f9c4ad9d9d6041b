use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::RequestCache;

use crate::config::Config;

/// API error types
///
/// The `Display` output is the diagnostic shown after the failure prefix on
/// the page, so `Http` renders as the bare status code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{status}")]
    Http { status: u16 },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// API client for the wall-eno device
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    status_path: String,
}

impl ApiClient {
    /// Create a new API client with the base URL from the config
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_url.clone(),
            status_path: config.status_path.clone(),
        }
    }

    /// Path of the status endpoint
    pub fn status_path(&self) -> &str {
        &self.status_path
    }

    /// Full URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make an uncached GET request and deserialize the response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);

        let response = Request::get(&url)
            .cache(RequestCache::NoCache) // Always revalidate with the device
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        ensure_success(response.status())?;

        let body = response.text().await?;
        decode_body(&body)
    }
}

/// Reject any status outside the 2xx range
pub fn ensure_success(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Http { status })
    }
}

/// Decode a JSON body into the expected document shape
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusSnapshot;

    #[test]
    fn ensure_success_accepts_2xx() {
        assert!(ensure_success(200).is_ok());
        assert!(ensure_success(204).is_ok());
    }

    #[test]
    fn ensure_success_rejects_other_codes() {
        assert_eq!(ensure_success(500), Err(ApiError::Http { status: 500 }));
        assert_eq!(ensure_success(404), Err(ApiError::Http { status: 404 }));
        assert_eq!(ensure_success(304), Err(ApiError::Http { status: 304 }));
    }

    #[test]
    fn http_error_displays_bare_status_code() {
        assert_eq!(ApiError::Http { status: 500 }.to_string(), "500");
    }

    #[test]
    fn decode_body_reports_parse_failure() {
        let err = decode_body::<StatusSnapshot>("<html>busy</html>").unwrap_err();
        match &err {
            ApiError::Deserialization(message) => assert!(message.contains("line 1")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("Deserialization error: "));
    }

    #[test]
    fn decode_body_reads_status_document() {
        let snapshot: StatusSnapshot = decode_body(
            r#"{"homePower":2.3,"homeRaw":2312,"wallboxPower":7.4,"wallboxCurrent":32,"error":""}"#,
        )
        .unwrap();
        assert_eq!(snapshot.wallbox_current.to_string(), "32");
    }

    #[test]
    fn url_joins_base_and_path() {
        let same_origin = ApiClient::new(&Config::default());
        assert_eq!(same_origin.url("/wall-eno/json-status"), "/wall-eno/json-status");

        let remote = ApiClient::new(&Config {
            api_url: "http://192.168.1.40".to_string(),
            ..Config::default()
        });
        assert_eq!(
            remote.url("/wall-eno/json-status"),
            "http://192.168.1.40/wall-eno/json-status"
        );
    }
}
