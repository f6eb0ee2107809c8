use crate::config::Config;
use crate::error::TrackError;
use url::Url;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the analytics ingestion endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL for the API (e.g., `https://api.mixpanel.com`)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl ApiClient {
    /// Create a POST request with common headers (User-Agent)
    pub fn http_post(url: &str) -> minreq::Request {
        minreq::post(url).with_header(
            "User-Agent",
            format!("track-test/{}", env!("CARGO_PKG_VERSION")),
        )
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url())
    }

    /// Build the full URL for an endpoint
    pub(crate) fn build_url(&self, endpoint: &str) -> Result<String, TrackError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| TrackError::Generic(format!("Invalid base URL: {}", e)))?;
        let url = base
            .join(endpoint)
            .map_err(|e| TrackError::Generic(format!("Invalid endpoint URL: {}", e)))?;
        Ok(url.to_string())
    }

    /// Make a POST request with a form-urlencoded body
    pub fn post_form(
        &self,
        endpoint: &str,
        fields: &[(&str, &str)],
    ) -> Result<minreq::Response, TrackError> {
        let url = self.build_url(endpoint)?;
        let body = encode_form(fields);

        let mut request = Self::http_post(&url)
            .with_header("Content-Type", "application/x-www-form-urlencoded")
            .with_header("Accept", "application/json")
            .with_body(body);

        if let Some(timeout) = self.timeout_secs {
            request = request.with_timeout(timeout);
        }

        let response = request.send()?;
        Ok(response)
    }
}

pub(crate) fn encode_form(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter())
        .finish()
}
