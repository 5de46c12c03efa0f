use super::{ApiCall, ApiError};
use crate::config::ApiConfig;
use anyhow::{bail, Context, Result};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Error payload the API sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Thin wrapper over a shared `reqwest::Client` bound to the catalog API base URL.
///
/// Cloning is cheap; each request task gets its own clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid API base URL {:?}", config.base_url))?;
        if base.cannot_be_a_base() {
            bail!("API base URL {} cannot carry a path", base);
        }
        let http = Client::builder()
            .user_agent(concat!("anicat/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, base })
    }

    /// Absolute URL for `segments`, each percent-encoded as one path segment.
    pub fn endpoint(&self, segments: &[String]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Runs one call. A 2xx with an empty body yields `Value::Null`.
    pub async fn execute(&self, call: &ApiCall) -> Result<Value, ApiError> {
        let url = self.endpoint(&call.segments);
        debug!(method = %call.method, %url, "api: sending request");

        let mut request = self.http.request(call.method.clone(), url);
        if let Some(body) = &call.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.trim().is_empty());
            warn!(
                method = %call.method,
                path = %call.path(),
                status = status.as_u16(),
                message = message.as_deref().unwrap_or(""),
                "api: request rejected"
            );
            return Err(ApiError::Status { status, message });
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
