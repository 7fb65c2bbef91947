/// API Client: the single point of entry for all backend calls.
///
/// Every request goes through `ApiClient::request`, which normalises the two
/// response shapes the backend produces (`{data: T}` envelopes and bare JSON)
/// and maps every failure onto `ApiError`.
///
/// No retries, no timeout, no backoff: a failed call surfaces immediately.
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::ApiError;

pub mod resume;
pub mod scoped_resumes;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    default_headers: HeaderMap,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers: HeaderMap::new(),
        }
    }

    /// Headers sent with every request. Per-request headers passed to
    /// `request` override these on a name clash.
    pub fn with_default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(Method::GET, endpoint, None::<&()>, HeaderMap::new())
            .await
    }

    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, endpoint, Some(body), HeaderMap::new())
            .await
    }

    pub async fn put<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, endpoint, Some(body), HeaderMap::new())
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, endpoint, None::<&()>, HeaderMap::new())
            .await
    }

    /// Issues one request and normalises the response.
    ///
    /// Order of checks:
    /// 1. body must parse as JSON (empty body counts as `null`)
    /// 2. non-2xx status → `ApiError::Server`
    /// 3. 2xx with a truthy `error` field → `ApiError::Server`
    /// 4. `body.data` if present, else the whole body
    pub async fn request<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        headers: HeaderMap,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("{method} {url}");

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .headers(self.default_headers.clone())
            .headers(headers);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            let err = classify_transport_error(&url, &e);
            warn!("{method} {url} failed before a response arrived: {e}");
            err
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::unexpected(format!("Failed to read response body: {e}")))?;

        let payload = normalize_response(status, &text).map_err(|e| {
            warn!("{method} {url} returned an error (status {}): {e}", e.status());
            e
        })?;

        serde_json::from_value(payload)
            .map_err(|e| ApiError::unexpected(format!("Unexpected response shape from {url}: {e}")))
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

/// Turns a raw status + body into the payload, or the uniform error.
pub(crate) fn normalize_response(status: u16, body: &str) -> Result<Value, ApiError> {
    let mut parsed: Value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).map_err(|e| {
            ApiError::unexpected(format!("Invalid JSON in response (HTTP {status}): {e}"))
        })?
    };

    let is_success = (200..300).contains(&status);
    let declared_error = parsed.get("error").filter(|v| is_truthy(v));

    if !is_success || declared_error.is_some() {
        let message = declared_error
            .and_then(error_message)
            .unwrap_or_else(|| format!("HTTP {status}"));
        let details = parsed.get("details").filter(|v| !v.is_null()).cloned();
        return Err(ApiError::server(status, message, details));
    }

    if parsed.get("data").is_some_and(|d| !d.is_null()) {
        return Ok(parsed["data"].take());
    }
    Ok(parsed)
}

/// Accepts `"error": "msg"` and `"error": {"message": "msg", ...}`.
fn error_message(error: &Value) -> Option<String> {
    match error {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn classify_transport_error(url: &str, err: &reqwest::Error) -> ApiError {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        ApiError::network(format!(
            "Network error: unable to reach the server at {url}. Check your connection and that the backend is running."
        ))
    } else {
        ApiError::unexpected(format!("Request to {url} failed: {err}"))
    }
}
