//! Generic panel API call plumbing.
//!
//! Provides a trait-based abstraction for API calls, enabling dependency
//! injection and easier testing. `HttpApiClient` is the production
//! implementation over reqwest; typed request wrappers live in
//! `crate::requests`.

use crate::config::Config;
use crate::error::ApiError;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30000;

/// Per-call options: HTTP method and optional JSON body.
#[derive(Debug, Clone)]
pub struct CallOptions {
    pub method: String,
    pub body: Option<Value>,
}

impl CallOptions {
    pub fn get() -> Self {
        Self {
            method: "GET".to_string(),
            body: None,
        }
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: "POST".to_string(),
            body: Some(body),
        }
    }
}

/// Trait for clients that execute panel API calls.
///
/// This abstraction allows for different transport implementations
/// and makes testing easier by allowing mock implementations.
pub trait ApiClient: Send + Sync {
    /// Executes a single call against the named backend action.
    ///
    /// # Arguments
    ///
    /// * `action` - Backend action name, joined onto the API base URL
    /// * `options` - HTTP method and optional JSON body
    ///
    /// # Returns
    ///
    /// A future resolving to the raw JSON payload; `Ok(None)` when the
    /// backend sent an empty body or JSON `null`.
    fn call<'a>(
        &'a self,
        action: &'a str,
        options: CallOptions,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Value>, ApiError>> + Send + 'a>>;
}

/// Extension trait for `ApiClient` that provides typed calls.
pub trait ApiClientExt: ApiClient {
    /// Executes a call and deserializes the payload into `T`.
    ///
    /// `Ok(None)` is passed through untouched so callers decide what an
    /// empty response means for their endpoint.
    fn call_api<'a, T>(
        &'a self,
        action: &'a str,
        options: CallOptions,
    ) -> Pin<Box<dyn Future<Output = Result<Option<T>, ApiError>> + Send + 'a>>
    where
        T: DeserializeOwned + Send + 'a,
    {
        Box::pin(async move {
            match self.call(action, options).await? {
                None => Ok(None),
                Some(value) => serde_json::from_value(value)
                    .map(Some)
                    .map_err(ApiError::Decode),
            }
        })
    }
}

// Implement ApiClientExt for all types that implement ApiClient
impl<T: ApiClient + ?Sized> ApiClientExt for T {}

/// Production API client over reqwest.
///
/// Owns transport, serialization, authentication and base error signaling:
/// non-2xx statuses and network failures surface as `ApiError::Request`,
/// request timeouts are configured on the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base: Url,
    token: Option<String>,
}

impl HttpApiClient {
    /// Creates a client against the given API base URL with the default
    /// timeout and no authentication token.
    pub fn new(api_base: &str) -> Result<Self, ApiError> {
        Self::with_timeout(api_base, DEFAULT_TIMEOUT_MS)
    }

    /// Creates a client with an explicit request timeout in milliseconds.
    pub fn with_timeout(api_base: &str, timeout_ms: u64) -> Result<Self, ApiError> {
        // A trailing slash is required for Url::join to treat the last path
        // segment as a directory.
        let normalized = if api_base.ends_with('/') {
            api_base.to_string()
        } else {
            format!("{}/", api_base)
        };
        let base = Url::parse(&normalized).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base,
            token: None,
        })
    }

    /// Creates a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = Self::with_timeout(config.api_base(), config.timeout_ms())?;
        Ok(match config.token.clone() {
            Some(token) => client.with_token(token),
            None => client,
        })
    }

    /// Attaches the panel session token, sent in the `Authorization` header.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Wraps the client in an `Arc` for sharing across tasks.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn endpoint(&self, action: &str) -> Result<Url, ApiError> {
        self.base
            .join(action)
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))
    }
}

impl ApiClient for HttpApiClient {
    fn call<'a>(
        &'a self,
        action: &'a str,
        options: CallOptions,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Value>, ApiError>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.endpoint(action)?;
            let method = Method::from_str(&options.method.to_uppercase())
                .map_err(|_| ApiError::InvalidMethod(options.method.clone()))?;

            tracing::debug!(action, method = %method, "calling panel API");

            let mut request = self.http.request(method, url);
            if let Some(token) = &self.token {
                request = request.header(AUTHORIZATION, token.as_str());
            }
            if let Some(body) = &options.body {
                request = request.json(body);
            }

            let response = request.send().await?.error_for_status()?;
            let bytes = response.bytes().await?;
            if bytes.is_empty() {
                return Ok(None);
            }

            let value: Value = serde_json::from_slice(&bytes).map_err(ApiError::Decode)?;
            Ok(if value.is_null() { None } else { Some(value) })
        })
    }
}
