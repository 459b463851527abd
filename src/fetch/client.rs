//! HTTP Client Capability
//!
//! The access layer never talks to `reqwest` directly; it goes through the
//! `HttpClient` trait so tests can count and fail requests deterministically.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::{PokedexError, Result};

/// Per-request timeout of the production client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

// == Request ==
/// A request handed to an `HttpClient`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON body for write verbs
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url, None)
    }

    pub fn new(method: Method, url: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            url: url.into(),
            body,
        }
    }
}

// == Response ==
/// A successful response with its decoded JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpResponse {
    /// URL the request was sent to
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Parsed JSON body
    pub data: Value,
}

impl HttpResponse {
    pub fn new(url: impl Into<String>, status: u16, data: Value) -> Self {
        Self {
            url: url.into(),
            status,
            data,
        }
    }

    /// Deserializes the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.data.clone()).map_err(|e| {
            PokedexError::Decode(format!("{}: {}", self.url, e))
        })
    }
}

// == Client Trait ==
/// Capability to perform HTTP requests.
///
/// Implementations must reject non-success statuses with an error so that
/// callers never see (or cache) an error payload as data.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

// == Reqwest Client ==
/// Production client backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("pokedex_cache/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PokedexError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut builder = self.http.request(request.method, &request.url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?.error_for_status()?;
        let status = response.status().as_u16();

        // Write verbs may legitimately answer with an empty body
        let bytes = response.bytes().await?;
        let data = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(HttpResponse::new(request.url, status, data))
    }
}
