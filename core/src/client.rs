//! Blocking client for the QR generation endpoint.
//!
//! # Design
//! `Client` splits each call into building an `HttpRequest` (pure, see
//! [`Client::build_request`]) and executing it through the configured
//! [`Transport`]. The transport slot is the only shared mutable state; it sits
//! behind a reader/writer lock that is held just long enough to clone the
//! `Arc`, never across the network call.

use std::io::Read;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, trace, warn};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::params;
use crate::response::Response;
use crate::types::Request;

pub const DEFAULT_BASE_URL: &str = "https://api.scanova.io/v2";

const USER_AGENT: &str = concat!("scanova-rs/", env!("CARGO_PKG_VERSION"));

/// Construction options for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Stored on the client; the service does not currently require it on
    /// QR requests, so it is not sent.
    pub api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Client for `GET {base_url}/qrcode/url`.
pub struct Client {
    base_url: String,
    api_key: Option<String>,
    transport: RwLock<Arc<dyn Transport>>,
}

impl Client {
    /// Client for the public endpoint using the default `ureq` transport.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let transport: Arc<dyn Transport> = Arc::new(UreqTransport::new());
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            transport: RwLock::new(transport),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Route all subsequent requests through `transport`. Requests already
    /// in flight finish on the transport they started with.
    pub fn set_transport(&self, transport: impl Transport + 'static) {
        let transport: Arc<dyn Transport> = Arc::new(transport);
        let mut slot = self.transport.write().unwrap_or_else(PoisonError::into_inner);
        *slot = transport;
    }

    fn current_transport(&self) -> Arc<dyn Transport> {
        let slot = self.transport.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&slot)
    }

    /// The GET request `new_qr` would issue for `request`.
    pub fn build_request(&self, request: &Request) -> Result<HttpRequest, ApiError> {
        let query = params::to_query_string(request)?;
        trace!(query_len = query.len(), "encoded QR request");
        Ok(HttpRequest {
            url: format!("{}/qrcode/url?{query}", self.base_url),
            headers: vec![
                ("accept".to_string(), "image/*".to_string()),
                ("user-agent".to_string(), USER_AGENT.to_string()),
            ],
        })
    }

    /// Ask the service to render `request`.
    ///
    /// On success the caller owns the returned body stream. Any non-2xx
    /// status becomes [`ApiError::RemoteError`] after the body is drained.
    pub fn new_qr(&self, request: &Request) -> Result<Response, ApiError> {
        let http_request = self.build_request(request)?;
        let transport = self.current_transport();

        debug!(url = %http_request.url, "requesting QR code");
        let http_response = transport.execute(http_request)?;
        debug!(status = http_response.status, "QR service responded");

        if !http_response.is_success() {
            return Err(remote_error(http_response));
        }
        Ok(Response::new(http_response))
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

/// Drain the body of a failed response and turn it into an error.
fn remote_error(mut response: HttpResponse) -> ApiError {
    let mut body = Vec::new();
    if let Err(err) = response.body.read_to_end(&mut body) {
        warn!(status = response.status, error = %err, "failed to drain error body");
        body.clear();
    }

    let message = if body.is_empty() {
        response.status_text
    } else {
        String::from_utf8_lossy(&body).into_owned()
    };
    warn!(status = response.status, %message, "QR service returned an error");
    ApiError::RemoteError {
        status: response.status,
        message,
    }
}
