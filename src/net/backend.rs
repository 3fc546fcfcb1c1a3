//! Shared HTTP entry point for every API call.
//!
//! One `Backend` instance is created at mount and provided via context. It
//! joins the configured base URL with a request path and attaches
//! `Authorization: Bearer <token>` by reading the session *at send time*,
//! so a token picked up mid-session is honored on the very next call.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Native builds: every
//! call fails with a network error, since these endpoints are only
//! meaningful in the browser.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::state::session::Session;

/// Failure of a single API call. Propagated to callers unchanged; nothing
/// in this layer retries or remaps.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request rejected with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The credential failure case the login form cares about.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401))
    }
}

/// Base URL of the remote API. Overridable at compile time; the default
/// matches the Trunk dev-server proxy.
pub fn backend_url() -> String {
    option_env!("REAPP_BACKEND_URL").unwrap_or("/api").to_owned()
}

/// Configured API client: base URL plus the session the Authorization
/// header is read from.
#[derive(Clone)]
pub struct Backend {
    base_url: String,
    session: Session,
}

impl Backend {
    pub fn new(session: Session) -> Self {
        Self::with_base_url(backend_url(), session)
    }

    pub fn with_base_url(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Authorization header value from the current session, read at send
    /// time rather than at client construction.
    fn auth_header(&self) -> Option<String> {
        self.session
            .bearer_token()
            .map(|token| format!("Bearer {token}"))
    }

    /// GET `path` with query parameters, decoding the JSON body as `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut req = gloo_net::http::Request::get(&self.url(path))
                .query(query.iter().map(|(k, v)| (*k, v.as_str())));
            if let Some(value) = self.auth_header() {
                req = req.header("Authorization", &value);
            }
            let resp = req
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Self::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(path), self.auth_header(), query);
            Err(Self::native_stub())
        }
    }

    /// POST `body` as JSON to `path`, decoding the JSON body as `T`.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut req = gloo_net::http::Request::post(&self.url(path));
            if let Some(value) = self.auth_header() {
                req = req.header("Authorization", &value);
            }
            let resp = req
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Self::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(path), self.auth_header(), body);
            Err(Self::native_stub())
        }
    }

    /// PUT `body` as JSON to `path`, decoding the JSON body as `T`.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut req = gloo_net::http::Request::put(&self.url(path));
            if let Some(value) = self.auth_header() {
                req = req.header("Authorization", &value);
            }
            let resp = req
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Self::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(path), self.auth_header(), body);
            Err(Self::native_stub())
        }
    }

    #[cfg(feature = "hydrate")]
    async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(not(feature = "hydrate"))]
    fn native_stub() -> ApiError {
        ApiError::Network("HTTP requests are only available in the browser".to_owned())
    }
}
