//! Request plumbing shared by every typed API call.
//!
//! [`ApiClient`] owns the HTTP client (with its cookie store) and the base
//! URL, and funnels every call through [`ApiClient::send`], which transparently
//! refreshes an expired session: a 401 on a regular endpoint triggers exactly
//! one `POST /api/auth/refresh-token` followed by exactly one replay of the
//! original request. The replay and the session calls go through the raw
//! dispatch path, so no retry can trigger another retry.

use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{client::model::error::ApiError, model::api::ErrorDto};

const REFRESH_PATH: &str = "/api/auth/refresh-token";
const LOGOUT_PATH: &str = "/api/auth/logout";

/// A replayable API request: method, path, and an already-serialized body.
///
/// Holding the body as a `serde_json::Value` (rather than a consumed
/// `reqwest::Body`) is what lets the session-refresh path reissue the exact
/// same request after a successful refresh.
#[derive(Clone, Debug)]
pub(crate) struct ApiRequest {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attaches a JSON body to the request.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(
            serde_json::to_value(body)
                .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {e}")))?,
        );
        Ok(self)
    }
}

/// Typed API client with a cookie store and transparent session refresh.
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Creates a client for the API at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::Network(format!("Invalid base URL: {e}")))?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, base })
    }

    /// Sends a request, refreshing the session once on an expired token.
    ///
    /// - Non-401 responses (success or error) are returned untouched.
    /// - A 401 on the refresh or logout endpoints themselves is returned
    ///   untouched; those calls must never trigger another refresh.
    /// - A 401 anywhere else triggers one refresh call. On refresh success
    ///   the original request is reissued once via [`Self::dispatch`] and
    ///   that outcome is returned, including a second 401. On refresh
    ///   failure the logout endpoint is invoked best-effort and the refresh
    ///   error is returned.
    pub(crate) async fn send(&self, request: ApiRequest) -> Result<reqwest::Response, ApiError> {
        let response = self.dispatch(&request).await?;

        if response.status() != StatusCode::UNAUTHORIZED || is_session_path(&request.path) {
            return Ok(response);
        }

        match self.dispatch(&ApiRequest::post(REFRESH_PATH)).await {
            Ok(refresh) if refresh.status().is_success() => self.dispatch(&request).await,
            Ok(refresh) => {
                let err = error_from_response(refresh).await;
                self.logout_best_effort().await;
                Err(err)
            }
            Err(err) => {
                self.logout_best_effort().await;
                Err(err)
            }
        }
    }

    /// Performs a single HTTP exchange with no refresh logic attached.
    async fn dispatch(&self, request: &ApiRequest) -> Result<reqwest::Response, ApiError> {
        let url = self
            .base
            .join(&request.path)
            .map_err(|e| ApiError::Network(format!("Invalid request path: {e}")))?;

        let mut builder = self.http.request(request.method.clone(), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Ends the session after a failed refresh. The outcome is ignored, the
    /// caller gets the refresh error either way.
    async fn logout_best_effort(&self) {
        let _ = self.dispatch(&ApiRequest::post(LOGOUT_PATH)).await;
    }
}

fn is_session_path(path: &str) -> bool {
    path.contains(REFRESH_PATH) || path.contains(LOGOUT_PATH)
}

/// Parses a JSON success response, mapping error statuses to `ApiError::Http`.
pub(crate) async fn parse_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {e}")))
    } else {
        Err(error_from_response(response).await)
    }
}

/// Parses an empty success response (204 No Content, etc.).
pub(crate) async fn parse_empty_response(response: reqwest::Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

/// Builds an `ApiError::Http` from an error response, preferring the API's
/// own `ErrorDto` body over raw text.
async fn error_from_response(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();

    let message = match response.text().await {
        Ok(body) => match serde_json::from_str::<ErrorDto>(&body) {
            Ok(dto) => dto.error,
            Err(_) if !body.is_empty() => body,
            Err(_) => "Unknown error".to_string(),
        },
        Err(_) => "Unknown error".to_string(),
    };

    ApiError::Http { status, message }
}
