/**
 * Route and Provider Contracts
 *
 * The request envelope routes receive, the `Provider` a platform adapter
 * implements, and the `Router` the HTTP layer dispatches through.
 *
 * Route handlers are stored type-erased as `RouteCall`: they take a
 * `Request<serde_json::Value>` and resolve to a JSON value, so one table
 * can hold handlers with different parameter and result types.
 */

use crate::backend::error::BackendError;
use crate::shared::{Event, Login};
use axum::http::{HeaderMap, StatusCode};
use bytes::Bytes;
use futures_util::future::BoxFuture;
use futures_util::stream::BoxStream;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Header naming the platform a request targets
pub const PLATFORM_HEADER: &str = "x-platform";

/// Header naming the login a request acts as
pub const SELF_ID_HEADER: &str = "x-self-id";

/// A routed API call
#[derive(Debug, Clone)]
pub struct Request<T> {
    pub headers: HeaderMap,
    /// Action name, e.g. `message.create`
    pub action: String,
    pub params: T,
}

impl<T> Request<T> {
    pub fn new(action: impl Into<String>, params: T) -> Self {
        Self {
            headers: HeaderMap::new(),
            action: action.into(),
            params,
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Replace the params, keeping headers and action
    pub fn map_params<U>(self, f: impl FnOnce(T) -> U) -> Request<U> {
        Request {
            headers: self.headers,
            action: self.action,
            params: f(self.params),
        }
    }

    /// A header value, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn platform(&self) -> Option<&str> {
        self.header(PLATFORM_HEADER)
    }

    pub fn self_id(&self) -> Option<&str> {
        self.header(SELF_ID_HEADER)
    }
}

impl Request<Value> {
    /// Decode the JSON params into `T`.
    ///
    /// A params shape the route does not accept is the caller's fault, so the
    /// error carries 400.
    pub fn parse_params<T: DeserializeOwned>(self) -> Result<Request<T>, BackendError> {
        let Request {
            headers,
            action,
            params,
        } = self;
        let params = serde_json::from_value(params).map_err(|e| {
            BackendError::handler(
                StatusCode::BAD_REQUEST,
                format!("Invalid params for {}: {}", action, e),
            )
        })?;
        Ok(Request {
            headers,
            action,
            params,
        })
    }
}

/// A platform adapter
pub trait Provider: Send + Sync {
    /// Stream of events the provider emits from now on
    fn publisher(&self) -> BoxStream<'static, Event>;

    /// Whether `token` may call this provider
    fn authenticate(&self, token: &str) -> bool;

    /// URL prefixes whose resources may be fetched through `download`
    fn proxy_urls(&self) -> Vec<String>;

    fn get_logins(&self) -> BoxFuture<'_, Vec<Login>>;

    /// Fetch the resource at `url`
    fn download<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Bytes, BackendError>>;
}

/// Future returned by a type-erased route
pub type RouteFuture = BoxFuture<'static, Result<Value, BackendError>>;

/// A type-erased route handler
pub type RouteCall = Arc<dyn Fn(Request<Value>) -> RouteFuture + Send + Sync>;

/// A table of routes the HTTP layer can dispatch into
pub trait Router: Send + Sync {
    fn routes(&self) -> &HashMap<String, RouteCall>;

    /// Whether a request carrying `headers` may be dispatched at all
    fn validate_headers(&self, headers: &HeaderMap) -> bool;
}
