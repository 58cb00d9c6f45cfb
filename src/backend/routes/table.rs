/**
 * Route Table
 *
 * Holds the registered actions and the header policy. Identity headers
 * are always required; bearer tokens are checked by the `Provider` the
 * table authenticates against, if any. Handlers are registered with their
 * own parameter and result types and erased to `RouteCall` on insertion.
 */

use crate::backend::error::BackendError;
use crate::backend::model::{
    Provider, Request, RouteCall, RouteFuture, Router, PLATFORM_HEADER, SELF_ID_HEADER,
};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use futures_util::FutureExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

/// The standard `Router`
#[derive(Default)]
pub struct RouteTable {
    auth: Option<Arc<dyn Provider>>,
    routes: HashMap<String, RouteCall>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check bearer tokens with `provider.authenticate`. A request without
    /// an `Authorization` header is checked with an empty token.
    pub fn with_auth(mut self, provider: Arc<dyn Provider>) -> Self {
        self.auth = Some(provider);
        self
    }

    /// Register `handler` for `action`, replacing any previous handler.
    ///
    /// ```rust,ignore
    /// table.route("message.create", |request: Request<Vec<Element>>| async move {
    ///     Ok(render_all(&request.params))
    /// });
    /// ```
    pub fn route<T, R, F, Fut>(&mut self, action: impl Into<String>, handler: F) -> &mut Self
    where
        T: DeserializeOwned + Send + 'static,
        R: Serialize + Send + 'static,
        F: Fn(Request<T>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, BackendError>> + Send + 'static,
    {
        let handler = Arc::new(handler);
        let call: RouteCall = Arc::new(move |request: Request<Value>| -> RouteFuture {
            let handler = Arc::clone(&handler);
            async move {
                let request = request.parse_params::<T>()?;
                let result = (*handler)(request).await?;
                Ok(serde_json::to_value(result)?)
            }
            .boxed()
        });
        self.routes.insert(action.into(), call);
        self
    }

    /// Validate, look up and run `request`
    pub async fn dispatch(&self, request: Request<Value>) -> Result<Value, BackendError> {
        dispatch(self, request).await
    }
}

impl Router for RouteTable {
    fn routes(&self) -> &HashMap<String, RouteCall> {
        &self.routes
    }

    fn validate_headers(&self, headers: &HeaderMap) -> bool {
        let present = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| !v.is_empty())
        };
        if !present(PLATFORM_HEADER) || !present(SELF_ID_HEADER) {
            return false;
        }

        match &self.auth {
            None => true,
            Some(provider) => {
                let token = headers
                    .get(AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.strip_prefix("Bearer "))
                    .unwrap_or_default();
                provider.authenticate(token)
            }
        }
    }
}

/// Validate `request` against `router`, then run the matching route
pub async fn dispatch<R>(router: &R, request: Request<Value>) -> Result<Value, BackendError>
where
    R: Router + ?Sized,
{
    if !router.validate_headers(&request.headers) {
        tracing::warn!("Rejected {}: header validation failed", request.action);
        return Err(BackendError::Unauthorized);
    }

    let call = router
        .routes()
        .get(&request.action)
        .cloned()
        .ok_or_else(|| BackendError::RouteNotFound {
            action: request.action.clone(),
        })?;

    tracing::debug!("Dispatching {}", request.action);
    call(request).await
}
