/**
 * Router Configuration
 *
 * Mounts every action of a `Router` under one axum route,
 * `POST {path}/{version}/{action}`. The action is taken from the path,
 * the params from the JSON body (an empty body means `{}`).
 */

use crate::backend::error::BackendError;
use crate::backend::model::{Request, Router};
use crate::backend::routes::table::dispatch;
use crate::shared::ServerConfig;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

/// Create the axum router serving `router`'s actions
pub fn create_router(router: Arc<dyn Router>, config: &ServerConfig) -> axum::Router {
    let path = format!("{}/{{action}}", config.api_prefix());
    tracing::info!("Mounting actions at POST {}", path);

    axum::Router::new()
        .route(&path, post(handle_action))
        .with_state(router)
}

async fn handle_action(
    State(router): State<Arc<dyn Router>>,
    Path(action): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, BackendError> {
    let params = if body.is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            BackendError::handler(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", e))
        })?
    };

    let request = Request {
        headers,
        action,
        params,
    };
    let result = dispatch(router.as_ref(), request).await?;
    Ok(Json(result))
}
