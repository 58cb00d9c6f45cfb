/**
 * Built-in Actions
 *
 * Actions served by a `MemoryProvider`:
 *
 * - `message.create` - params: a node array; renders it, publishes a
 *   `message-created` event and returns the message object
 * - `login.list` - returns the provider's logins
 * - `login.update` - params: `{"status": ..}`; sets the caller's login status
 */

use crate::backend::error::BackendError;
use crate::backend::model::{Provider, Request};
use crate::backend::provider::MemoryProvider;
use crate::backend::routes::table::RouteTable;
use crate::shared::element::Element;
use crate::shared::{Login, LoginStatus};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct LoginUpdate {
    status: LoginStatus,
}

/// Register the built-in actions on `table`
pub fn register_actions(table: &mut RouteTable, provider: Arc<MemoryProvider>) {
    let messages = Arc::clone(&provider);
    table.route("message.create", move |request: Request<Vec<Element>>| {
        let provider = Arc::clone(&messages);
        async move {
            let login = caller(&request)?;
            let message_id = provider.next_message_id();
            let event = provider.publish_message(&login, &message_id, &request.params);
            event.message.ok_or_else(|| {
                BackendError::handler(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "message event without message",
                )
            })
        }
    });

    let logins = Arc::clone(&provider);
    table.route("login.list", move |_: Request<Value>| {
        let provider = Arc::clone(&logins);
        async move { Ok::<_, BackendError>(provider.get_logins().await) }
    });

    table.route("login.update", move |request: Request<LoginUpdate>| {
        let provider = Arc::clone(&provider);
        async move {
            let login = caller(&request)?;
            Ok::<_, BackendError>(
                provider
                    .set_login_status(&login.platform, &login.self_id, request.params.status)
                    .await,
            )
        }
    });
}

// The identity headers are checked by `validate_headers` before any
// handler runs, so a miss here only happens when a handler is called directly.
fn caller<T>(request: &Request<T>) -> Result<Login, BackendError> {
    match (request.platform(), request.self_id()) {
        (Some(platform), Some(self_id)) => Ok(Login::new(platform, self_id, LoginStatus::Online)),
        _ => Err(BackendError::Unauthorized),
    }
}
