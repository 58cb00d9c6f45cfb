/**
 * Resource Fetching
 *
 * Resolves the `src` of a resource element to bytes. `data:` URIs are
 * decoded in place; anything else must live under one of the provider's
 * proxy URLs and is fetched through `Provider::download`.
 */

use crate::backend::error::BackendError;
use crate::backend::model::Provider;
use crate::shared::element::Element;
use axum::http::StatusCode;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;

/// Fetch the bytes behind `src`
///
/// # Errors
///
/// * `403 Forbidden` - `src` is neither a `data:` URI nor under a proxy URL
/// * `400 Bad Request` - a malformed `data:` URI
/// * whatever `Provider::download` fails with
pub async fn fetch_resource<P>(provider: &P, src: &str) -> Result<Bytes, BackendError>
where
    P: Provider + ?Sized,
{
    if let Some(rest) = src.strip_prefix("data:") {
        return decode_data_uri(rest);
    }

    let proxied = provider
        .proxy_urls()
        .iter()
        .any(|prefix| src.starts_with(prefix.as_str()));
    if !proxied {
        tracing::warn!("Refusing to fetch {}: not under a proxy URL", src);
        return Err(BackendError::handler(
            StatusCode::FORBIDDEN,
            format!("Resource {} is not proxied by this provider", src),
        ));
    }

    provider.download(src).await
}

/// Fetch the resource carried by `element`
pub async fn fetch_element_resource<P>(
    provider: &P,
    element: &Element,
) -> Result<Bytes, BackendError>
where
    P: Provider + ?Sized,
{
    let resource = element.resource().ok_or_else(|| {
        BackendError::handler(
            StatusCode::BAD_REQUEST,
            format!("<{}> carries no resource", element.tag_name()),
        )
    })?;
    fetch_resource(provider, &resource.src).await
}

// `rest` is everything after `data:`, i.e. `[<mime>][;base64],<payload>`.
// Payloads without `;base64` are taken verbatim.
fn decode_data_uri(rest: &str) -> Result<Bytes, BackendError> {
    let (meta, payload) = rest.split_once(',').ok_or_else(|| {
        BackendError::handler(StatusCode::BAD_REQUEST, "Malformed data URI: missing ','")
    })?;

    if meta.ends_with(";base64") {
        STANDARD.decode(payload).map(Bytes::from).map_err(|e| {
            BackendError::handler(StatusCode::BAD_REQUEST, format!("Malformed data URI: {}", e))
        })
    } else {
        Ok(Bytes::copy_from_slice(payload.as_bytes()))
    }
}
