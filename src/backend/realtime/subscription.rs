/**
 * Event Subscriptions
 *
 * Turns a broadcast receiver into a `Stream` of events. Lagged receivers
 * log how many events they skipped and continue; the stream ends when
 * every sender is dropped.
 */

use crate::backend::realtime::broadcast::EventBroadcast;
use crate::shared::Event;
use futures_util::stream::{BoxStream, StreamExt};
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;

/// Subscribe to every event published from now on
pub fn subscribe_events(broadcast_tx: &EventBroadcast) -> BoxStream<'static, Event> {
    BroadcastStream::new(broadcast_tx.subscribe())
        .filter_map(|received| async move {
            match received {
                Ok(event) => Some(event),
                Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                    tracing::warn!("[Realtime] Receiver lagged, skipped {} events", skipped);
                    None
                }
            }
        })
        .boxed()
}
