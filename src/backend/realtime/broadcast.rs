/**
 * Event Broadcasting
 *
 * The broadcast type definition and the helper providers use to publish.
 * All subscribers receive a copy of each event.
 */

use crate::shared::Event;
use tokio::sync::broadcast;

/// Default channel capacity
pub const DEFAULT_CAPACITY: usize = 1000;

/// Provider event broadcast
///
/// Cloning the sender shares the channel, so any holder can publish.
pub type EventBroadcast = broadcast::Sender<Event>;

/// Create a broadcast channel with no initial subscribers
pub fn event_channel(capacity: usize) -> EventBroadcast {
    let (tx, _) = broadcast::channel(capacity);
    tx
}

/// Broadcast an event to all subscribers
///
/// Returns the number of subscribers that received the event (0 if none).
pub fn broadcast_event(broadcast_tx: &EventBroadcast, event: Event) -> usize {
    let event_type = event.event_type.clone();
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::info!(
                "[Realtime] {:?} event broadcast to {} subscribers",
                event_type,
                subscriber_count
            );
            subscriber_count
        }
        Err(_) => {
            // No subscribers, that's okay
            tracing::debug!("[Realtime] No subscribers to receive {:?} event", event_type);
            0
        }
    }
}
