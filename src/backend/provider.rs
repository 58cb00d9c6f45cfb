/**
 * In-memory Provider
 *
 * A `Provider` that keeps its logins and downloadable resources in
 * process. It publishes through a broadcast channel, so every
 * `publisher()` stream sees the events published after it was created.
 */

use crate::backend::error::BackendError;
use crate::backend::model::Provider;
use crate::backend::realtime::broadcast::DEFAULT_CAPACITY;
use crate::backend::realtime::{broadcast_event, event_channel, subscribe_events, EventBroadcast};
use crate::shared::element::Element;
use crate::shared::{Event, Login, LoginStatus};
use bytes::Bytes;
use futures_util::future::BoxFuture;
use futures_util::stream::BoxStream;
use futures_util::FutureExt;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

pub struct MemoryProvider {
    tokens: HashSet<String>,
    logins: RwLock<Vec<Login>>,
    blobs: HashMap<String, Bytes>,
    proxy_urls: Vec<String>,
    events: EventBroadcast,
    next_event_id: AtomicU64,
    next_message_id: AtomicU64,
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self {
            tokens: HashSet::new(),
            logins: RwLock::new(Vec::new()),
            blobs: HashMap::new(),
            proxy_urls: Vec::new(),
            events: event_channel(DEFAULT_CAPACITY),
            next_event_id: AtomicU64::new(1),
            next_message_id: AtomicU64::new(1),
        }
    }

    /// Accept `token`. With no tokens configured every token is accepted.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.tokens.insert(token.into());
        self
    }

    pub fn with_login(mut self, login: Login) -> Self {
        self.logins.get_mut().push(login);
        self
    }

    /// Serve `data` for downloads of `url`
    pub fn with_blob(mut self, url: impl Into<String>, data: impl Into<Bytes>) -> Self {
        self.blobs.insert(url.into(), data.into());
        self
    }

    /// Allow downloads under `prefix`
    pub fn with_proxy_url(mut self, prefix: impl Into<String>) -> Self {
        self.proxy_urls.push(prefix.into());
        self
    }

    fn next_event_id(&self) -> u64 {
        self.next_event_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Allocate an id for a newly created message. Message ids are counted
    /// apart from event ids.
    pub fn next_message_id(&self) -> String {
        self.next_message_id.fetch_add(1, Ordering::Relaxed).to_string()
    }

    /// Publish `event`, returning how many subscribers received it
    pub fn publish(&self, event: Event) -> usize {
        broadcast_event(&self.events, event)
    }

    /// Publish a `message-created` event for `elements` sent as `login`
    pub fn publish_message(
        &self,
        login: &Login,
        message_id: &str,
        elements: &[Element],
    ) -> Event {
        let event = Event::message_created(self.next_event_id(), login, message_id, elements);
        self.publish(event.clone());
        event
    }

    /// Update (or add) a login's status and publish `login-updated`
    pub async fn set_login_status(
        &self,
        platform: &str,
        self_id: &str,
        status: LoginStatus,
    ) -> Login {
        let login = {
            let mut logins = self.logins.write().await;
            match logins
                .iter_mut()
                .find(|l| l.platform == platform && l.self_id == self_id)
            {
                Some(existing) => {
                    existing.status = status;
                    existing.clone()
                }
                None => {
                    let login = Login::new(platform, self_id, status);
                    logins.push(login.clone());
                    login
                }
            }
        };
        tracing::info!("Login {}/{} is now {:?}", platform, self_id, status);
        self.publish(Event::login_updated(self.next_event_id(), login.clone()));
        login
    }
}

impl Provider for MemoryProvider {
    fn publisher(&self) -> BoxStream<'static, Event> {
        subscribe_events(&self.events)
    }

    fn authenticate(&self, token: &str) -> bool {
        self.tokens.is_empty() || self.tokens.contains(token)
    }

    fn proxy_urls(&self) -> Vec<String> {
        self.proxy_urls.clone()
    }

    fn get_logins(&self) -> BoxFuture<'_, Vec<Login>> {
        async move { self.logins.read().await.clone() }.boxed()
    }

    fn download<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Bytes, BackendError>> {
        async move {
            tracing::debug!("Downloading {}", url);
            self.blobs
                .get(url)
                .cloned()
                .ok_or_else(|| BackendError::download(url, "resource not found"))
        }
        .boxed()
    }
}
