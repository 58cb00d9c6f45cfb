/**
 * Provider Event Model
 *
 * This module defines the events a provider publishes and the login records
 * it reports. Message events carry their content as rendered markup, so the
 * element tree crosses the wire as a string.
 */
use crate::shared::element::{render_all, Element};
use serde::{Deserialize, Serialize};

/// Type of provider event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    MessageCreated,
    MessageUpdated,
    MessageDeleted,
    LoginAdded,
    LoginRemoved,
    LoginUpdated,
    /// Platform-specific event type
    #[serde(untagged)]
    Custom(String),
}

/// A message as carried inside an event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageObject {
    pub id: String,
    /// Canonical markup of the message content
    pub content: String,
}

impl MessageObject {
    /// Render `elements` into the markup carried by the event
    pub fn from_elements(id: impl Into<String>, elements: &[Element]) -> Self {
        Self {
            id: id.into(),
            content: render_all(elements),
        }
    }
}

/// Connection state of a login
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoginStatus {
    #[default]
    Offline,
    Online,
    Connect,
    Disconnect,
    Reconnect,
}

/// An account a provider is logged in as
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Login {
    pub platform: String,
    pub self_id: String,
    pub status: LoginStatus,
}

impl Login {
    pub fn new(
        platform: impl Into<String>,
        self_id: impl Into<String>,
        status: LoginStatus,
    ) -> Self {
        Self {
            platform: platform.into(),
            self_id: self_id.into(),
            status,
        }
    }
}

/// Event published by a provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: u64,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub platform: String,
    pub self_id: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<Login>,
}

impl Event {
    /// Create a new event stamped with the current time
    pub fn new(
        id: u64,
        event_type: EventType,
        platform: impl Into<String>,
        self_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            event_type,
            platform: platform.into(),
            self_id: self_id.into(),
            timestamp: get_timestamp(),
            message: None,
            login: None,
        }
    }

    /// Create a `message-created` event whose content is rendered from `elements`
    pub fn message_created(id: u64, login: &Login, message_id: &str, elements: &[Element]) -> Self {
        Self::new(id, EventType::MessageCreated, &login.platform, &login.self_id)
            .with_message(MessageObject::from_elements(message_id, elements))
    }

    /// Create a login lifecycle event
    pub fn login_updated(id: u64, login: Login) -> Self {
        Self::new(id, EventType::LoginUpdated, &login.platform, &login.self_id).with_login(login)
    }

    pub fn with_message(mut self, message: MessageObject) -> Self {
        self.message = Some(message);
        self
    }

    pub fn with_login(mut self, login: Login) -> Self {
        self.login = Some(login);
        self
    }
}

fn get_timestamp() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
