use std::fmt;

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Which participant produced a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    User,
    Assistant,
}

impl Side {
    pub fn is_user(self) -> bool {
        matches!(self, Side::User)
    }
}

/// Opaque message identifier, assigned by the client when the message is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One chat turn. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    id: MessageId,
    text: String,
    side: Side,
    timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(side: Side, text: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            side,
            timestamp,
        }
    }

    pub fn user(text: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self::new(Side::User, text, timestamp)
    }

    pub fn assistant(text: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self::new(Side::Assistant, text, timestamp)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// Append-only message sequence owned by a chat session.
#[derive(Default, Clone, Debug)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Append a message to the end of the sequence.
    pub fn push(&mut self, msg: Message) {
        self.messages.push(msg);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
