//! Core application state, separated from UI logic.
//!
//! `ClientState` holds every chat session and the waiting flag for the single
//! outstanding request. All changes go through its methods; the UI receives
//! the state as a parameter rather than owning pieces of it.

use std::fmt;

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::message::{Conversation, Message};

/// Title given to sessions until their first user message arrives.
pub const DEFAULT_TITLE: &str = "New Chat";
/// Maximum title length taken from the first user message.
const MAX_TITLE_CHARS: usize = 40;
/// Text shown as an assistant reply when the exchange fails.
pub const FALLBACK_REPLY: &str =
    "Sorry, there was an error processing your request. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One conversation with its sidebar metadata.
#[derive(Clone, Debug)]
pub struct ChatSession {
    id: SessionId,
    title: String,
    created: DateTime<Local>,
    conversation: Conversation,
}

impl ChatSession {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            id: SessionId::new(),
            title: DEFAULT_TITLE.to_string(),
            created: now,
            conversation: Conversation::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// "New Chat" until the first user message names the session.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created(&self) -> DateTime<Local> {
        self.created
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Text of the most recent message, for the sidebar preview.
    pub fn preview_text(&self) -> &str {
        self.conversation.last().map(Message::text).unwrap_or("")
    }

    /// Time shown in the sidebar: last activity, or creation when empty.
    pub fn preview_time(&self) -> DateTime<Local> {
        self.conversation
            .last()
            .map(Message::timestamp)
            .unwrap_or(self.created)
    }

    fn append(&mut self, msg: Message) {
        if self.title == DEFAULT_TITLE && msg.side().is_user() {
            if let Some(title) = title_from(msg.text()) {
                self.title = title;
            }
        }
        self.conversation.push(msg);
    }
}

/// First non-blank line, cut to `MAX_TITLE_CHARS` characters.
fn title_from(text: &str) -> Option<String> {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    if line.chars().count() > MAX_TITLE_CHARS {
        let cut: String = line.chars().take(MAX_TITLE_CHARS).collect();
        Some(format!("{}…", cut.trim_end()))
    } else {
        Some(line.to_string())
    }
}

/// Core application state for the chat client.
#[derive(Debug)]
pub struct ClientState {
    /// Sessions, newest first (sidebar order).
    pub sessions: Vec<ChatSession>,

    /// Session shown in the central panel.
    pub current: SessionId,

    /// Session with a request in flight, if any.
    pub waiting: Option<SessionId>,
}

impl ClientState {
    /// Create a state with a single empty session selected.
    pub fn new(now: DateTime<Local>) -> Self {
        let session = ChatSession::new(now);
        Self {
            current: session.id,
            sessions: vec![session],
            waiting: None,
        }
    }

    pub fn session(&self, id: SessionId) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    fn session_mut(&mut self, id: SessionId) -> Option<&mut ChatSession> {
        self.sessions.iter_mut().find(|s| s.id == id)
    }

    pub fn current_session(&self) -> Option<&ChatSession> {
        self.session(self.current)
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting.is_some()
    }

    /// Prepend a fresh session and make it current.
    pub fn start_new_session(&mut self, now: DateTime<Local>) -> SessionId {
        let session = ChatSession::new(now);
        let id = session.id;
        self.sessions.insert(0, session);
        self.current = id;
        tracing::debug!(%id, "started new session");
        id
    }

    /// Switch to another session. Unknown ids are ignored.
    pub fn select_session(&mut self, id: SessionId) -> bool {
        if self.session(id).is_some() {
            self.current = id;
            true
        } else {
            false
        }
    }

    /// Append the user's text to the current session.
    ///
    /// Returns the session to query, or `None` if the text is blank or a
    /// request is already outstanding.
    pub fn push_user_message(&mut self, text: &str, now: DateTime<Local>) -> Option<SessionId> {
        if text.trim().is_empty() || self.is_waiting() {
            return None;
        }
        let id = self.current;
        let session = self.session_mut(id)?;
        session.append(Message::user(text, now));
        self.waiting = Some(id);
        Some(id)
    }

    /// Append a reply to the session that asked for it and clear the waiting flag.
    pub fn push_reply(&mut self, id: SessionId, text: &str, now: DateTime<Local>) {
        if self.waiting == Some(id) {
            self.waiting = None;
        }
        match self.session_mut(id) {
            Some(session) => session.append(Message::assistant(text, now)),
            None => tracing::warn!(%id, "reply for unknown session dropped"),
        }
    }

    /// Record a failed exchange as the fixed fallback reply.
    pub fn push_failure(&mut self, id: SessionId, now: DateTime<Local>) {
        self.push_reply(id, FALLBACK_REPLY, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Side;

    #[test]
    fn test_client_state_new() {
        let state = ClientState::new(Local::now());
        assert_eq!(state.sessions.len(), 1);
        assert!(!state.is_waiting());
        let current = state.current_session().unwrap();
        assert_eq!(current.title(), DEFAULT_TITLE);
        assert!(current.conversation().is_empty());
    }

    #[test]
    fn test_start_new_session_prepends_and_selects() {
        let mut state = ClientState::new(Local::now());
        let first = state.current;
        let second = state.start_new_session(Local::now());

        assert_eq!(state.current, second);
        assert_eq!(state.sessions[0].id(), second);
        assert_eq!(state.sessions[1].id(), first);
        assert!(state.current_session().unwrap().conversation().is_empty());
    }

    #[test]
    fn test_select_session() {
        let mut state = ClientState::new(Local::now());
        let first = state.current;
        state.start_new_session(Local::now());

        assert!(state.select_session(first));
        assert_eq!(state.current, first);

        assert!(!state.select_session(SessionId::new()));
        assert_eq!(state.current, first);
    }

    #[test]
    fn test_blank_input_is_not_sent() {
        let mut state = ClientState::new(Local::now());
        assert_eq!(state.push_user_message("   \n ", Local::now()), None);
        assert!(state.current_session().unwrap().conversation().is_empty());
        assert!(!state.is_waiting());
    }

    #[test]
    fn test_push_user_message_sets_waiting() {
        let mut state = ClientState::new(Local::now());
        let id = state.push_user_message("hello", Local::now());

        assert_eq!(id, Some(state.current));
        assert_eq!(state.waiting, Some(state.current));

        // A second send while waiting is refused.
        assert_eq!(state.push_user_message("again", Local::now()), None);
        assert_eq!(state.current_session().unwrap().conversation().len(), 1);
    }

    #[test]
    fn test_reply_goes_to_requesting_session() {
        let mut state = ClientState::new(Local::now());
        let asking = state.push_user_message("question", Local::now()).unwrap();
        let other = state.start_new_session(Local::now());

        state.push_reply(asking, "answer", Local::now());

        assert!(!state.is_waiting());
        let msgs = state.session(asking).unwrap().conversation().messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[1].side(), Side::Assistant);
        assert_eq!(msgs[1].text(), "answer");
        assert!(state.session(other).unwrap().conversation().is_empty());
    }

    #[test]
    fn test_failure_inserts_fallback() {
        let mut state = ClientState::new(Local::now());
        let id = state.push_user_message("question", Local::now()).unwrap();
        state.push_failure(id, Local::now());

        let session = state.session(id).unwrap();
        assert_eq!(session.preview_text(), FALLBACK_REPLY);
        assert!(!state.is_waiting());
    }

    #[test]
    fn test_title_from_first_user_message() {
        let mut state = ClientState::new(Local::now());
        let id = state.push_user_message("\n  Plan my trip  \nto Oslo", Local::now()).unwrap();
        state.push_reply(id, "Sure", Local::now());
        state.push_user_message("another", Local::now());

        assert_eq!(state.session(id).unwrap().title(), "Plan my trip");
    }

    #[test]
    fn test_session_metadata_changes_only_through_operations() {
        let created = Local::now() - chrono::Duration::hours(1);
        let mut state = ClientState::new(created);
        let id = state.current;

        let session = state.session(id).unwrap();
        assert_eq!(session.id(), id);
        assert_eq!(session.created(), created);
        assert_eq!(session.title(), DEFAULT_TITLE);

        // Replies never name a session, user messages do.
        state.push_reply(id, "Welcome!", Local::now());
        assert_eq!(state.session(id).unwrap().title(), DEFAULT_TITLE);
        state.push_user_message("Weather in Oslo", Local::now());
        let session = state.session(id).unwrap();
        assert_eq!(session.title(), "Weather in Oslo");
        assert_eq!(session.created(), created);
    }

    #[test]
    fn test_long_title_is_truncated() {
        let long = "a".repeat(60);
        let title = title_from(&long).unwrap();
        assert_eq!(title.chars().count(), MAX_TITLE_CHARS + 1);
        assert!(title.ends_with('…'));
        assert_eq!(title_from("  \n "), None);
    }

    #[test]
    fn test_preview_time_falls_back_to_created() {
        let created = Local::now() - chrono::Duration::days(2);
        let mut session = ChatSession::new(created);
        assert_eq!(session.preview_time(), created);
        assert_eq!(session.preview_text(), "");

        let later = Local::now();
        session.append(Message::assistant("hi", later));
        assert_eq!(session.preview_time(), later);
    }
}
