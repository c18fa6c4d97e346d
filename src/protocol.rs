use crate::state::SessionId;

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Ask the answer endpoint for a reply on behalf of a session
    Query { session: SessionId, text: String },
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The endpoint answered
    ReplyReceived { session: SessionId, text: String },
    /// The exchange failed; the UI substitutes the fallback text
    ReplyFailed { session: SessionId, error: String },
}
