//! Backend event processing (replies and failures).

use chrono::{DateTime, Local};

use crate::protocol::GuiEvent;
use crate::state::ClientState;

/// Apply one backend event to the session state.
pub fn process_single_event(state: &mut ClientState, event: GuiEvent, now: DateTime<Local>) {
    match event {
        GuiEvent::ReplyReceived { session, text } => {
            state.push_reply(session, &text, now);
        }
        GuiEvent::ReplyFailed { session, error } => {
            tracing::warn!(%session, "showing fallback reply: {}", error);
            state.push_failure(session, now);
        }
    }
}
