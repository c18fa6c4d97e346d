//! Backend event loop: serves UI actions one at a time on a Tokio runtime.

use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Runtime;

use super::client::ReplySource;
use crate::error::ReplyError;
use crate::protocol::{BackendAction, GuiEvent};

/// Run the backend loop until the UI drops its action sender.
pub fn run_backend<S>(source: S, action_rx: Receiver<BackendAction>, event_tx: Sender<GuiEvent>)
where
    S: ReplySource + 'static,
{
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("failed to create Tokio runtime: {}", e);
            // Keep answering so the UI never waits forever.
            let reason = ReplyError::Runtime(e.to_string()).to_string();
            for action in action_rx.iter() {
                let BackendAction::Query { session, .. } = action;
                let _ = event_tx.send(GuiEvent::ReplyFailed {
                    session,
                    error: reason.clone(),
                });
            }
            return;
        }
    };

    tracing::info!("backend started");
    for action in action_rx.iter() {
        let event = rt.block_on(handle_backend_action(&source, action));
        if event_tx.send(event).is_err() {
            break;
        }
    }
    tracing::info!("backend stopped");
}

/// Perform a single action and produce the event to report back.
pub async fn handle_backend_action<S>(source: &S, action: BackendAction) -> GuiEvent
where
    S: ReplySource + ?Sized,
{
    match action {
        BackendAction::Query { session, text } => match source.fetch_reply(&text).await {
            Ok(text) => {
                tracing::info!(%session, chars = text.len(), "reply received");
                GuiEvent::ReplyReceived { session, text }
            }
            Err(e) => {
                tracing::warn!(%session, "reply failed: {}", e);
                GuiEvent::ReplyFailed {
                    session,
                    error: e.to_string(),
                }
            }
        },
    }
}
