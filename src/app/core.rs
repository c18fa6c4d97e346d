//! Core ChatApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread;

use crate::backend::{run_backend, HttpReplySource};
use crate::config::{save_settings, Settings};
use crate::input_state::InputState;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ClientState;
use crate::timefmt::{Clock, SystemClock};
use crate::ui;

pub struct ChatApp {
    // Core state (sessions, waiting flag)
    pub state: ClientState,

    // Persisted settings (endpoint, theme, window size)
    pub settings: Settings,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Input state (message composition)
    pub input: InputState,

    // Source of "now" for new messages and timestamp labels
    pub clock: Box<dyn Clock>,

    // Whether settings are written back on drop
    persist_settings: bool,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        // Spawn the backend thread
        let source = HttpReplySource::new(settings.endpoint.clone());
        tracing::info!(endpoint = %source.endpoint(), "starting backend");
        if let Err(e) = thread::Builder::new()
            .name("backend".into())
            .spawn(move || run_backend(source, action_rx, event_tx))
        {
            // The action receiver went down with the closure, so every send
            // fails and turns into the fallback reply.
            tracing::error!("failed to spawn backend thread: {}", e);
        }

        ui::theme::apply_app_style(&cc.egui_ctx, &ui::ChatTheme::by_name(&settings.theme));

        let mut app = Self::with_channels(settings, action_tx, event_rx, Box::new(SystemClock));
        app.persist_settings = true;
        app
    }

    /// Build the app around existing channels, without a window or backend thread.
    pub fn with_channels(
        settings: Settings,
        action_tx: Sender<BackendAction>,
        event_rx: Receiver<GuiEvent>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            state: ClientState::new(clock.now()),
            settings,
            action_tx,
            event_rx,
            input: InputState::new(),
            clock,
            persist_settings: false,
        }
    }

    /// Get the current theme based on the settings ("dark" or "light")
    pub(super) fn get_theme(&self) -> ui::ChatTheme {
        ui::ChatTheme::by_name(&self.settings.theme)
    }

    pub(super) fn toggle_theme(&mut self, ctx: &eframe::egui::Context) {
        self.settings.theme = if self.get_theme().is_dark() { "light" } else { "dark" }.to_string();
        ui::theme::apply_app_style(ctx, &self.get_theme());
    }

    /// Start a new empty session and show it.
    pub fn new_chat(&mut self) {
        self.state.start_new_session(self.clock.now());
        self.input.message_input.clear();
    }

    /// Send the current draft, if any, to the backend.
    ///
    /// The user message is appended before the request goes out, so the
    /// conversation view always contains it by the time a reply arrives.
    pub fn submit_input(&mut self) {
        if self.state.is_waiting() || !self.input.has_content() {
            return;
        }
        let Some(text) = self.input.take_submission() else {
            return;
        };
        let Some(session) = self.state.push_user_message(&text, self.clock.now()) else {
            return;
        };

        tracing::info!(%session, "sending query");
        if self.action_tx.send(BackendAction::Query { session, text }).is_err() {
            tracing::error!("backend is not running");
            self.state.push_failure(session, self.clock.now());
        }
    }
}

impl Drop for ChatApp {
    fn drop(&mut self) {
        if !self.persist_settings {
            return;
        }
        // Persist settings on exit
        if let Err(e) = save_settings(&self.settings) {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Side;
    use crate::state::FALLBACK_REPLY;
    use crate::timefmt::FixedClock;
    use chrono::Local;

    fn test_app() -> (ChatApp, Receiver<BackendAction>, Sender<GuiEvent>) {
        let (action_tx, action_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();
        let app = ChatApp::with_channels(
            Settings::default(),
            action_tx,
            event_rx,
            Box::new(FixedClock(Local::now())),
        );
        (app, action_rx, event_tx)
    }

    #[test]
    fn test_submit_sends_query() {
        let (mut app, action_rx, _event_tx) = test_app();
        app.input.message_input = "What is Rust?".into();
        app.submit_input();

        assert!(app.input.message_input.is_empty());
        assert!(app.state.is_waiting());
        match action_rx.try_recv().unwrap() {
            BackendAction::Query { session, text } => {
                assert_eq!(session, app.state.current);
                assert_eq!(text, "What is Rust?");
            }
        }
    }

    #[test]
    fn test_submit_blank_does_nothing() {
        let (mut app, action_rx, _event_tx) = test_app();
        app.input.message_input = "   ".into();
        app.submit_input();

        assert!(action_rx.try_recv().is_err());
        assert!(!app.state.is_waiting());
    }

    #[test]
    fn test_submit_while_waiting_keeps_draft() {
        let (mut app, action_rx, _event_tx) = test_app();
        app.input.message_input = "first".into();
        app.submit_input();
        app.input.message_input = "second".into();
        app.submit_input();

        assert_eq!(app.input.message_input, "second");
        assert!(action_rx.try_recv().is_ok());
        assert!(action_rx.try_recv().is_err());
    }

    #[test]
    fn test_submit_without_backend_falls_back() {
        let (mut app, action_rx, _event_tx) = test_app();
        drop(action_rx);
        app.input.message_input = "hello?".into();
        app.submit_input();

        let msgs = app.state.current_session().unwrap().conversation().messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[1].side(), Side::Assistant);
        assert_eq!(msgs[1].text(), FALLBACK_REPLY);
        assert!(!app.state.is_waiting());
    }

    #[test]
    fn test_new_chat_switches_session() {
        let (mut app, _action_rx, _event_tx) = test_app();
        let first = app.state.current;
        app.new_chat();
        assert_ne!(app.state.current, first);
        assert_eq!(app.state.sessions.len(), 2);
    }
}
