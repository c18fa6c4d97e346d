//! Event processing from backend

use super::ChatApp;
use crate::events;

impl ChatApp {
    /// Drain every pending backend event into the session state.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            events::process_single_event(&mut self.state, event, self.clock.now());
        }
    }
}
