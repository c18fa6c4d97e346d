//! Main update loop and global shortcuts

use eframe::egui;
use std::time::Duration;

use super::ChatApp;

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process backend replies
        self.process_events();

        // Remember the window size for the next launch
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.settings.window_size = [rect.width(), rect.height()];
        }

        // Ctrl/Cmd+N: New chat
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::N)) {
            self.new_chat();
        }

        // Keep polling while a reply is outstanding
        if self.state.is_waiting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Panels must be added before the central panel
        self.render_chat_list(ctx);
        self.render_input_panel(ctx);
        self.render_waiting_indicator(ctx);
        self.render_central_panel(ctx);
    }
}
