//! Sidebar, waiting indicator and central panel rendering

use eframe::egui;

use crate::app::ChatApp;
use crate::ui;
use crate::ui::panels::ChatListAction;

impl ChatApp {
    /// Render the chat list on the left and apply what the user picked
    pub(in crate::app) fn render_chat_list(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();
        let now = self.clock.now();

        match ui::panels::render_chat_list(ctx, &self.state, &theme, &now) {
            Some(ChatListAction::NewChat) => self.new_chat(),
            Some(ChatListAction::Select(id)) => {
                self.state.select_session(id);
            }
            Some(ChatListAction::ToggleTheme) => self.toggle_theme(ctx),
            None => {}
        }
    }

    /// Render "thinking" status above the input bar while a reply is pending
    pub(in crate::app) fn render_waiting_indicator(&mut self, ctx: &egui::Context) {
        if !self.state.is_waiting() {
            return;
        }
        let theme = self.get_theme();

        egui::TopBottomPanel::bottom("waiting_indicator")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(12, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Assistant is thinking…")
                            .size(14.0)
                            .color(theme.text_secondary),
                    );
                    ui.add(egui::Spinner::new().size(12.0).color(theme.text_secondary));
                });
            });
    }

    /// Render the central panel with the current conversation
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();
        let now = self.clock.now();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.surface[0]).inner_margin(20.0))
            .show(ctx, |ui| {
                if let Some(session) = self.state.current_session() {
                    ui::messages::render_messages(ui, session.conversation(), &theme, &now);
                }
            });
    }
}
