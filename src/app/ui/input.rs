//! Message input bar: auto-growing text box with a Send button

use eframe::egui;

use crate::app::ChatApp;

impl ChatApp {
    /// Render the input panel at the bottom of the window
    pub(in crate::app) fn render_input_panel(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();
        let input_id = egui::Id::new("message_input");
        let waiting = self.state.is_waiting();
        let rows = self.input.rows();

        // Enter (without Shift) sends. The key has to be consumed before the
        // text box sees it, otherwise it inserts a newline first.
        let has_focus = ctx.memory(|m| m.has_focus(input_id));
        let enter_pressed = has_focus
            && !ctx.input(|i| i.modifiers.shift)
            && ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter));

        let mut send_clicked = false;

        egui::TopBottomPanel::bottom("input_panel")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .stroke(egui::Stroke::new(1.0, theme.border)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let button_width = 72.0;
                    let input_frame = egui::Frame::new()
                        .fill(theme.surface[2])
                        .stroke(egui::Stroke::new(1.0, theme.border))
                        .corner_radius(20.0)
                        .inner_margin(egui::Margin::symmetric(14, 8));

                    input_frame.show(ui, |ui| {
                        let response = ui.add(
                            egui::TextEdit::multiline(&mut self.input.message_input)
                                .id(input_id)
                                .desired_rows(rows)
                                .desired_width(ui.available_width() - button_width - 32.0)
                                .frame(false)
                                .text_color(theme.text_primary)
                                .hint_text("Type your message..."),
                        );

                        // Focus ring
                        if response.has_focus() {
                            let outer = response.rect.expand(6.0);
                            ui.painter().rect_stroke(
                                outer,
                                16.0,
                                egui::Stroke::new(1.0, theme.accent.linear_multiply(0.5)),
                                egui::StrokeKind::Outside,
                            );
                        }
                    });

                    let can_send = self.input.has_content() && !waiting;
                    let send = egui::Button::new(egui::RichText::new("Send").color(egui::Color32::WHITE))
                        .fill(if can_send { theme.accent } else { theme.text_muted })
                        .corner_radius(20.0)
                        .min_size(egui::vec2(button_width, 36.0));
                    if ui.add_enabled(can_send, send).clicked() {
                        send_clicked = true;
                    }
                });
            });

        if enter_pressed || send_clicked {
            self.submit_input();
            ctx.memory_mut(|m| m.request_focus(input_id));
        }
    }
}
