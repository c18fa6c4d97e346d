//! Sidebar with the list of chat sessions and the New Chat button.

use chrono::{DateTime, Local};
use eframe::egui::{self, Color32, Stroke};

use crate::state::{ClientState, SessionId};
use crate::timefmt::format_timestamp;
use crate::ui::theme::ChatTheme;

/// What the user asked for in the sidebar this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatListAction {
    NewChat,
    Select(SessionId),
    ToggleTheme,
}

/// Render the left chat list panel.
pub fn render_chat_list(
    ctx: &egui::Context,
    state: &ClientState,
    theme: &ChatTheme,
    now: &DateTime<Local>,
) -> Option<ChatListAction> {
    let mut action = None;

    egui::SidePanel::left("chat_list")
        .resizable(false)
        .exact_width(300.0)
        .frame(
            egui::Frame::new()
                .fill(theme.surface[1])
                .inner_margin(egui::Margin::same(0))
                .stroke(Stroke::new(1.0, theme.border)),
        )
        .show(ctx, |ui| {
            // Header: title, theme toggle, New Chat
            egui::Frame::new()
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new("Chats")
                                .size(20.0)
                                .strong()
                                .color(theme.text_primary),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("New Chat").clicked() {
                                action = Some(ChatListAction::NewChat);
                            }
                            let icon = if theme.is_dark() { "☀" } else { "🌙" };
                            if ui
                                .add(
                                    egui::Button::new(egui::RichText::new(icon).color(theme.text_secondary))
                                        .frame(false),
                                )
                                .on_hover_text("Toggle theme")
                                .clicked()
                            {
                                action = Some(ChatListAction::ToggleTheme);
                            }
                        });
                    });
                });
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = 0.0;
                    // Rows are click targets; selectable labels would swallow the press.
                    ui.style_mut().interaction.selectable_labels = false;
                    for session in &state.sessions {
                        let is_active = session.id() == state.current;
                        let fill = if is_active { theme.selected } else { Color32::TRANSPARENT };

                        let frame = egui::Frame::new()
                            .fill(fill)
                            .inner_margin(egui::Margin::symmetric(20, 15))
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.label(
                                    egui::RichText::new(session.title())
                                        .size(16.0)
                                        .color(theme.text_primary),
                                );
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(first_line(session.preview_text()))
                                            .size(14.0)
                                            .color(theme.text_secondary),
                                    )
                                    .truncate(),
                                );
                                ui.label(
                                    egui::RichText::new(format_timestamp(&session.preview_time(), now))
                                        .size(12.0)
                                        .color(theme.text_muted),
                                );
                            });

                        let response = ui
                            .interact(frame.response.rect, ui.id().with(session.id()), egui::Sense::click())
                            .on_hover_cursor(egui::CursorIcon::PointingHand);
                        if response.clicked() && !is_active {
                            action = Some(ChatListAction::Select(session.id()));
                        }
                        ui.separator();
                    }
                });
        });

    action
}

/// Single-line preview; list items and paragraphs after the first are dropped.
fn first_line(text: &str) -> &str {
    text.lines().find(|l| !l.trim().is_empty()).unwrap_or("")
}
