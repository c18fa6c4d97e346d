//! Conversation rendering: grouped bubbles with one timestamp per group.

use chrono::{DateTime, Local};
use eframe::egui::{self, CornerRadius};

use crate::content::parse_content;
use crate::grouping::{group_messages, BubblePosition, MessageGroup};
use crate::message::{Conversation, Message, Side};
use crate::timefmt::format_timestamp;
use crate::ui::theme::ChatTheme;

use super::blocks::render_blocks;

const ROUND: u8 = 20;
const TIGHT: u8 = 5;

/// Corner radii for a bubble. The tight corners point at the neighbouring
/// bubbles of the same group, on the sender's side.
pub fn bubble_corners(side: Side, position: BubblePosition) -> CornerRadius {
    let (nw, ne, se, sw) = match (side, position) {
        (Side::User, BubblePosition::Only | BubblePosition::First) => (ROUND, ROUND, TIGHT, ROUND),
        (Side::User, BubblePosition::Middle) => (ROUND, TIGHT, TIGHT, ROUND),
        (Side::User, BubblePosition::Last) => (ROUND, TIGHT, ROUND, ROUND),
        (Side::Assistant, BubblePosition::Only | BubblePosition::First) => (ROUND, ROUND, ROUND, TIGHT),
        (Side::Assistant, BubblePosition::Middle) => (TIGHT, ROUND, ROUND, TIGHT),
        (Side::Assistant, BubblePosition::Last) => (TIGHT, ROUND, ROUND, ROUND),
    };
    CornerRadius { nw, ne, sw, se }
}

/// Render the conversation, newest at the bottom.
pub fn render_messages(ui: &mut egui::Ui, conversation: &Conversation, theme: &ChatTheme, now: &DateTime<Local>) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);

            if conversation.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(
                        egui::RichText::new("Send a message to start the conversation")
                            .size(14.0)
                            .color(theme.text_muted),
                    );
                });
            }

            for group in group_messages(conversation.messages()) {
                render_message_group(ui, &group, theme, now);
            }

            ui.add_space(8.0);
        });
}

fn render_message_group(ui: &mut egui::Ui, group: &MessageGroup<'_>, theme: &ChatTheme, now: &DateTime<Local>) {
    ui.add_space(10.0);

    let align = if group.side().is_user() {
        egui::Align::Max
    } else {
        egui::Align::Min
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        ui.spacing_mut().item_spacing.y = 2.0;

        for (i, msg) in group.messages().iter().enumerate() {
            render_bubble(ui, msg, BubblePosition::of(i, group.len()), theme);
        }

        let stamp = format_timestamp(&group.last().timestamp(), now);
        ui.horizontal(|ui| {
            if !group.side().is_user() {
                ui.add_space(10.0);
            }
            ui.label(egui::RichText::new(stamp).size(12.0).color(theme.text_muted));
            if group.side().is_user() {
                ui.add_space(10.0);
            }
        });
    });
}

fn render_bubble(ui: &mut egui::Ui, msg: &Message, position: BubblePosition, theme: &ChatTheme) {
    let (fill, text_color) = match msg.side() {
        Side::User => (theme.user_bubble, theme.user_text),
        Side::Assistant => (theme.assistant_bubble, theme.assistant_text),
    };
    let max_width = ui.available_width() * 0.7;

    egui::Frame::new()
        .fill(fill)
        .corner_radius(bubble_corners(msg.side(), position))
        .inner_margin(egui::Margin::symmetric(15, 10))
        .show(ui, |ui| {
            ui.set_max_width(max_width);
            render_blocks(ui, &parse_content(msg.text()), text_color, theme.badge_fill);
        });
}
