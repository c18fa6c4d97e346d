//! Drawing parsed content blocks inside a bubble.

use eframe::egui::{self, Color32};

use crate::content::ContentBlock;

const BODY_SIZE: f32 = 16.0;
const BADGE_SIZE: f32 = 24.0;

/// Render blocks top to bottom. List items get a round badge with their
/// label (or `•`), paragraphs are wrapped text.
pub(crate) fn render_blocks(ui: &mut egui::Ui, blocks: &[ContentBlock], text_color: Color32, badge_fill: Color32) {
    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 8.0;

        for block in blocks {
            match block {
                ContentBlock::Numbered { label, content } => {
                    render_list_item(ui, label, content, text_color, badge_fill);
                }
                ContentBlock::Bullet { content } => {
                    render_list_item(ui, "•", content, text_color, badge_fill);
                }
                ContentBlock::Paragraph { content } => {
                    ui.add(
                        egui::Label::new(egui::RichText::new(content).size(BODY_SIZE).color(text_color))
                            .wrap(),
                    );
                }
            }
        }
    });
}

fn render_list_item(ui: &mut egui::Ui, badge: &str, content: &str, text_color: Color32, badge_fill: Color32) {
    ui.horizontal_top(|ui| {
        render_badge(ui, badge, text_color, badge_fill);
        ui.add(
            egui::Label::new(egui::RichText::new(content).size(BODY_SIZE).color(text_color)).wrap(),
        );
    });
}

/// Pill-shaped badge, at least as wide as it is tall.
fn render_badge(ui: &mut egui::Ui, text: &str, text_color: Color32, fill: Color32) {
    let galley = ui.painter().layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(14.0),
        text_color,
    );
    let width = (galley.size().x + 12.0).max(BADGE_SIZE);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, BADGE_SIZE), egui::Sense::hover());

    let painter = ui.painter();
    painter.rect_filled(rect, BADGE_SIZE / 2.0, fill);
    painter.galley(rect.center() - galley.size() / 2.0, galley, text_color);
}
