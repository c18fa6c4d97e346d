//! Global egui style for the chat window.

use eframe::egui::{self, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

use super::colors::ChatTheme;

/// Text sizes: 16px message body, 12px timestamps, 20px headings.
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(12.0, Proportional)),
        (TextStyle::Body, FontId::new(16.0, Proportional)),
        (TextStyle::Button, FontId::new(14.0, Proportional)),
        (TextStyle::Heading, FontId::new(20.0, Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, Monospace)),
    ]
    .into()
}

/// Apply visuals, spacing and text styles for `theme` to the context.
pub fn apply_app_style(ctx: &egui::Context, theme: &ChatTheme) {
    ctx.set_visuals(if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let mut style = (*ctx.style()).clone();
    style.text_styles = configure_text_styles();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(16.0, 8.0);

    // Pill buttons in the accent color
    style.visuals.widgets.inactive.weak_bg_fill = theme.accent;
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(20);
    style.visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);

    style.visuals.widgets.hovered.weak_bg_fill = theme.accent_hover;
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(20);
    style.visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);

    style.visuals.widgets.active.weak_bg_fill = theme.accent_hover;
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(20);

    style.visuals.extreme_bg_color = theme.surface[2];
    style.visuals.selection.bg_fill = theme.accent.linear_multiply(0.4);

    ctx.set_style(style);
}
