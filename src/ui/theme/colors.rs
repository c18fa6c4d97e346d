//! Color palettes for the chat window.
//!
//! The light palette follows the classic messenger look: blue user bubbles on
//! the right, grey assistant bubbles on the left. The dark palette keeps the
//! same roles with inverted surfaces.

use eframe::egui::Color32;

/// Theme with semantic color roles.
#[derive(Clone, Debug)]
pub struct ChatTheme {
    pub name: String,
    /// `surface[0]`: message area, `surface[1]`: sidebar and input bar,
    /// `surface[2]`: text input field.
    pub surface: [Color32; 3],
    pub accent: Color32,
    pub accent_hover: Color32,
    pub user_bubble: Color32,
    pub user_text: Color32,
    pub assistant_bubble: Color32,
    pub assistant_text: Color32,
    /// Backdrop of the number/bullet badges inside bubbles.
    pub badge_fill: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub border: Color32,
    pub selected: Color32,
}

impl ChatTheme {
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: [
                Color32::from_rgb(240, 240, 240),
                Color32::WHITE,
                Color32::WHITE,
            ],
            accent: Color32::from_rgb(0, 122, 255),
            accent_hover: Color32::from_rgb(0, 86, 179),
            user_bubble: Color32::from_rgb(0, 122, 255),
            user_text: Color32::WHITE,
            assistant_bubble: Color32::from_rgb(233, 233, 235),
            assistant_text: Color32::BLACK,
            badge_fill: Color32::from_black_alpha(25),
            text_primary: Color32::from_rgb(26, 26, 26),
            text_secondary: Color32::from_rgb(102, 102, 102),
            text_muted: Color32::from_rgb(142, 142, 147),
            border: Color32::from_rgb(224, 224, 224),
            selected: Color32::from_rgb(240, 240, 240),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: [
                Color32::from_rgb(28, 28, 30),
                Color32::from_rgb(20, 20, 22),
                Color32::from_rgb(44, 44, 46),
            ],
            accent: Color32::from_rgb(10, 132, 255),
            accent_hover: Color32::from_rgb(64, 156, 255),
            user_bubble: Color32::from_rgb(10, 132, 255),
            user_text: Color32::WHITE,
            assistant_bubble: Color32::from_rgb(58, 58, 60),
            assistant_text: Color32::from_rgb(235, 235, 240),
            badge_fill: Color32::from_white_alpha(30),
            text_primary: Color32::from_rgb(235, 235, 240),
            text_secondary: Color32::from_rgb(174, 174, 178),
            text_muted: Color32::from_rgb(142, 142, 147),
            border: Color32::from_rgb(56, 56, 58),
            selected: Color32::from_rgb(44, 44, 46),
        }
    }

    /// Palette by settings name; anything but "dark" is light.
    pub fn by_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "Dark"
    }
}
