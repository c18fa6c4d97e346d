//! Color themes and styling utilities for the chat client.

pub mod colors;
pub mod style;

pub use colors::ChatTheme;
pub use style::{apply_app_style, configure_text_styles};
