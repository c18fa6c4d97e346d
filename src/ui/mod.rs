//! UI rendering modules for the chat client.
//!
//! This module contains all egui-based UI rendering code, organized by component:
//! - `panels`: Sidebar chat list
//! - `messages`: Grouped message bubbles
//! - `theme`: Color schemes and styling utilities

pub mod messages;
pub mod panels;
pub mod theme;

pub use messages::*;
pub use panels::*;
pub use theme::*;
