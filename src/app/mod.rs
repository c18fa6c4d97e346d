//! Application module structure for ChatApp
//!
//! This module organizes the main application into focused submodules:
//! - `core`: ChatApp struct, initialization, and user actions
//! - `events`: Event processing from backend
//! - `update`: Main update loop and global shortcuts
//! - `ui::panels`: Chat list and central panel rendering
//! - `ui::input`: Message input bar

pub mod core;
pub mod events;
pub mod update;
mod ui;

// Re-export ChatApp for public API
pub use core::ChatApp;
