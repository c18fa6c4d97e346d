//! UI rendering for ChatApp
//!
//! - `panels`: Chat list, waiting indicator, and central conversation view
//! - `input`: Message input bar

mod input;
mod panels;
