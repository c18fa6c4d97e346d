//! Message bubbles for the central chat panel.
//! Consecutive same-side messages are clustered, with one timestamp per cluster.

mod blocks;
mod render;

// Re-export public API
pub use render::{bubble_corners, render_messages};
