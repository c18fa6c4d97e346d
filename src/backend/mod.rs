/// Backend submodules for the reply exchange
///
/// - `client`: the `ReplySource` seam and its HTTP implementation
/// - `main_loop`: backend thread that serves UI actions on a Tokio runtime
mod client;
mod main_loop;

// Re-export the main backend entry points
pub use client::{decode_reply, HttpReplySource, ReplySource};
pub use main_loop::{handle_backend_action, run_backend};
