//! Bubble Chat client library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod backend;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod grouping;
pub mod input_state;
pub mod logging;
pub mod message;
pub mod protocol;
pub mod state;
pub mod timefmt;
pub mod ui;

#[cfg(test)]
mod backend_tests;
