//! `minierp-cli` — interactive front end for the inventory.
//!
//! The binary wires stdin/stdout into [`app::App`]; tests drive the same type
//! with in-memory buffers.

pub mod app;
pub mod config;
pub mod menu;
pub mod prompt;

pub use app::App;
pub use config::{Cli, Settings};
