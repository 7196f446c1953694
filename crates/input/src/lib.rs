//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Movement is one
//! step per keystroke with no auto-repeat handling; the main loop blocks on a
//! single key event and dispatches it.

pub mod map;

pub use tui_overworld_types as types;

pub use map::{handle_key_event, should_quit};
