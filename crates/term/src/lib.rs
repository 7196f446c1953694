//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout frameworks and instead renders into
//! a simple framebuffer that is flushed to the terminal as one full frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: framebuffer in, framebuffer out, no I/O
//! - Full-frame redraws only; the grid is small and fixed-size, so diffing
//!   would buy nothing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_overworld_core as core;
pub use tui_overworld_types as types;

pub use fb::{Cell, FrameBuffer, Tint};
pub use game_view::{GameView, FRAME_HEIGHT, FRAME_WIDTH};
pub use renderer::{encode_frame_into, TerminalRenderer};
