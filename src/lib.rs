//! TUI overworld wanderer (workspace facade crate).
//!
//! This package keeps the `tui_overworld::{core,input,term,types}` public API
//! in one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_overworld_core as core;
pub use tui_overworld_input as input;
pub use tui_overworld_term as term;
pub use tui_overworld_types as types;
