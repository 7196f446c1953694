//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the overworld rules, state management, and
//! simulation logic. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces an identical map and encounter stream
//! - **Testable**: Comprehensive unit tests for all movement rules
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`rng`]: Seeded LCG random source used by map generation and encounter rolls
//! - [`map`]: 80x40 bordered tile grid with random water scattering
//! - [`encounter`]: Encounter events and the precept table they draw from
//! - [`game_state`]: Complete game state plus the movement & encounter engine
//!
//! # Game Rules
//!
//! - The map border is solid wall; interior cells are water with 10% chance.
//! - The player moves one cell per keystroke in a cardinal direction.
//! - Moves into walls, water, or out of bounds are silently ignored.
//! - Each successful step rolls for a random encounter; a triggered encounter
//!   surfaces a precept and the player's new coordinates, nothing more.
//!
//! # Example
//!
//! ```
//! use tui_overworld_core::{GameState, MoveOutcome};
//! use tui_overworld_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! let before = game.player;
//!
//! match game.apply_action(GameAction::MoveEast) {
//!     MoveOutcome::Blocked => assert_eq!(game.player, before),
//!     MoveOutcome::Moved | MoveOutcome::Encounter => {
//!         assert_eq!(game.player, before.offset(1, 0));
//!     }
//! }
//! ```

pub mod encounter;
pub mod game_state;
pub mod map;
pub mod rng;

pub use tui_overworld_types as types;

// Re-export commonly used types for convenience
pub use encounter::{Encounter, PRECEPTS};
pub use game_state::{GameState, MoveOutcome};
pub use map::Map;
pub use rng::SimpleRng;
