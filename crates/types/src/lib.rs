//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, view rendering, tests).
//!
//! # Map Dimensions
//!
//! The overworld is a fixed-size bordered grid:
//!
//! - **Width**: 80 columns (indexed 0-79)
//! - **Height**: 40 rows (indexed 0-39)
//! - **Spawn position**: map center, (40, 20)
//!
//! Coordinates are `i8` so movement deltas can be signed; 80 and 40 both fit
//! comfortably in the positive `i8` range.
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WATER_CHANCE` | 10 | Percent chance an interior cell is water |
//! | `ENCOUNTER_ROLL_MIN` | 15 | Lower bound of the encounter roll |
//! | `ENCOUNTER_ROLL_MAX` | 35 | Upper bound (and threshold) of the encounter roll |
//!
//! # Examples
//!
//! ```
//! use tui_overworld_types::{GameAction, Position, Tile, MAP_WIDTH, MAP_HEIGHT};
//!
//! // Map dimensions
//! assert_eq!(MAP_WIDTH, 80);
//! assert_eq!(MAP_HEIGHT, 40);
//!
//! // A movement action carries its cardinal delta
//! assert_eq!(GameAction::MoveEast.delta(), (1, 0));
//!
//! // Positions offset by deltas
//! let pos = Position::new(40, 20);
//! assert_eq!(pos.offset(1, 0), Position::new(41, 20));
//!
//! // Only floor is passable
//! assert!(Tile::Floor.is_passable());
//! assert!(!Tile::Water.is_passable());
//! ```

/// Map width in cells (80 columns)
pub const MAP_WIDTH: u8 = 80;

/// Map height in cells (40 rows)
pub const MAP_HEIGHT: u8 = 40;

/// Percent chance that an interior map cell is generated as water
pub const WATER_CHANCE: i32 = 10;

/// Lower bound of the encounter roll range (inclusive)
pub const ENCOUNTER_ROLL_MIN: i32 = 15;

/// Upper bound of the encounter roll range (inclusive), also the trigger threshold
pub const ENCOUNTER_ROLL_MAX: i32 = 35;

/// A player position on the map.
///
/// Owned by the game state; only the movement engine updates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The position shifted by a signed delta. Does not bounds-check;
    /// callers validate against the map.
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Passability/appearance classification of a single map cell.
///
/// Tiles are immutable once the map is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Floor,
    Wall,
    Water,
}

impl Tile {
    /// Glyph used when rendering this tile.
    pub fn glyph(&self) -> char {
        match self {
            Tile::Floor => ' ',
            Tile::Wall => '#',
            Tile::Water => '~',
        }
    }

    /// Whether the player may stand on this tile.
    pub fn is_passable(&self) -> bool {
        matches!(self, Tile::Floor)
    }
}

/// High-level game mode.
///
/// Only `Overworld` is ever entered; the battle variants are retained as the
/// extension surface for a combat system that does not exist yet. Movement is
/// gated on `Overworld` so a future transition gets blocking for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Overworld,
    Transitioning,
    InBattle,
}

/// Player movement actions, one per cardinal direction.
///
/// Quit is not an action: it is a predicate on the raw key event, checked
/// before action mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Step one cell up (negative y)
    MoveNorth,
    /// Step one cell down (positive y)
    MoveSouth,
    /// Step one cell left (negative x)
    MoveWest,
    /// Step one cell right (positive x)
    MoveEast,
}

impl GameAction {
    /// The (dx, dy) this action applies to the player position.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_overworld_types::GameAction;
    ///
    /// assert_eq!(GameAction::MoveNorth.delta(), (0, -1));
    /// assert_eq!(GameAction::MoveSouth.delta(), (0, 1));
    /// assert_eq!(GameAction::MoveWest.delta(), (-1, 0));
    /// assert_eq!(GameAction::MoveEast.delta(), (1, 0));
    /// ```
    pub const fn delta(&self) -> (i8, i8) {
        match self {
            GameAction::MoveNorth => (0, -1),
            GameAction::MoveSouth => (0, 1),
            GameAction::MoveWest => (-1, 0),
            GameAction::MoveEast => (1, 0),
        }
    }
}
