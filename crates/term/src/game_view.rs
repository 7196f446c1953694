//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{FrameBuffer, Tint};
use crate::types::{MAP_HEIGHT, MAP_WIDTH};

/// Frame width in terminal columns: one column per map cell.
pub const FRAME_WIDTH: u16 = MAP_WIDTH as u16;

/// Frame height in terminal rows: the map plus a help line and a message line.
pub const FRAME_HEIGHT: u16 = MAP_HEIGHT as u16 + 2;

/// Row of the static help line.
const HELP_ROW: u16 = MAP_HEIGHT as u16;

/// Row of the encounter message line.
const MESSAGE_ROW: u16 = MAP_HEIGHT as u16 + 1;

const HELP_TEXT: &str = "Use hjkl to move. Press 'q' to quit.";

/// Marker glyph for the player's cell.
const PLAYER_GLYPH: char = '@';

/// A lightweight terminal view for the overworld.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// fixed frame dimensions and fully rewritten each call.
    pub fn render_into(&self, state: &GameState, fb: &mut FrameBuffer) {
        fb.resize(FRAME_WIDTH, FRAME_HEIGHT);
        fb.clear();

        for y in 0..MAP_HEIGHT as i8 {
            for x in 0..MAP_WIDTH as i8 {
                if let Some(tile) = state.map.get(x, y) {
                    fb.put_char(x as u16, y as u16, tile.glyph(), Tint::Default);
                }
            }
        }

        fb.put_char(
            state.player.x as u16,
            state.player.y as u16,
            PLAYER_GLYPH,
            Tint::Player,
        );

        fb.put_str(0, HELP_ROW, HELP_TEXT, Tint::Default);

        if let Some(encounter) = &state.last_encounter {
            let message = format!(
                "{} | {} | {}",
                encounter.precept, encounter.position.x, encounter.position.y
            );
            fb.put_str(0, MESSAGE_ROW, &message, Tint::Default);
        }
    }
}
