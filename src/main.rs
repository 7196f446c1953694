//! Terminal overworld runner (default binary).
//!
//! This is the gameplay entrypoint. It uses crossterm for input and a
//! framebuffer-based renderer. The loop is fully synchronous: the blocking
//! key read is the only scheduling point, so a frame is drawn exactly once
//! per keystroke.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_overworld::core::{rng::seed_from_time, GameState};
use tui_overworld::input::{handle_key_event, should_quit};
use tui_overworld::term::{FrameBuffer, GameView, TerminalRenderer, FRAME_HEIGHT, FRAME_WIDTH};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    println!("Game Over!");
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game_state = GameState::new(seed_from_time());

    let view = GameView::new();
    let mut fb = FrameBuffer::new(FRAME_WIDTH, FRAME_HEIGHT);

    loop {
        // Render.
        view.render_into(&game_state, &mut fb);
        term.draw(&fb)?;

        // Block for one input event.
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if should_quit(key) {
                return Ok(());
            }

            if let Some(action) = handle_key_event(key) {
                game_state.apply_action(action);
            }
        }
    }
}
