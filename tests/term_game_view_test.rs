//! Pure-view rendering tests: game state in, framebuffer out.

use tui_overworld::core::{GameState, Map, MoveOutcome};
use tui_overworld::term::{FrameBuffer, GameView, Tint, FRAME_HEIGHT, FRAME_WIDTH};
use tui_overworld::types::{GameAction, Tile, MAP_HEIGHT, MAP_WIDTH};

fn render(state: &GameState) -> FrameBuffer {
    let mut fb = FrameBuffer::new(FRAME_WIDTH, FRAME_HEIGHT);
    GameView::new().render_into(state, &mut fb);
    fb
}

#[test]
fn term_view_renders_full_border() {
    let state = GameState::new(1);
    let fb = render(&state);

    for x in 0..MAP_WIDTH as u16 {
        assert_eq!(fb.get(x, 0).unwrap().ch, '#');
        assert_eq!(fb.get(x, MAP_HEIGHT as u16 - 1).unwrap().ch, '#');
    }
    for y in 0..MAP_HEIGHT as u16 {
        assert_eq!(fb.get(0, y).unwrap().ch, '#');
        assert_eq!(fb.get(MAP_WIDTH as u16 - 1, y).unwrap().ch, '#');
    }
}

#[test]
fn term_view_renders_map_glyphs() {
    let mut state = GameState::new(1);
    state.map = Map::empty();
    state.map.set(10, 5, Tile::Water);
    state.map.set(11, 5, Tile::Wall);

    let fb = render(&state);
    assert_eq!(fb.get(10, 5).unwrap().ch, '~');
    assert_eq!(fb.get(11, 5).unwrap().ch, '#');
    assert_eq!(fb.get(12, 5).unwrap().ch, ' ');
}

#[test]
fn term_view_player_marker_tracks_movement() {
    let mut state = GameState::new(1);
    state.map = Map::empty();

    let fb = render(&state);
    assert_eq!(fb.get(40, 20).unwrap().ch, '@');
    assert_eq!(fb.get(40, 20).unwrap().tint, Tint::Player);

    state.apply_action(GameAction::MoveEast);
    let fb = render(&state);
    assert_eq!(fb.get(41, 20).unwrap().ch, '@');
    // The vacated cell shows its tile again.
    assert_eq!(fb.get(40, 20).unwrap().ch, ' ');
    assert_eq!(fb.get(40, 20).unwrap().tint, Tint::Default);
}

#[test]
fn term_view_shows_help_and_encounter_lines() {
    let mut state = GameState::new(1);
    state.map = Map::empty();

    let fb = render(&state);
    assert!(fb
        .row_text(MAP_HEIGHT as u16)
        .starts_with("Use hjkl to move. Press 'q' to quit."));

    // Walk until an encounter lands, then the message line carries it.
    for i in 0..100 {
        let action = if i % 2 == 0 {
            GameAction::MoveEast
        } else {
            GameAction::MoveWest
        };
        if state.apply_action(action) == MoveOutcome::Encounter {
            break;
        }
    }
    let encounter = state.last_encounter.expect("no encounter in 100 steps");

    let fb = render(&state);
    let line = fb.row_text(MAP_HEIGHT as u16 + 1);
    let shown: String = format!(
        "{} | {} | {}",
        encounter.precept, encounter.position.x, encounter.position.y
    )
    .chars()
    .take(FRAME_WIDTH as usize)
    .collect();
    assert!(line.starts_with(&shown), "message line: {}", line);
}
