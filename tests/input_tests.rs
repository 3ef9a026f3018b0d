//! Key presses flowing through the cursor into the game.

use crossterm::event::{KeyCode, KeyEvent};

use lights_out::core::GameState;
use lights_out::input::{handle_key_event, Cursor};
use lights_out::types::{Coord, GameAction, GameConfig};

fn press(game: &mut GameState, cursor: &mut Cursor, code: KeyCode) {
    let action = handle_key_event(KeyEvent::from(code)).and_then(|a| cursor.resolve(a));
    if let Some(action) = action {
        game.apply_action(action).unwrap();
    }
}

#[test]
fn test_keyboard_navigation_toggles_selected_cell() {
    let mut game = GameState::new(GameConfig::new(3, 3, 1.0), 1);
    let mut cursor = Cursor::new(3, 3);

    press(&mut game, &mut cursor, KeyCode::Down);
    press(&mut game, &mut cursor, KeyCode::Char('l'));
    assert_eq!(cursor.position(), Coord::new(1, 1));

    press(&mut game, &mut cursor, KeyCode::Char(' '));
    assert_eq!(game.moves(), 1);
    assert_eq!(game.lit_count(), 4);
}

#[test]
fn test_cursor_never_leaves_grid() {
    let mut game = GameState::new(GameConfig::new(2, 2, 1.0), 1);
    let mut cursor = Cursor::new(2, 2);

    for _ in 0..5 {
        press(&mut game, &mut cursor, KeyCode::Right);
        press(&mut game, &mut cursor, KeyCode::Down);
    }
    assert_eq!(cursor.position(), Coord::new(1, 1));

    // Toggling at the clamped position is always valid.
    press(&mut game, &mut cursor, KeyCode::Enter);
    assert_eq!(game.moves(), 1);
}

#[test]
fn test_restart_key_starts_new_game() {
    let mut game = GameState::new(GameConfig::new(2, 2, 1.0), 1);
    let mut cursor = Cursor::new(2, 2);

    press(&mut game, &mut cursor, KeyCode::Char(' '));
    press(&mut game, &mut cursor, KeyCode::Char('r'));
    assert_eq!(game.episode_id(), 1);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.lit_count(), 4);
}

#[test]
fn test_cursor_moves_do_not_touch_game() {
    let mut cursor = Cursor::new(3, 3);
    assert_eq!(cursor.resolve(GameAction::CursorRight), None);
    assert_eq!(cursor.resolve(GameAction::Restart), Some(GameAction::Restart));
}
