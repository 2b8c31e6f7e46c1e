//! Key map tests, including keys driving a live game

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use blockfall::core::{ActivePiece, Offset};
use blockfall::engine::GameState;
use blockfall::input::{accepts_kind, handle_key_event, should_quit};
use blockfall::types::{GameAction, PieceKind};

fn key(c: char) -> KeyEvent {
    KeyEvent::from(KeyCode::Char(c))
}

#[test]
fn test_every_binding() {
    let cases = [
        (KeyCode::Left, GameAction::MoveLeft),
        (KeyCode::Char('h'), GameAction::MoveLeft),
        (KeyCode::Char('a'), GameAction::MoveLeft),
        (KeyCode::Right, GameAction::MoveRight),
        (KeyCode::Char('l'), GameAction::MoveRight),
        (KeyCode::Char('d'), GameAction::MoveRight),
        (KeyCode::Down, GameAction::SoftDrop),
        (KeyCode::Char('j'), GameAction::SoftDrop),
        (KeyCode::Char('s'), GameAction::SoftDrop),
        (KeyCode::Up, GameAction::RotateCw),
        (KeyCode::Char('q'), GameAction::RotateCw),
        (KeyCode::Char('k'), GameAction::RotateCw),
        (KeyCode::Char('x'), GameAction::RotateCw),
        (KeyCode::Char('w'), GameAction::RotateCcw),
        (KeyCode::Char('z'), GameAction::RotateCcw),
        (KeyCode::Char('y'), GameAction::RotateCcw),
    ];
    for (code, action) in cases {
        assert_eq!(handle_key_event(KeyEvent::from(code)), Some(action), "{code:?}");
    }
}

#[test]
fn test_shifted_letters_map_like_lowercase() {
    let shifted = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
    assert_eq!(handle_key_event(shifted), Some(GameAction::RotateCw));
}

#[test]
fn test_quit_is_not_a_game_action() {
    let esc = KeyEvent::from(KeyCode::Esc);
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(should_quit(esc));
    assert!(should_quit(ctrl_c));
    assert_eq!(handle_key_event(esc), None);
    assert_eq!(handle_key_event(ctrl_c), None);
}

#[test]
fn test_repeats_count_but_releases_do_not() {
    assert!(accepts_kind(KeyEventKind::Press));
    assert!(accepts_kind(KeyEventKind::Repeat));
    assert!(!accepts_kind(KeyEventKind::Release));
}

#[test]
fn test_keys_drive_the_game() {
    let mut game = GameState::new(1);
    *game.active_mut() = ActivePiece::new(PieceKind::T, Offset::new(4, 2));

    for c in ['a', 'a', 's', 'd'] {
        if let Some(action) = handle_key_event(key(c)) {
            game.apply_action(action);
        }
    }
    assert_eq!(game.active().offset, Offset::new(3, 3));

    // Held left arrow: the wall stops it.
    for _ in 0..20 {
        let held = KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Repeat);
        if accepts_kind(held.kind) {
            if let Some(action) = handle_key_event(held) {
                game.apply_action(action);
            }
        }
    }
    assert_eq!(game.active().offset.x, 0);
}
