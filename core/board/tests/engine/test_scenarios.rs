//! 標準開局上的典型對局片段

use crate::test_helpers::level_builder::play;
use castle_board::{BoardEngine, Cell, Color, MoveError, MoveOutcome};

fn rejected(from: Cell, to: Cell) -> Result<MoveOutcome, MoveError> {
    Err(MoveError::Rejected { from, to })
}

#[test]
fn test_move_along_wall_run() {
    let mut engine = BoardEngine::new();
    let (from, to) = (Cell::new(7, 2), Cell::new(7, 5));
    assert!(engine.is_wall(from) && engine.is_wall(to));

    assert_eq!(engine.attempt_move(Color::White, from, to), Ok(MoveOutcome::Moved));
    assert_eq!(engine.occupant_at(from), None);
    assert_eq!(engine.occupant_at(to), Some(Color::White));
    assert_eq!(engine.active_color(), Color::Black);
}

#[test]
fn test_cannot_cross_gate_gap() {
    let mut engine = BoardEngine::new();
    // 先把白子沿牆走到 (7,8)，黑方隨便走一步
    play(
        &mut engine,
        &[
            (Color::White, Cell::new(7, 2), Cell::new(7, 8)),
            (Color::Black, Cell::new(11, 2), Cell::new(12, 2)),
        ],
    );
    // (7,9) 是城門缺口，牆到牆之間夾著平地
    assert!(!engine.is_wall(Cell::new(7, 9)));
    let result = engine.attempt_move(Color::White, Cell::new(7, 8), Cell::new(7, 10));
    assert_eq!(result, rejected(Cell::new(7, 8), Cell::new(7, 10)));
}

#[test]
fn test_no_op_move_rejected() {
    let mut engine = BoardEngine::new();
    let cell = Cell::new(5, 7);
    assert_eq!(engine.attempt_move(Color::White, cell, cell), rejected(cell, cell));
    assert_eq!(engine.active_color(), Color::White);
}

#[test]
fn test_diagonal_move_rejected() {
    let mut engine = BoardEngine::new();
    let (from, to) = (Cell::new(5, 7), Cell::new(6, 8));
    assert_eq!(engine.attempt_move(Color::White, from, to), rejected(from, to));
    assert_eq!(engine.occupant_at(from), Some(Color::White));
    assert_eq!(engine.active_color(), Color::White);
}

#[test]
fn test_step_back_onto_wall() {
    let mut engine = BoardEngine::new();
    let outcomes = play(
        &mut engine,
        &[
            (Color::White, Cell::new(7, 2), Cell::new(8, 2)),
            (Color::Black, Cell::new(11, 2), Cell::new(10, 2)),
            (Color::White, Cell::new(8, 2), Cell::new(7, 2)),
        ],
    );
    assert!(outcomes.iter().all(|o| *o == MoveOutcome::Moved));
    assert_eq!(engine.occupant_at(Cell::new(7, 2)), Some(Color::White));
    assert_eq!(engine.active_color(), Color::Black);
}

#[test]
fn test_capture() {
    let mut engine = BoardEngine::new();
    play(
        &mut engine,
        &[
            (Color::White, Cell::new(7, 2), Cell::new(8, 2)),
            (Color::Black, Cell::new(11, 2), Cell::new(10, 2)),
        ],
    );
    let black_before = engine.occupancy().count(Color::Black);

    let outcome = engine.attempt_move(Color::White, Cell::new(8, 2), Cell::new(10, 2));
    assert_eq!(
        outcome,
        Ok(MoveOutcome::MovedWithCapture {
            captured: Color::Black
        })
    );
    assert_eq!(engine.occupant_at(Cell::new(10, 2)), Some(Color::White));
    assert_eq!(engine.occupant_at(Cell::new(8, 2)), None);
    assert_eq!(engine.occupancy().count(Color::Black), black_before - 1);
    assert_eq!(engine.occupancy().count(Color::Black), 7);
    assert_eq!(engine.active_color(), Color::Black);
}

#[test]
fn test_not_your_turn() {
    let mut engine = BoardEngine::new();
    let before = engine.clone();
    let result = engine.attempt_move(Color::Black, Cell::new(11, 2), Cell::new(10, 2));
    assert_eq!(
        result,
        Err(MoveError::NotYourTurn {
            requested: Color::Black,
            active: Color::White,
        })
    );
    assert_eq!(engine, before);
}
