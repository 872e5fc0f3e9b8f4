use crate::test_helpers::level_builder::STANDARD_WALLS;
use castle_board::constants::{BLACK_THRONE, BOARD_SIZE, WHITE_THRONE};
use castle_board::loader::load_from_ascii;
use castle_board::logic::board::{all_positions, is_valid_position};
use castle_board::logic::debug::render_ascii;
use castle_board::{BoardEngine, Cell, Color, WallLayout};

#[test]
fn test_standard_walls_match_picture() {
    let picture = load_from_ascii(STANDARD_WALLS).unwrap();
    let standard = WallLayout::standard();
    for cell in all_positions() {
        assert_eq!(
            standard.is_wall(cell),
            picture.walls.is_wall(cell),
            "{} 與圖樣不符",
            cell
        );
    }
    assert_eq!(standard.len(), picture.walls.len());
}

#[test]
fn test_standard_walls_symmetric() {
    let walls = WallLayout::standard();
    let mirror = |i: usize| BOARD_SIZE - 1 - i;
    for cell in walls.all_walls() {
        assert!(walls.is_wall(Cell::new(mirror(cell.row), cell.col)), "{}", cell);
        assert!(walls.is_wall(Cell::new(cell.row, mirror(cell.col))), "{}", cell);
    }
}

#[test]
fn test_thrones_are_not_walls() {
    let walls = WallLayout::standard();
    assert!(!walls.is_wall(WHITE_THRONE));
    assert!(!walls.is_wall(BLACK_THRONE));
    assert_eq!(WHITE_THRONE.col, BOARD_SIZE / 2);
    assert_eq!(BLACK_THRONE.row, BOARD_SIZE - 1 - WHITE_THRONE.row);
}

#[test]
fn test_walls_stable_across_moves() {
    let mut engine = BoardEngine::new();
    let before: Vec<Cell> = engine.walls().all_walls().collect();

    let _ = engine.attempt_move(Color::White, Cell::new(7, 2), Cell::new(8, 2));
    let _ = engine.attempt_move(Color::Black, Cell::new(11, 2), Cell::new(10, 2));
    let _ = engine.attempt_move(Color::White, Cell::new(8, 2), Cell::new(10, 2));

    let after: Vec<Cell> = engine.walls().all_walls().collect();
    assert_eq!(before, after);
}

#[test]
fn test_valid_positions() {
    assert_eq!(all_positions().count(), BOARD_SIZE * BOARD_SIZE);
    assert!(all_positions().all(is_valid_position));
    assert!(!is_valid_position(Cell::new(BOARD_SIZE, 0)));
    assert!(!is_valid_position(Cell::new(0, BOARD_SIZE)));
}

#[test]
fn test_render_standard_board() {
    let engine = BoardEngine::new();
    let rendered = render_ascii(engine.walls(), engine.occupancy());
    let rows: Vec<&str> = rendered.lines().collect();
    assert_eq!(rows.len(), BOARD_SIZE);
    // 第 0 列：(0,5) 與 (0,13) 是站在城牆上的白子
    assert_eq!(rows[0], ". . . . . W# . . . . . . . W# . . . . .");
    assert_eq!(rows[18], ". . . . . B# . . . . . . . B# . . . . .");
}
