//! 測試輔助：用 ASCII art 視覺化定義局面

use castle_board::loader::load_from_ascii;
use castle_board::{BoardEngine, Cell, Color, MoveOutcome, MoveError};
use std::collections::HashMap;

/// 標準城牆圖樣，與 `WallLayout::standard()` 應完全一致
pub const STANDARD_WALLS: &str = r#"
. . . . . # . . . . . . . # . . . . .
. . # . . # . # # . # # . # . . # . .
. . # . . # . # . . . # . # . . # . .
. . # . . # . # . . . # . # . . # . .
. . # . . # . # . . . # . # . . # . .
. . # . . # . # # # # # . # . . # . .
. . # . . . . . . . . . . . . . # . .
. . # # # # # # # . # # # # # # # . .
. . . . . . . . . . . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
. . . . . . . . . . . . . . . . . . .
. . # # # # # # # . # # # # # # # . .
. . # . . . . . . . . . . . . . # . .
. . # . . # . # # # # # . # . . # . .
. . # . . # . # . . . # . # . . # . .
. . # . . # . # . . . # . # . . # . .
. . # . . # . # . . . # . # . . # . .
. . # . . # . # # . # # . # . . # . .
. . . . . # . . . . . . . # . . . . .
"#;

/// 從 ASCII 建立引擎，回傳 (引擎, 標記映射)
pub fn engine_from_ascii(
    ascii: &str,
    first_player: Color,
) -> (BoardEngine, HashMap<String, Vec<Cell>>) {
    let board = load_from_ascii(ascii).expect("load_from_ascii 應成功");
    let markers = board.markers.clone();
    (board.into_engine(first_player), markers)
}

/// 依序執行多步走子，任何一步失敗即 panic
pub fn play(engine: &mut BoardEngine, moves: &[(Color, Cell, Cell)]) -> Vec<MoveOutcome> {
    moves
        .iter()
        .map(|&(color, from, to)| {
            engine
                .attempt_move(color, from, to)
                .unwrap_or_else(|e: MoveError| panic!("{color} {from} -> {to} 應成功: {e}"))
        })
        .collect()
}
