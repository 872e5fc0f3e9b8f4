//! 遊戲常數定義
//!
//! 呈現層需要用同一組常數做座標換算，這裡是唯一來源。

use crate::alias::Coord;
use crate::component::{Cell, Color};

/// 棋盤邊長（N × N）
pub const BOARD_SIZE: Coord = 19;

/// 每方初始棋子數
pub const PIECES_PER_COLOR: usize = 8;

/// 白方王座
pub const WHITE_THRONE: Cell = Cell::new(3, 9);

/// 黑方王座
pub const BLACK_THRONE: Cell = Cell::new(15, 9);

/// 兩個王座（僅供繪製，無規則效果）
pub const THRONES: [(Color, Cell); 2] = [(Color::White, WHITE_THRONE), (Color::Black, BLACK_THRONE)];

/// 白方初始位置
pub const WHITE_START: [Cell; PIECES_PER_COLOR] = [
    Cell::new(7, 2),
    Cell::new(7, 16),
    Cell::new(0, 5),
    Cell::new(0, 13),
    Cell::new(5, 7),
    Cell::new(5, 11),
    Cell::new(1, 7),
    Cell::new(1, 11),
];

/// 黑方初始位置（白方上下鏡射）
pub const BLACK_START: [Cell; PIECES_PER_COLOR] = [
    Cell::new(11, 2),
    Cell::new(11, 16),
    Cell::new(18, 5),
    Cell::new(18, 13),
    Cell::new(13, 7),
    Cell::new(13, 11),
    Cell::new(17, 7),
    Cell::new(17, 11),
];

/// 先手顏色
pub const FIRST_PLAYER: Color = Color::White;

/// 指定顏色的初始位置
pub fn start_cells(color: Color) -> &'static [Cell; PIECES_PER_COLOR] {
    match color {
        Color::White => &WHITE_START,
        Color::Black => &BLACK_START,
    }
}
