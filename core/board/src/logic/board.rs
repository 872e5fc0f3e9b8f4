//! 棋盤邏輯

use crate::component::Cell;
use crate::constants::BOARD_SIZE;
use crate::error::BoardError;

/// 驗證位置是否在棋盤邊界內
pub fn is_valid_position(cell: Cell) -> bool {
    cell.row < BOARD_SIZE && cell.col < BOARD_SIZE
}

/// 外部輸入（設定檔、快照）的邊界檢查，回傳可處理的錯誤
pub fn check_position(cell: Cell) -> Result<(), BoardError> {
    if is_valid_position(cell) {
        Ok(())
    } else {
        Err(BoardError::OutOfBounds {
            row: cell.row,
            col: cell.col,
            size: BOARD_SIZE,
        })
    }
}

/// 內部查詢的邊界斷言
///
/// 呼叫端負責只送出棋盤內的座標，違反即為程式錯誤。
#[track_caller]
pub(crate) fn assert_valid_position(cell: Cell) {
    assert!(
        is_valid_position(cell),
        "位置 {cell} 超出棋盤邊界 {BOARD_SIZE}x{BOARD_SIZE}"
    );
}

/// 列優先列舉棋盤所有格子
pub fn all_positions() -> impl Iterator<Item = Cell> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell::new(row, col)))
}
