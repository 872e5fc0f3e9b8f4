//! 調試相關的工具函數

use crate::component::Color;
use crate::constants::BOARD_SIZE;
use crate::core_types::{OccupancyMap, WallLayout};
use crate::logic::board::all_positions;

/// 把棋盤畫成 ASCII，格式與 `loader::load_from_ascii` 相同
///
/// - `.` 平地、`#` 城牆
/// - `W` / `B` 棋子；位於城牆上時加 `#` 後綴（`W#`、`B#`）
pub fn render_ascii(walls: &WallLayout, occupancy: &OccupancyMap) -> String {
    let mut out = String::new();
    for cell in all_positions() {
        let symbol = match (occupancy.get(cell), walls.is_wall(cell)) {
            (None, false) => ".",
            (None, true) => "#",
            (Some(Color::White), false) => "W",
            (Some(Color::White), true) => "W#",
            (Some(Color::Black), false) => "B",
            (Some(Color::Black), true) => "B#",
        };
        out.push_str(symbol);
        out.push(if cell.col + 1 == BOARD_SIZE { '\n' } else { ' ' });
    }
    out
}
