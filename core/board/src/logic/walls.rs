//! 標準城牆圖樣
//!
//! 圖樣對中心列、中心行皆對稱；每一段牆都連同鏡射位置一起產生。

use crate::alias::Coord;
use crate::component::Cell;
use crate::constants::BOARD_SIZE;
use std::ops::RangeInclusive;

/// 直向牆段：(列範圍, 所在的行)，另在下半部鏡射一份
const VERTICAL_RUNS: [(RangeInclusive<Coord>, [Coord; 2]); 3] = [
    (1..=7, [2, 16]),
    (0..=5, [5, 13]),
    (1..=5, [7, 11]),
];

/// 橫向城牆所在的列，行範圍另在右半部鏡射一份
const RAMPART_ROWS: [Coord; 2] = [7, 11];
const RAMPART_COLS: RangeInclusive<Coord> = 3..=8;

/// 王座前的橫牆
const GATE_ROWS: [Coord; 2] = [5, 13];
const GATE_COLS: RangeInclusive<Coord> = 7..=11;

/// 單獨的牆格
const SINGLE_WALLS: [Cell; 4] = [
    Cell::new(1, 8),
    Cell::new(1, 10),
    Cell::new(17, 8),
    Cell::new(17, 10),
];

fn mirror(i: Coord) -> Coord {
    BOARD_SIZE - 1 - i
}

/// 產生標準城牆格子（可能重複，由呼叫端收進集合）
pub fn standard_wall_cells() -> impl Iterator<Item = Cell> {
    let mut cells = Vec::new();

    for (rows, cols) in VERTICAL_RUNS {
        for row in rows {
            for col in cols {
                cells.push(Cell::new(row, col));
                cells.push(Cell::new(mirror(row), col));
            }
        }
    }

    for col in RAMPART_COLS {
        for row in RAMPART_ROWS {
            cells.push(Cell::new(row, col));
            cells.push(Cell::new(row, mirror(col)));
        }
    }

    for col in GATE_COLS {
        for row in GATE_ROWS {
            cells.push(Cell::new(row, col));
        }
    }

    cells.extend(SINGLE_WALLS);
    cells.into_iter()
}
