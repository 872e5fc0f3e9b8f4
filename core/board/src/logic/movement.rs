//! 移動邏輯
//!
//! 純函式：只讀取城牆與佔據狀態，不修改任何東西。
//! 棋盤存取以閉包傳入，方便以任意資料來源驗證。

use crate::alias::Delta;
use crate::component::{Cell, Color};
use crate::logic::board::is_valid_position;
use strum_macros::Display;

/// 移動方向（四方向）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// 計算從當前位置往指定方向移動一格後的位置，檢查棋盤邊界
///
/// 返回 `None` 當新位置超出棋盤邊界
pub fn step_in_direction(cell: Cell, direction: Direction) -> Option<Cell> {
    let next = match direction {
        Direction::Up => Cell::new(cell.row.checked_sub(1)?, cell.col),
        Direction::Down => Cell::new(cell.row + 1, cell.col),
        Direction::Left => Cell::new(cell.row, cell.col.checked_sub(1)?),
        Direction::Right => Cell::new(cell.row, cell.col + 1),
    };

    is_valid_position(next).then_some(next)
}

/// 移動軸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// 列改變、行不變
    Vertical,
    /// 行改變、列不變
    Horizontal,
}

/// 一步直線移動：沿哪個軸、有號位移多少
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveLine {
    pub orientation: Orientation,
    pub delta: Delta,
}

impl MoveLine {
    /// 起點與終點必須恰有一個座標分量不同，否則回傳 `None`
    pub fn between(from: Cell, to: Cell) -> Option<MoveLine> {
        let d_row = to.row as Delta - from.row as Delta;
        let d_col = to.col as Delta - from.col as Delta;
        match (d_row, d_col) {
            (0, 0) => None,
            (0, delta) => Some(MoveLine {
                orientation: Orientation::Horizontal,
                delta,
            }),
            (delta, 0) => Some(MoveLine {
                orientation: Orientation::Vertical,
                delta,
            }),
            _ => None,
        }
    }

    pub fn distance(&self) -> usize {
        self.delta.unsigned_abs()
    }
}

/// 起點與終點之間的格子（開區間，不含兩端）
///
/// 負方向先交換端點，一律由小到大掃描。相鄰兩格之間為空。
pub fn cells_between(from: Cell, to: Cell, line: MoveLine) -> impl Iterator<Item = Cell> {
    let (low, high) = if line.delta < 0 { (to, from) } else { (from, to) };
    let orientation = line.orientation;
    let (range, fixed) = match orientation {
        Orientation::Vertical => ((low.row + 1)..high.row, low.col),
        Orientation::Horizontal => ((low.col + 1)..high.col, low.row),
    };
    range.map(move |i| match orientation {
        Orientation::Vertical => Cell::new(i, fixed),
        Orientation::Horizontal => Cell::new(fixed, i),
    })
}

/// 移動者（位置 + 顏色）
#[derive(Debug, Clone, Copy)]
pub struct Mover {
    pub cell: Cell,
    pub color: Color,
}

/// 不合法的細分原因，只用於日誌與測試
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalReason {
    /// 起點等於終點
    SameCell,
    /// 非直線（斜走）
    NotOrthogonal,
    /// 上下城牆只能走一格
    WallStep,
    /// 平地之間隔著城牆
    WallBetween,
    /// 城牆之間夾著平地
    GapBetweenWalls,
    /// 路徑上有棋子
    PieceBetween,
    /// 終點是自己的棋子
    OwnPiece,
}

/// 走子判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Illegal(IllegalReason),
    LegalNoCapture,
    LegalWithCapture,
}

impl Verdict {
    pub fn is_legal(self) -> bool {
        !matches!(self, Verdict::Illegal(_))
    }
}

/// 判定一步走子是否合法、是否吃子
///
/// # 判定順序：
/// 1. 起點等於終點 → 不合法
/// 2. 必須是純橫向或純縱向
/// 3. 城牆規則（依起點、終點是否為牆）：
///    - 恰一端是牆：只能走一格
///    - 兩端皆非牆：中間不可有牆
///    - 兩端皆是牆：中間不可有平地
/// 4. 中間不可有任何棋子
/// 5. 終點為己方棋子 → 不合法；為敵方 → 吃子
///
/// 己方棋子在終點時，先判不合法，不會發生吃子或移動。
pub fn validate_move<F, G>(mover: Mover, to: Cell, is_wall: F, occupant_at: G) -> Verdict
where
    F: Fn(Cell) -> bool + Copy,
    G: Fn(Cell) -> Option<Color> + Copy,
{
    let from = mover.cell;
    if from == to {
        return Verdict::Illegal(IllegalReason::SameCell);
    }

    let Some(line) = MoveLine::between(from, to) else {
        return Verdict::Illegal(IllegalReason::NotOrthogonal);
    };

    if let Some(reason) = wall_obstruction(from, to, line, is_wall) {
        return Verdict::Illegal(reason);
    }

    if cells_between(from, to, line).any(|cell| occupant_at(cell).is_some()) {
        return Verdict::Illegal(IllegalReason::PieceBetween);
    }

    match occupant_at(to) {
        Some(color) if color == mover.color => Verdict::Illegal(IllegalReason::OwnPiece),
        Some(_) => Verdict::LegalWithCapture,
        None => Verdict::LegalNoCapture,
    }
}

// 城牆規則看的是起點、終點是否為牆，而非只看路徑
fn wall_obstruction<F>(from: Cell, to: Cell, line: MoveLine, is_wall: F) -> Option<IllegalReason>
where
    F: Fn(Cell) -> bool + Copy,
{
    match (is_wall(from), is_wall(to)) {
        (true, false) | (false, true) => {
            (line.distance() != 1).then_some(IllegalReason::WallStep)
        }
        (false, false) => cells_between(from, to, line)
            .any(is_wall)
            .then_some(IllegalReason::WallBetween),
        (true, true) => cells_between(from, to, line)
            .any(|cell| !is_wall(cell))
            .then_some(IllegalReason::GapBetweenWalls),
    }
}

/// 列出移動者所有合法終點與判定結果
///
/// 沿四個方向逐格檢查；遇到第一個棋子後，更遠的格子必被擋住，停止該方向。
pub fn legal_destinations<F, G>(mover: Mover, is_wall: F, occupant_at: G) -> Vec<(Cell, Verdict)>
where
    F: Fn(Cell) -> bool + Copy,
    G: Fn(Cell) -> Option<Color> + Copy,
{
    let mut destinations = Vec::new();
    for direction in Direction::ALL {
        let mut current = mover.cell;
        while let Some(next) = step_in_direction(current, direction) {
            let verdict = validate_move(mover, next, is_wall, occupant_at);
            if verdict.is_legal() {
                destinations.push((next, verdict));
            }
            if occupant_at(next).is_some() {
                break;
            }
            current = next;
        }
    }
    destinations.sort_by_key(|(cell, _)| *cell);
    destinations
}
