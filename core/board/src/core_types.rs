//! 基本資料類型定義

use crate::component::{Cell, Color, Piece};
use crate::error::{BoardError, Result};
use crate::logic::board::assert_valid_position;
use crate::logic::walls::standard_wall_cells;
use std::collections::{BTreeMap, BTreeSet};

/// 城牆格子集合
///
/// 建立後不可修改；沒有公開的修改 API。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallLayout {
    cells: BTreeSet<Cell>,
}

impl WallLayout {
    /// 標準城牆圖樣
    pub fn standard() -> Self {
        WallLayout {
            cells: standard_wall_cells().collect(),
        }
    }

    /// 沒有任何城牆
    pub fn empty() -> Self {
        WallLayout {
            cells: BTreeSet::new(),
        }
    }

    // 呼叫端（載入器）需先檢查座標
    pub(crate) fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        WallLayout {
            cells: cells.into_iter().collect(),
        }
    }

    #[track_caller]
    pub fn is_wall(&self, cell: Cell) -> bool {
        assert_valid_position(cell);
        self.cells.contains(&cell)
    }

    /// 所有城牆格子（列優先），可重複取用
    pub fn all_walls(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for WallLayout {
    fn default() -> Self {
        WallLayout::standard()
    }
}

/// 棋子佔據表：格子 → 棋子顏色
///
/// 純資料儲存，不做任何規則檢查。一格最多一顆棋子；
/// 城牆格上可以有棋子。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyMap {
    cells: BTreeMap<Cell, Color>,
}

impl OccupancyMap {
    #[track_caller]
    pub fn get(&self, cell: Cell) -> Option<Color> {
        assert_valid_position(cell);
        self.cells.get(&cell).copied()
    }

    /// 無條件寫入；`None` 清空該格
    #[track_caller]
    pub(crate) fn set(&mut self, cell: Cell, occupant: Option<Color>) {
        assert_valid_position(cell);
        match occupant {
            Some(color) => {
                self.cells.insert(cell, color);
            }
            None => {
                self.cells.remove(&cell);
            }
        }
    }

    /// 放置棋子到空格
    ///
    /// 若該格已有棋子，回傳錯誤。用於初始佈局，不用於走子。
    pub(crate) fn place(&mut self, cell: Cell, color: Color) -> Result<()> {
        if let Some(occupant) = self.get(cell) {
            return Err(BoardError::CellOccupied { cell, occupant }.into());
        }
        self.set(cell, Some(color));
        Ok(())
    }

    /// 所有棋子（列優先）
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells
            .iter()
            .map(|(&cell, &color)| Piece { cell, color })
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.values().filter(|&&c| c == color).count()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
