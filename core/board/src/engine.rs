//! 棋盤引擎：組合城牆、佔據表、回合與走子判定
//!
//! `attempt_move` 是唯一會修改狀態的入口，流程為先判定、後修改。

use crate::component::{Cell, Color, Piece};
use crate::constants::{start_cells, THRONES};
use crate::core_types::{OccupancyMap, WallLayout};
use crate::error::{MoveError, Result};
use crate::logic::movement::{self, Mover, Verdict};
use crate::logic::turn::TurnState;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// 成功走子的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    MovedWithCapture { captured: Color },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEngine {
    walls: WallLayout,
    occupancy: OccupancyMap,
    turn: TurnState,
}

impl BoardEngine {
    /// 標準開局：標準城牆、雙方各 8 子、白方先手
    pub fn new() -> Self {
        let mut occupancy = OccupancyMap::default();
        for color in Color::iter() {
            for &cell in start_cells(color) {
                occupancy.set(cell, Some(color));
            }
        }
        BoardEngine {
            walls: WallLayout::standard(),
            occupancy,
            turn: TurnState::default(),
        }
    }

    pub(crate) fn from_parts(walls: WallLayout, occupancy: OccupancyMap, turn: TurnState) -> Self {
        BoardEngine {
            walls,
            occupancy,
            turn,
        }
    }

    // ------------------------------------------------------------------
    // 查詢
    // ------------------------------------------------------------------

    #[track_caller]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.is_wall(cell)
    }

    #[track_caller]
    pub fn occupant_at(&self, cell: Cell) -> Option<Color> {
        self.occupancy.get(cell)
    }

    pub fn active_color(&self) -> Color {
        self.turn.active()
    }

    /// 所有棋子（列優先），供繪製使用
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.occupancy.pieces()
    }

    pub fn walls(&self) -> &WallLayout {
        &self.walls
    }

    pub fn occupancy(&self) -> &OccupancyMap {
        &self.occupancy
    }

    pub fn thrones(&self) -> [(Color, Cell); 2] {
        THRONES
    }

    /// 不修改狀態的判定，含細分原因
    pub fn verdict(&self, color: Color, start: Cell, end: Cell) -> Verdict {
        movement::validate_move(
            Mover { cell: start, color },
            end,
            |cell| self.walls.is_wall(cell),
            |cell| self.occupancy.get(cell),
        )
    }

    /// 從 `start` 出發、目前行動方可走的所有終點
    ///
    /// `start` 上不是行動方棋子時回傳空集合。
    pub fn legal_destinations(&self, start: Cell) -> Vec<Cell> {
        let color = self.active_color();
        if self.occupancy.get(start) != Some(color) {
            return Vec::new();
        }
        movement::legal_destinations(
            Mover { cell: start, color },
            |cell| self.walls.is_wall(cell),
            |cell| self.occupancy.get(cell),
        )
        .into_iter()
        .map(|(cell, _)| cell)
        .collect()
    }

    // ------------------------------------------------------------------
    // 指令
    // ------------------------------------------------------------------

    /// 嘗試走子
    ///
    /// # 失敗（皆不修改狀態、不換手）：
    /// - `NotYourTurn`：`color` 不是目前行動方
    /// - `NoPieceAtStart`：起點沒有 `color` 的棋子
    /// - `Rejected`：規則判定不合法
    ///
    /// # 成功：
    /// 先移除終點的敵方棋子，再把棋子從起點移到終點，最後換手。
    #[instrument(level = "debug", skip(self), fields(active = %self.turn.active()))]
    pub fn attempt_move(
        &mut self,
        color: Color,
        start: Cell,
        end: Cell,
    ) -> Result<MoveOutcome, MoveError> {
        let active = self.turn.active();
        if color != active {
            debug!("not this color's turn");
            return Err(MoveError::NotYourTurn {
                requested: color,
                active,
            });
        }

        if self.occupancy.get(start) != Some(color) {
            debug!("no piece of this color at start");
            return Err(MoveError::NoPieceAtStart { cell: start, color });
        }

        let outcome = match self.verdict(color, start, end) {
            Verdict::Illegal(reason) => {
                debug!(%reason, "move rejected");
                return Err(MoveError::Rejected {
                    from: start,
                    to: end,
                });
            }
            Verdict::LegalWithCapture => {
                let captured = color.opposite();
                self.occupancy.set(end, None);
                info!(%captured, cell = %end, "piece captured");
                MoveOutcome::MovedWithCapture { captured }
            }
            Verdict::LegalNoCapture => MoveOutcome::Moved,
        };

        self.occupancy.set(start, None);
        self.occupancy.set(end, Some(color));
        let next = self.turn.advance();
        debug!(?outcome, %next, "move applied");
        Ok(outcome)
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        BoardEngine::new()
    }
}
