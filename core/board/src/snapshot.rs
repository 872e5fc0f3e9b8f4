//! 記憶體內的棋盤快照
//!
//! 可序列化，供呈現層或測試保存、比對、還原局面；不是存檔格式。

use crate::component::{Cell, Color, Piece};
use crate::core_types::{OccupancyMap, WallLayout};
use crate::engine::BoardEngine;
use crate::error::{Context, Error, Result};
use crate::logic::board::check_position;
use crate::logic::turn::TurnState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub active_color: Color,
    pub walls: Vec<Cell>,
    pub pieces: Vec<Piece>,
}

impl BoardEngine {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            active_color: self.active_color(),
            walls: self.walls().all_walls().collect(),
            pieces: self.pieces().collect(),
        }
    }

    /// 從快照還原；快照可能來自外部，座標與重複擺放都要檢查
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self> {
        for &cell in &snapshot.walls {
            check_position(cell)
                .map_err(Error::from)
                .context("還原城牆")?;
        }

        let mut occupancy = OccupancyMap::default();
        for piece in &snapshot.pieces {
            check_position(piece.cell)
                .map_err(Error::from)
                .context("還原棋子")?;
            occupancy.place(piece.cell, piece.color).context("還原棋子")?;
        }

        Ok(BoardEngine::from_parts(
            WallLayout::from_cells(snapshot.walls.iter().copied()),
            occupancy,
            TurnState::new(snapshot.active_color),
        ))
    }
}
