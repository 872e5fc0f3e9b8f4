//! 開局設定的資料結構定義（TOML）
//!
//! 只作為記憶體內的設定輸入，不是存檔格式。

use crate::component::{Cell, Color};
use crate::constants::{start_cells, FIRST_PLAYER};
use crate::core_types::{OccupancyMap, WallLayout};
use crate::engine::BoardEngine;
use crate::error::{Context, Error, LoadError, Result};
use crate::logic::board::check_position;
use crate::logic::turn::TurnState;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::Display;

/// 城牆圖樣選擇
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum WallPreset {
    #[default]
    Standard,
    Empty,
}

impl WallPreset {
    pub fn build(self) -> WallLayout {
        match self {
            WallPreset::Standard => WallLayout::standard(),
            WallPreset::Empty => WallLayout::empty(),
        }
    }
}

/// 單顆棋子的擺放
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiecePlacement {
    pub color: Color,
    pub row: usize,
    pub col: usize,
}

impl PiecePlacement {
    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }
}

/// 開局設定
///
/// ```toml
/// first_player = "White"
/// walls = "standard"
///
/// [[pieces]]
/// color = "White"
/// row = 7
/// col = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    pub first_player: Color,
    pub walls: WallPreset,
    pub pieces: Vec<PiecePlacement>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        let pieces = Color::iter()
            .flat_map(|color| {
                start_cells(color).iter().map(move |cell| PiecePlacement {
                    color,
                    row: cell.row,
                    col: cell.col,
                })
            })
            .collect();
        SetupConfig {
            first_player: FIRST_PLAYER,
            walls: WallPreset::Standard,
            pieces,
        }
    }
}

impl SetupConfig {
    /// 從 TOML 字串解析並驗證
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: SetupConfig =
            toml::from_str(content).map_err(|e| LoadError::DeserializeError {
                format: "setup".to_string(),
                reason: e.to_string(),
            })?;
        config.validate().context("驗證開局設定")?;
        Ok(config)
    }

    /// 座標必須在棋盤內、同一格不可放兩顆棋子
    pub fn validate(&self) -> Result<()> {
        self.build_occupancy().map(|_| ())
    }

    /// 依設定建立引擎
    pub fn build_engine(&self) -> Result<BoardEngine> {
        let occupancy = self.build_occupancy()?;
        Ok(BoardEngine::from_parts(
            self.walls.build(),
            occupancy,
            TurnState::new(self.first_player),
        ))
    }

    fn build_occupancy(&self) -> Result<OccupancyMap> {
        let mut occupancy = OccupancyMap::default();
        for (idx, placement) in self.pieces.iter().enumerate() {
            let cell = placement.cell();
            check_position(cell)
                .map_err(Error::from)
                .context(format!("第 {idx} 顆棋子"))?;
            occupancy
                .place(cell, placement.color)
                .context(format!("第 {idx} 顆棋子"))?;
        }
        Ok(occupancy)
    }
}
