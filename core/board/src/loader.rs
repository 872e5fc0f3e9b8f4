//! 棋盤載入器

use crate::component::{Cell, Color};
use crate::constants::BOARD_SIZE;
use crate::core_types::{OccupancyMap, WallLayout};
use crate::engine::BoardEngine;
use crate::error::{LoadError, Result};
use crate::logic::turn::TurnState;
use std::collections::HashMap;

/// ASCII 載入結果
#[derive(Debug, Clone)]
pub struct AsciiBoard {
    pub walls: WallLayout,
    pub occupancy: OccupancyMap,
    /// 非保留符號的標記位置（去掉 `#` 後綴）
    pub markers: HashMap<String, Vec<Cell>>,
}

impl AsciiBoard {
    /// 組成引擎，由 `first_player` 先行動
    pub fn into_engine(self, first_player: Color) -> BoardEngine {
        BoardEngine::from_parts(self.walls, self.occupancy, TurnState::new(first_player))
    }
}

/// 從 ASCII 格式載入棋盤
///
/// ASCII 格式：每行用空格分隔的符號，對應棋盤左上角起的區域，
/// 未描述的格子視為空平地。
/// - `.` = 平地
/// - `#` = 城牆
/// - `W` / `B` = 白 / 黑棋子
/// - 其他字串（`S`、`E` 等）= 標記位置，相同的標記會全部收集成 Vec
/// - 任何符號加 `#` 後綴表示該格同時是城牆（`W#`、`E#`）
///
/// 例如：
/// ```text
/// W # # E#
/// . . . .
/// . . . B
/// ```
pub fn load_from_ascii(ascii: &str) -> Result<AsciiBoard> {
    let lines: Vec<&str> = ascii
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(LoadError::ParseError("棋盤為空".to_string()).into());
    }
    if lines.len() > BOARD_SIZE {
        return Err(LoadError::ParseError(format!(
            "棋盤高度 {} 超過 {BOARD_SIZE}",
            lines.len()
        ))
        .into());
    }

    // 推導寬度（第一行的符號數）
    let width = lines[0].split_whitespace().count();
    if width > BOARD_SIZE {
        return Err(LoadError::ParseError(format!("棋盤寬度 {width} 超過 {BOARD_SIZE}")).into());
    }

    let mut walls = Vec::new();
    let mut occupancy = OccupancyMap::default();
    let mut markers: HashMap<String, Vec<Cell>> = HashMap::new();

    for (row, line) in lines.iter().enumerate() {
        let symbols: Vec<&str> = line.split_whitespace().collect();
        if symbols.len() != width {
            return Err(LoadError::ParseError(format!(
                "第 {row} 列有 {} 個符號，預期 {width}",
                symbols.len()
            ))
            .into());
        }

        for (col, symbol) in symbols.into_iter().enumerate() {
            let cell = Cell::new(row, col);
            let (base, on_wall) = match symbol.strip_suffix('#') {
                Some(base) => (base, true),
                None => (symbol, false),
            };
            if on_wall {
                walls.push(cell);
            }

            match base {
                "" | "." => {}
                "W" => occupancy.set(cell, Some(Color::White)),
                "B" => occupancy.set(cell, Some(Color::Black)),
                marker if marker.chars().all(|c| c.is_ascii_alphanumeric()) => {
                    markers.entry(marker.to_string()).or_default().push(cell);
                }
                _ => {
                    return Err(LoadError::InvalidSymbol {
                        symbol: symbol.to_string(),
                        row,
                        col,
                    }
                    .into());
                }
            }
        }
    }

    Ok(AsciiBoard {
        walls: WallLayout::from_cells(walls),
        occupancy,
        markers,
    })
}
