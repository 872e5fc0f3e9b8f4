//! 城堡棋規則引擎
//!
//! 19×19 棋盤、固定城牆圖樣、雙色棋子的直線移動與吃子判定。
//! 畫面、滑鼠座標轉換、音效等屬於呼叫端，不在此 crate。

pub mod alias;
pub mod component;
pub mod constants;
pub mod core_types;
pub mod engine;
pub mod error;
pub mod loader;
pub mod loader_schema;
pub mod logic;
pub mod shared;
pub mod snapshot;

pub use component::{Cell, Color, Piece};
pub use core_types::{OccupancyMap, WallLayout};
pub use engine::{BoardEngine, MoveOutcome};
pub use error::{Error, MoveError, Result};
pub use shared::SharedBoardEngine;
pub use snapshot::BoardSnapshot;
