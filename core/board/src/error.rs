//! 錯誤處理系統
//!
//! 自製而非 anyhow 的原因：
//! - 庫開發需要強類型（anyhow 型別擦除）
//! - 呈現層需要依錯誤種類決定提示

use crate::alias::Coord;
use crate::component::{Cell, Color};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// 棋盤錯誤
#[derive(Debug, ThisError)]
pub enum BoardError {
    #[error("位置超出棋盤邊界: ({row}, {col}) 邊界 {size}x{size}")]
    OutOfBounds { row: Coord, col: Coord, size: Coord },
    #[error("位置 {cell} 已有棋子，無法重複放置: {occupant}")]
    CellOccupied { cell: Cell, occupant: Color },
}

/// 格式載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("解析失敗: {0}")]
    ParseError(String),
    #[error("無法辨識的符號 `{symbol}` 於 ({row}, {col})")]
    InvalidSymbol {
        symbol: String,
        row: Coord,
        col: Coord,
    },
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
}

/// 走子被拒絕的原因
///
/// 不合法的走子是常態操作結果，以值回傳，不視為例外。
/// `Rejected` 不細分規則原因，呼叫端只需要知道這步不成立。
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum MoveError {
    #[error("尚未輪到 {requested}，目前由 {active} 行動")]
    NotYourTurn { requested: Color, active: Color },
    #[error("{cell} 沒有 {color} 的棋子")]
    NoPieceAtStart { cell: Cell, color: Color },
    #[error("不合法的移動: {from} -> {to}")]
    Rejected { from: Cell, to: Cell },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    #[track_caller]
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(e.context(context)),
        }
    }
}
