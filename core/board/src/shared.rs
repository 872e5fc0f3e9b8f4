//! 跨執行緒共用的引擎
//!
//! 整個「判定 → 修改」流程在同一把鎖內完成，
//! 兩個呼叫者不會同時通過判定後各自修改。

use crate::component::{Cell, Color};
use crate::engine::{BoardEngine, MoveOutcome};
use crate::error::MoveError;
use crate::snapshot::BoardSnapshot;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct SharedBoardEngine {
    inner: Arc<Mutex<BoardEngine>>,
}

impl SharedBoardEngine {
    pub fn new(engine: BoardEngine) -> Self {
        SharedBoardEngine {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn attempt_move(
        &self,
        color: Color,
        start: Cell,
        end: Cell,
    ) -> Result<MoveOutcome, MoveError> {
        self.lock().attempt_move(color, start, end)
    }

    pub fn active_color(&self) -> Color {
        self.lock().active_color()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.lock().snapshot()
    }

    /// 在鎖內唯讀存取引擎
    pub fn with<R>(&self, f: impl FnOnce(&BoardEngine) -> R) -> R {
        f(&self.lock())
    }

    // 引擎只在判定通過後才修改，持鎖者 panic 時狀態仍一致
    fn lock(&self) -> MutexGuard<'_, BoardEngine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
