//! 回合狀態

use crate::component::Color;
use crate::constants::FIRST_PLAYER;
use serde::{Deserialize, Serialize};

/// 目前輪到哪一方
///
/// 只在走子成功後交換；被拒絕的走子不改變回合。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    active: Color,
}

impl TurnState {
    pub fn new(first: Color) -> Self {
        TurnState { active: first }
    }

    pub fn active(&self) -> Color {
        self.active
    }

    /// 交換行動方，回傳新的行動方
    pub(crate) fn advance(&mut self) -> Color {
        self.active = self.active.opposite();
        self.active
    }
}

impl Default for TurnState {
    fn default() -> Self {
        TurnState::new(FIRST_PLAYER)
    }
}
