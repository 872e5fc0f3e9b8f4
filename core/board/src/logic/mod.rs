//! 核心規則邏輯

pub mod board;
pub mod debug;
pub mod movement;
pub mod turn;
pub mod walls;
