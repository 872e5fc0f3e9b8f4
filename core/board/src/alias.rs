//! 型別別名

/// 棋盤座標分量（列或行）
pub type Coord = usize;

/// 沿移動軸的有號位移量
pub type Delta = isize;
