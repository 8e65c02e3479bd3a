use derive_more::{Display, Error};

/// 盤面・着手処理の契約違反。
///
/// いずれも呼び出し側の誤用であり、通常の対局中には発生しない。
#[derive(Copy, Clone, Debug, Display, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    /// 座標が 8×8 の盤外を指している。
    #[display("coordinate ({x}, {y}) is outside the 8x8 board")]
    OutOfBounds {
        /// 指定された列。
        x: i32,
        /// 指定された行。
        y: i32,
    },
    /// 書き込めない値（空きマス）を書き込もうとした。
    #[display("only player stones can be written to the board")]
    InvalidValue,
    /// 石のあるマスへ着手しようとした。
    #[display("cell ({x}, {y}) is already occupied")]
    InvalidPlacement {
        /// 指定された列。
        x: u8,
        /// 指定された行。
        y: u8,
    },
}

/// 対局進行（`Game::play`）に失敗した理由。
#[derive(Copy, Clone, Debug, Display, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    #[display("the game is already over")]
    GameOver,
    /// 指定マスが現在の着手候補に含まれていない。
    #[display("({x}, {y}) is not a legal move for the current player")]
    NotACandidate {
        /// 指定された列。
        x: i32,
        /// 指定された行。
        y: i32,
    },
    /// 盤面操作そのものが失敗した。
    #[display("engine error: {_0}")]
    Engine(EngineError),
}

impl From<EngineError> for PlayError {
    #[inline]
    fn from(err: EngineError) -> Self {
        Self::Engine(err)
    }
}
