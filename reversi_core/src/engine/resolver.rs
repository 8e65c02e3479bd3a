use tracing::debug;

use crate::engine::board::BoardState;
use crate::engine::error::EngineError;
use crate::engine::types::{BOARD_LEN, CELL_COUNT, Cell, Coord, Player};

/// 隣接8方向（走査順は固定）。
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// 終局とみなす連続パス回数。
const PASS_LIMIT: u8 = 2;

/// 合法手の計算、着手の適用、手番・パスの管理を行う。
///
/// 盤面は所有せず、常に呼び出し側から渡される。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveResolver {
    /// 直近に計算した着手候補（行優先順）。
    candidates: Vec<Coord>,
    /// 手番。
    current_player: Player,
    /// 連続パス回数。
    pass_count: u8,
    /// 直近の着手で反転した石。
    pending_flips: Vec<Coord>,
}

impl Default for MoveResolver {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl MoveResolver {
    /// 現手番に対して着手を適用し、挟んだ石を反転する。
    ///
    /// 候補リストとの照合は行わない（呼び出し側が [`Self::is_candidate`] で事前に絞り込む）。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `EngineError::OutOfBounds`: 座標が盤外の場合
    /// - `EngineError::InvalidPlacement`: 指定マスに石がある場合
    #[inline]
    pub fn apply_move(
        &mut self,
        board: &mut BoardState,
        x: i32,
        y: i32,
    ) -> Result<&[Coord], EngineError> {
        let target = Coord::from_signed(x, y).ok_or(EngineError::OutOfBounds { x, y })?;
        if board.at(target) != Cell::Empty {
            return Err(EngineError::InvalidPlacement {
                x: target.x(),
                y: target.y(),
            });
        }

        let stone = self.current_player.cell();
        board.set(x, y, stone)?;

        self.pending_flips = self.compute_flips(board, x, y)?;
        for flip in &self.pending_flips {
            board.set(i32::from(flip.x()), i32::from(flip.y()), stone)?;
        }

        debug!(
            player = ?self.current_player,
            x,
            y,
            flips = self.pending_flips.len(),
            "move applied"
        );
        Ok(self.pending_flips.as_slice())
    }

    /// 手番を交代する。
    #[inline]
    pub const fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// 直近に計算した着手候補を返す。
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Coord] {
        &self.candidates
    }

    /// 現手番の着手候補を計算する。
    ///
    /// 候補が無ければパス回数を加算し、あれば 0 に戻す。
    #[inline]
    pub fn compute_candidates(&mut self, board: &BoardState) -> &[Coord] {
        self.candidates.clear();

        for cell in Coord::row_major() {
            if board.at(cell) != Cell::Empty {
                continue;
            }

            let legal = DIRECTIONS
                .iter()
                .any(|&(dx, dy)| self.run_end(board, cell, dx, dy).is_some());
            if legal {
                self.candidates.push(cell);
            }
        }

        if self.candidates.is_empty() {
            self.pass_count = self.pass_count.saturating_add(1);
        } else {
            self.pass_count = u8::MIN;
        }

        debug!(
            player = ?self.current_player,
            candidates = ?self.candidates,
            pass_count = self.pass_count,
            "candidates computed"
        );
        &self.candidates
    }

    /// `(x, y)` に現手番が置いた場合に反転する石を返す（盤面は変更しない）。
    ///
    /// # Errors
    ///
    /// 座標が盤外の場合、`EngineError::OutOfBounds` を返す。
    #[inline]
    pub fn compute_flips(
        &self,
        board: &BoardState,
        x: i32,
        y: i32,
    ) -> Result<Vec<Coord>, EngineError> {
        let origin = Coord::from_signed(x, y).ok_or(EngineError::OutOfBounds { x, y })?;
        let mut flips = Vec::new();

        for &(dx, dy) in &DIRECTIONS {
            let Some(end) = self.run_end(board, origin, dx, dy) else {
                continue;
            };
            flips.extend((1..end).filter_map(|step| origin.offset(dx, dy, step)));
        }

        Ok(flips)
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    /// 指定マスが直近の着手候補に含まれるかを返す。
    #[inline]
    #[must_use]
    pub fn is_candidate(&self, x: i32, y: i32) -> bool {
        Coord::from_signed(x, y).is_some_and(|coord| self.candidates.contains(&coord))
    }

    /// 終局しているかどうかを返す（盤面が埋まった、または双方が連続でパス）。
    #[inline]
    #[must_use]
    pub fn is_game_over(&self, board: &BoardState) -> bool {
        board.occupied_count() == CELL_COUNT || self.pass_count >= PASS_LIMIT
    }

    /// 初期状態（プレイヤーAの手番、候補なし、パス 0）を返す。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            candidates: Vec::new(),
            current_player: Player::A,
            pass_count: u8::MIN,
            pending_flips: Vec::new(),
        }
    }

    /// 連続パス回数を返す。
    #[inline]
    #[must_use]
    pub const fn pass_count(&self) -> u8 {
        self.pass_count
    }

    /// 直近の着手で反転した石を返す。
    #[inline]
    #[must_use]
    pub fn pending_flips(&self) -> &[Coord] {
        &self.pending_flips
    }

    /// 新しいゲームのために初期状態へ戻す。
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// `origin` から `(dx, dy)` 方向に相手の石が連続し、その先に自分の石がある場合、
    /// 自分の石までの距離を返す。
    ///
    /// 隣が相手の石でない場合、空きマスや盤端で途切れた場合は `None`。
    fn run_end(&self, board: &BoardState, origin: Coord, dx: i8, dy: i8) -> Option<u8> {
        let mine = self.current_player.cell();
        let theirs = self.current_player.opponent().cell();

        let adjacent = origin.offset(dx, dy, 1)?;
        if board.at(adjacent) != theirs {
            return None;
        }

        for step in 2..BOARD_LEN {
            let cell = board.at(origin.offset(dx, dy, step)?);
            if cell == mine {
                return Some(step);
            }
            if cell == Cell::Empty {
                return None;
            }
        }

        None
    }
}
