use tracing::{info, warn};

use crate::engine::board::BoardState;
use crate::engine::error::PlayError;
use crate::engine::resolver::MoveResolver;
use crate::engine::types::{Cell, Coord, Player};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局（盤面が埋まった、または双方がパス）。
    GameOver {
        /// プレイヤーAの石数。
        a: u32,
        /// プレイヤーBの石数。
        b: u32,
    },
    /// 進行中。
    InProgress,
}

/// 1ゲームの進行を管理する構造体。
///
/// 盤面と `MoveResolver` を所有し、着手後の手番交代と自動パスを行う。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: BoardState,
    /// 手番・候補・パスの状態。
    resolver: MoveResolver,
}

impl Default for Game {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl Game {
    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &BoardState {
        &self.board
    }

    /// 現手番の着手候補を返す。
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Coord] {
        self.resolver.candidates()
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.resolver.current_player()
    }

    /// 初期局面からゲームを開始する（先手の着手候補は計算済み）。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        let board = BoardState::initial();
        let mut resolver = MoveResolver::new();
        resolver.compute_candidates(&board);
        Self { board, resolver }
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.resolver.is_game_over(&self.board)
    }

    /// 直近の着手で反転した石を返す。
    #[inline]
    #[must_use]
    pub fn last_flips(&self) -> &[Coord] {
        self.resolver.pending_flips()
    }

    /// 1手を適用し、次に打てるプレイヤーまで手番を進める。
    ///
    /// 着手後は手番を交代して候補を再計算し、候補が無い間は自動でパスする。
    /// パスが連続して終局条件を満たした時点で止まる。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::NotACandidate`: 指定されたマスが着手候補でない場合
    /// - `PlayError::Engine`: 盤面操作が契約違反で失敗した場合
    #[inline]
    pub fn play(&mut self, x: i32, y: i32) -> Result<Status, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        if !self.resolver.is_candidate(x, y) {
            warn!(x, y, player = ?self.current_player(), "rejected move outside candidates");
            return Err(PlayError::NotACandidate { x, y });
        }

        self.resolver.apply_move(&mut self.board, x, y)?;

        loop {
            self.resolver.advance_turn();
            let has_moves = !self.resolver.compute_candidates(&self.board).is_empty();
            if has_moves || self.is_game_over() {
                break;
            }
            info!(player = ?self.current_player(), "no legal moves, passing");
        }

        let status = self.status();
        if let Status::GameOver { a, b } = status {
            info!(a, b, "game over");
        }
        Ok(status)
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        if self.is_game_over() {
            return Status::GameOver {
                a: self.board.count(Cell::PlayerA),
                b: self.board.count(Cell::PlayerB),
            };
        }

        Status::InProgress
    }

    /// 石数の多い側を返す（引き分け、または進行中は `None`）。
    #[inline]
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        let Status::GameOver { a, b } = self.status() else {
            return None;
        };

        match a.cmp(&b) {
            core::cmp::Ordering::Greater => Some(Player::A),
            core::cmp::Ordering::Less => Some(Player::B),
            core::cmp::Ordering::Equal => None,
        }
    }

    /// 任意の局面と手番からゲームを組み立てる（crate 内部向け）。
    #[cfg(test)]
    #[inline]
    #[must_use]
    pub(crate) fn from_board(board: BoardState, player: Player) -> Self {
        let mut resolver = MoveResolver::new();
        if player != resolver.current_player() {
            resolver.advance_turn();
        }
        resolver.compute_candidates(&board);
        Self { board, resolver }
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, Status};
    use crate::engine::board::BoardState;
    use crate::engine::error::PlayError;
    use crate::engine::types::{Cell, Player};

    #[test]
    fn initial_game_offers_candidates_to_player_a() {
        let game = Game::initial();
        assert_eq!(game.current_player(), Player::A);
        assert_eq!(game.candidates().len(), 4);
        assert_eq!(game.status(), Status::InProgress);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn play_switches_turn_and_recomputes() {
        let mut game = Game::initial();
        assert_eq!(game.play(4, 2), Ok(Status::InProgress));
        assert_eq!(game.current_player(), Player::B);
        assert_eq!(game.last_flips().len(), 1);
        assert!(!game.candidates().is_empty());
    }

    #[test]
    fn play_rejects_non_candidate() {
        let mut game = Game::initial();
        let before = game.clone();
        assert_eq!(game.play(0, 0), Err(PlayError::NotACandidate { x: 0, y: 0 }));
        assert_eq!(game.play(3, 3), Err(PlayError::NotACandidate { x: 3, y: 3 }));
        assert_eq!(game, before);
    }

    #[test]
    fn opponent_without_moves_is_skipped() {
        // 行 0: A B . B A  ->  A が (2,0) に置いても B は打てず、A に手番が戻る。
        let mut board = BoardState::empty();
        let row = [
            (0, Cell::PlayerA),
            (1, Cell::PlayerB),
            (3, Cell::PlayerB),
            (4, Cell::PlayerA),
        ];
        for (x, value) in row {
            assert!(board.set(x, 0, value).is_ok());
        }
        assert!(board.set(6, 6, Cell::PlayerB).is_ok());
        assert!(board.set(7, 7, Cell::PlayerA).is_ok());
        assert!(board.set(5, 5, Cell::PlayerB).is_ok());
        let mut game = Game::from_board(board, Player::A);
        assert!(game.candidates().iter().any(|c| c.x() == 2 && c.y() == 0));

        assert_eq!(game.play(2, 0), Ok(Status::InProgress));
        assert_eq!(game.current_player(), Player::A);
        assert_eq!(game.board().count(Cell::PlayerB), 2);
    }

    #[test]
    fn double_pass_ends_game() {
        // A が最後の B を取り切ると、どちらも打てなくなる。
        let mut board = BoardState::empty();
        assert!(board.set(0, 0, Cell::PlayerA).is_ok());
        assert!(board.set(1, 0, Cell::PlayerB).is_ok());
        let mut game = Game::from_board(board, Player::A);

        assert_eq!(game.play(2, 0), Ok(Status::GameOver { a: 3, b: 0 }));
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(Player::A));
        assert_eq!(game.play(3, 0), Err(PlayError::GameOver));
    }
}
