use crate::engine::game::Game;
use crate::engine::types::Coord;

/// 手を選択するAI。
pub trait Ai {
    /// 現手番の着手候補から1手を選択する（候補が無ければ `None`）。
    fn select_move(&mut self, game: &Game) -> Option<Coord>;
}
