/// 8×8 の盤面（読み書きと石数の集計）。
pub mod board;
/// 盤面・進行処理のエラー型。
pub mod error;
/// ゲーム進行（着手後の手番交代、自動パス、終局判定）の実装。
pub mod game;
/// 合法手の計算と着手の適用、手番・パスの管理。
pub mod resolver;
pub mod types;

pub type BoardState = board::BoardState;
pub type Cell = types::Cell;
pub type Coord = types::Coord;
pub type EngineError = error::EngineError;
pub type Game = game::Game;
pub type GameStatus = game::Status;
pub type MoveResolver = resolver::MoveResolver;
pub type PlayError = error::PlayError;
pub type Player = types::Player;
