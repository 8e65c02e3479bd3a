use tracing::{debug, info};

use crate::config::Config;
use crate::engine::board::BoardState;
use crate::engine::game::{Game, Status};
use crate::engine::types::{Cell, Coord};

/// 画面の種類。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum SceneId {
    /// 対局画面。
    Play,
    /// 結果画面。
    Score,
    /// 開始画面。
    Start,
}

/// 遷移先の画面へ渡す初期化引数。
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum InitArgs {
    /// 終局時の盤面（結果画面向け）。
    FinalBoard(BoardState),
    /// 引数なしで初期化する。
    Fresh,
}

/// `Scene::update` の結果。
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum SceneTransition {
    /// 指定の画面へ遷移する。
    GoTo(SceneId, InitArgs),
    /// 現在の画面に留まる。
    Stay,
}

/// ホスト側ランタイムから渡される入力イベント。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Input {
    /// 開始キー。
    Confirm,
    /// 指定マスへの着手（マス座標）。
    Place {
        /// 列。
        x: i32,
        /// 行。
        y: i32,
    },
    /// ポインタ位置（ピクセル座標）。`released` はボタンを離したフレームで `true`。
    Pointer {
        /// x ピクセル。
        px: i32,
        /// y ピクセル。
        py: i32,
        /// ボタンを離したかどうか。
        released: bool,
    },
    /// 再戦キー。
    Restart,
}

/// 1つの画面。描画はホスト側が各画面の状態を読んで行う。
pub trait Scene {
    /// 遷移してきたときに呼ばれる。
    fn init(&mut self, args: InitArgs);

    /// 1フレーム分の入力を処理し、遷移の有無を返す。
    fn update(&mut self, input: Option<Input>) -> SceneTransition;
}

/// 開始画面。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub struct StartScene;

impl Scene for StartScene {
    #[inline]
    fn init(&mut self, _args: InitArgs) {}

    #[inline]
    fn update(&mut self, input: Option<Input>) -> SceneTransition {
        match input {
            Some(Input::Confirm) => SceneTransition::GoTo(SceneId::Play, InitArgs::Fresh),
            _ => SceneTransition::Stay,
        }
    }
}

/// 対局画面。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlayScene {
    /// ポインタ座標の変換に使う設定。
    config: Config,
    /// 進行中のゲーム。
    game: Game,
    /// ポインタが乗っているマス。
    hover: Option<Coord>,
}

impl PlayScene {
    /// 進行中のゲームを返す。
    #[inline]
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// ポインタが乗っているマスを返す。
    #[inline]
    #[must_use]
    pub const fn hover(&self) -> Option<Coord> {
        self.hover
    }

    /// 新しいゲームで対局画面を生成する。
    #[inline]
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            game: Game::initial(),
            hover: None,
        }
    }

    /// 着手を試みる。候補外の入力は無視する。
    fn try_place(&mut self, x: i32, y: i32) -> SceneTransition {
        match self.game.play(x, y) {
            Ok(Status::GameOver { .. }) => self.finish(),
            Ok(_) => SceneTransition::Stay,
            Err(err) => {
                debug!(x, y, %err, "placement ignored");
                SceneTransition::Stay
            }
        }
    }

    /// 結果画面への遷移を返す。
    fn finish(&self) -> SceneTransition {
        SceneTransition::GoTo(SceneId::Score, InitArgs::FinalBoard(*self.game.board()))
    }
}

impl Scene for PlayScene {
    #[inline]
    fn init(&mut self, _args: InitArgs) {
        self.game = Game::initial();
        self.hover = None;
    }

    #[inline]
    fn update(&mut self, input: Option<Input>) -> SceneTransition {
        if self.game.is_game_over() {
            return self.finish();
        }

        match input {
            Some(Input::Place { x, y }) => self.try_place(x, y),
            Some(Input::Pointer { px, py, released }) => {
                let hover = self.config.cell_at(px, py);
                self.hover = hover;
                match hover {
                    Some(cell) if released => {
                        self.try_place(i32::from(cell.x()), i32::from(cell.y()))
                    }
                    _ => SceneTransition::Stay,
                }
            }
            _ => SceneTransition::Stay,
        }
    }
}

/// 結果画面。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ScoreScene {
    /// 終局時の盤面。
    board: BoardState,
}

impl Default for ScoreScene {
    #[inline]
    fn default() -> Self {
        Self {
            board: BoardState::initial(),
        }
    }
}

impl ScoreScene {
    /// 終局時の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &BoardState {
        &self.board
    }

    /// 石数（プレイヤーA、プレイヤーB）を返す。
    #[inline]
    #[must_use]
    pub fn counts(&self) -> (u32, u32) {
        (
            self.board.count(Cell::PlayerA),
            self.board.count(Cell::PlayerB),
        )
    }
}

impl Scene for ScoreScene {
    #[inline]
    fn init(&mut self, args: InitArgs) {
        self.board = match args {
            InitArgs::FinalBoard(board) => board,
            InitArgs::Fresh => BoardState::initial(),
        };
    }

    #[inline]
    fn update(&mut self, input: Option<Input>) -> SceneTransition {
        match input {
            Some(Input::Restart) => SceneTransition::GoTo(SceneId::Play, InitArgs::Fresh),
            _ => SceneTransition::Stay,
        }
    }
}

/// 現在の画面へ入力を振り分け、遷移を適用する。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SceneManager {
    /// 現在の画面。
    current: SceneId,
    /// 対局画面。
    play: PlayScene,
    /// 結果画面。
    score: ScoreScene,
    /// 開始画面。
    start: StartScene,
}

impl SceneManager {
    /// 現在の画面を返す。
    #[inline]
    #[must_use]
    pub const fn current(&self) -> SceneId {
        self.current
    }

    /// 開始画面から始める。
    #[inline]
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            current: SceneId::Start,
            play: PlayScene::new(config.clone()),
            score: ScoreScene::default(),
            start: StartScene,
        }
    }

    /// 対局画面を返す。
    #[inline]
    #[must_use]
    pub const fn play(&self) -> &PlayScene {
        &self.play
    }

    /// 結果画面を返す。
    #[inline]
    #[must_use]
    pub const fn score(&self) -> &ScoreScene {
        &self.score
    }

    /// 1フレーム分の入力を処理し、処理後の画面を返す。
    #[inline]
    pub fn update(&mut self, input: Option<Input>) -> SceneId {
        let transition = self.scene_mut(self.current).update(input);
        if let SceneTransition::GoTo(next, args) = transition {
            info!(from = ?self.current, to = ?next, "scene transition");
            self.current = next;
            self.scene_mut(next).init(args);
        }
        self.current
    }

    /// 指定画面への可変参照を返す。
    fn scene_mut(&mut self, id: SceneId) -> &mut dyn Scene {
        match id {
            SceneId::Play => &mut self.play,
            SceneId::Score => &mut self.score,
            SceneId::Start => &mut self.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InitArgs, Input, PlayScene, Scene as _, SceneId, SceneManager, SceneTransition};
    use crate::config::Config;
    use crate::engine::types::{Coord, Player};

    #[test]
    fn start_waits_for_confirm() {
        let mut manager = SceneManager::new(&Config::default());
        assert_eq!(manager.update(None), SceneId::Start);
        assert_eq!(manager.update(Some(Input::Restart)), SceneId::Start);
        assert_eq!(manager.update(Some(Input::Confirm)), SceneId::Play);
    }

    #[test]
    fn pointer_release_places_on_candidate() {
        let config = Config::default();
        let mut scene = PlayScene::new(config);

        // (4, 2) のマス中央 = (72, 40) px。ボタンを離す前は置かない。
        let hover = scene.update(Some(Input::Pointer { px: 72, py: 40, released: false }));
        assert_eq!(hover, SceneTransition::Stay);
        assert_eq!(scene.hover(), Coord::new(4, 2));
        assert_eq!(scene.game().current_player(), Player::A);

        let placed = scene.update(Some(Input::Pointer { px: 72, py: 40, released: true }));
        assert_eq!(placed, SceneTransition::Stay);
        assert_eq!(scene.game().current_player(), Player::B);
    }

    #[test]
    fn non_candidate_input_is_ignored() {
        let mut scene = PlayScene::new(Config::default());
        let before = scene.clone();
        assert_eq!(scene.update(Some(Input::Place { x: 0, y: 0 })), SceneTransition::Stay);
        assert_eq!(scene, before);
    }

    #[test]
    fn restart_resets_play_scene() {
        let mut scene = PlayScene::new(Config::default());
        assert_eq!(scene.update(Some(Input::Place { x: 4, y: 2 })), SceneTransition::Stay);
        scene.init(InitArgs::Fresh);
        assert_eq!(scene.game().current_player(), Player::A);
        assert_eq!(scene.game().board().occupied_count(), 4);
    }
}
