//! Reversi (Othello) core logic.
//!
//! このクレートはルールエンジンである `engine`、描画に依存しない画面遷移の `scene`、
//! 明示的に受け渡す設定値 `config` を提供します。
//! 描画・入力取得はホスト側のランタイムが担い、このクレートの出力を読むだけです。

#![forbid(unsafe_code)]

/// ゲームルール・盤面・進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;

/// ウィンドウ・盤面サイズなどの設定値。
pub mod config;

/// `tracing` の購読者を初期化するモジュール。
pub mod logging;

/// 開始・対局・結果の各画面と、その遷移を扱うモジュール。
pub mod scene;
