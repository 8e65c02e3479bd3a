use derive_more::{Display, Error};

use crate::config::Config;

/// ログ初期化に失敗した理由。
#[derive(Copy, Clone, Debug, Display, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum LoggingError {
    /// すでにグローバルな購読者が登録されている。
    #[display("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// JSON 形式の `tracing` 購読者をグローバルに登録する。
///
/// 出力レベルは `config.log_level` に従う。
///
/// # Errors
///
/// すでに購読者が登録されている場合、`LoggingError::AlreadyInitialized` を返す。
#[inline]
pub fn init(config: &Config) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .json()
        .with_max_level(config.log_level)
        .try_init()
        .map_err(|_err| LoggingError::AlreadyInitialized)
}
