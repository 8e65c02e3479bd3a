use tracing::Level;

use crate::engine::types::{BOARD_LEN, Coord};

/// 1マスのピクセルサイズ（既定値）。
const DEFAULT_TILE_SIZE: u32 = 16;

/// 表示領域の一辺（既定値、ピクセル）。
const DEFAULT_DISPLAY_LEN: u32 = 128;

/// 候補マスの点滅周期（既定値、フレーム数）。
const DEFAULT_FLASH_PERIOD: u32 = 60;

/// 既定のフレームレート。
const DEFAULT_FPS: u32 = 60;

/// アプリケーション全体の設定値。
///
/// グローバルには保持せず、必要とするコンポーネントへ明示的に渡す。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// ウィンドウ枠の太さ（ピクセル）。
    pub border_width: u32,
    /// ウィンドウタイトル。
    pub caption: String,
    /// 候補マスの点滅周期（フレーム数）。
    pub flash_period: u32,
    /// フレームレート。
    pub fps: u32,
    /// 表示領域の高さ（ピクセル）。
    pub height: u32,
    /// ログ出力の最大レベル。
    pub log_level: Level,
    /// 1マスのピクセルサイズ。
    pub tile_size: u32,
    /// 表示領域の幅（ピクセル）。
    pub width: u32,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            border_width: u32::MIN,
            caption: String::from("Reversi"),
            flash_period: DEFAULT_FLASH_PERIOD,
            fps: DEFAULT_FPS,
            height: DEFAULT_DISPLAY_LEN,
            log_level: Level::INFO,
            tile_size: DEFAULT_TILE_SIZE,
            width: DEFAULT_DISPLAY_LEN,
        }
    }
}

impl Config {
    /// 盤の一辺のピクセル長を返す。
    #[inline]
    #[must_use]
    pub fn board_px(&self) -> u32 {
        self.tile_size.saturating_mul(u32::from(self.grid_len()))
    }

    /// ピクセル座標を盤面のマスへ変換する（盤外なら `None`）。
    #[inline]
    #[must_use]
    pub fn cell_at(&self, px: i32, py: i32) -> Option<Coord> {
        let tile = i32::try_from(self.tile_size).ok()?;
        let x = px.checked_div_euclid(tile)?;
        let y = py.checked_div_euclid(tile)?;
        Coord::from_signed(x, y)
    }

    /// 盤の一辺のマス数を返す。
    #[inline]
    #[must_use]
    pub const fn grid_len(&self) -> u8 {
        BOARD_LEN
    }
}
