use crate::engine::error::EngineError;
use crate::engine::types::{BOARD_LEN, CELL_COUNT, Cell, Coord};

/// 盤の一辺の長さ（配列長）。
const LEN: usize = BOARD_LEN as usize;

/// 初期配置（プレイヤーA）。
const START_A: [(u8, u8); 2] = [(3, 3), (4, 4)];

/// 初期配置（プレイヤーB）。
const START_B: [(u8, u8); 2] = [(3, 4), (4, 3)];

/// 8×8 の盤面（行優先）。
///
/// ルールの知識は持たない。書き込みは [`BoardState::set`] の検証付き経路のみ。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BoardState {
    /// `cells[y][x]`。
    cells: [[Cell; LEN]; LEN],
}

impl Default for BoardState {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl BoardState {
    /// 石数を返す。
    #[inline]
    #[must_use]
    pub fn count(&self, value: Cell) -> u32 {
        let total = self
            .cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == value)
            .count();
        u32::try_from(total).unwrap_or(u32::MAX)
    }

    /// すべて空きマスの盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; LEN]; LEN],
        }
    }

    /// 指定マスの値を返す。
    ///
    /// # Errors
    ///
    /// 座標が盤外の場合、`EngineError::OutOfBounds` を返す。
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, EngineError> {
        let coord = Coord::from_signed(x, y).ok_or(EngineError::OutOfBounds { x, y })?;
        Ok(self.at(coord))
    }

    /// 検証済み座標の値を返す。
    #[inline]
    #[must_use]
    pub fn at(&self, coord: Coord) -> Cell {
        self.cells
            .get(usize::from(coord.y()))
            .and_then(|row| row.get(usize::from(coord.x())))
            .copied()
            .unwrap_or_default()
    }

    /// 初期局面を返す。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (x, y) in START_A {
            board.write(x, y, Cell::PlayerA);
        }
        for (x, y) in START_B {
            board.write(x, y, Cell::PlayerB);
        }
        board
    }

    /// 石が置かれているマスの数を返す。
    #[inline]
    #[must_use]
    pub fn occupied_count(&self) -> u32 {
        CELL_COUNT.saturating_sub(self.count(Cell::Empty))
    }

    /// 行ごとのマスを返す（描画用）。
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; LEN]> {
        self.cells.iter()
    }

    /// 指定マスへ石を書き込む。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `EngineError::OutOfBounds`: 座標が盤外の場合
    /// - `EngineError::InvalidValue`: `Cell::Empty` を書き込もうとした場合
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: Cell) -> Result<(), EngineError> {
        let coord = Coord::from_signed(x, y).ok_or(EngineError::OutOfBounds { x, y })?;
        if value.owner().is_none() {
            return Err(EngineError::InvalidValue);
        }

        self.write(coord.x(), coord.y(), value);
        Ok(())
    }

    /// 石の色をすべて入れ替えた盤面を返す。
    #[inline]
    #[must_use]
    pub fn swapped(&self) -> Self {
        let mut next = *self;
        next.cells
            .iter_mut()
            .flatten()
            .for_each(|cell| *cell = cell.swapped());
        next
    }

    /// 範囲チェック済みの書き込み。
    fn write(&mut self, x: u8, y: u8, value: Cell) {
        if let Some(cell) = self
            .cells
            .get_mut(usize::from(y))
            .and_then(|row| row.get_mut(usize::from(x)))
        {
            *cell = value;
        }
    }
}
