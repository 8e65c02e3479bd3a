/// 盤の一辺の長さ。
pub const BOARD_LEN: u8 = 8;

/// 盤面の総マス数。
pub const CELL_COUNT: u32 = 64;

/// 手番（石を置くプレイヤー）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Player {
    /// 先手（白）。
    A,
    /// 後手（黒）。
    B,
}

impl Player {
    /// このプレイヤーの石を表すマスの値を返す。
    #[inline]
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Self::A => Cell::PlayerA,
            Self::B => Cell::PlayerB,
        }
    }

    /// 相手側のプレイヤーを返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// マスの状態。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Cell {
    /// 石が置かれていない。
    #[default]
    Empty,
    /// プレイヤーAの石。
    PlayerA,
    /// プレイヤーBの石。
    PlayerB,
}

impl Cell {
    /// 石の持ち主を返す（空きマスなら `None`）。
    #[inline]
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::PlayerA => Some(Player::A),
            Self::PlayerB => Some(Player::B),
        }
    }

    /// 石の色を反転した値を返す（空きマスはそのまま）。
    #[inline]
    #[must_use]
    pub const fn swapped(self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::PlayerA => Self::PlayerB,
            Self::PlayerB => Self::PlayerA,
        }
    }
}

/// 盤面上の座標（x, y はともに 0..=7）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Coord {
    /// 列。
    x: u8,
    /// 行。
    y: u8,
}

impl Coord {
    /// 盤面座標（x, y）から `Coord` を生成する。
    #[inline]
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x >= BOARD_LEN || y >= BOARD_LEN {
            return None;
        }

        Some(Self { x, y })
    }

    /// 符号付き座標から `Coord` を生成する（盤外なら `None`）。
    #[inline]
    #[must_use]
    pub fn from_signed(x: i32, y: i32) -> Option<Self> {
        let ux = u8::try_from(x).ok()?;
        let uy = u8::try_from(y).ok()?;
        Self::new(ux, uy)
    }

    /// `(dx, dy)` 方向へ `step` マス進んだ座標を返す（盤外なら `None`）。
    #[inline]
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8, step: u8) -> Option<Self> {
        let sx = i32::from(dx).checked_mul(i32::from(step))?;
        let sy = i32::from(dy).checked_mul(i32::from(step))?;
        let nx = i32::from(self.x).checked_add(sx)?;
        let ny = i32::from(self.y).checked_add(sy)?;
        Self::from_signed(nx, ny)
    }

    /// 列（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// 行（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// 行優先（y が外側、x が内側）で全マスを列挙する。
    #[inline]
    pub fn row_major() -> impl Iterator<Item = Self> {
        (u8::MIN..BOARD_LEN).flat_map(|y| (u8::MIN..BOARD_LEN).map(move |x| Self { x, y }))
    }
}
