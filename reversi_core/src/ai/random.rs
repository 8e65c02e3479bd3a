use crate::ai::types::Ai;
use crate::engine::game::Game;
use crate::engine::types::Coord;

/// 64-bit 線形合同法 (LCG) の簡易 RNG。
/// `seed` で決定的に再現可能。
#[derive(Debug, Clone, Copy)]
struct Lcg64 {
    /// 内部状態。
    state: u64,
}

impl Lcg64 {
    /// LCG の内部状態を `seed` から初期化する。
    #[inline]
    const fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    /// 次の u32 を生成する（上位 32bit を返す）。
    #[inline]
    fn next_u32(&mut self) -> u32 {
        const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
        const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);

        u32::try_from(self.state >> 32).unwrap_or(u32::MAX)
    }
}

/// 着手候補からランダムに1手を選択するAI。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 乱数生成器。
    rng: Lcg64,
}

impl Agent {
    /// `seed` を用いて初期化する。
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Lcg64::new(seed),
        }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, game: &Game) -> Option<Coord> {
        let candidates = game.candidates();
        let index = scale(self.rng.next_u32(), candidates.len())?;
        candidates.get(index).copied()
    }
}

/// `random` を `0..len` の範囲へ写像する（`len == 0` なら `None`）。
fn scale(random: u32, len: usize) -> Option<usize> {
    if len == usize::MIN {
        return None;
    }

    let len_u64 = u64::try_from(len).ok()?;
    let product = u64::from(random).wrapping_mul(len_u64);
    usize::try_from(product.wrapping_shr(32)).ok()
}

#[cfg(test)]
mod tests {
    use super::{Agent, scale};
    use crate::ai::types::Ai as _;
    use crate::engine::game::Game;

    #[test]
    fn scale_stays_in_range() {
        assert_eq!(scale(u32::MAX, 4), Some(3));
        assert_eq!(scale(u32::MIN, 4), Some(0));
        assert_eq!(scale(12_345, 0), None);
    }

    #[test]
    fn selects_a_candidate_deterministically() {
        let game = Game::initial();
        let first = Agent::new(7).select_move(&game);
        let second = Agent::new(7).select_move(&game);
        assert_eq!(first, second);
        assert!(first.is_some_and(|mv| game.candidates().contains(&mv)));
    }
}
