/// 着手候補からランダムに1手選ぶAI。
pub mod random;
pub mod types;

pub use types::Ai;
