//! # 确定性随机数模块
//!
//! 噪声叠加与选点遍历共用同一个生成器，二者按固定顺序消耗随机数。
//! 相同种子、相同调用序列在编码端与解码端必须得到完全相同的结果。
//!
//! 有界整数一律使用 `u32` 区间，保证在 32 位与 64 位平台上消耗的熵相同。

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::StandardNormal;
use std::num::NonZeroU32;

/// 以密码种子初始化的 ChaCha20 生成器。
pub struct StegoRng {
    rng: ChaCha20Rng,
}

impl StegoRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// 返回 `[0, bound)` 内均匀分布的整数。
    pub fn next_bounded(&mut self, bound: NonZeroU32) -> u32 {
        self.rng.random_range(0..bound.get())
    }

    /// 返回均值为 0、标准差为 `sigma` 的正态分布样本。
    pub fn next_gaussian(&mut self, sigma: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        z * sigma
    }
}
