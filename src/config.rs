//! # 编解码配置模块
//!
//! 编码端与解码端必须使用完全相同的配置，否则随机数消耗序列会发生偏移。

use crate::constants::{DEFAULT_NOISE_SIGMA, DEFAULT_SITE_ATTEMPT_FACTOR};
use crate::error::StegoError;

/// 控制噪声强度与选点重试预算的参数。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StegoConfig {
    /// 噪声叠加所用高斯分布的标准差。
    pub sigma: f64,
    /// 单次选点最多尝试 `总位置数 × site_attempt_factor` 次。
    pub site_attempt_factor: u64,
}

impl Default for StegoConfig {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_NOISE_SIGMA,
            site_attempt_factor: DEFAULT_SITE_ATTEMPT_FACTOR,
        }
    }
}

impl StegoConfig {
    /// 使用给定的标准差，其余参数取默认值。
    pub fn with_sigma(sigma: f64) -> Self {
        Self {
            sigma,
            ..Self::default()
        }
    }

    /// 检查配置是否可用。
    ///
    /// # Errors
    ///
    /// 当 `sigma` 不是有限正数时返回 [`StegoError::InvalidSigma`]。
    pub fn validate(&self) -> Result<(), StegoError> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(StegoError::InvalidSigma(self.sigma));
        }
        Ok(())
    }
}
