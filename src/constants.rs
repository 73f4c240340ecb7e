/// 长度头占用的嵌入位数。
/// 负载长度以 `u32` 存储，每个嵌入位置承载 1 bit，因此需要 32 个位置。
pub const HEADER_BITS: usize = 32;

/// 负载中每个字节拆分出的位数 (最低位在前)。
pub const BITS_PER_BYTE: usize = 8;

/// 每个像素的颜色通道数 (R, G, B)。
pub const CHANNELS: u32 = 3;

/// 密码哈希的初始值。
pub const SEED_BASIS: u64 = 5381;

/// 密码哈希每处理一个字节时的乘数。
pub const SEED_MULTIPLIER: u64 = 33;

/// 噪声叠加所用高斯分布的默认标准差。
/// 编码端与解码端必须使用相同的值。
pub const DEFAULT_NOISE_SIGMA: f64 = 3.0;

/// 单次选点的重试预算系数。
/// 每次选点最多尝试 `总位置数 × 该系数` 次，超过后报告位置耗尽。
pub const DEFAULT_SITE_ATTEMPT_FACTOR: u64 = 64;
