//! # 错误类型模块
//!
//! 定义隐写编解码核心可能返回的全部错误。
//! 文件与图像 I/O 错误不在此处，由命令处理层通过 `anyhow` 原样向上传递。

use thiserror::Error;

/// 编码或解码过程中可能出现的错误。
///
/// 所有错误都会终止当前运行；编码在私有副本上进行，失败时调用方不会看到写了一半的图像。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StegoError {
    #[error("Images must have the same size: encoded is {encoded:?}, base is {base:?}")]
    DimensionMismatch {
        encoded: (u32, u32),
        base: (u32, u32),
    },

    #[error("Image is too small: it has {sites} embedding sites, at least {required} are required")]
    BufferTooSmall { sites: u64, required: u64 },

    #[error("Payload is too big for this image: {needed} sites needed, {available} available")]
    CapacityExceeded { needed: u64, available: u64 },

    #[error(
        "Hidden length {length} exceeds the image capacity of {capacity} bytes (wrong password or no hidden payload?)"
    )]
    CorruptHeader { length: u32, capacity: u64 },

    #[error("No unvisited embedding site found after {attempts} attempts")]
    SiteExhaustion { attempts: u64 },

    #[error("Noise sigma must be positive and finite, got {0}")]
    InvalidSigma(f64),
}
