//! # noise_hide 库
//!
//! 本库包含口令加噪隐写工具的核心逻辑：密码种子、确定性随机数、噪声叠加、
//! 无重复选点以及长度头与负载的逐位编解码。

// 声明库包含的所有模块。

pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod handler;
pub mod noise;
pub mod prng;
pub mod seed;
pub mod sites;
pub mod steganography;

pub use codec::{capacity, decode, decode_with_config, encode, encode_with_config};
pub use config::StegoConfig;
pub use error::StegoError;
