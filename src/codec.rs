//! # 编解码入口模块
//!
//! 串联密码种子、噪声叠加、长度头与负载的完整流程。
//! 编码与解码按完全相同的顺序消耗随机数：先为整幅图像加噪，再依次为长度头和负载选点。

use crate::config::StegoConfig;
use crate::constants::{BITS_PER_BYTE, CHANNELS, HEADER_BITS};
use crate::error::StegoError;
use crate::noise::apply_noise;
use crate::prng::StegoRng;
use crate::seed::derive_seed;
use crate::sites::SiteSelector;
use crate::steganography::{read_length, read_payload, write_length, write_payload};
use image::RgbImage;

/// 图像可用的嵌入位置总数 (`width × height × 3`)。
pub fn site_count(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height) * u64::from(CHANNELS)
}

/// 图像最多可隐藏的负载字节数，图像过小时为 0。
pub fn capacity(width: u32, height: u32) -> u64 {
    let payload_sites = site_count(width, height).saturating_sub(HEADER_BITS as u64);
    (payload_sites / BITS_PER_BYTE as u64).min(u64::from(u32::MAX))
}

fn ensure_header_fits(sites: u64) -> Result<(), StegoError> {
    if sites < HEADER_BITS as u64 {
        return Err(StegoError::BufferTooSmall {
            sites,
            required: HEADER_BITS as u64,
        });
    }
    Ok(())
}

/// 检查负载能否放入图像，按位精确计算：`32 + 8 × len ≤ width × height × 3`。
fn ensure_payload_fits(width: u32, height: u32, payload_len: usize) -> Result<u32, StegoError> {
    let available = site_count(width, height);
    ensure_header_fits(available)?;

    let needed = (payload_len as u64)
        .saturating_mul(BITS_PER_BYTE as u64)
        .saturating_add(HEADER_BITS as u64);
    match u32::try_from(payload_len) {
        Ok(length) if needed <= available => Ok(length),
        _ => Err(StegoError::CapacityExceeded { needed, available }),
    }
}

/// 使用默认配置将 `payload` 隐藏到 `carrier` 中。
pub fn encode(carrier: &RgbImage, payload: &[u8], password: &str) -> Result<RgbImage, StegoError> {
    encode_with_config(carrier, payload, password, &StegoConfig::default())
}

/// 将 `payload` 隐藏到 `carrier` 的加噪副本中，返回编码后的图像。
///
/// 所有修改都发生在副本上，出错时 `carrier` 与调用方均不受影响。
///
/// # Errors
///
/// * [`StegoError::InvalidSigma`] - 配置不可用。
/// * [`StegoError::BufferTooSmall`] - 图像连长度头都放不下。
/// * [`StegoError::CapacityExceeded`] - 负载超出图像容量。
/// * [`StegoError::SiteExhaustion`] - 选点重试超出预算。
pub fn encode_with_config(
    carrier: &RgbImage,
    payload: &[u8],
    password: &str,
    config: &StegoConfig,
) -> Result<RgbImage, StegoError> {
    config.validate()?;
    let (width, height) = carrier.dimensions();
    let length = ensure_payload_fits(width, height, payload.len())?;

    let seed = derive_seed(password.as_bytes());
    log::debug!("Encoding {length} bytes into a {width}x{height} image (seed {seed:#018x})");

    let mut rng = StegoRng::new(seed);
    let mut encoded = carrier.clone();
    apply_noise(&mut encoded, config.sigma, &mut rng)?;

    let mut sites = SiteSelector::new(&mut rng, width, height, config.site_attempt_factor)?;
    write_length(length, &mut encoded, &mut sites)?;
    write_payload(payload, &mut encoded, &mut sites)?;

    Ok(encoded)
}

/// 使用默认配置从 `encoded` 中恢复负载。
pub fn decode(encoded: &RgbImage, base: &RgbImage, password: &str) -> Result<Vec<u8>, StegoError> {
    decode_with_config(encoded, base, password, &StegoConfig::default())
}

/// 对照原始底图 `base` 恢复 `encoded` 中隐藏的负载。
///
/// 底图先以相同的种子加噪，再按编码时的选点顺序逐位比较。
///
/// # Errors
///
/// * [`StegoError::DimensionMismatch`] - 两幅图像尺寸不同。
/// * [`StegoError::BufferTooSmall`] - 图像连长度头都放不下。
/// * [`StegoError::CorruptHeader`] - 读出的长度超出容量，通常是密码错误。
/// * [`StegoError::InvalidSigma`] / [`StegoError::SiteExhaustion`] - 同编码。
pub fn decode_with_config(
    encoded: &RgbImage,
    base: &RgbImage,
    password: &str,
    config: &StegoConfig,
) -> Result<Vec<u8>, StegoError> {
    config.validate()?;
    if encoded.dimensions() != base.dimensions() {
        return Err(StegoError::DimensionMismatch {
            encoded: encoded.dimensions(),
            base: base.dimensions(),
        });
    }
    let (width, height) = encoded.dimensions();
    ensure_header_fits(site_count(width, height))?;

    let seed = derive_seed(password.as_bytes());
    log::debug!("Decoding a {width}x{height} image (seed {seed:#018x})");

    let mut rng = StegoRng::new(seed);
    let mut noised_base = base.clone();
    apply_noise(&mut noised_base, config.sigma, &mut rng)?;

    let mut sites = SiteSelector::new(&mut rng, width, height, config.site_attempt_factor)?;
    let length = read_length(encoded, &noised_base, &mut sites)?;
    let max_length = capacity(width, height);
    if u64::from(length) > max_length {
        return Err(StegoError::CorruptHeader {
            length,
            capacity: max_length,
        });
    }
    log::debug!("Hidden payload length: {length} bytes");

    read_payload(encoded, &noised_base, length as usize, &mut sites)
}
