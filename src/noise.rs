use crate::constants::CHANNELS;
use crate::error::StegoError;
use crate::prng::StegoRng;
use image::RgbImage;

/// 对图像的每个像素、每个通道叠加高斯噪声。
///
/// 按行优先顺序遍历 (行、列、通道 0..3)，每个通道恰好消耗一次高斯抽样，
/// 共 `rows × cols × 3` 次。该顺序是编码端与解码端共同依赖的约定。
/// 叠加结果向零截断后限制在 `[0, 255]` 内。
///
/// # Errors
///
/// `sigma` 不是有限正数时返回 [`StegoError::InvalidSigma`]，此时不会消耗任何随机数。
pub fn apply_noise(image: &mut RgbImage, sigma: f64, rng: &mut StegoRng) -> Result<(), StegoError> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(StegoError::InvalidSigma(sigma));
    }

    let (width, height) = image.dimensions();
    for row in 0..height {
        for col in 0..width {
            let pixel = image.get_pixel_mut(col, row);
            for channel in pixel.0.iter_mut().take(CHANNELS as usize) {
                let noisy = (f64::from(*channel) + rng.next_gaussian(sigma)) as i32;
                *channel = noisy.clamp(0, 255) as u8;
            }
        }
    }

    log::debug!("Applied noise (sigma {sigma}) to a {width}x{height} image");
    Ok(())
}
