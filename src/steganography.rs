use crate::constants::{BITS_PER_BYTE, HEADER_BITS};
use crate::error::StegoError;
use crate::sites::{Site, SiteSelector};
use image::RgbImage;

/// 取 `value` 的第 `n` 位。
pub fn bit_at(value: u64, n: usize) -> bool {
    (value >> n) & 1 == 1
}

/// 将 `value` 的第 `n` 位置 1。
pub fn set_bit(value: u64, n: usize) -> u64 {
    value | (1 << n)
}

/// 对一个通道值写入 bit 1：加 1，若已是 255 则改为 254。
pub fn nudge(value: u8) -> u8 {
    if value == u8::MAX { value - 1 } else { value + 1 }
}

fn channel_mut(image: &mut RgbImage, site: Site) -> &mut u8 {
    &mut image.get_pixel_mut(site.col, site.row).0[site.channel as usize]
}

fn channel(image: &RgbImage, site: Site) -> u8 {
    image.get_pixel(site.col, site.row).0[site.channel as usize]
}

/// 将 `value` 的低 `bits` 位 (最低位在前) 依次写入选点器给出的位置。
pub fn embed_bits(
    value: u64,
    bits: usize,
    image: &mut RgbImage,
    sites: &mut SiteSelector<'_>,
) -> Result<(), StegoError> {
    for n in 0..bits {
        let site = sites.next_unvisited_site()?;
        if bit_at(value, n) {
            let target = channel_mut(image, site);
            *target = nudge(*target);
        }
    }
    Ok(())
}

/// 比较编码图像与加噪底图，依次读出 `bits` 位 (最低位在前)。
/// 通道值不同即为 1，相同即为 0。
pub fn extract_bits(
    encoded: &RgbImage,
    base: &RgbImage,
    bits: usize,
    sites: &mut SiteSelector<'_>,
) -> Result<u64, StegoError> {
    let mut result = 0;
    for n in 0..bits {
        let site = sites.next_unvisited_site()?;
        if channel(encoded, site) != channel(base, site) {
            result = set_bit(result, n);
        }
    }
    Ok(result)
}

pub fn write_length(
    length: u32,
    image: &mut RgbImage,
    sites: &mut SiteSelector<'_>,
) -> Result<(), StegoError> {
    embed_bits(u64::from(length), HEADER_BITS, image, sites)
}

pub fn read_length(
    encoded: &RgbImage,
    base: &RgbImage,
    sites: &mut SiteSelector<'_>,
) -> Result<u32, StegoError> {
    extract_bits(encoded, base, HEADER_BITS, sites).map(|value| value as u32)
}

/// 逐字节写入负载，紧接在长度头之后继续消耗同一个选点器。
pub fn write_payload(
    payload: &[u8],
    image: &mut RgbImage,
    sites: &mut SiteSelector<'_>,
) -> Result<(), StegoError> {
    payload
        .iter()
        .try_for_each(|&byte| embed_bits(u64::from(byte), BITS_PER_BYTE, image, sites))
}

/// 读出恰好 `length` 个字节，之后的嵌入数据 (若有) 被忽略。
pub fn read_payload(
    encoded: &RgbImage,
    base: &RgbImage,
    length: usize,
    sites: &mut SiteSelector<'_>,
) -> Result<Vec<u8>, StegoError> {
    (0..length)
        .map(|_| extract_bits(encoded, base, BITS_PER_BYTE, sites).map(|value| value as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::StegoRng;
    use image::Rgb;

    #[test]
    fn bit_helpers() {
        assert!(bit_at(0b1010, 1));
        assert!(!bit_at(0b1010, 2));
        assert!(bit_at(1 << 31, 31));
        assert_eq!(set_bit(0, 7), 0x80);
        assert_eq!(set_bit(0b1000, 3), 0b1000);
    }

    #[test]
    fn nudge_never_a_no_op() {
        assert_eq!(nudge(0), 1);
        assert_eq!(nudge(254), 255);
        assert_eq!(nudge(255), 254);
    }

    #[test]
    fn saturated_channels_move_down() {
        let base = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
        let mut image = base.clone();
        let mut rng = StegoRng::new(9);
        let mut sites = SiteSelector::new(&mut rng, 8, 8, 64).unwrap();
        write_length(u32::MAX, &mut image, &mut sites).unwrap();

        let values: Vec<u8> = image.pixels().flat_map(|p| p.0).collect();
        assert_eq!(values.iter().filter(|&&v| v == 254).count(), 32);
        assert!(values.iter().all(|&v| v == 254 || v == 255));
    }

    #[test]
    fn zero_bits_leave_image_untouched() {
        let base = RgbImage::from_pixel(6, 6, Rgb([40, 50, 60]));
        let mut image = base.clone();
        let mut rng = StegoRng::new(10);
        let mut sites = SiteSelector::new(&mut rng, 6, 6, 64).unwrap();
        write_length(0, &mut image, &mut sites).unwrap();
        write_payload(&[0, 0], &mut image, &mut sites).unwrap();
        assert_eq!(image, base);
    }

    #[test]
    fn header_then_payload_roundtrip() {
        let base = RgbImage::from_fn(16, 16, |x, y| Rgb([x as u8 * 16, y as u8 * 16, 255]));
        let payload = b"\x00\x01\xfehello";

        let mut encoded = base.clone();
        let mut rng = StegoRng::new(123);
        let mut sites = SiteSelector::new(&mut rng, 16, 16, 64).unwrap();
        write_length(payload.len() as u32, &mut encoded, &mut sites).unwrap();
        write_payload(payload, &mut encoded, &mut sites).unwrap();

        let mut rng = StegoRng::new(123);
        let mut sites = SiteSelector::new(&mut rng, 16, 16, 64).unwrap();
        let length = read_length(&encoded, &base, &mut sites).unwrap();
        assert_eq!(length as usize, payload.len());
        let recovered = read_payload(&encoded, &base, length as usize, &mut sites).unwrap();
        assert_eq!(recovered, payload);
    }
}
