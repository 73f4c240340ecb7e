//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、读取口令、调用核心编解码函数以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::codec::{capacity, decode_with_config, encode_with_config, site_count};
use crate::config::StegoConfig;
use anyhow::{Context, Result};
use colored::Colorize;
use image::{ImageFormat, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

fn load_rgb(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    Ok(image.to_rgb8())
}

/// 在 `source` 所在目录下生成 `<prefix><文件名>.<extension>` 形式的默认输出路径。
fn default_output(source: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    source.with_file_name(format!("{prefix}{stem}.{extension}"))
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 输出图像必须是无损格式，有损压缩会抹掉嵌入的 ±1 差值。
fn ensure_lossless(path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).with_context(|| {
        format!(
            "Unable to determine the image format of: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    anyhow::ensure!(
        format != ImageFormat::Jpeg,
        "Output image must use a lossless format such as PNG or BMP, got {:?}: {}",
        format,
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

fn resolve_password(password: Option<String>) -> Result<String> {
    match password {
        Some(password) => Ok(password),
        None => rpassword::prompt_password("Please enter a password: ")
            .context("Unable to read the password from the terminal"),
    }
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取载体图像和负载文件、检查输出路径、调用编码核心函数，
/// 最后以无损格式将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与口令的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或负载文件。
/// * 输出路径不是无损图像格式 (如 `.jpg`)。
/// * 输出文件已存在且未指定 `--force`。
/// * 图像没有足够的空间来隐藏负载。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| default_output(&args.image, "doctored_", "png"));
    ensure_lossless(&dest)?;
    ensure_writable(&dest, args.force)?;

    let carrier = load_rgb(&args.image)?;
    let payload = fs::read(&args.payload).with_context(|| {
        format!(
            "Unable to read payload file: {}",
            args.payload.to_string_lossy().red().bold()
        )
    })?;
    log::info!(
        "Hiding {} ({} bytes) in {}",
        args.payload.display(),
        payload.len(),
        args.image.display()
    );

    let (width, height) = carrier.dimensions();
    let available = capacity(width, height);
    anyhow::ensure!(
        payload.len() as u64 <= available,
        "Not enough space in the image to hide the payload. \nRequired: {}, Available: {}",
        payload.len().to_string().red().bold(),
        available.to_string().green().bold()
    );

    let password = resolve_password(args.password)?;
    let config = StegoConfig::with_sigma(args.sigma);
    let encoded = encode_with_config(&carrier, &payload, &password, &config)
        .context("Failed to hide the payload in the image")?;

    encoded.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The payload has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像与原始载体图像、调用解码核心函数恢复负载，
/// 最后将恢复的内容写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与口令的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取任一输入图像。
/// * 输出文件已存在且未指定 `--force`。
/// * 两幅图像尺寸不同，或读出的长度无效 (口令错误)。
/// * 无法写入到目标文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let output = args
        .payload
        .unwrap_or_else(|| default_output(&args.image, "recovered_", "bin"));
    ensure_writable(&output, args.force)?;

    let encoded = load_rgb(&args.image)?;
    let base = load_rgb(&args.base)?;
    log::info!(
        "Recovering from {} against base {}",
        args.image.display(),
        args.base.display()
    );

    let password = resolve_password(args.password)?;
    let config = StegoConfig::with_sigma(args.sigma);
    let payload = decode_with_config(&encoded, &base, &password, &config).with_context(|| {
        format!(
            "Failed to recover the payload from '{}'. \nThe image may not contain a hidden payload, or the password is wrong.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&output, &payload).with_context(|| {
        format!(
            "Unable to write to target file: {}",
            output.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "{} bytes have been successfully recovered and saved: {}",
        payload.len().to_string().green(),
        output.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令：打印图像尺寸、嵌入位置数与最大负载字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let image = load_rgb(&args.image)?;
    let (width, height) = image.dimensions();

    println!(
        "{}: {}x{} pixels, {} sites, up to {} bytes",
        args.image.to_string_lossy().bold(),
        width,
        height,
        site_count(width, height),
        capacity(width, height).to_string().green().bold()
    );
    Ok(())
}
