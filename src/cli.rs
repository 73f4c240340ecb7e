//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::DEFAULT_NOISE_SIGMA;
use clap::Parser;
use std::path::PathBuf;

/// 一款基于口令随机选点与高斯噪声的隐写工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或恢复任意文件。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于口令随机选点与高斯噪声的隐写工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或恢复任意文件。恢复时需要原始载体图像与相同的口令。"
)]
pub struct Cli {
    /// 输出调试日志。
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏)、recover (恢复) 和 capacity (容量)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像 (如 PNG, BMP) 中隐藏任意文件内容。
    Hide(HideArgs),

    /// 对照原始载体图像，从经过隐写的图像中恢复隐藏的文件。
    Recover(RecoverArgs),

    /// 显示图像最多可以隐藏多少字节。
    Capacity(CapacityArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用作载体的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文件路径 (任意二进制内容)。
    #[arg(short, long)]
    pub payload: PathBuf,

    /// 结果图像的输出路径，默认为载体旁的 `doctored_<文件名>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 口令；省略时在终端中交互输入。
    #[arg(long)]
    pub password: Option<String>,

    /// 噪声标准差，恢复时必须使用相同的值。
    #[arg(long, default_value_t = DEFAULT_NOISE_SIGMA)]
    pub sigma: f64,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 隐藏时使用的原始载体图像路径。
    #[arg(short, long)]
    pub base: PathBuf,

    /// 恢复内容的输出路径，默认为图像旁的 `recovered_<文件名>.bin`。
    #[arg(short, long)]
    pub payload: Option<PathBuf>,

    /// 口令；省略时在终端中交互输入。
    #[arg(long)]
    pub password: Option<String>,

    /// 噪声标准差，必须与隐藏时一致。
    #[arg(long, default_value_t = DEFAULT_NOISE_SIGMA)]
    pub sigma: f64,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要查询的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
