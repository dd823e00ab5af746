//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 的像素数据中隐藏或提取秘密消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 的像素数据中隐藏或提取秘密消息。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏) 和 extract (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像 (如 PNG, BMP) 的像素数据中隐藏秘密消息。
    Hide(HideArgs),

    /// 从经过隐写的图像中提取隐藏的消息。
    Extract(ExtractArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的消息内容的文件路径。
    #[arg(short, long, conflicts_with = "message", required_unless_present = "message")]
    pub text: Option<PathBuf>,

    /// 直接在命令行上提供要隐藏的消息。
    #[arg(short, long)]
    pub message: Option<String>,

    /// 隐写完成后，保存结果图像的输出路径。
    /// 省略时默认保存到输入图像同目录下的 doctored_<文件名>.png。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 强制覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 已隐藏消息数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 可选的输出路径；提供时将提取的消息写入该文件，否则打印到终端。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 强制覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}
