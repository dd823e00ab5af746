//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责协调图像文件 I/O、调用核心隐写算法以及向用户报告结果。
//! 核心算法本身只操作扁平的 RGBA 通道缓冲区，对文件格式一无所知。

use crate::cli::{ExtractArgs, HideArgs};
use crate::constants::{MAX_IMAGE_FILE_BYTES, MAX_MESSAGE_CHARS};
use crate::steganography::{embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和消息内容、将图像解码为 RGBA 通道缓冲区、
/// 调用隐写核心函数生成新的像素缓冲区，最后将结果保存为目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和消息内容的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件，或图像文件超过大小上限。
/// * 消息为空、超过字符数上限，或图像没有足够的容量来隐藏消息。
/// * 输出文件已存在且未指定 `--force`。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let message = read_message(&args)?;

    anyhow::ensure!(
        !message.is_empty(),
        "The message is empty. There is nothing to hide."
    );

    let char_count = message.chars().count();
    anyhow::ensure!(
        char_count <= MAX_MESSAGE_CHARS,
        "Message too long. Maximum length is {} characters, got {}.",
        MAX_MESSAGE_CHARS.to_string().green().bold(),
        char_count.to_string().red().bold()
    );

    let picture = load_rgba(&args.image)?;
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let (width, height) = picture.dimensions();
    let stego = embed(picture.as_raw(), message.as_bytes())?;

    let output = RgbaImage::from_raw(width, height, stego)
        .context("The modified pixel buffer no longer matches the image dimensions.")?;

    output.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Extract' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、将其解码为 RGBA 通道缓冲区、
/// 调用提取核心函数恢复消息字节，最后将消息打印到终端或写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `ExtractArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件，或图像文件超过大小上限。
/// * 图像中没有找到有效的隐藏消息。
/// * 提取出的字节不是合法的 UTF-8 文本。
/// * 输出文件已存在且未指定 `--force`，或无法写入到目标文本文件。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let picture = load_rgba(&args.image)?;

    let payload = extract(picture.as_raw()).with_context(|| {
        format!(
            "Failed to extract a message from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = String::from_utf8(payload)
        .context("The hidden data is not valid UTF-8 text.")?;

    match &args.text {
        Some(path) => {
            ensure_writable(path, args.force)?;
            fs::write(path, &message).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The message has been successfully extracted and saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
        None => {
            println!("Hidden message: {}", message.green().bold());
        }
    }

    Ok(())
}

/// 从命令行参数中取得要隐藏的消息内容。
/// 优先使用 `--message` 直接给出的字符串，否则读取 `--text` 指定的文件。
fn read_message(args: &HideArgs) -> Result<String> {
    match (&args.message, &args.text) {
        (Some(message), _) => Ok(message.clone()),
        (None, Some(path)) => fs::read_to_string(path).with_context(|| {
            format!(
                "Unable to read text file: {}",
                path.to_string_lossy().red().bold()
            )
        }),
        (None, None) => anyhow::bail!("No message provided. Use --text or --message."),
    }
}

/// 读取图像文件并解码为 RGBA8 像素缓冲区。
/// 在解码之前先检查文件大小是否超过上限。
fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let file_size = fs::metadata(path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?
        .len();

    anyhow::ensure!(
        file_size <= MAX_IMAGE_FILE_BYTES,
        "File too large. Maximum size is 10MB: {}",
        path.to_string_lossy().red().bold()
    );

    let picture = image::open(path).with_context(|| {
        format!(
            "Unable to decode image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    Ok(picture.to_rgba8())
}

/// 当用户未指定输出路径时，生成默认的输出图像路径。
/// 结果为输入图像同目录下的 `doctored_<文件名>.png`。
fn default_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    image.with_file_name(format!("doctored_{stem}.png"))
}

/// 覆盖保护：输出文件已存在且未指定 `--force` 时返回错误。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
