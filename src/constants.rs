/// 用于隐写消息长度头部的载体字节数。
/// 长度以 32 位大端序整数存储，每个载体字节的最低位承载 1 bit，
/// 因此需要 32 个载体字节。
pub const LENGTH_HEADER_BITS: usize = 32;

/// 隐写单个消息字节所需的载体字节数。
/// 每个字节按 8 bits 处理，每个载体字节的最低位存储 1 bit。
pub const BITS_PER_BYTE: usize = 8;

/// 提取时接受的最大消息长度（字节）。
/// 这是一个启发式上限，用于在未隐写或已损坏的图像中过滤噪声，
/// 并非内容完整性校验。
pub const MAX_MESSAGE_BYTES: u32 = 10_000;

/// 允许载入的图像文件大小上限（10 MiB）。
pub const MAX_IMAGE_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// 允许隐藏的消息长度上限（字符数）。
pub const MAX_MESSAGE_CHARS: usize = 8000;
