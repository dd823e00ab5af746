//! # 错误类型模块
//!
//! 定义隐写编解码核心的错误类型。
//! 应用层（`handler`）使用 `anyhow` 包装这些错误并附加文件路径等上下文。

use thiserror::Error;

/// 隐写编解码过程中可能出现的错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 载体图像的容量不足以容纳长度头部和消息本身。
    /// `required` 与 `available` 均以 bit 为单位。
    #[error("Message too long! Need {required} bits but only {available} are available.")]
    CapacityExceeded { required: u64, available: u64 },

    /// 载体中没有找到有效的隐藏消息。
    /// 长度头部缺失、为零、超出上限或与载体大小不一致时均返回此结果；
    /// 它是一种正常的提取结果，而不是硬性故障。
    #[error("No hidden message found")]
    NoMessageFound,
}
