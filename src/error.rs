//! # 统一错误处理模块
//!
//! 定义 bulkimg 的所有错误类型，使用 `thiserror` 派生。
//!
//! 无法识别的图像格式不属于错误：加载阶段打印诊断信息后跳过。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// bulkimg 统一错误类型
#[derive(Error, Debug)]
pub enum BulkImageError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 编码错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to encode image: {path}")]
    EncodeError {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("File {path} already exists, will not overwrite")]
    DestinationExists { path: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BulkImageError>;
