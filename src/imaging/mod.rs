//! # 图像能力模块
//!
//! 封装 `image` crate 提供的解码、缩放、灰度、三点着色与 PNG 编码。
//! 上层只把 `DynamicImage` 当作不透明句柄使用。
//!
//! ## 依赖关系
//! - 被 `batch/collection.rs` 使用
//! - 使用 `image` crate
//! - 子模块: colorize

pub mod colorize;

pub use colorize::{colorize, RgbTriple, BLACK, WHITE};

use crate::error::{BulkImageError, Result};

use image::imageops::FilterType;
use image::io::Reader;
use image::{ColorType, DynamicImage, ImageFormat};
use std::path::Path;

/// 解码图像文件
///
/// 格式根据文件内容判断，而非扩展名。内容不是可识别的图像时返回 `Ok(None)`；
/// 文件本身无法打开时返回 `FileReadError`。
pub fn decode(path: &Path) -> Result<Option<DynamicImage>> {
    let reader = Reader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| BulkImageError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

    Ok(reader.decode().ok())
}

/// 缩放到精确尺寸（不保持宽高比）
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_exact(width, height, FilterType::CatmullRom)
}

/// 转换为单通道 8 位灰度图（丢弃 alpha）
pub fn grayscale(image: &DynamicImage) -> DynamicImage {
    DynamicImage::ImageLuma8(image.to_luma8())
}

/// 以 PNG 格式写入指定路径
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    // PNG 不支持浮点像素
    let result = match image.color() {
        ColorType::Rgb32F | ColorType::Rgba32F => {
            DynamicImage::ImageRgba16(image.to_rgba16()).save_with_format(path, ImageFormat::Png)
        }
        _ => image.save_with_format(path, ImageFormat::Png),
    };

    result.map_err(|e| BulkImageError::EncodeError {
        path: path.display().to_string(),
        source: e,
    })
}
