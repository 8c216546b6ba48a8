//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数
//! - `PATHS...`: 图像文件和/或目录
//! - `--size W H`: 缩放
//! - `--color R G B`: 三点着色
//! - `--grayscale`: 灰度
//! - `--prefix NAME`: 保存（未给出时不写任何文件）
//! - `--output-dir BASE`: 输出目录基础名
//!
//! 无论参数出现顺序如何，执行顺序固定为 缩放 -> 着色 -> 灰度 -> 保存。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/process.rs`

use crate::imaging::RgbTriple;

use clap::Parser;
use std::path::PathBuf;

/// 默认输出目录基础名
pub const DEFAULT_OUTPUT_BASE: &str = "output";

/// bulkimg - 批量图像处理
#[derive(Parser, Debug)]
#[command(name = "bulkimg")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Bulk image processor: resize, colorize or grayscale images in batch", long_about = None)]
pub struct Cli {
    /// Image files and/or directories to process
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Size to resize images to
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["WIDTH", "HEIGHT"],
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub size: Option<Vec<u32>>,

    /// Prefix for the filename when saving images (nothing is saved without it)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Mid-tone color to colorize images with
    #[arg(
        short,
        long,
        num_args = 3,
        value_names = ["R", "G", "B"],
        allow_negative_numbers = true
    )]
    pub color: Option<Vec<i32>>,

    /// Convert images to grayscale
    #[arg(short, long, default_value_t = false)]
    pub grayscale: bool,

    /// Base name of the output directory; a free numeric suffix is appended
    #[arg(short, long, env = "BULKIMG_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_BASE)]
    pub output_dir: PathBuf,
}

impl Cli {
    /// 缩放尺寸 (width, height)
    pub fn size(&self) -> Option<(u32, u32)> {
        match self.size.as_deref() {
            Some(&[width, height]) => Some((width, height)),
            _ => None,
        }
    }

    /// 着色中间色
    pub fn color(&self) -> Option<RgbTriple> {
        match self.color.as_deref() {
            Some(&[r, g, b]) => Some([r, g, b]),
            _ => None,
        }
    }
}
