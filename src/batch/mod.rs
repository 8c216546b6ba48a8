//! # 批量处理模块
//!
//! 将输入路径解析为有序的图像集合，批量变换并保存。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 保持发现顺序、长度不变的图像集合
//! - 不覆盖已有数据的输出目录分配
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 使用
//! - 使用 `imaging/` 完成解码、变换与编码
//! - 使用 `walkdir` 遍历目录

pub mod collection;
pub mod collector;
pub mod output_dir;

pub use collection::{ImageCollection, SaveReport};
