//! # 图像集合
//!
//! 持有按发现顺序排列的已解码图像，提供批量变换与保存。
//!
//! ## 不变量
//! - 构造后长度不变：每个变换生成等长的新序列并整体替换旧序列
//! - 保存总是写入新分配的输出目录，已存在的目标文件会中止保存
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 使用
//! - 使用 `batch/collector.rs` 解析输入路径
//! - 使用 `batch/output_dir.rs` 分配输出目录
//! - 使用 `imaging/` 完成像素操作
//! - 使用 `utils/output.rs` 打印诊断信息

use super::collector::FileCollector;
use super::output_dir::OutputTarget;
use crate::error::{BulkImageError, Result};
use crate::imaging::{self, RgbTriple, BLACK, WHITE};
use crate::utils::output;

use image::{DynamicImage, GenericImageView};
use std::path::{Path, PathBuf};

/// 已加载的图像及其来源路径
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub source: PathBuf,
    pub image: DynamicImage,
}

/// 单个已保存文件
#[derive(Debug, Clone)]
pub struct SavedImage {
    pub index: usize,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// 保存结果
#[derive(Debug)]
pub struct SaveReport {
    /// 新创建的输出目录
    pub directory: PathBuf,
    /// 按集合顺序写入的文件
    pub files: Vec<SavedImage>,
}

/// 图像集合
#[derive(Debug, Default)]
pub struct ImageCollection {
    images: Vec<LoadedImage>,
}

impl ImageCollection {
    /// 从文件/目录路径列表构造集合
    ///
    /// 非图像文件打印 `[SKIP]` 后跳过；不存在的路径被忽略。
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let candidates = FileCollector::new(paths).collect()?;
        let mut images = Vec::with_capacity(candidates.len());

        for path in candidates {
            match imaging::decode(&path)? {
                Some(image) => images.push(LoadedImage {
                    source: path,
                    image,
                }),
                None => output::print_skip(&path, "is not an image file, skipping"),
            }
        }

        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[cfg(test)]
    pub fn images(&self) -> &[LoadedImage] {
        &self.images
    }

    /// 将所有图像缩放到 `width` x `height`
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(BulkImageError::InvalidArgument(format!(
                "Size must be positive, got {}x{}",
                width, height
            )));
        }

        self.replace_each(|image| imaging::resize(image, width, height));
        Ok(())
    }

    /// 将所有图像转换为灰度
    pub fn grayscale(&mut self) {
        self.replace_each(imaging::grayscale);
    }

    /// 以 `mid` 为中间色对所有图像着色
    pub fn colorize(&mut self, mid: RgbTriple) {
        output::print_info(&format!("Colorizing with ({}, {}, {})", mid[0], mid[1], mid[2]));

        self.replace_each(|image| {
            let gray = image.to_luma8();
            DynamicImage::ImageRgb8(imaging::colorize(&gray, BLACK, mid, WHITE))
        });
    }

    /// 保存到 `{output_base}-{N}/{prefix}-{i}.png`
    pub fn save(&self, prefix: &str, output_base: &Path) -> Result<SaveReport> {
        let target = OutputTarget::allocate(output_base)?;
        let files = self.write_into(&target, prefix)?;

        Ok(SaveReport {
            directory: target.path().to_path_buf(),
            files,
        })
    }

    /// 逐个写入；遇到已存在的目标文件立即中止，已写入的文件保留
    fn write_into(&self, target: &OutputTarget, prefix: &str) -> Result<Vec<SavedImage>> {
        let mut files = Vec::with_capacity(self.images.len());

        for (index, loaded) in self.images.iter().enumerate() {
            let path = target.file_path(prefix, index);
            if path.exists() {
                return Err(BulkImageError::DestinationExists {
                    path: path.display().to_string(),
                });
            }

            imaging::save_png(&loaded.image, &path)?;

            let (width, height) = loaded.image.dimensions();
            files.push(SavedImage {
                index,
                path,
                width,
                height,
            });
        }

        Ok(files)
    }

    /// 生成等长新序列并替换旧序列
    fn replace_each<F>(&mut self, transform: F)
    where
        F: Fn(&DynamicImage) -> DynamicImage,
    {
        let images: Vec<LoadedImage> = self
            .images
            .iter()
            .map(|loaded| LoadedImage {
                source: loaded.source.clone(),
                image: transform(&loaded.image),
            })
            .collect();

        debug_assert_eq!(images.len(), self.images.len());
        self.images = images;
    }
}
