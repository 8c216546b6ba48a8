//! # 输出目录分配
//!
//! 从基础名出发依次尝试 `base-0`, `base-1`, ...，选取第一个不存在的路径并创建。
//! 创建是非递归的，目录若被抢先创建则直接报错，绝不与旧输出合并。
//!
//! ## 依赖关系
//! - 被 `batch/collection.rs` 调用

use crate::error::{BulkImageError, Result};

use std::fs;
use std::path::{Path, PathBuf};

/// 新分配的输出目录
#[derive(Debug)]
pub struct OutputTarget {
    path: PathBuf,
}

impl OutputTarget {
    /// 分配并创建新的输出目录
    pub fn allocate(base: &Path) -> Result<Self> {
        let mut index = 0;
        let mut path = Self::candidate(base, index);
        while path.exists() {
            index += 1;
            path = Self::candidate(base, index);
        }

        fs::create_dir(&path).map_err(|e| BulkImageError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(Self { path })
    }

    /// 第 `index` 个候选目录: `{base}-{index}`
    pub fn candidate(base: &Path, index: u64) -> PathBuf {
        let mut name = base.as_os_str().to_os_string();
        name.push(format!("-{}", index));
        PathBuf::from(name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 第 `index` 张图像的输出路径: `{dir}/{prefix}-{index}.png`
    pub fn file_path(&self, prefix: &str, index: usize) -> PathBuf {
        self.path.join(format!("{}-{}.png", prefix, index))
    }
}
