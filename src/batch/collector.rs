//! # 文件收集器
//!
//! 将混合的文件/目录输入解析为有序的候选文件列表。
//!
//! ## 功能
//! - 文件参数按给定顺序保留
//! - 目录只展开一层，顺序为文件系统列举顺序，不排序
//! - 子目录不递归
//! - 既非文件也非目录的路径被静默忽略
//!
//! ## 依赖关系
//! - 被 `batch/collection.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{BulkImageError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径（按命令行顺序）
    inputs: Vec<PathBuf>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new<P: AsRef<Path>>(inputs: &[P]) -> Self {
        Self {
            inputs: inputs.iter().map(|p| p.as_ref().to_path_buf()).collect(),
        }
    }

    /// 收集所有候选文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for input in &self.inputs {
            if input.is_file() {
                files.push(input.clone());
            } else if input.is_dir() {
                files.extend(Self::list_directory(input)?);
            }
        }

        Ok(files)
    }

    /// 列出目录下的直接文件条目
    fn list_directory(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| BulkImageError::FileReadError {
                path: dir.display().to_string(),
                source: e.into(),
            })?;

            // 跟随符号链接判断
            if entry.path().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;

    #[test]
    fn test_collect_keeps_argument_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        fs::write(&a, b"a").unwrap();
        fs::write(&b, b"b").unwrap();

        let files = FileCollector::new(&[&b, &a]).collect().unwrap();
        assert_eq!(files, vec![b, a]);
    }

    #[test]
    fn test_collect_directory_one_level() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"a").unwrap();
        fs::write(dir.path().join("notes.txt"), b"n").unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.png"), b"d").unwrap();

        let files = FileCollector::new(&[dir.path()]).collect().unwrap();
        let names: HashSet<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(files.len(), 2);
        assert!(names.contains("a.jpg"));
        assert!(names.contains("notes.txt"));
    }

    #[test]
    fn test_collect_ignores_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.png");
        fs::write(&real, b"r").unwrap();
        let missing = dir.path().join("missing.png");

        let files = FileCollector::new(&[&missing, &real]).collect().unwrap();
        assert_eq!(files, vec![real]);
    }

    #[test]
    fn test_collect_does_not_deduplicate() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        fs::write(&a, b"a").unwrap();

        let files = FileCollector::new(&[&a, &a]).collect().unwrap();
        assert_eq!(files.len(), 2);
    }
}
