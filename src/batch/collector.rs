//! # 文件收集器
//!
//! 把命令行给出的文件与目录展开为输入文件列表。
//!
//! ## 功能
//! - 文件原样保留
//! - 目录内按 glob 模式匹配文件名，可递归
//! - 目录内的结果按路径排序
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{Result, WtplotError};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 匹配模式
    pattern: glob::Pattern,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = glob::Pattern::new(pattern).map_err(|e| {
            WtplotError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
        })?;
        Ok(Self {
            pattern,
            recursive: false,
        })
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 展开所有输入
    pub fn collect(&self, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for input in inputs {
            if input.is_file() {
                files.push(input.clone());
            } else if input.is_dir() {
                files.extend(self.collect_dir(input));
            } else {
                return Err(WtplotError::FileNotFound {
                    path: input.display().to_string(),
                });
            }
        }
        Ok(files)
    }

    /// 目录内所有匹配的文件
    fn collect_dir(&self, dir: &Path) -> Vec<PathBuf> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|name| self.pattern.matches(name))
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_files_and_directories() {
        let dir = std::env::temp_dir().join(format!("wtplot-collector-{}", std::process::id()));
        let nested = dir.join("run2");
        fs::create_dir_all(&nested).unwrap();
        for name in ["GapCube.dat", "GapPlane.dat", "wt.in"] {
            fs::write(dir.join(name), "").unwrap();
        }
        fs::write(nested.join("GapCube.dat"), "").unwrap();

        let collector = FileCollector::new("Gap*.dat").unwrap();
        let files = collector.collect(&[dir.clone()]).unwrap();
        assert_eq!(files, vec![dir.join("GapCube.dat"), dir.join("GapPlane.dat")]);

        let files = FileCollector::new("Gap*.dat")
            .unwrap()
            .recursive(true)
            .collect(&[dir.clone()])
            .unwrap();
        assert_eq!(files.len(), 3);

        // 显式给出的文件不受模式限制
        let files = collector.collect(&[dir.join("wt.in")]).unwrap();
        assert_eq!(files.len(), 1);

        assert!(collector.collect(&[dir.join("missing.dat")]).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(FileCollector::new("[").is_err());
    }
}
