//! # 解析器模块
//!
//! WannierTools 各种文本输出的解析器。所有格式都是空白分隔的固定列文本，
//! 每个解析器都提供 `parse_*_file`（读文件）和 `parse_*_content`（解析字符串）两层。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: ahc_dat, anc_dat, curv_dat, bulkek, gap_dat, wt_in

pub mod ahc_dat;
pub mod anc_dat;
pub mod bulkek;
pub mod curv_dat;
pub mod gap_dat;
pub mod wt_in;

use crate::error::{Result, WtplotError};
use std::fs;
use std::path::Path;

/// 读取整个文本文件
pub fn read_text(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(WtplotError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    fs::read_to_string(path).map_err(|e| WtplotError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 将一行拆分为浮点数
///
/// `line_no` 从 1 开始，用于错误信息。
pub(crate) fn parse_floats(tokens: &[&str], format: &str, name: &str, line_no: usize) -> Result<Vec<f64>> {
    tokens
        .iter()
        .map(|t| {
            t.parse::<f64>().map_err(|_| {
                WtplotError::parse(format, name, line_no, format!("'{}' is not a number", t))
            })
        })
        .collect()
}

/// 检查一行是否有足够的列
pub(crate) fn require_columns(
    tokens: &[&str],
    needed: usize,
    format: &str,
    name: &str,
    line_no: usize,
) -> Result<()> {
    if tokens.len() < needed {
        return Err(WtplotError::parse(
            format,
            name,
            line_no,
            format!("expected at least {} columns, found {}", needed, tokens.len()),
        ));
    }
    Ok(())
}
