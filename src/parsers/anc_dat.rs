//! # ANC 数据解析器
//!
//! 解析 `wtplot anc-calc` 写出的数据文件。
//!
//! ## 格式说明
//! ```text
//!   Ene      ahc-z    anc-1.0  anc-100.0  anc-300.0
//! -0.100  1.2e+02  ...
//! ```
//! 第 1 列为能量，第 2 列为 AHC，之后每列对应一个温度的 ANC。
//!
//! ## 依赖关系
//! - 被 `commands/anc.rs` 使用
//! - 使用 `models/series.rs`
//! - 使用 `regex` 解析表头中的温度

use super::{parse_floats, read_text};
use crate::error::{Result, WtplotError};
use crate::models::{AncColumn, AncTable};
use regex::Regex;
use std::path::Path;

const FORMAT: &str = "ANC";

/// 解析 ANC 文件
pub fn parse_anc_file(path: &Path, invert: bool) -> Result<AncTable> {
    let content = read_text(path)?;
    parse_anc_content(&content, &path.display().to_string(), invert)
}

/// 从字符串内容解析 ANC 数据
pub fn parse_anc_content(content: &str, name: &str, invert: bool) -> Result<AncTable> {
    let mut lines = content.lines().enumerate();

    let header: Vec<&str> = lines
        .by_ref()
        .map(|(_, l)| l.split_whitespace().collect::<Vec<_>>())
        .find(|tokens| !tokens.is_empty())
        .ok_or_else(|| WtplotError::ParseError {
            format: FORMAT.to_string(),
            path: name.to_string(),
            reason: "Empty file".to_string(),
        })?;

    if header.len() < 3 {
        return Err(WtplotError::ParseError {
            format: FORMAT.to_string(),
            path: name.to_string(),
            reason: format!(
                "Header needs Ene, ahc and at least one anc column, found {:?}",
                header
            ),
        });
    }

    let temperature_re = Regex::new(r"^anc-([-+0-9.eE]+)$").unwrap();
    let mut columns = Vec::with_capacity(header.len() - 2);
    for label in &header[2..] {
        let temperature = temperature_re
            .captures(label)
            .and_then(|c| c[1].parse::<f64>().ok())
            .ok_or_else(|| WtplotError::ParseError {
                format: FORMAT.to_string(),
                path: name.to_string(),
                reason: format!("Cannot read a temperature from column '{}'", label),
            })?;
        columns.push(AncColumn {
            temperature,
            label: label.to_string(),
            values: Vec::new(),
        });
    }

    let ahc_sign = if invert { -1.0 } else { 1.0 };
    let mut energies = Vec::new();
    let mut ahc = Vec::new();

    for (i, line) in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != header.len() {
            return Err(WtplotError::parse(
                FORMAT,
                name,
                i + 1,
                format!("expected {} columns, found {}", header.len(), tokens.len()),
            ));
        }

        let row = parse_floats(&tokens, FORMAT, name, i + 1)?;
        energies.push(row[0]);
        ahc.push(ahc_sign * row[1]);
        for (column, value) in columns.iter_mut().zip(&row[2..]) {
            column.values.push(*value);
        }
    }

    Ok(AncTable {
        energies,
        ahc,
        ahc_label: header[1].to_string(),
        columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "   Ene    ahc-z  anc-1.0  anc-300.0
 -0.10    10.0     0.01       0.20
  0.00   -20.0     0.02       0.40
";

    #[test]
    fn test_parse_anc_header_and_columns() {
        let table = parse_anc_content(SAMPLE, "anc.dat", false).unwrap();
        assert_eq!(table.ahc_label, "ahc-z");
        assert_eq!(table.temperatures(), vec![1.0, 300.0]);
        assert_eq!(table.energies, vec![-0.1, 0.0]);
        assert_eq!(table.ahc, vec![10.0, -20.0]);
        assert_eq!(table.columns[1].label, "anc-300.0");
        assert_eq!(table.columns[1].values, vec![0.2, 0.4]);
    }

    #[test]
    fn test_parse_anc_invert_only_ahc() {
        let table = parse_anc_content(SAMPLE, "anc.dat", true).unwrap();
        assert_eq!(table.ahc, vec![-10.0, 20.0]);
        assert_eq!(table.columns[0].values, vec![0.01, 0.02]);
    }

    #[test]
    fn test_parse_anc_bad_header() {
        let content = "Ene ahc-z sigma\n0 1 2\n";
        assert!(parse_anc_content(content, "anc.dat", false).is_err());
    }

    #[test]
    fn test_parse_anc_ragged_row() {
        let content = "Ene ahc-z anc-10.0\n0 1\n";
        let err = parse_anc_content(content, "anc.dat", false).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
