//! # AHC 数据解析器
//!
//! 解析 WannierTools 计算的反常霍尔电导随化学势的变化。
//!
//! ## 格式说明
//! ```text
//! # header line 1
//! # header line 2
//! # header line 3
//! E(eV)   sigma_xy   sigma_yz   sigma_zx
//! ...
//! ```
//! 前三行是表头；之后每行第 0 列为能量，第 1-3 列为三个分量。
//!
//! ## 依赖关系
//! - 被 `commands/ahc.rs`, `commands/anc.rs` 使用
//! - 使用 `models/series.rs`

use super::{parse_floats, read_text, require_columns};
use crate::error::{Result, WtplotError};
use crate::models::{AhcSeries, Axis};
use std::path::Path;

const FORMAT: &str = "AHC";
const HEADER_LINES: usize = 3;

/// 解析 AHC 文件
pub fn parse_ahc_file(path: &Path, axis: Axis, invert: bool) -> Result<AhcSeries> {
    let content = read_text(path)?;
    parse_ahc_content(&content, &path.display().to_string(), axis, invert)
}

/// 从字符串内容解析 AHC 数据
pub fn parse_ahc_content(content: &str, name: &str, axis: Axis, invert: bool) -> Result<AhcSeries> {
    let column = axis.ahc_column();
    let sign = if invert { -1.0 } else { 1.0 };

    let mut energies = Vec::new();
    let mut values = Vec::new();

    for (i, line) in content.lines().enumerate().skip(HEADER_LINES) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        require_columns(&tokens, column + 1, FORMAT, name, i + 1)?;

        let row = parse_floats(&[tokens[0], tokens[column]], FORMAT, name, i + 1)?;
        energies.push(row[0]);
        values.push(sign * row[1]);
    }

    if energies.is_empty() {
        return Err(WtplotError::ParseError {
            format: FORMAT.to_string(),
            path: name.to_string(),
            reason: "No data rows after the header".to_string(),
        });
    }

    Ok(AhcSeries {
        energies,
        values,
        component: axis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Anomalous Hall conductivity
# eta = 0.001 eV
# E(eV)  xy  yz  zx
-0.10  1.0  2.0  3.0
 0.00  4.0  5.0  6.0

 0.10  7.0  8.0  9.0
";

    #[test]
    fn test_parse_ahc_axis_columns() {
        let z = parse_ahc_content(SAMPLE, "ahc.txt", Axis::Z, false).unwrap();
        assert_eq!(z.energies, vec![-0.1, 0.0, 0.1]);
        assert_eq!(z.values, vec![1.0, 4.0, 7.0]);

        let x = parse_ahc_content(SAMPLE, "ahc.txt", Axis::X, false).unwrap();
        assert_eq!(x.values, vec![2.0, 5.0, 8.0]);

        let y = parse_ahc_content(SAMPLE, "ahc.txt", Axis::Y, false).unwrap();
        assert_eq!(y.values, vec![3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_parse_ahc_invert() {
        let z = parse_ahc_content(SAMPLE, "ahc.txt", Axis::Z, true).unwrap();
        assert_eq!(z.values, vec![-1.0, -4.0, -7.0]);
        assert_eq!(z.energies, vec![-0.1, 0.0, 0.1]);
    }

    #[test]
    fn test_parse_ahc_short_row() {
        let content = "h\nh\nh\n0.0 1.0\n";
        let err = parse_ahc_content(content, "bad.txt", Axis::Y, false).unwrap_err();
        assert!(err.to_string().contains("bad.txt"));
    }

    #[test]
    fn test_parse_ahc_header_only() {
        assert!(parse_ahc_content("a\nb\nc\n", "empty.txt", Axis::Z, false).is_err());
    }
}
