//! # Berry 曲率数据解析器
//!
//! 解析 WannierTools 在 k 平面上输出的 Berry 曲率。
//!
//! ## 格式说明
//! 前四行为表头；之后每行前三列为 k 点坐标，曲率位于 `columns` 指定的列区间
//! （默认 6-9，即 Ω_x, Ω_y, Ω_z）。只有一个字段或为空的行会被跳过。
//!
//! ## 依赖关系
//! - 被 `commands/curv.rs` 使用
//! - 使用 `models/kmesh.rs`

use super::{parse_floats, read_text, require_columns};
use crate::error::{Result, WtplotError};
use crate::models::CurvatureGrid;
use std::path::Path;

const FORMAT: &str = "Berry curvature";
const HEADER_LINES: usize = 4;

/// 解析 Berry 曲率文件
pub fn parse_curv_file(path: &Path, columns: (usize, usize)) -> Result<CurvatureGrid> {
    let content = read_text(path)?;
    parse_curv_content(&content, &path.display().to_string(), columns)
}

/// 从字符串内容解析 Berry 曲率
pub fn parse_curv_content(content: &str, name: &str, columns: (usize, usize)) -> Result<CurvatureGrid> {
    let (start, end) = columns;
    if end <= start {
        return Err(WtplotError::InvalidRange(format!(
            "curvature columns {}-{} (end must be greater than start)",
            start, end
        )));
    }

    let mut kpoints = Vec::new();
    let mut curvature = Vec::new();

    for (i, line) in content.lines().enumerate().skip(HEADER_LINES) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() <= 1 {
            continue;
        }
        require_columns(&tokens, end.max(3), FORMAT, name, i + 1)?;

        let k = parse_floats(&tokens[..3], FORMAT, name, i + 1)?;
        kpoints.push([k[0], k[1], k[2]]);
        curvature.push(parse_floats(&tokens[start..end], FORMAT, name, i + 1)?);
    }

    if kpoints.is_empty() {
        return Err(WtplotError::ParseError {
            format: FORMAT.to_string(),
            path: name.to_string(),
            reason: "No k-points after the header".to_string(),
        });
    }

    Ok(CurvatureGrid {
        kpoints,
        curvature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Berry curvature
# k-plane
# mesh 2 2
# kx ky kz k1 k2 k3 Omega_x Omega_y Omega_z
0.0 0.0 0.0 0 0 0 1.0 2.0 3.0
0.0 0.5 0.0 0 0 0 4.0 5.0 6.0

0.5 0.0 0.0 0 0 0 7.0 8.0 9.0
0.5 0.5 0.0 0 0 0 1.5 2.5 3.5
";

    #[test]
    fn test_parse_curv_default_columns() {
        let grid = parse_curv_content(SAMPLE, "curv.dat", (6, 9)).unwrap();
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.components(), 3);
        assert_eq!(grid.kpoints[2], [0.5, 0.0, 0.0]);
        assert_eq!(grid.curvature[1], vec![4.0, 5.0, 6.0]);
        assert_eq!(grid.square_mesh(None).unwrap(), 2);
    }

    #[test]
    fn test_parse_curv_single_column() {
        let grid = parse_curv_content(SAMPLE, "curv.dat", (8, 9)).unwrap();
        assert_eq!(grid.components(), 1);
        assert_eq!(grid.component(0).unwrap(), vec![3.0, 6.0, 9.0, 3.5]);
    }

    #[test]
    fn test_parse_curv_columns_out_of_range() {
        assert!(parse_curv_content(SAMPLE, "curv.dat", (6, 12)).is_err());
        assert!(parse_curv_content(SAMPLE, "curv.dat", (9, 6)).is_err());
    }
}
