//! # 能隙数据解析器
//!
//! 解析 WannierTools 的 GapCube.dat / GapPlane.dat。
//!
//! ## 格式说明
//! ```text
//! # kx ky kz gap Ev Ec k1 k2 k3
//! 0.000 0.000 0.000  0.0123 -0.0101 0.0022 0.0 0.0 0.0
//! ```
//! 第一行为表头，之后每行 9 列；Ec 与分数坐标不参与绘图，只校验列数。
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs` 使用
//! - 使用 `models/gap.rs`

use super::{parse_floats, read_text, require_columns};
use crate::error::Result;
use crate::models::GapPoint;
use std::path::Path;

const FORMAT: &str = "gap";
const HEADER_LINES: usize = 1;
const COLUMNS: usize = 9;

/// 能隙点的筛选条件
#[derive(Debug, Clone, Copy)]
pub struct GapFilter {
    /// 价带能量窗口 (eV)，闭区间
    pub energy_window: (f64, f64),
    /// 能隙上限 (eV)，闭区间
    pub gap_cutoff: f64,
}

impl GapFilter {
    pub fn accepts(&self, point: &GapPoint) -> bool {
        point.gap <= self.gap_cutoff
            && point.ev >= self.energy_window.0
            && point.ev <= self.energy_window.1
    }
}

/// 解析能隙文件并筛选
pub fn parse_gap_file(path: &Path, filter: &GapFilter) -> Result<Vec<GapPoint>> {
    let content = read_text(path)?;
    parse_gap_content(&content, &path.display().to_string(), filter)
}

/// 从字符串内容解析能隙数据并筛选
pub fn parse_gap_content(content: &str, name: &str, filter: &GapFilter) -> Result<Vec<GapPoint>> {
    let mut points = Vec::new();

    for (i, line) in content.lines().enumerate().skip(HEADER_LINES) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        require_columns(&tokens, COLUMNS, FORMAT, name, i + 1)?;

        let row = parse_floats(&tokens[..COLUMNS], FORMAT, name, i + 1)?;
        let point = GapPoint {
            k: [row[0], row[1], row[2]],
            gap: row[3],
            ev: row[4],
        };

        if filter.accepts(&point) {
            points.push(point);
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# kx ky kz gap Ev Ec k1 k2 k3
0.1 0.0 0.0 0.010 -0.05 -0.04 0.1 0.0 0.0
0.2 0.0 0.0 0.500 -0.05  0.45 0.2 0.0 0.0
0.3 0.0 0.0 0.001  0.80  0.80 0.3 0.0 0.0
0.4 0.0 0.0 0.020  0.00  0.02 0.4 0.0 0.0
";

    #[test]
    fn test_parse_gap_filters() {
        let filter = GapFilter {
            energy_window: (-0.1, 0.1),
            gap_cutoff: 0.02,
        };
        let points = parse_gap_content(SAMPLE, "GapCube.dat", &filter).unwrap();

        // 第二行能隙过大，第三行能量越界；0.020 恰好等于上限，保留
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].k, [0.1, 0.0, 0.0]);
        assert_eq!(points[1].k, [0.4, 0.0, 0.0]);
        assert_eq!(points[1].ev, 0.0);
    }

    #[test]
    fn test_parse_gap_wide_window() {
        let filter = GapFilter {
            energy_window: (-100.0, 100.0),
            gap_cutoff: 1.0,
        };
        let points = parse_gap_content(SAMPLE, "GapCube.dat", &filter).unwrap();
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_parse_gap_short_row() {
        let filter = GapFilter {
            energy_window: (-1.0, 1.0),
            gap_cutoff: 1.0,
        };
        let content = "header\n0.1 0.2 0.3 0.0 0.0\n";
        assert!(parse_gap_content(content, "GapCube.dat", &filter).is_err());
    }
}
