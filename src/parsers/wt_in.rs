//! # WannierTools wt.in 解析器
//!
//! 只读取 LATTICE 卡片，用于得到倒格矢和布里渊区。
//!
//! ## 格式说明
//! ```text
//! LATTICE
//! Angstrom
//!    3.0   0.0   0.0
//!    0.0   3.0   0.0
//!    0.0   0.0   5.0
//! ```
//! 单位行可选（Angstrom 或 Bohr），Bohr 会换算为 Å。
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs` 使用
//! - 使用 `models/lattice.rs`

use super::read_text;
use crate::error::{Result, WtplotError};
use crate::models::Lattice;
use std::path::Path;

const FORMAT: &str = "wt.in";
const BOHR_TO_ANGSTROM: f64 = 0.529_177_210_903;

/// 解析 wt.in 文件
pub fn parse_wt_in_file(path: &Path) -> Result<Lattice> {
    let content = read_text(path)?;
    parse_wt_in_content(&content, &path.display().to_string())
}

/// 从字符串内容解析 LATTICE 卡片
pub fn parse_wt_in_content(content: &str, name: &str) -> Result<Lattice> {
    let fail = |reason: &str| WtplotError::ParseError {
        format: FORMAT.to_string(),
        path: name.to_string(),
        reason: reason.to_string(),
    };

    let lines: Vec<&str> = content.lines().collect();
    let start = lines
        .iter()
        .position(|l| l.trim().eq_ignore_ascii_case("LATTICE"))
        .ok_or_else(|| fail("Missing LATTICE card"))?;

    let mut scale = 1.0;
    let mut matrix = [[0.0; 3]; 3];
    let mut row_idx = 0;

    for line in lines.iter().skip(start + 1) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('!') || line.starts_with('#') {
            continue;
        }
        if row_idx == 0 {
            let lower = line.to_lowercase();
            if lower.starts_with("bohr") {
                scale = BOHR_TO_ANGSTROM;
                continue;
            }
            if lower.starts_with("ang") {
                continue;
            }
        }

        let parts: Vec<f64> = line
            .split_whitespace()
            .take(3)
            .map(|s| s.parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| fail("Non-numeric lattice vector"))?;

        if parts.len() < 3 {
            return Err(fail("Lattice vector needs three components"));
        }
        matrix[row_idx] = [parts[0] * scale, parts[1] * scale, parts[2] * scale];
        row_idx += 1;
        if row_idx == 3 {
            break;
        }
    }

    if row_idx < 3 {
        return Err(fail("Incomplete LATTICE card"));
    }

    let lattice = Lattice::from_vectors(matrix);
    if lattice.volume().abs() < 1e-10 {
        return Err(fail("Lattice vectors are linearly dependent"));
    }
    Ok(lattice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wt_in_lattice() {
        let content = "&TB_FILE
Hrfile = 'wannier90_hr.dat'
/

LATTICE
Angstrom
   3.0   0.0   0.0
   0.0   4.0   0.0
   0.0   0.0   5.0

ATOM_POSITIONS
1
Fe 0 0 0
";
        let lattice = parse_wt_in_content(content, "wt.in").unwrap();
        assert_eq!(lattice.matrix[1], [0.0, 4.0, 0.0]);
        assert!((lattice.volume() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_wt_in_bohr() {
        let content = "lattice\nBohr\n1 0 0\n0 1 0\n0 0 1\n";
        let lattice = parse_wt_in_content(content, "wt.in").unwrap();
        assert!((lattice.matrix[0][0] - BOHR_TO_ANGSTROM).abs() < 1e-12);
    }

    #[test]
    fn test_parse_wt_in_missing_card() {
        assert!(parse_wt_in_content("ATOM_POSITIONS\n", "wt.in").is_err());
    }

    #[test]
    fn test_parse_wt_in_incomplete() {
        assert!(parse_wt_in_content("LATTICE\nAngstrom\n1 0 0\n0 1 0\n", "wt.in").is_err());
    }
}
