//! # 平面能带数据解析器
//!
//! 解析 WannierTools 的 `bulkek_plane.dat`。
//!
//! ## 格式说明
//! 第一行为表头。数据按网格的行分块，块与块之间以空行分隔，
//! 因此第一个空行之前的行数就是第二维的点数。每行前三列为 k 点坐标，
//! 第 6-9 列为费米能附近的四条能带。
//!
//! ## 依赖关系
//! - 被 `commands/plane.rs` 使用
//! - 使用 `models/kmesh.rs`

use super::{parse_floats, read_text, require_columns};
use crate::error::{Result, WtplotError};
use crate::models::BandPlane;
use std::path::Path;

const FORMAT: &str = "bulkek_plane";
const HEADER_LINES: usize = 1;
/// 第一条能带所在的列
const FIRST_BAND_COLUMN: usize = 6;
const BAND_COUNT: usize = 4;

/// 解析平面能带文件
pub fn parse_bulkek_file(path: &Path) -> Result<BandPlane> {
    let content = read_text(path)?;
    parse_bulkek_content(&content, &path.display().to_string())
}

/// 从字符串内容解析平面能带
pub fn parse_bulkek_content(content: &str, name: &str) -> Result<BandPlane> {
    let mut kpoints = Vec::new();
    let mut bands: Vec<Vec<f64>> = vec![Vec::new(); BAND_COUNT];
    let mut block_len: Option<usize> = None;

    for (i, line) in content.lines().enumerate().skip(HEADER_LINES) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            if block_len.is_none() && !kpoints.is_empty() {
                block_len = Some(kpoints.len());
            }
            continue;
        }
        if tokens.len() == 1 {
            continue;
        }
        require_columns(&tokens, FIRST_BAND_COLUMN + BAND_COUNT, FORMAT, name, i + 1)?;

        let row = parse_floats(&tokens[..FIRST_BAND_COLUMN + BAND_COUNT], FORMAT, name, i + 1)?;
        kpoints.push([row[0], row[1], row[2]]);
        for (band, value) in bands.iter_mut().zip(&row[FIRST_BAND_COLUMN..]) {
            band.push(*value);
        }
    }

    let fail = |reason: String| WtplotError::ParseError {
        format: FORMAT.to_string(),
        path: name.to_string(),
        reason,
    };

    if kpoints.is_empty() {
        return Err(fail("No k-points after the header".to_string()));
    }

    // 只有一个数据块时整个文件就是一行网格
    let first = block_len.unwrap_or(kpoints.len());
    if kpoints.len() % first != 0 {
        return Err(fail(format!(
            "{} k-points cannot be split into blocks of {}",
            kpoints.len(),
            first
        )));
    }

    Ok(BandPlane {
        mesh: (kpoints.len() / first, first),
        kpoints,
        bands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n0: usize, n1: usize) -> String {
        let mut s = String::from("# kx ky kz k1 k2 k3 E1 E2 E3 E4\n");
        for i in 0..n0 {
            for j in 0..n1 {
                s.push_str(&format!(
                    "{} {} 0.0 0 0 0 {} -0.1 0.1 0.2\n",
                    i as f64 * 0.1,
                    j as f64 * 0.1,
                    -0.2 - (i * n1 + j) as f64 * 0.01
                ));
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn test_parse_bulkek_mesh() {
        let plane = parse_bulkek_content(&sample(3, 4), "bulkek_plane.dat").unwrap();
        assert_eq!(plane.mesh, (3, 4));
        assert_eq!(plane.kpoints.len(), 12);
        assert_eq!(plane.bands.len(), 4);
        assert!((plane.bands[0][5] - (-0.25)).abs() < 1e-12);
        assert!((plane.bands[3][0] - 0.2).abs() < 1e-12);
        assert_eq!(plane.point(1, 2), (0.1, 0.2));
    }

    #[test]
    fn test_parse_bulkek_uneven_blocks() {
        let mut s = sample(2, 3);
        s.push_str("9 9 0 0 0 0 1 1 1 1\n");
        assert!(parse_bulkek_content(&s, "bulkek_plane.dat").is_err());
    }

    #[test]
    fn test_parse_bulkek_empty() {
        assert!(parse_bulkek_content("# header only\n", "bulkek_plane.dat").is_err());
    }
}
