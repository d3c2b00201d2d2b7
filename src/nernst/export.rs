//! # ANC 数据导出
//!
//! 将能量、AHC 与各温度的 ANC 写成带表头的右对齐文本表格，
//! 可被 `parsers/anc_dat.rs` 读回。
//!
//! ## 依赖关系
//! - 被 `commands/anc.rs` 调用
//! - 使用 `models/series.rs` 的 AncTable 结构

use crate::error::{Result, WtplotError};
use crate::models::AncTable;

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 生成 anc 数据文件的文本
pub fn to_dat_string(table: &AncTable) -> String {
    let mut columns: Vec<(String, Vec<String>)> = Vec::with_capacity(table.columns.len() + 2);
    columns.push((
        "Ene".to_string(),
        table.energies.iter().map(|v| format!("{}", v)).collect(),
    ));
    columns.push((
        table.ahc_label.clone(),
        table.ahc.iter().map(|v| format!("{}", v)).collect(),
    ));
    for column in &table.columns {
        columns.push((
            column.label.clone(),
            column.values.iter().map(|v| format!("{:.8e}", v)).collect(),
        ));
    }

    let widths: Vec<usize> = columns
        .iter()
        .map(|(header, cells)| {
            cells
                .iter()
                .map(|c| c.len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|((h, _), w)| format!("{:>w$}", h, w = w))
        .collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    for row in 0..table.energies.len() {
        let cells: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|((_, cells), w)| format!("{:>w$}", cells[row], w = w))
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }

    out
}

/// 写出 anc 数据文件
pub fn write_dat(table: &AncTable, output_path: &Path) -> Result<()> {
    let mut file = File::create(output_path).map_err(|e| WtplotError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    file.write_all(to_dat_string(table).as_bytes())
        .map_err(|e| WtplotError::FileWriteError {
            path: output_path.display().to_string(),
            source: e,
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::series::temperature_label;
    use crate::models::AncColumn;
    use crate::parsers::anc_dat::parse_anc_content;

    fn table() -> AncTable {
        AncTable {
            energies: vec![-0.1, 0.0, 0.1],
            ahc: vec![12.5, -3.0, 100.25],
            ahc_label: "ahc-x".to_string(),
            columns: vec![
                AncColumn {
                    temperature: 1.0,
                    label: temperature_label(1.0),
                    values: vec![1.0e-3, -2.5e-4, 0.0],
                },
                AncColumn {
                    temperature: 300.0,
                    label: temperature_label(300.0),
                    values: vec![0.5, 0.25, -0.125],
                },
            ],
        }
    }

    #[test]
    fn test_dat_header_and_alignment() {
        let text = to_dat_string(&table());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0].split_whitespace().collect::<Vec<_>>(),
            vec!["Ene", "ahc-x", "anc-1.0", "anc-300.0"]
        );
        // 右对齐：每行长度相同
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn test_dat_readable_by_parser() {
        let written = table();
        let parsed = parse_anc_content(&to_dat_string(&written), "anc.dat", false).unwrap();

        assert_eq!(parsed.ahc_label, "ahc-x");
        assert_eq!(parsed.temperatures(), vec![1.0, 300.0]);
        assert_eq!(parsed.energies, written.energies);
        assert_eq!(parsed.ahc, written.ahc);
        for (a, b) in parsed.columns[0].values.iter().zip(&written.columns[0].values) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
