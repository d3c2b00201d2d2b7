//! # gap 命令实现
//!
//! 在布里渊区线框中画出能隙小于阈值的 k 点。
//!
//! ## 功能
//! - 从 wt.in 读取晶格并求倒格矢
//! - 读取多个 GapCube/GapPlane 文件（或目录），按能隙与价带能量筛选
//! - `--bz`: 折叠进第一布里渊区；`-l`: 在给定长方体内复制等价像
//! - 可选导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/gap.rs` 定义的参数
//! - 使用 `parsers/wt_in.rs`, `parsers/gap_dat.rs`, `bz/`, `plot/scatter.rs`
//! - 使用 `batch/collector.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/ranges.rs`

use crate::batch::FileCollector;
use crate::bz::{fold_into_bz, replicate_in_box, wigner_seitz_edges, wigner_seitz_vertices};
use crate::cli::gap::GapArgs;
use crate::error::{Result, WtplotError};
use crate::models::{GapMarker, GapPoint};
use crate::parsers::gap_dat::{parse_gap_file, GapFilter};
use crate::parsers::wt_in::parse_wt_in_file;
use crate::plot::scatter::GapScatter;
use crate::utils::{output, progress, ranges};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 默认图像尺寸
const DEFAULT_SIZE: (u32, u32) = (1200, 900);

/// 执行 gap 命令
pub fn execute(args: GapArgs) -> Result<()> {
    output::print_header("Small-Gap k-Points");

    let energy_window = ranges::parse_pair(&args.energy)?;
    if args.cutoff.is_nan() || args.cutoff < 0.0 {
        return Err(WtplotError::InvalidArgument(format!(
            "Gap cutoff must be non-negative, got {}",
            args.cutoff
        )));
    }
    let limits = args
        .limits
        .as_deref()
        .map(ranges::parse_box_limits)
        .transpose()?;

    let lattice = parse_wt_in_file(&args.wt_in)?;
    let kcell = lattice.reciprocal();
    output::print_info(&format!(
        "Lattice from '{}' (V = {:.4} Å³)",
        args.wt_in.display(),
        lattice.volume().abs()
    ));
    output::print_vectors("b", &kcell);

    // 收集输入文件
    let files = FileCollector::new(&args.pattern)?
        .recursive(args.recursive)
        .collect(&args.gap_dat)?;
    if files.is_empty() {
        output::print_warning("No gap data given; drawing the Brillouin zone only");
    }

    let filter = GapFilter {
        energy_window,
        gap_cutoff: args.cutoff,
    };
    let points = read_gap_files(&files, &filter)?;

    let markers: Vec<GapMarker> = points.iter().map(GapMarker::from).collect();
    let markers = if args.bz {
        output::print_info("Folding k-points into the first Brillouin zone");
        markers
            .iter()
            .map(|m| GapMarker::new(fold_into_bz(m.k(), &kcell), m.energy))
            .collect()
    } else if let Some(limits) = limits {
        let images = replicate_in_box(&markers, &kcell, &limits);
        output::print_info(&format!(
            "{} periodic image(s) of {} point(s) inside the box",
            images.len(),
            markers.len()
        ));
        images
    } else {
        markers
    };

    if let Some(path) = &args.export {
        export_csv(&markers, path)?;
        output::print_success(&format!(
            "{} point(s) exported to '{}'",
            markers.len(),
            path.display()
        ));
    }

    let edges = wigner_seitz_edges(&kcell);
    output::print_info(&format!(
        "Brillouin zone: {} vertices, {} edges",
        wigner_seitz_vertices(&kcell).len(),
        edges.len()
    ));

    let figure = GapScatter {
        markers,
        edges,
        marker_size: args.marker_size,
    };
    super::render(&figure, &args.output, args.size.resolve(DEFAULT_SIZE))
}

/// 并行读取所有能隙文件，并打印每个文件保留的点数
fn read_gap_files(files: &[PathBuf], filter: &GapFilter) -> Result<Vec<GapPoint>> {
    #[derive(Tabled)]
    struct FileRow {
        #[tabled(rename = "File")]
        file: String,
        #[tabled(rename = "Points kept")]
        kept: usize,
    }

    let pb = progress::create_progress_bar(files.len() as u64, "Reading gap files");
    let results: Vec<Result<Vec<GapPoint>>> = files
        .par_iter()
        .map(|path| {
            let result = parse_gap_file(path, filter);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_and_clear();

    let mut points = Vec::new();
    let mut rows = Vec::with_capacity(files.len());
    for (path, result) in files.iter().zip(results) {
        let kept = result?;
        rows.push(FileRow {
            file: path.display().to_string(),
            kept: kept.len(),
        });
        points.extend(kept);
    }

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
        output::print_info(&format!(
            "{} point(s) with gap <= {} eV and Ev in [{}, {}] eV",
            points.len(),
            filter.gap_cutoff,
            filter.energy_window.0,
            filter.energy_window.1
        ));
    }
    Ok(points)
}

/// 导出绘图用的点
fn export_csv(markers: &[GapMarker], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    for marker in markers {
        wtr.serialize(marker)?;
    }
    wtr.flush().map_err(|e| WtplotError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_export_csv() {
        let path = std::env::temp_dir().join(format!("wtplot-gap-{}.csv", std::process::id()));
        let markers = vec![
            GapMarker::new([0.1, 0.2, 0.3], -0.05),
            GapMarker::new([-0.5, 0.0, 0.25], 0.01),
        ];
        export_csv(&markers, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("kx,ky,kz,Ev"));
        assert_eq!(lines.next(), Some("0.1,0.2,0.3,-0.05"));
        assert_eq!(lines.count(), 1);

        fs::remove_file(&path).unwrap();
    }
}
