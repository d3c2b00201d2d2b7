//! # anc-calc / anc 命令实现
//!
//! - `anc-calc`: 对每个温度积分 AHC 得到 ANC，写出 anc 数据文件
//! - `anc`: 读取 anc 数据文件，AHC 与各温度的 ANC 各占一个面板
//!
//! ## 依赖关系
//! - 使用 `cli/anc.rs` 定义的参数
//! - 使用 `parsers/`, `nernst/`, `plot/line.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/ranges.rs`

use crate::cli::anc::{AncArgs, AncCalcArgs};
use crate::error::{Result, WtplotError};
use crate::models::series::temperature_label;
use crate::models::{AncColumn, AncTable, Axis};
use crate::nernst::{export, NernstCalculator};
use crate::parsers::ahc_dat::parse_ahc_file;
use crate::parsers::anc_dat::parse_anc_file;
use crate::plot::line::{LineGrid, LinePanel};
use crate::utils::{output, progress, ranges};

use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 执行 anc-calc 命令
pub fn execute_calc(args: AncCalcArgs) -> Result<()> {
    let axis: Axis = args.axis.into();
    output::print_header(&format!("Anomalous Nernst Coefficient (α_{})", axis));

    let temperatures = ranges::parse_temperatures(&args.temperatures)?;
    let series = parse_ahc_file(&args.ahc_dat, axis, args.reverse)?;
    output::print_info(&format!(
        "Read {} points from '{}'",
        series.len(),
        args.ahc_dat.display()
    ));

    // 设置并行度
    let num_threads = if args.jobs == 0 {
        num_cpus::get()
    } else {
        args.jobs
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| WtplotError::Other(format!("Failed to build thread pool: {}", e)))?;
    output::print_info(&format!(
        "Integrating {} temperature(s) on {} thread(s)",
        temperatures.len(),
        num_threads
    ));

    let mut columns = Vec::with_capacity(temperatures.len());
    for &t in &temperatures {
        let calculator = NernstCalculator::new(t)?;
        let pb = progress::create_progress_bar(
            series.len() as u64,
            &format!("T = {} K", calculator.temperature()),
        );
        pb.println(format!(
            "  T = {} K: integrating over ±{:.4} eV",
            t,
            calculator.half_width()
        ));
        let values =
            pool.install(|| calculator.calculate(&series.energies, &series.values, Some(&pb)))?;
        pb.finish_and_clear();

        columns.push(AncColumn {
            temperature: t,
            label: temperature_label(t),
            values,
        });
    }

    let table = AncTable {
        energies: series.energies,
        ahc: series.values,
        ahc_label: format!("ahc-{}", axis),
        columns,
    };

    let output_path = output_name(args.save.as_deref(), axis, &args.temperatures);
    export::write_dat(&table, &output_path)?;

    print_extrema_table(&table);
    output::print_done(&format!("ANC written to '{}'", output_path.display()));
    Ok(())
}

/// 执行 anc 命令
pub fn execute_plot(args: AncArgs) -> Result<()> {
    output::print_header("Anomalous Nernst Coefficient");

    let table = parse_anc_file(&args.anc_dat, args.reverse)?;
    output::print_info(&format!(
        "Read {} points at {} temperature(s) from '{}'",
        table.energies.len(),
        table.columns.len(),
        args.anc_dat.display()
    ));

    let panels = build_panels(&table, args.temperatures.as_deref(), args.no_ahc)?;
    let figure = LineGrid::new(panels)?;
    output::print_info(&format!(
        "Layout: {} x {} panel(s)",
        figure.layout.cols, figure.layout.rows
    ));
    let size = args.size.resolve(figure.layout.size);
    super::render(&figure, &args.output, size)
}

/// 按所选温度组装面板
///
/// AHC 面板在最前（`no_ahc` 时省略），之后按请求顺序排列 ANC 面板，
/// 每个面板以其所在列的表头为标题。
fn build_panels(
    table: &AncTable,
    temperatures: Option<&str>,
    no_ahc: bool,
) -> Result<Vec<LinePanel>> {
    let selected: Vec<&AncColumn> = match temperatures {
        Some(input) => ranges::parse_temperatures(input)?
            .into_iter()
            .map(|t| {
                table.column(t).ok_or_else(|| {
                    WtplotError::InvalidArgument(format!(
                        "Temperature {} K not found (available: {:?})",
                        t,
                        table.temperatures()
                    ))
                })
            })
            .collect::<Result<_>>()?,
        None => table.columns.iter().collect(),
    };

    let mut panels = Vec::with_capacity(selected.len() + 1);
    if !no_ahc {
        let points = table.energies.iter().copied().zip(table.ahc.iter().copied());
        panels.push(LinePanel::ahc(points).with_title(table.ahc_label.as_str()));
    }
    for column in selected {
        let points = table
            .energies
            .iter()
            .copied()
            .zip(column.values.iter().copied());
        panels.push(LinePanel::anc(points).with_title(column.label.as_str()));
    }
    Ok(panels)
}

/// anc-calc 的输出文件名
fn output_name(prefix: Option<&str>, axis: Axis, temperatures: &str) -> PathBuf {
    let name = format!("anc_{}_{}.dat", axis, temperatures);
    match prefix {
        Some(p) => PathBuf::from(format!("{}-{}", p, name)),
        None => PathBuf::from(name),
    }
}

/// 打印各温度 ANC 极值表格
fn print_extrema_table(table: &AncTable) {
    #[derive(Tabled)]
    struct ExtremaRow {
        #[tabled(rename = "T (K)")]
        temperature: String,
        #[tabled(rename = "max α")]
        max: String,
        #[tabled(rename = "E at max (eV)")]
        max_energy: String,
        #[tabled(rename = "min α")]
        min: String,
        #[tabled(rename = "E at min (eV)")]
        min_energy: String,
    }

    let rows: Vec<ExtremaRow> = table
        .columns
        .iter()
        .filter_map(|column| {
            let (i_max, i_min) = extrema(&column.values)?;
            Some(ExtremaRow {
                temperature: format!("{}", column.temperature),
                max: format!("{:.4e}", column.values[i_max]),
                max_energy: format!("{:.4}", table.energies[i_max]),
                min: format!("{:.4e}", column.values[i_min]),
                min_energy: format!("{:.4}", table.energies[i_min]),
            })
        })
        .collect();

    if !rows.is_empty() {
        output::print_header("ANC Extrema");
        let table = Table::new(&rows);
        println!("{}", table);
    }
}

/// 最大值与最小值的下标
fn extrema(values: &[f64]) -> Option<(usize, usize)> {
    let mut iter = values.iter().enumerate();
    let (first, &v0) = iter.next()?;
    let (mut i_max, mut i_min, mut v_max, mut v_min) = (first, first, v0, v0);
    for (i, &v) in iter {
        if v > v_max {
            i_max = i;
            v_max = v;
        }
        if v < v_min {
            i_min = i;
            v_min = v;
        }
    }
    Some((i_max, i_min))
}
