//! # ahc 命令实现
//!
//! 读取 WannierTools 的 AHC 输出，画出所选分量随化学势的变化。
//!
//! ## 依赖关系
//! - 使用 `cli/ahc.rs` 定义的参数
//! - 使用 `parsers/ahc_dat.rs`, `plot/line.rs`
//! - 使用 `utils/output.rs`

use crate::cli::ahc::AhcArgs;
use crate::error::Result;
use crate::models::Axis;
use crate::parsers::ahc_dat::parse_ahc_file;
use crate::plot::line::{LineGrid, LinePanel};
use crate::utils::output;

/// 执行 ahc 命令
pub fn execute(args: AhcArgs) -> Result<()> {
    let axis: Axis = args.axis.into();
    output::print_header(&format!("Anomalous Hall Conductivity (σ_{})", axis));

    let series = parse_ahc_file(&args.ahc_dat, axis, args.reverse)?;
    output::print_info(&format!(
        "Read {} points from '{}'",
        series.len(),
        args.ahc_dat.display()
    ));
    if args.reverse {
        output::print_info("AHC sign inverted");
    }

    let panel = LinePanel::ahc(series.points()).with_title(format!("ahc-{}", series.component));
    let figure = LineGrid::new(vec![panel])?;
    let size = args.size.resolve(figure.layout.size);
    super::render(&figure, &args.output, size)
}
