//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑：读数据、变换、交给 `plot/` 绘图。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `nernst/`, `bz/`, `plot/`, `utils/`
//! - 子模块: ahc, anc, curv, plane, gap

pub mod ahc;
pub mod anc;
pub mod curv;
pub mod gap;
pub mod plane;

use crate::cli::Commands;
use crate::error::Result;
use crate::plot::{self, Figure};
use crate::utils::{output, progress};

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Ahc(args) => ahc::execute(args),
        Commands::AncCalc(args) => anc::execute_calc(args),
        Commands::Anc(args) => anc::execute_plot(args),
        Commands::Curv(args) => curv::execute(args),
        Commands::Plane(args) => plane::execute(args),
        Commands::Gap(args) => gap::execute(args),
    }
}

/// 渲染图像并报告输出路径
pub(crate) fn render<F: Figure>(figure: &F, output_path: &Path, size: (u32, u32)) -> Result<()> {
    let spinner = progress::create_spinner("Rendering");
    let result = plot::save(figure, output_path, size);
    spinner.finish_and_clear();
    result?;

    output::print_success(&format!("Plot saved to '{}'", output_path.display()));
    Ok(())
}
