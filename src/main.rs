//! # wtplot - WannierTools 输出绘图工具
//!
//! 将 WannierTools 结果的一组绘图脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `ahc`      - 反常霍尔电导曲线
//! - `anc-calc` - 由 AHC 积分得到反常能斯特系数
//! - `anc`      - 反常能斯特系数曲线
//! - `curv`     - Berry 曲率
//!   - `height` - 单一分量的色图
//!   - `vec2d`  - 平面内投影的向量场
//!   - `vec3d`  - 三维向量场
//! - `plane`    - k 平面上的能带曲面
//! - `gap`      - 布里渊区内的小能隙 k 点
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (WannierTools 输出解析)
//!   │     ├── models/    (数据模型)
//!   │     ├── nernst/    (ANC 积分)
//!   │     ├── bz/        (布里渊区几何)
//!   │     ├── batch/     (输入文件收集)
//!   │     └── plot/      (plotters 绘图)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod bz;
mod cli;
mod commands;
mod error;
mod models;
mod nernst;
mod parsers;
mod plot;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
