//! # ahc 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/ahc.rs`

use super::{AxisArg, ImageSize};

use clap::Args;
use std::path::PathBuf;

/// ahc 子命令参数
#[derive(Args, Debug)]
pub struct AhcArgs {
    /// AHC data file written by WannierTools
    pub ahc_dat: PathBuf,

    /// Conductivity component, named by its normal direction
    #[arg(value_enum)]
    pub axis: AxisArg,

    /// Invert the sign of the AHC
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Output image (.png or .svg)
    #[arg(short, long, default_value = "ahc.png")]
    pub output: PathBuf,

    #[command(flatten)]
    pub size: ImageSize,
}
