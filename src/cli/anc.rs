//! # anc-calc / anc 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/anc.rs`

use super::{AxisArg, ImageSize};

use clap::Args;
use std::path::PathBuf;

/// anc-calc 子命令参数
#[derive(Args, Debug)]
pub struct AncCalcArgs {
    /// AHC data file written by WannierTools
    pub ahc_dat: PathBuf,

    /// Conductivity component, named by its normal direction
    #[arg(value_enum)]
    pub axis: AxisArg,

    /// Temperatures in K, separated by '-'
    #[arg(short = 't', long = "temperatures", default_value = "1-100-300")]
    pub temperatures: String,

    /// Invert the sign of the AHC before integrating
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Prefix for the output file name
    #[arg(short = 's', long)]
    pub save: Option<String>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short = 'j', long, default_value_t = 0)]
    pub jobs: usize,
}

/// anc 子命令参数
#[derive(Args, Debug)]
pub struct AncArgs {
    /// ANC data file written by anc-calc
    pub anc_dat: PathBuf,

    /// Temperatures to show, separated by '-' (default: all)
    #[arg(short = 't', long = "temperatures")]
    pub temperatures: Option<String>,

    /// Invert the sign of the AHC
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Do not plot the AHC panel
    #[arg(short = 'n', long = "noahc")]
    pub no_ahc: bool,

    /// Output image (.png or .svg)
    #[arg(short, long, default_value = "anc.png")]
    pub output: PathBuf,

    #[command(flatten)]
    pub size: ImageSize,
}
