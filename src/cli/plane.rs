//! # plane 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plane.rs`

use super::ImageSize;

use clap::Args;
use std::path::PathBuf;

/// plane 子命令参数
#[derive(Args, Debug)]
pub struct PlaneArgs {
    /// bulkek_plane.dat written by WannierTools
    pub dat: PathBuf,

    /// Band offsets to draw, comma separated, from -1 to 2 (default: all)
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    pub bands: Option<String>,

    /// Lower energy clip (eV)
    #[arg(long, default_value_t = -0.3, allow_negative_numbers = true)]
    pub emin: f64,

    /// Upper energy clip (eV)
    #[arg(long, default_value_t = 0.3, allow_negative_numbers = true)]
    pub emax: f64,

    /// Output image (.png or .svg)
    #[arg(short, long, default_value = "band_plane.png")]
    pub output: PathBuf,

    #[command(flatten)]
    pub size: ImageSize,
}
