//! # gap 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/gap.rs`

use super::ImageSize;

use clap::Args;
use std::path::PathBuf;

/// gap 子命令参数
#[derive(Args, Debug)]
pub struct GapArgs {
    /// WannierTools input (wt.in) holding the LATTICE card
    pub wt_in: PathBuf,

    /// Gap data files, or directories searched with --pattern
    pub gap_dat: Vec<PathBuf>,

    /// Valence-band energy window 'min,max' (eV)
    #[arg(short = 'e', long, default_value = "-100,100", allow_hyphen_values = true)]
    pub energy: String,

    /// Keep k-points whose gap is at most this value (eV)
    #[arg(short = 'c', long, default_value_t = 0.02)]
    pub cutoff: f64,

    /// Marker radius in pixels
    #[arg(short = 'm', long = "marker-size", default_value_t = 2)]
    pub marker_size: u32,

    /// Show periodic images inside 'x0,x1/y0,y1/z0,z1'
    #[arg(short = 'l', long, allow_hyphen_values = true, conflicts_with = "bz")]
    pub limits: Option<String>,

    /// Fold every k-point into the first Brillouin zone
    #[arg(long)]
    pub bz: bool,

    /// File name pattern used when a directory is given
    #[arg(long, default_value = "Gap*.dat")]
    pub pattern: String,

    /// Search directories recursively
    #[arg(short = 'R', long)]
    pub recursive: bool,

    /// Also write the plotted points to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Output image (.png or .svg)
    #[arg(short, long, default_value = "gap.png")]
    pub output: PathBuf,

    #[command(flatten)]
    pub size: ImageSize,
}
