//! # curv 子命令 CLI 定义
//!
//! Berry 曲率绘图，包含三个子命令：
//! - `height`: 某一分量的平面色图
//! - `vec2d`: 平面内投影的二维向量场
//! - `vec3d`: 完整曲率的三维向量场
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/curv.rs`

use super::{AxisArg, ImageSize};

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// curv 主命令参数
#[derive(Args, Debug)]
pub struct CurvArgs {
    #[command(subcommand)]
    pub command: CurvCommands,
}

/// curv 子命令
#[derive(Subcommand, Debug)]
pub enum CurvCommands {
    /// Colour map of one curvature component
    Height(CurvHeightArgs),

    /// In-plane projection as 2D arrows
    Vec2d(CurvVec2dArgs),

    /// Full curvature vectors as 3D arrows
    Vec3d(CurvVec3dArgs),
}

/// 三个子命令共用的输入参数
#[derive(Args, Debug)]
pub struct CurvInput {
    /// Berry curvature data file written by WannierTools
    pub curv_dat: PathBuf,

    /// Half-open column range holding the curvature vector
    #[arg(long, default_value = "6-9")]
    pub columns: String,

    /// Side length of the square k-mesh (default: inferred)
    #[arg(long)]
    pub mesh: Option<usize>,

    /// Output image (.png or .svg)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub size: ImageSize,
}

/// height 子命令参数
#[derive(Args, Debug)]
pub struct CurvHeightArgs {
    #[command(flatten)]
    pub input: CurvInput,

    /// Curvature component to show
    #[arg(value_enum)]
    pub axis: AxisArg,

    /// Colour bar range 'min,max' (default: data range)
    #[arg(short = 'c', long, allow_hyphen_values = true)]
    pub clim: Option<String>,
}

/// vec2d 子命令参数
#[derive(Args, Debug)]
pub struct CurvVec2dArgs {
    #[command(flatten)]
    pub input: CurvInput,

    /// Normal of the projection plane
    #[arg(value_enum)]
    pub axis: AxisArg,

    /// Colour bar range 'min,max' (default: range of the projected norm)
    #[arg(short = 'c', long, allow_hyphen_values = true)]
    pub clim: Option<String>,

    /// Norm above which arrows stop growing
    #[arg(short = 'n', long)]
    pub nmax: Option<f64>,

    /// Keep every n-th k-point in both mesh directions
    #[arg(long, default_value_t = 5)]
    pub stride: usize,
}

/// vec3d 子命令参数
#[derive(Args, Debug)]
pub struct CurvVec3dArgs {
    #[command(flatten)]
    pub input: CurvInput,

    /// Colour bar range 'min,max'
    #[arg(short = 'c', long, default_value = "1,5", allow_hyphen_values = true)]
    pub clim: String,

    /// Norm above which arrows stop growing
    #[arg(short = 'n', long, default_value_t = 100.0)]
    pub nmax: f64,

    /// Keep every n-th k-point in both mesh directions
    #[arg(long, default_value_t = 5)]
    pub stride: usize,
}
