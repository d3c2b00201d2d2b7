//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `ahc`: AHC 曲线
//! - `anc-calc`: 由 AHC 计算 ANC
//! - `anc`: ANC 曲线
//! - `curv`: Berry 曲率（嵌套子命令 height / vec2d / vec3d）
//! - `plane`: k 平面能带曲面
//! - `gap`: 布里渊区内的小能隙 k 点
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: ahc, anc, curv, plane, gap

pub mod ahc;
pub mod anc;
pub mod curv;
pub mod gap;
pub mod plane;

use crate::models::Axis;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// wtplot - WannierTools 输出绘图工具
#[derive(Parser)]
#[command(name = "wtplot")]
#[command(version)]
#[command(about = "Plotting tools for WannierTools output", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Plot the anomalous Hall conductivity against chemical potential
    Ahc(ahc::AhcArgs),

    /// Calculate the anomalous Nernst coefficient from AHC data
    AncCalc(anc::AncCalcArgs),

    /// Plot anomalous Nernst coefficients written by anc-calc
    Anc(anc::AncArgs),

    /// Plot Berry curvature on a k-plane
    Curv(curv::CurvArgs),

    /// Plot band energies on a k-plane as 3D surfaces
    Plane(plane::PlaneArgs),

    /// Plot small-gap k-points together with the Brillouin zone
    Gap(gap::GapArgs),
}

/// 笛卡尔方向
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
            AxisArg::Z => Axis::Z,
        }
    }
}

/// 图像尺寸
#[derive(Args, Debug, Clone, Copy)]
pub struct ImageSize {
    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,
}

impl ImageSize {
    /// 未指定的维度取默认值
    pub fn resolve(&self, default: (u32, u32)) -> (u32, u32) {
        (
            self.width.unwrap_or(default.0),
            self.height.unwrap_or(default.1),
        )
    }
}
