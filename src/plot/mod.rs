//! # 绘图模块
//!
//! 各子命令共用的绘图层，基于 `plotters`。每种图实现 `Figure`，
//! 由 `save` 根据文件扩展名选择 PNG 或 SVG 后端。
//!
//! ## 子模块
//! - `colormap`: 连续色图
//! - `line`: AHC / ANC 曲线（支持多面板）
//! - `heatmap`: Berry 曲率分量的平面色图
//! - `vector`: Berry 曲率的二维 / 三维向量场
//! - `surface`: k 平面上的能带曲面
//! - `scatter`: 小能隙 k 点的三维散点与布里渊区线框
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/` 与 `bz/`

pub mod colormap;
pub mod heatmap;
pub mod line;
pub mod scatter;
pub mod surface;
pub mod vector;

pub use colormap::ColorMap;

use crate::error::{plot_err, Result, WtplotError};

use plotters::coord::ranged3d::{ProjectionMatrix, ProjectionMatrixBuilder};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 可绘制的图
pub trait Figure {
    /// 在给定区域上绘制
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static;
}

/// 图像输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// 从文件扩展名推断输出格式
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}

/// 保存图像
pub fn save<F: Figure>(figure: &F, output_path: &Path, size: (u32, u32)) -> Result<()> {
    match ImageFormat::from_path(output_path) {
        ImageFormat::Svg => {
            let root = SVGBackend::new(output_path, size).into_drawing_area();
            figure.draw(&root)?;
            root.present().map_err(plot_err)?;
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(output_path, size).into_drawing_area();
            figure.draw(&root)?;
            root.present().map_err(plot_err)?;
        }
    }
    Ok(())
}

/// 多面板布局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub cols: usize,
    pub rows: usize,
    /// 默认图像尺寸（像素）
    pub size: (u32, u32),
    /// 刻度字号
    pub tick_size: u32,
    /// 轴标题字号
    pub label_size: u32,
}

impl GridLayout {
    /// 按面板数量选择布局
    pub fn for_panels(count: usize) -> Result<Self> {
        let (cols, rows, size, tick_size, label_size) = match count {
            1 => (1, 1, (800, 800), 22, 30),
            2 => (2, 1, (1250, 750), 22, 30),
            3..=4 => (2, 2, (1100, 1000), 18, 22),
            5..=6 => (3, 2, (1500, 1000), 18, 22),
            7..=9 => (3, 3, (1100, 1000), 12, 15),
            10..=12 => (4, 3, (1500, 1000), 12, 15),
            _ => {
                return Err(WtplotError::InvalidArgument(format!(
                    "Cannot lay out {} panels (1 to 12 supported)",
                    count
                )))
            }
        };
        Ok(GridLayout {
            cols,
            rows,
            size,
            tick_size,
            label_size,
        })
    }
}

/// 数据范围，带相对留白；范围退化时扩展为 ±1
pub fn padded_range(values: impl Iterator<Item = f64>, pad: f64) -> (f64, f64) {
    let (lo, hi) = crate::models::kmesh::min_max(values.filter(|v| v.is_finite()));
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    if hi - lo <= f64::EPSILON * lo.abs().max(1.0) {
        return (lo - 1.0, hi + 1.0);
    }
    let margin = (hi - lo) * pad;
    (lo - margin, hi + margin)
}

/// 在右侧区域绘制色标
pub fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    cmap: ColorMap,
    range: (f64, f64),
    label: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (lo, hi) = if range.1 > range.0 {
        range
    } else {
        (range.0 - 1.0, range.0 + 1.0)
    };

    let mut chart = ChartBuilder::on(area)
        .margin_top(60)
        .margin_bottom(60)
        .margin_right(10)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..1.0, lo..hi)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_desc(label)
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    let steps = 128;
    let dv = (hi - lo) / steps as f64;
    chart
        .draw_series((0..steps).map(|i| {
            let v0 = lo + i as f64 * dv;
            Rectangle::new(
                [(0.0, v0), (1.0, v0 + dv)],
                cmap.color_in(v0 + dv / 2.0, lo, hi).filled(),
            )
        }))
        .map_err(plot_err)?;

    Ok(())
}

/// 切出主绘图区与右侧色标区
pub fn split_colorbar<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
) -> (DrawingArea<DB, Shift>, DrawingArea<DB, Shift>) {
    let (width, _) = root.dim_in_pixel();
    let bar = 130.min(width / 4);
    root.split_horizontally(width - bar)
}

/// 三维图的统一投影角度
pub fn default_projection(mut pb: ProjectionMatrixBuilder) -> ProjectionMatrix {
    pb.pitch = 0.45;
    pb.yaw = 0.6;
    pb.scale = 0.85;
    pb.into_matrix()
}
