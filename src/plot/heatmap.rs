//! # 曲率色图
//!
//! Berry 曲率的一个分量在 k 平面上的色图。每个网格单元画成一个四边形，
//! 颜色取四个角点的平均值，因此 k 平面不必是正交网格。
//!
//! ## 依赖关系
//! - 被 `commands/curv.rs` 调用

use super::{draw_colorbar, padded_range, split_colorbar, ColorMap, Figure};
use crate::error::{plot_err, Result, WtplotError};

use plotters::coord::Shift;
use plotters::prelude::*;

/// 方形网格上的标量场
#[derive(Debug, Clone)]
pub struct CurvatureHeatmap {
    /// 行优先排列的平面坐标
    pub points: Vec<(f64, f64)>,
    pub values: Vec<f64>,
    /// 网格边长
    pub mesh: usize,
    /// 色标范围
    pub clim: (f64, f64),
    pub label: String,
}

impl CurvatureHeatmap {
    /// 未给定 `clim` 时取数据的最小值与最大值
    pub fn new(
        points: Vec<(f64, f64)>,
        values: Vec<f64>,
        mesh: usize,
        clim: Option<(f64, f64)>,
        label: impl Into<String>,
    ) -> Result<Self> {
        if points.len() != values.len() || mesh * mesh != points.len() {
            return Err(WtplotError::InvalidArgument(format!(
                "Heatmap needs {}x{} points, got {} points and {} values",
                mesh,
                mesh,
                points.len(),
                values.len()
            )));
        }
        let clim = clim.unwrap_or_else(|| padded_range(values.iter().copied(), 0.0));
        Ok(CurvatureHeatmap {
            points,
            values,
            mesh,
            clim,
            label: label.into(),
        })
    }

    /// 网格单元：四个角点与平均值
    fn cells(&self) -> impl Iterator<Item = ([(f64, f64); 4], f64)> + '_ {
        let n = self.mesh;
        (0..n.saturating_sub(1)).flat_map(move |i| {
            (0..n - 1).map(move |j| {
                let idx = [i * n + j, (i + 1) * n + j, (i + 1) * n + j + 1, i * n + j + 1];
                let corners = idx.map(|k| self.points[k]);
                let mean = idx.iter().map(|&k| self.values[k]).sum::<f64>() / 4.0;
                (corners, mean)
            })
        })
    }
}

impl Figure for CurvatureHeatmap {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE).map_err(plot_err)?;
        let (main, bar) = split_colorbar(root);

        let (x_min, x_max) = padded_range(self.points.iter().map(|p| p.0), 0.0);
        let (y_min, y_max) = padded_range(self.points.iter().map(|p| p.1), 0.0);

        let mut chart = ChartBuilder::on(&main)
            .margin(30)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("k1 (1/Å)")
            .y_desc("k2 (1/Å)")
            .x_label_style(("sans-serif", 16))
            .y_label_style(("sans-serif", 16))
            .axis_desc_style(("sans-serif", 20))
            .draw()
            .map_err(plot_err)?;

        let (c_min, c_max) = self.clim;
        chart
            .draw_series(self.cells().map(|(corners, v)| {
                Polygon::new(
                    corners.to_vec(),
                    ColorMap::Viridis.color_in(v, c_min, c_max).filled(),
                )
            }))
            .map_err(plot_err)?;

        draw_colorbar(&bar, ColorMap::Viridis, self.clim, &self.label)
    }
}
