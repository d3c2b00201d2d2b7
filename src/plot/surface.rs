//! # 能带曲面
//!
//! k 平面上若干条能带的三维曲面。能量截断到给定窗口，
//! k 范围边界上的行和列不画（与 WannierTools 网格的重复边界一致）。
//!
//! ## 依赖关系
//! - 被 `commands/plane.rs` 调用
//! - 使用 `models/kmesh.rs` 的 `BandPlane`

use super::{default_projection, padded_range, Figure};
use crate::error::{plot_err, Result, WtplotError};
use crate::models::kmesh::BAND_OFFSETS;
use crate::models::BandPlane;

use plotters::coord::Shift;
use plotters::prelude::*;

/// 曲面透明度
const SURFACE_ALPHA: f64 = 0.4;

/// 一个曲面片的四个角（kx, ky, E）
pub type Quad = [[f64; 3]; 4];

/// 多条能带的曲面图
#[derive(Debug, Clone)]
pub struct BandSurface {
    pub plane: BandPlane,
    /// 要画的能带偏移量
    pub offsets: Vec<i32>,
    /// 能量窗口 (eV)
    pub window: (f64, f64),
}

impl BandSurface {
    pub fn new(plane: BandPlane, offsets: Vec<i32>, window: (f64, f64)) -> Result<Self> {
        if let Some(bad) = offsets.iter().find(|n| !BAND_OFFSETS.contains(*n)) {
            return Err(WtplotError::InvalidArgument(format!(
                "Band offset {} out of range (allowed: {:?})",
                bad, BAND_OFFSETS
            )));
        }
        if window.0 >= window.1 {
            return Err(WtplotError::InvalidRange(format!(
                "Energy window {} to {} is empty",
                window.0, window.1
            )));
        }
        Ok(BandSurface {
            plane,
            offsets,
            window,
        })
    }

    /// 某条能带的曲面片，能量已截断
    pub fn quads(&self, offset: i32) -> Vec<Quad> {
        let Some(band) = self.plane.band(offset) else {
            return Vec::new();
        };
        let (rows, cols) = self.plane.interior();
        let n1 = self.plane.mesh.1;
        let corner = |i: usize, j: usize| {
            let (x, y) = self.plane.point(i, j);
            let e = band[i * n1 + j].clamp(self.window.0, self.window.1);
            [x, y, e]
        };

        rows.windows(2)
            .flat_map(|r| {
                cols.windows(2).map(move |c| {
                    [
                        corner(r[0], c[0]),
                        corner(r[1], c[0]),
                        corner(r[1], c[1]),
                        corner(r[0], c[1]),
                    ]
                })
            })
            .collect()
    }
}

impl Figure for BandSurface {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE).map_err(plot_err)?;

        let (x_min, x_max) = padded_range(self.plane.kpoints.iter().map(|k| k[0]), 0.0);
        let (y_min, y_max) = padded_range(self.plane.kpoints.iter().map(|k| k[1]), 0.0);
        let (e_min, e_max) = self.window;

        let mut chart = ChartBuilder::on(root)
            .margin(20)
            .caption("Band energies on the k-plane", ("sans-serif", 24))
            .build_cartesian_3d(x_min..x_max, e_min..e_max, y_min..y_max)
            .map_err(plot_err)?;
        chart.with_projection(default_projection);

        chart
            .configure_axes()
            .light_grid_style(BLACK.mix(0.1))
            .max_light_lines(3)
            .label_style(("sans-serif", 14))
            .draw()
            .map_err(plot_err)?;

        for (n, &offset) in self.offsets.iter().enumerate() {
            let color = Palette99::pick(n).mix(SURFACE_ALPHA);
            chart
                .draw_series(self.quads(offset).into_iter().map(|q| {
                    Polygon::new(q.map(|[x, y, e]| (x, e, y)).to_vec(), color.filled())
                }))
                .map_err(plot_err)?
                .label(format!("band {:+}", offset))
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled())
                });
        }

        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()
            .map_err(plot_err)?;

        Ok(())
    }
}
