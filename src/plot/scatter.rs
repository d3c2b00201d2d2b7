//! # 能隙散点图
//!
//! 小能隙 k 点的三维散点，颜色为价带能量（RdYlBu），
//! 叠加第一布里渊区的线框。三个方向使用相同的尺度。
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs` 调用
//! - 使用 `bz/cell.rs` 的棱与 `models/gap.rs`

use super::{default_projection, draw_colorbar, padded_range, split_colorbar, ColorMap, Figure};
use crate::bz::Edge;
use crate::error::{plot_err, Result};
use crate::models::kmesh::min_max;
use crate::models::GapMarker;

use plotters::coord::Shift;
use plotters::prelude::*;

/// 能隙散点图
#[derive(Debug, Clone)]
pub struct GapScatter {
    pub markers: Vec<GapMarker>,
    /// 布里渊区线框
    pub edges: Vec<Edge>,
    /// 散点半径（像素）
    pub marker_size: u32,
}

impl GapScatter {
    /// 能量色标范围
    pub fn energy_range(&self) -> (f64, f64) {
        padded_range(self.markers.iter().map(|m| m.energy), 0.0)
    }

    /// 包含所有点与线框的立方体，每个方向的半宽相同
    pub fn cubic_bounds(&self) -> [(f64, f64); 3] {
        let points: Vec<[f64; 3]> = self
            .markers
            .iter()
            .map(|m| m.k())
            .chain(self.edges.iter().flat_map(|(p, q)| [*p, *q]))
            .collect();

        let ranges: [(f64, f64); 3] =
            std::array::from_fn(|axis| min_max(points.iter().map(|p| p[axis])));
        let half = ranges
            .iter()
            .filter(|(lo, hi)| lo.is_finite() && hi.is_finite())
            .map(|(lo, hi)| (hi - lo) / 2.0)
            .fold(0.0, f64::max);
        let half = if half > 0.0 { half * 1.05 } else { 1.0 };

        ranges.map(|(lo, hi)| {
            let center = if lo.is_finite() && hi.is_finite() {
                (lo + hi) / 2.0
            } else {
                0.0
            };
            (center - half, center + half)
        })
    }
}

/// (kx, ky, kz) 到 plotters 坐标（y 为竖直方向）
fn to_chart(k: [f64; 3]) -> (f64, f64, f64) {
    (k[0], k[2], k[1])
}

impl Figure for GapScatter {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE).map_err(plot_err)?;
        let (main, bar) = split_colorbar(root);

        let [x, y, z] = self.cubic_bounds();
        let mut chart = ChartBuilder::on(&main)
            .margin(20)
            .build_cartesian_3d(x.0..x.1, z.0..z.1, y.0..y.1)
            .map_err(plot_err)?;
        chart.with_projection(default_projection);

        chart
            .configure_axes()
            .light_grid_style(BLACK.mix(0.1))
            .max_light_lines(3)
            .label_style(("sans-serif", 14))
            .draw()
            .map_err(plot_err)?;

        chart
            .draw_series(self.edges.iter().map(|(p, q)| {
                PathElement::new(vec![to_chart(*p), to_chart(*q)], BLACK.stroke_width(1))
            }))
            .map_err(plot_err)?;

        let (e_min, e_max) = self.energy_range();
        chart
            .draw_series(self.markers.iter().map(|m| {
                let color = ColorMap::RdYlBu.color_in(m.energy, e_min, e_max);
                Circle::new(to_chart(m.k()), self.marker_size, color.filled())
            }))
            .map_err(plot_err)?;

        draw_colorbar(&bar, ColorMap::RdYlBu, (e_min, e_max), "Ev (eV)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_bounds() {
        let scatter = GapScatter {
            markers: vec![
                GapMarker::new([0.0, 0.0, 0.0], -0.1),
                GapMarker::new([2.0, 0.5, 0.2], 0.3),
            ],
            edges: vec![([0.0, -1.0, 0.0], [0.0, 1.0, 0.0])],
            marker_size: 2,
        };

        let bounds = scatter.cubic_bounds();
        let widths: Vec<f64> = bounds.iter().map(|(lo, hi)| hi - lo).collect();
        assert!((widths[0] - widths[1]).abs() < 1e-12);
        assert!((widths[0] - widths[2]).abs() < 1e-12);
        assert!((widths[0] - 2.1).abs() < 1e-12);
        assert!((bounds[0].0 + bounds[0].1 - 2.0).abs() < 1e-12);

        assert_eq!(scatter.energy_range(), (-0.1, 0.3));
    }

    #[test]
    fn test_empty_bounds() {
        let scatter = GapScatter {
            markers: Vec::new(),
            edges: Vec::new(),
            marker_size: 2,
        };
        assert_eq!(scatter.cubic_bounds(), [(-1.0, 1.0); 3]);
    }
}
