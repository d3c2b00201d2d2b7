//! # 曲率向量场
//!
//! - `VectorField2d`: 曲率在平面内的投影，画成二维箭头，颜色为投影模长
//! - `VectorField3d`: 完整的曲率向量，从 k 平面上立起的三维箭头
//!
//! plotters 的三维坐标以 y 为竖直方向，因此 k 平面点 (kx, ky) 与竖直分量 v
//! 映射为 (kx, v, ky)。
//!
//! ## 依赖关系
//! - 被 `commands/curv.rs` 调用
//! - 使用 `models/lattice.rs` 的向量运算

use super::{default_projection, draw_colorbar, padded_range, split_colorbar, ColorMap, Figure};
use crate::error::{plot_err, Result};
use crate::models::kmesh::min_max;
use crate::models::lattice::vec3;

use plotters::coord::Shift;
use plotters::prelude::*;

/// 箭头头部长度占箭身的比例
const HEAD_RATIO: f64 = 0.35;
/// 二维箭头头部的张角 (rad)
const HEAD_ANGLE: f64 = 0.45;

/// 二维向量场
#[derive(Debug, Clone)]
pub struct VectorField2d {
    pub origins: Vec<(f64, f64)>,
    pub vectors: Vec<[f64; 2]>,
    /// 色标范围，默认取模长的最小值与最大值
    pub clim: (f64, f64),
    /// 模长上限：超过时箭头长度按此值截断
    pub nmax: Option<f64>,
    pub label: String,
}

impl VectorField2d {
    pub fn new(
        origins: Vec<(f64, f64)>,
        vectors: Vec<[f64; 2]>,
        clim: Option<(f64, f64)>,
        nmax: Option<f64>,
        label: impl Into<String>,
    ) -> Self {
        let norms = vectors.iter().map(|v| v[0].hypot(v[1]));
        let clim = clim.unwrap_or_else(|| padded_range(norms, 0.0));
        VectorField2d {
            origins,
            vectors,
            clim,
            nmax,
            label: label.into(),
        }
    }

    fn norm(&self, i: usize) -> f64 {
        let v = self.vectors[i];
        v[0].hypot(v[1])
    }

    /// 箭头长度的缩放因子：最长的箭头约为抽样点间距
    fn length_scale(&self) -> f64 {
        let (x_min, x_max) = min_max(self.origins.iter().map(|p| p.0));
        let per_row = (self.origins.len() as f64).sqrt().round().max(2.0);
        let spacing = (x_max - x_min) / (per_row - 1.0);

        let longest = (0..self.vectors.len())
            .map(|i| self.norm(i))
            .map(|n| self.nmax.map_or(n, |m| n.min(m)))
            .fold(0.0, f64::max);

        if longest > 0.0 && spacing.is_finite() && spacing > 0.0 {
            0.9 * spacing / longest
        } else {
            0.0
        }
    }

    /// 第 i 个箭头的起点与终点
    pub fn arrow(&self, i: usize, scale: f64) -> ((f64, f64), (f64, f64)) {
        let (x, y) = self.origins[i];
        let v = self.vectors[i];
        let norm = self.norm(i);
        let factor = match self.nmax {
            Some(m) if norm > m => scale * m / norm,
            _ => scale,
        };
        ((x, y), (x + v[0] * factor, y + v[1] * factor))
    }
}

fn head_2d(start: (f64, f64), tip: (f64, f64)) -> [Vec<(f64, f64)>; 2] {
    let (dx, dy) = (start.0 - tip.0, start.1 - tip.1);
    let side = |angle: f64| {
        let (s, c) = angle.sin_cos();
        let p = (
            tip.0 + HEAD_RATIO * (dx * c - dy * s),
            tip.1 + HEAD_RATIO * (dx * s + dy * c),
        );
        vec![tip, p]
    };
    [side(HEAD_ANGLE), side(-HEAD_ANGLE)]
}

impl Figure for VectorField2d {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE).map_err(plot_err)?;
        let (main, bar) = split_colorbar(root);

        let scale = self.length_scale();
        let arrows: Vec<_> = (0..self.vectors.len())
            .map(|i| {
                let (start, tip) = self.arrow(i, scale);
                let color = ColorMap::Viridis.color_in(self.norm(i), self.clim.0, self.clim.1);
                (start, tip, color)
            })
            .collect();

        let xs = arrows.iter().flat_map(|(s, t, _)| [s.0, t.0]);
        let ys = arrows.iter().flat_map(|(s, t, _)| [s.1, t.1]);
        let (x_min, x_max) = padded_range(xs, 0.03);
        let (y_min, y_max) = padded_range(ys, 0.03);

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

        for (start, tip, color) in &arrows {
            let style = color.stroke_width(2);
            chart
                .draw_series(std::iter::once(PathElement::new(vec![*start, *tip], style)))
                .map_err(plot_err)?;
            chart
                .draw_series(
                    head_2d(*start, *tip)
                        .into_iter()
                        .map(|side| PathElement::new(side, style)),
                )
                .map_err(plot_err)?;
        }

        draw_colorbar(&bar, ColorMap::Viridis, self.clim, &self.label)
    }
}

/// 三维向量场
#[derive(Debug, Clone)]
pub struct VectorField3d {
    pub origins: Vec<(f64, f64)>,
    pub vectors: Vec<[f64; 3]>,
    /// 完整 k 网格的范围（抽样前）
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub clim: (f64, f64),
    pub nmax: f64,
}

impl VectorField3d {
    /// 模长在色图上的位置
    ///
    /// 低于下限取 0，高于上限取 1，区间内线性映射到 [0.1, 1]。
    pub fn color_fraction(&self, norm: f64) -> f64 {
        let (c_min, c_max) = self.clim;
        if norm > c_max {
            1.0
        } else if norm < c_min {
            0.0
        } else if c_max > c_min {
            (norm - c_min) / (c_max - c_min) * 0.9 + 0.1
        } else {
            1.0
        }
    }

    /// 第 i 个箭头的起点与终点（物理坐标 kx, ky, 竖直分量）
    ///
    /// 基准长度为 x 范围的 1/(10·nmax)，模长超过 nmax 的箭头缩短到 nmax。
    pub fn arrow(&self, i: usize) -> ([f64; 3], [f64; 3]) {
        let (x, y) = self.origins[i];
        let v = self.vectors[i];
        let norm = vec3::norm(v);
        let base = (self.x_range.1 - self.x_range.0) / (self.nmax * 10.0);
        let length = if norm > self.nmax {
            self.nmax / norm * base
        } else {
            base
        };
        let start = [x, y, 0.0];
        (start, vec3::add(start, vec3::scale(v, length)))
    }

    /// 竖直方向的显示范围
    pub fn vertical_range(&self) -> (f64, f64) {
        let half = (self.x_range.1 - self.x_range.0) / 2.0;
        if half > 0.0 {
            (-half, half)
        } else {
            (-1.0, 1.0)
        }
    }
}

/// 三维箭头头部的两条边
fn head_3d(start: [f64; 3], tip: [f64; 3]) -> [[f64; 3]; 2] {
    let d = vec3::sub(tip, start);
    let len = vec3::norm(d);
    if len == 0.0 {
        return [tip, tip];
    }
    let reference = if d[2].abs() < 0.9 * len {
        [0.0, 0.0, 1.0]
    } else {
        [1.0, 0.0, 0.0]
    };
    let perp = vec3::cross(d, reference);
    let perp = vec3::scale(perp, HEAD_RATIO * 0.4 * len / vec3::norm(perp));
    let back = vec3::sub(tip, vec3::scale(d, HEAD_RATIO));
    [vec3::add(back, perp), vec3::sub(back, perp)]
}

/// 物理坐标到 plotters 三维坐标
fn to_chart(p: [f64; 3]) -> (f64, f64, f64) {
    (p[0], p[2], p[1])
}

impl Figure for VectorField3d {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE).map_err(plot_err)?;
        let (main, bar) = split_colorbar(root);

        let (x_min, x_max) = self.x_range;
        let (y_min, y_max) = self.y_range;
        let (z_min, z_max) = self.vertical_range();

        let mut chart = ChartBuilder::on(&main)
            .margin(20)
            .build_cartesian_3d(x_min..x_max, z_min..z_max, y_min..y_max)
            .map_err(plot_err)?;
        chart.with_projection(default_projection);

        chart
            .configure_axes()
            .light_grid_style(BLACK.mix(0.1))
            .max_light_lines(3)
            .label_style(("sans-serif", 14))
            .draw()
            .map_err(plot_err)?;

        for i in 0..self.vectors.len() {
            let (start, tip) = self.arrow(i);
            let color = ColorMap::ViridisR.color(self.color_fraction(vec3::norm(self.vectors[i])));
            let style = color.stroke_width(2);

            let [h1, h2] = head_3d(start, tip);
            let paths = [
                vec![to_chart(start), to_chart(tip)],
                vec![to_chart(h1), to_chart(tip), to_chart(h2)],
            ];
            chart
                .draw_series(paths.into_iter().map(|p| PathElement::new(p, style)))
                .map_err(plot_err)?;
        }

        draw_colorbar(&bar, ColorMap::ViridisR, self.clim, "|Ω|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_3d(vectors: Vec<[f64; 3]>) -> VectorField3d {
        VectorField3d {
            origins: vec![(0.0, 0.0); vectors.len()],
            vectors,
            x_range: (-1.0, 1.0),
            y_range: (-1.0, 1.0),
            clim: (1.0, 5.0),
            nmax: 100.0,
        }
    }

    #[test]
    fn test_color_fraction() {
        let f = field_3d(Vec::new());
        assert_eq!(f.color_fraction(0.5), 0.0);
        assert_eq!(f.color_fraction(6.0), 1.0);
        assert!((f.color_fraction(1.0) - 0.1).abs() < 1e-12);
        assert!((f.color_fraction(3.0) - 0.55).abs() < 1e-12);
        assert!((f.color_fraction(5.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_arrow_length_capped() {
        let f = field_3d(vec![[0.0, 0.0, 10.0], [0.0, 0.0, 400.0]]);
        let base = 2.0 / 1000.0;

        let (_, tip) = f.arrow(0);
        assert!((tip[2] - 10.0 * base).abs() < 1e-12);

        // 超过 nmax 的箭头长度固定为 nmax * base
        let (_, tip) = f.arrow(1);
        assert!((tip[2] - 100.0 * base).abs() < 1e-12);

        assert_eq!(f.vertical_range(), (-1.0, 1.0));
    }

    #[test]
    fn test_head_3d_is_behind_tip() {
        let start = [0.0, 0.0, 0.0];
        let tip = [0.0, 0.0, 1.0];
        let [a, b] = head_3d(start, tip);
        assert!(a[2] < tip[2] && b[2] < tip[2]);
        assert!((vec3::norm(vec3::sub(a, tip)) - vec3::norm(vec3::sub(b, tip))).abs() < 1e-12);
    }

    #[test]
    fn test_vec2d_scaling() {
        let origins = vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
        let vectors = vec![[1.0, 0.0], [0.0, 2.0], [3.0, 4.0], [0.0, 0.0]];
        let field = VectorField2d::new(origins, vectors, None, Some(2.0), "");
        assert_eq!(field.clim, (0.0, 5.0));

        let scale = field.length_scale();
        // 间距 1，最长箭头截断到 2
        assert!((scale - 0.45).abs() < 1e-12);

        let (_, tip) = field.arrow(2, scale);
        let len = (tip.0 - 0.0).hypot(tip.1 - 1.0);
        assert!((len - 0.9).abs() < 1e-12);
    }
}
