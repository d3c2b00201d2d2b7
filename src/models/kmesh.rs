//! # k 空间网格数据模型
//!
//! - `CurvatureGrid`: 二维 k 平面上的 Berry 曲率
//! - `BandPlane`: 二维 k 平面上费米面附近的四条能带
//!
//! 两者的 k 点都按行优先顺序排列（第一维变化最慢），与 WannierTools 输出一致。
//!
//! ## 依赖关系
//! - 被 `parsers/curv_dat.rs`, `parsers/bulkek.rs` 使用
//! - 被 `commands/curv.rs`, `commands/plane.rs` 使用

use crate::error::{Result, WtplotError};
use crate::models::Axis;

/// Berry 曲率网格
#[derive(Debug, Clone)]
pub struct CurvatureGrid {
    /// k 点坐标
    pub kpoints: Vec<[f64; 3]>,
    /// 每个 k 点的曲率向量（所选列）
    pub curvature: Vec<Vec<f64>>,
}

impl CurvatureGrid {
    pub fn len(&self) -> usize {
        self.kpoints.len()
    }

    /// 曲率向量的分量数
    pub fn components(&self) -> usize {
        self.curvature.first().map(|c| c.len()).unwrap_or(0)
    }

    /// 方形网格的边长
    ///
    /// 给定 `mesh` 时校验点数，否则由点数开方推断。
    pub fn square_mesh(&self, mesh: Option<usize>) -> Result<usize> {
        let total = self.len();
        let n = match mesh {
            Some(n) => n,
            None => (total as f64).sqrt().round() as usize,
        };

        if n == 0 || n * n != total {
            return Err(WtplotError::InvalidArgument(format!(
                "{} k-points do not form a square {}x{} mesh (use --mesh)",
                total, n, n
            )));
        }
        Ok(n)
    }

    /// 取出曲率的某个分量
    pub fn component(&self, index: usize) -> Result<Vec<f64>> {
        if index >= self.components() {
            return Err(WtplotError::InvalidArgument(format!(
                "Curvature component {} requested but only {} columns were read",
                index,
                self.components()
            )));
        }
        Ok(self.curvature.iter().map(|c| c[index]).collect())
    }

    /// 在 n×n 网格上每隔 `stride` 个点抽样，返回点的下标
    pub fn subsample(&self, n: usize, stride: usize) -> Vec<usize> {
        let stride = stride.max(1);
        (0..self.len())
            .filter(|i| i % stride == 0 && (i / n) % stride == 0)
            .collect()
    }

    /// 平面投影后的 k 点（取前两个分量）
    pub fn plane_kpoints(&self) -> Vec<(f64, f64)> {
        self.kpoints.iter().map(|k| (k[0], k[1])).collect()
    }

    /// 曲率在垂直于 `axis` 的平面内的投影
    pub fn projected(&self, index: usize, axis: Axis) -> Result<[f64; 2]> {
        let [a, b] = axis.plane_indices();
        let row = &self.curvature[index];
        if row.len() <= b {
            return Err(WtplotError::InvalidArgument(format!(
                "Curvature projection needs 3 components, got {}",
                row.len()
            )));
        }
        Ok([row[a], row[b]])
    }
}

/// 四条能带的平面能量
#[derive(Debug, Clone)]
pub struct BandPlane {
    pub kpoints: Vec<[f64; 3]>,
    /// `bands[n][i]`: 第 n 条能带在第 i 个 k 点的能量 (eV)
    pub bands: Vec<Vec<f64>>,
    /// 网格尺寸 (行数, 列数)
    pub mesh: (usize, usize),
}

/// 能带偏移量的允许范围，-1 对应第一列能量
pub const BAND_OFFSETS: [i32; 4] = [-1, 0, 1, 2];

impl BandPlane {
    /// 按偏移量取能带
    pub fn band(&self, offset: i32) -> Option<&[f64]> {
        let index = usize::try_from(offset + 1).ok()?;
        self.bands.get(index).map(|b| b.as_slice())
    }

    /// 网格点 (i, j) 的平面坐标
    pub fn point(&self, i: usize, j: usize) -> (f64, f64) {
        let k = self.kpoints[i * self.mesh.1 + j];
        (k[0], k[1])
    }

    /// 去掉 k 范围边界上的行与列，返回保留的行下标和列下标
    pub fn interior(&self) -> (Vec<usize>, Vec<usize>) {
        let (n0, n1) = self.mesh;
        let xs: Vec<f64> = (0..n0).map(|i| self.point(i, 0).0).collect();
        let ys: Vec<f64> = (0..n1).map(|j| self.point(0, j).1).collect();

        let (x_min, x_max) = min_max(self.kpoints.iter().map(|k| k[0]));
        let (y_min, y_max) = min_max(self.kpoints.iter().map(|k| k[1]));

        let rows = (0..n0).filter(|&i| xs[i] > x_min && xs[i] < x_max).collect();
        let cols = (0..n1).filter(|&j| ys[j] > y_min && ys[j] < y_max).collect();
        (rows, cols)
    }
}

/// 迭代器的最小值与最大值
pub fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
