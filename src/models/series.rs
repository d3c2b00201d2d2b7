//! # 能量序列数据模型
//!
//! AHC（反常霍尔电导）与 ANC（反常能斯特系数）随化学势变化的数据。
//!
//! ## 依赖关系
//! - 被 `parsers/ahc_dat.rs`, `parsers/anc_dat.rs` 使用
//! - 被 `nernst/` 和 `commands/` 使用

/// 笛卡尔方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// 三维向量中的分量下标
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// 垂直于该轴的平面内的两个分量下标
    pub fn plane_indices(self) -> [usize; 2] {
        match self {
            Axis::X => [1, 2],
            Axis::Y => [0, 2],
            Axis::Z => [0, 1],
        }
    }

    /// WannierTools AHC 输出中该分量所在的列
    ///
    /// 文件列依次为 E, σ_xy, σ_yz, σ_zx，按法向量命名即 z, x, y。
    pub fn ahc_column(self) -> usize {
        match self {
            Axis::X => 2,
            Axis::Y => 3,
            Axis::Z => 1,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// AHC 随能量的变化
#[derive(Debug, Clone)]
pub struct AhcSeries {
    /// 化学势 (eV)，升序
    pub energies: Vec<f64>,
    /// 电导 (S/cm)
    pub values: Vec<f64>,
    /// 分量
    pub component: Axis,
}

impl AhcSeries {
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    /// 以 (E, σ) 对的形式迭代
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.energies.iter().copied().zip(self.values.iter().copied())
    }
}

/// 某一温度下的 ANC 列
#[derive(Debug, Clone)]
pub struct AncColumn {
    /// 温度 (K)
    pub temperature: f64,
    /// 表头中的列名，如 `anc-100.0`
    pub label: String,
    /// ANC 值
    pub values: Vec<f64>,
}

/// anc 数据文件的完整内容
#[derive(Debug, Clone)]
pub struct AncTable {
    pub energies: Vec<f64>,
    pub ahc: Vec<f64>,
    /// AHC 列的表头，如 `ahc-z`
    pub ahc_label: String,
    pub columns: Vec<AncColumn>,
}

impl AncTable {
    /// 文件中出现的所有温度
    pub fn temperatures(&self) -> Vec<f64> {
        self.columns.iter().map(|c| c.temperature).collect()
    }

    /// 按温度查找 ANC 列
    pub fn column(&self, temperature: f64) -> Option<&AncColumn> {
        self.columns
            .iter()
            .find(|c| (c.temperature - temperature).abs() < 1e-9)
    }
}

/// 温度的表头标签
///
/// 与 anc 文件的既有格式保持一致：整数温度也带一位小数（`100.0`）。
pub fn temperature_label(temperature: f64) -> String {
    format!("anc-{:?}", temperature)
}
