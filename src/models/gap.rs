//! # 能隙数据模型
//!
//! GapCube/GapPlane 输出中的单个 k 点。
//!
//! ## 依赖关系
//! - 被 `parsers/gap_dat.rs` 使用
//! - 被 `bz/` 和 `commands/gap.rs` 使用

use serde::Serialize;

/// 能隙文件中的一行
#[derive(Debug, Clone)]
pub struct GapPoint {
    /// 笛卡尔 k 坐标 (1/Å)
    pub k: [f64; 3],
    /// 能隙 (eV)
    pub gap: f64,
    /// 价带顶 (eV)
    pub ev: f64,
}

/// 绘图与导出用的点：k 坐标及其颜色值（价带能量）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GapMarker {
    pub kx: f64,
    pub ky: f64,
    pub kz: f64,
    #[serde(rename = "Ev")]
    pub energy: f64,
}

impl GapMarker {
    pub fn new(k: [f64; 3], energy: f64) -> Self {
        GapMarker {
            kx: k[0],
            ky: k[1],
            kz: k[2],
            energy,
        }
    }

    pub fn k(&self) -> [f64; 3] {
        [self.kx, self.ky, self.kz]
    }
}

impl From<&GapPoint> for GapMarker {
    fn from(p: &GapPoint) -> Self {
        GapMarker::new(p.k, p.ev)
    }
}
