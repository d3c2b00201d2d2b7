//! # 数据模型模块
//!
//! 定义从 WannierTools 输出读入的内存数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `nernst/`, `bz/`, `plot/` 和 `commands/` 使用
//! - 子模块: lattice, series, kmesh, gap

pub mod gap;
pub mod kmesh;
pub mod lattice;
pub mod series;

pub use gap::{GapMarker, GapPoint};
pub use kmesh::{BandPlane, CurvatureGrid};
pub use lattice::Lattice;
pub use series::{AhcSeries, AncColumn, AncTable, Axis};
