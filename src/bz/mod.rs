//! # 布里渊区模块
//!
//! 倒空间的几何工具。
//!
//! ## 子模块
//! - `fold`: k 点折叠进第一布里渊区，以及在给定范围内复制等价像
//! - `cell`: 第一布里渊区（Wigner-Seitz 原胞）的顶点与棱
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs` 和 `plot/scatter.rs` 使用
//! - 使用 `models/lattice.rs`

pub mod cell;
pub mod fold;

pub use cell::{wigner_seitz_edges, wigner_seitz_vertices, Edge};
pub use fold::{fold_into_bz, replicate_in_box, BoxLimits};
