//! # 反常能斯特系数模块
//!
//! 由 AHC 数据计算 ANC 并写出数据文件。
//!
//! ## 子模块
//! - `calculator`: 费米分布导数加权的数值积分
//! - `export`: anc 数据文件输出
//!
//! ## 依赖关系
//! - 被 `commands/anc.rs` 使用
//! - 使用 `models/series.rs`

pub mod calculator;
pub mod export;

pub use calculator::NernstCalculator;
