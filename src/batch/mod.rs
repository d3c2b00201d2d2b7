//! # 批量输入模块
//!
//! 把命令行给出的文件与目录展开为待读取的文件列表。
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs` 使用
//! - 使用 `walkdir` 与 `glob`

pub mod collector;

pub use collector::FileCollector;
