//! # 统一错误处理模块
//!
//! 定义 wtplot 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// wtplot 统一错误类型
#[derive(Error, Debug)]
pub enum WtplotError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // 计算与绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Calculation failed: {0}")]
    CalculationError(String),

    #[error("Plotting failed: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl WtplotError {
    /// 构造带行号的解析错误
    pub fn parse(format: &str, path: &str, line: usize, reason: impl std::fmt::Display) -> Self {
        WtplotError::ParseError {
            format: format.to_string(),
            path: path.to_string(),
            reason: format!("line {}: {}", line, reason),
        }
    }
}

/// 将 plotters 的绘图错误转换为 `WtplotError`
pub fn plot_err<E: std::fmt::Debug>(e: E) -> WtplotError {
    WtplotError::PlotError(format!("{:?}", e))
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, WtplotError>;
