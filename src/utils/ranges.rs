//! # 参数字符串解析
//!
//! 命令行中以分隔符书写的列表与范围，如 `1-100-300`、`-0.3,0.3`、
//! `-1,1/-1,1/-0.5,0.5`。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `bz/fold.rs` 的 `BoxLimits`

use crate::bz::BoxLimits;
use crate::error::{Result, WtplotError};
use crate::models::kmesh::BAND_OFFSETS;

/// 解析以 `-` 分隔的温度列表 (K)
pub fn parse_temperatures(input: &str) -> Result<Vec<f64>> {
    let temps: Vec<f64> = input
        .split('-')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .map_err(|_| WtplotError::InvalidRange(format!("Bad temperature list '{}'", input)))
        })
        .collect::<Result<_>>()?;

    if let Some(t) = temps.iter().find(|t| !(t.is_finite() && **t > 0.0)) {
        return Err(WtplotError::InvalidRange(format!(
            "Temperature must be positive, got {} in '{}'",
            t, input
        )));
    }
    Ok(temps)
}

/// 解析 `min,max`，要求 min < max
pub fn parse_pair(input: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() != 2 {
        return Err(WtplotError::InvalidRange(format!(
            "Expected 'min,max', got '{}'",
            input
        )));
    }

    let min: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| WtplotError::InvalidRange(input.to_string()))?;
    let max: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| WtplotError::InvalidRange(input.to_string()))?;

    if max <= min {
        return Err(WtplotError::InvalidRange(format!(
            "{} (must be min < max)",
            input
        )));
    }
    Ok((min, max))
}

/// 解析半开列区间 `start-end`（从 0 计数）
pub fn parse_columns(input: &str) -> Result<(usize, usize)> {
    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() != 2 {
        return Err(WtplotError::InvalidRange(input.to_string()));
    }

    let start: usize = parts[0]
        .trim()
        .parse()
        .map_err(|_| WtplotError::InvalidRange(input.to_string()))?;
    let end: usize = parts[1]
        .trim()
        .parse()
        .map_err(|_| WtplotError::InvalidRange(input.to_string()))?;

    if end <= start {
        return Err(WtplotError::InvalidRange(format!(
            "{} (column range is empty)",
            input
        )));
    }
    Ok((start, end))
}

/// 解析 `x0,x1/y0,y1/z0,z1`
pub fn parse_box_limits(input: &str) -> Result<BoxLimits> {
    let parts: Vec<&str> = input.split('/').collect();
    if parts.len() != 3 {
        return Err(WtplotError::InvalidRange(format!(
            "Expected 'x0,x1/y0,y1/z0,z1', got '{}'",
            input
        )));
    }
    Ok(BoxLimits {
        x: parse_pair(parts[0])?,
        y: parse_pair(parts[1])?,
        z: parse_pair(parts[2])?,
    })
}

/// 解析逗号分隔的能带偏移量；`None` 表示全部四条
pub fn parse_band_offsets(input: Option<&str>) -> Result<Vec<i32>> {
    let Some(input) = input else {
        return Ok(BAND_OFFSETS.to_vec());
    };

    input.split(',')
        .map(|s| {
            let n: i32 = s
                .trim()
                .parse()
                .map_err(|_| WtplotError::InvalidArgument(format!("Bad band offset '{}'", s)))?;
            if !BAND_OFFSETS.contains(&n) {
                return Err(WtplotError::InvalidArgument(format!(
                    "Band offset {} out of range (allowed: -1, 0, 1, 2)",
                    n
                )));
            }
            Ok(n)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_temperatures() {
        assert_eq!(parse_temperatures("1-100-300").unwrap(), vec![1.0, 100.0, 300.0]);
        assert_eq!(parse_temperatures("77.5").unwrap(), vec![77.5]);
        assert!(parse_temperatures("0-100").is_err());
        assert!(parse_temperatures("a-100").is_err());
        assert!(parse_temperatures("").is_err());
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("-100,100").unwrap(), (-100.0, 100.0));
        assert_eq!(parse_pair(" 1 , 5 ").unwrap(), (1.0, 5.0));
        assert!(parse_pair("5,1").is_err());
        assert!(parse_pair("1,2,3").is_err());
        assert!(parse_pair("1").is_err());
    }

    #[test]
    fn test_parse_columns() {
        assert_eq!(parse_columns("6-9").unwrap(), (6, 9));
        assert!(parse_columns("9-6").is_err());
        assert!(parse_columns("6").is_err());
    }

    #[test]
    fn test_parse_box_limits() {
        let limits = parse_box_limits("-1,1/-1.3,1.3/-2,2").unwrap();
        assert_eq!(limits.x, (-1.0, 1.0));
        assert_eq!(limits.y, (-1.3, 1.3));
        assert_eq!(limits.z, (-2.0, 2.0));
        assert!(parse_box_limits("-1,1/-1,1").is_err());
    }

    #[test]
    fn test_parse_band_offsets() {
        assert_eq!(parse_band_offsets(None).unwrap(), vec![-1, 0, 1, 2]);
        assert_eq!(parse_band_offsets(Some("0,1")).unwrap(), vec![0, 1]);
        assert_eq!(parse_band_offsets(Some("-1")).unwrap(), vec![-1]);
        assert!(parse_band_offsets(Some("3")).is_err());
        assert!(parse_band_offsets(Some("x")).is_err());
    }
}
