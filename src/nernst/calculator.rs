//! # ANC 计算器
//!
//! 由离散的 AHC 数据计算反常能斯特系数:
//!
//! ```text
//! α(μ) = 1/(eT) ∫ σ(ε) (ε-μ) (-∂f/∂ε) dε
//! ```
//!
//! ## 算法概述
//! 1. 以 μ 为中心取 ε-μ ∈ [-ε_max, ε_max) 的等距网格（10000 点），
//!    ε_max 由 cosh 的截断值决定：cosh(βe(ε-μ)) 超过截断时 ∂f/∂ε 可忽略
//! 2. 网格上的 σ(ε) 在数据范围内线性插值，范围外按距离指数衰减地线性外推
//! 3. 对网格求和完成积分
//!
//! ## 依赖关系
//! - 被 `commands/anc.rs` 调用
//! - 使用 `rayon` 对各个 μ 并行求积分
//! - 使用 `indicatif` 报告进度

use crate::error::{Result, WtplotError};

use indicatif::ProgressBar;
use rayon::prelude::*;

/// 玻尔兹曼常数 (J/K)
pub const BOLTZMANN: f64 = 1.380649e-23;
/// 元电荷 (C)，同时作为 eV → J 的换算
pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;
/// cosh 自变量的截断值
pub const COSH_CUTOFF: f64 = 200.0;
/// 积分网格点数
pub const MESH_POINTS: usize = 10000;
/// 外推衰减长度与能量步长之比
const DECAY_STEPS: f64 = 5.0;
/// S/cm → S/m
const CM_TO_M: f64 = 100.0;

/// 某一温度下的 ANC 计算器
///
/// 积分网格和 Fermi 分布导数只依赖温度，构造时一次算好，对所有 μ 复用。
pub struct NernstCalculator {
    temperature: f64,
    beta: f64,
    step: f64,
    /// ε-μ (eV)
    offsets: Vec<f64>,
    /// ∂f/∂ε 的无量纲部分: -1/(2+2cosh(βe(ε-μ)))
    weights: Vec<f64>,
}

impl NernstCalculator {
    /// 创建计算器
    pub fn new(temperature: f64) -> Result<Self> {
        if !(temperature > 0.0 && temperature.is_finite()) {
            return Err(WtplotError::InvalidArgument(format!(
                "Temperature must be positive, got {}",
                temperature
            )));
        }

        let beta = 1.0 / (BOLTZMANN * temperature);
        let eps_max = (COSH_CUTOFF / beta) / ELEMENTARY_CHARGE;
        let step = 2.0 * eps_max / MESH_POINTS as f64;

        let offsets: Vec<f64> = (0..MESH_POINTS)
            .map(|i| -eps_max + i as f64 * step)
            .collect();
        let weights = offsets
            .iter()
            .map(|x| -1.0 / (2.0 + 2.0 * (beta * ELEMENTARY_CHARGE * x).cosh()))
            .collect();

        Ok(Self {
            temperature,
            beta,
            step,
            offsets,
            weights,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// 积分网格的半宽 (eV)
    pub fn half_width(&self) -> f64 {
        -self.offsets[0]
    }

    /// 计算所有 μ = energies[i] 处的 ANC
    ///
    /// 在当前 rayon 线程池中并行执行，结果顺序与 `energies` 一致。
    pub fn calculate(
        &self,
        energies: &[f64],
        ahc: &[f64],
        progress: Option<&ProgressBar>,
    ) -> Result<Vec<f64>> {
        validate_series(energies, ahc)?;
        let decay = (energies[1] - energies[0]) * DECAY_STEPS;

        let values = energies
            .par_iter()
            .map(|&mu| {
                let anc = self.anc_at(energies, ahc, decay, mu);
                if let Some(pb) = progress {
                    pb.inc(1);
                }
                anc
            })
            .collect();

        Ok(values)
    }

    /// 单个化学势处的 ANC
    fn anc_at(&self, energies: &[f64], ahc: &[f64], decay: f64, mu: f64) -> f64 {
        let sum: f64 = self
            .offsets
            .iter()
            .zip(&self.weights)
            .map(|(&x, &w)| interpolate(energies, ahc, decay, mu + x) * x * w)
            .sum();

        // 一个 e 来自 (ε-μ) 与 β 的 eV→J 换算，分子两个、分母一个
        sum * self.step * self.beta / self.temperature * CM_TO_M * ELEMENTARY_CHARGE
    }
}

/// 在 ε 处求 AHC
///
/// 数据范围内线性插值；范围外沿端点斜率线性外推，并乘以 exp(-距离/decay)
/// 使外推值收敛回端点值附近。
pub fn interpolate(energies: &[f64], ahc: &[f64], decay: f64, eps: f64) -> f64 {
    let n = energies.len();
    // 第一个严格大于 ε 的能量点
    let i = energies.partition_point(|&e| e <= eps);

    if i == 0 {
        let slope = (ahc[1] - ahc[0]) / (energies[1] - energies[0]);
        let dist = energies[0] - eps;
        ahc[0] - slope * dist * (-dist / decay).exp()
    } else if i == n {
        let slope = (ahc[n - 1] - ahc[n - 2]) / (energies[n - 1] - energies[n - 2]);
        let dist = eps - energies[n - 1];
        ahc[n - 1] + slope * dist * (-dist / decay).exp()
    } else {
        let slope = (ahc[i] - ahc[i - 1]) / (energies[i] - energies[i - 1]);
        ahc[i - 1] + slope * (eps - energies[i - 1])
    }
}

/// 检查 AHC 序列是否可用于积分
fn validate_series(energies: &[f64], ahc: &[f64]) -> Result<()> {
    if energies.len() != ahc.len() {
        return Err(WtplotError::CalculationError(format!(
            "{} energies but {} AHC values",
            energies.len(),
            ahc.len()
        )));
    }
    if energies.len() < 2 {
        return Err(WtplotError::CalculationError(
            "At least two energy points are needed".to_string(),
        ));
    }
    if energies.windows(2).any(|w| w[1] <= w[0]) {
        return Err(WtplotError::CalculationError(
            "Energies must be strictly increasing".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| start + (end - start) * i as f64 / (n - 1) as f64)
            .collect()
    }

    #[test]
    fn test_interpolate_inside_is_linear() {
        let e = vec![0.0, 1.0, 2.0];
        let s = vec![0.0, 10.0, 30.0];
        assert!((interpolate(&e, &s, 5.0, 0.5) - 5.0).abs() < 1e-12);
        assert!((interpolate(&e, &s, 5.0, 1.5) - 20.0).abs() < 1e-12);
        assert!((interpolate(&e, &s, 5.0, 1.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_interpolate_extrapolation_continuous() {
        let e = vec![0.0, 1.0, 2.0];
        let s = vec![0.0, 10.0, 30.0];
        let decay = 5.0;

        assert!((interpolate(&e, &s, decay, 2.0) - 30.0).abs() < 1e-12);
        assert!((interpolate(&e, &s, decay, 2.0 + 1e-9) - 30.0).abs() < 1e-6);
        assert!((interpolate(&e, &s, decay, -1e-9) - 0.0).abs() < 1e-6);

        // 下端: σ0 - a·d·exp(-d/L)
        let below = interpolate(&e, &s, decay, -1.0);
        assert!((below - (-10.0 * (-0.2_f64).exp())).abs() < 1e-12);

        // 上端: σn + a·d·exp(-d/L)
        let above = interpolate(&e, &s, decay, 3.0);
        assert!((above - (30.0 + 20.0 * (-0.2_f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn test_extrapolation_decays_back() {
        let e = vec![0.0, 1.0];
        let s = vec![0.0, 1.0];
        let far = interpolate(&e, &s, 0.5, 100.0);
        assert!((far - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_ahc_gives_zero_anc() {
        let energies = linspace(-1.0, 1.0, 201);
        let ahc = vec![250.0; energies.len()];
        let calc = NernstCalculator::new(100.0).unwrap();
        let anc = calc.calculate(&energies, &ahc, None).unwrap();

        for v in anc {
            assert!(v.abs() < 1e-9, "anc = {}", v);
        }
    }

    #[test]
    fn test_linear_ahc_matches_closed_form() {
        // σ = s·E 覆盖整个积分区间时，∫ x² (-1/(2+2cosh(βex))) dx = -(kT/e)³ π²/3
        let temperature = 100.0;
        let slope = 150.0;
        let energies = linspace(-3.0, 3.0, 601);
        let ahc: Vec<f64> = energies.iter().map(|e| slope * e).collect();

        let calc = NernstCalculator::new(temperature).unwrap();
        assert!(calc.half_width() < 3.0);
        let anc = calc.calculate(&energies, &ahc, None).unwrap();

        let beta = 1.0 / (BOLTZMANN * temperature);
        let kt_e = BOLTZMANN * temperature / ELEMENTARY_CHARGE;
        let expected = -slope * kt_e.powi(3) * PI * PI / 3.0 * beta / temperature
            * CM_TO_M
            * ELEMENTARY_CHARGE;

        let mid = anc[300];
        assert!(
            ((mid - expected) / expected).abs() < 1e-3,
            "anc = {}, expected = {}",
            mid,
            expected
        );
    }

    #[test]
    fn test_anc_linear_in_slope() {
        let energies = linspace(-0.5, 0.5, 101);
        let a: Vec<f64> = energies.iter().map(|e| 10.0 * e * e).collect();
        let b: Vec<f64> = a.iter().map(|v| 3.0 * v).collect();

        let calc = NernstCalculator::new(50.0).unwrap();
        let anc_a = calc.calculate(&energies, &a, None).unwrap();
        let anc_b = calc.calculate(&energies, &b, None).unwrap();

        let max_abs = anc_b.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        assert!(max_abs > 0.0);
        for (x, y) in anc_a.iter().zip(&anc_b) {
            assert!((3.0 * x - y).abs() <= 1e-9 * max_abs);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(NernstCalculator::new(0.0).is_err());
        assert!(NernstCalculator::new(-10.0).is_err());

        let calc = NernstCalculator::new(10.0).unwrap();
        assert!(calc.calculate(&[0.0], &[1.0], None).is_err());
        assert!(calc.calculate(&[0.0, 0.0], &[1.0, 2.0], None).is_err());
        assert!(calc.calculate(&[0.0, 1.0], &[1.0], None).is_err());
    }
}
