//! # 晶格与倒格子
//!
//! 实空间晶格向量及其倒格矢。wt.in 的 LATTICE 卡片解析后得到 `Lattice`，
//! 布里渊区相关的计算都基于 `reciprocal()` 给出的倒格矢。
//!
//! ## 依赖关系
//! - 被 `parsers/wt_in.rs` 和 `bz/` 使用
//! - 无外部模块依赖

use std::f64::consts::PI;

/// 三维向量运算的小工具
pub mod vec3 {
    pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    pub fn norm(a: [f64; 3]) -> f64 {
        dot(a, a).sqrt()
    }

    pub fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    pub fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
        [a[0] * s, a[1] * s, a[2] * s]
    }
}

/// 晶格参数表示
#[derive(Debug, Clone)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c (Å)
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Lattice { matrix }
    }

    /// 计算晶格体积（带符号）
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.matrix;
        vec3::dot(a, vec3::cross(b, c))
    }

    /// 倒格矢 b_i = 2π (a_j × a_k) / V，单位 1/Å
    pub fn reciprocal(&self) -> [[f64; 3]; 3] {
        let [a, b, c] = self.matrix;
        let factor = 2.0 * PI / self.volume();
        [
            vec3::scale(vec3::cross(b, c), factor),
            vec3::scale(vec3::cross(c, a), factor),
            vec3::scale(vec3::cross(a, b), factor),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_volume_cubic() {
        let lattice = Lattice::from_vectors([[5.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 5.0]]);
        assert!((lattice.volume() - 125.0).abs() < 1e-9);
    }

    #[test]
    fn test_reciprocal_orthogonality() {
        // a_i · b_j = 2π δ_ij
        let lattice = Lattice::from_vectors([[3.0, 0.0, 0.0], [1.5, 2.598, 0.0], [0.0, 0.0, 5.0]]);
        let recip = lattice.reciprocal();

        for i in 0..3 {
            for j in 0..3 {
                let d = vec3::dot(lattice.matrix[i], recip[j]);
                let expected = if i == j { 2.0 * PI } else { 0.0 };
                assert!((d - expected).abs() < 1e-9, "a{} . b{} = {}", i, j, d);
            }
        }
    }

    #[test]
    fn test_reciprocal_cubic_length() {
        let lattice = Lattice::from_vectors([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
        let recip = lattice.reciprocal();
        assert!((vec3::norm(recip[0]) - PI).abs() < 1e-12);
    }
}
