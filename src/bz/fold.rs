//! # k 点折叠与复制
//!
//! - `fold_into_bz`: 用倒格矢平移把 k 点移到第一布里渊区内
//! - `replicate_in_box`: 在给定的长方体范围内画出 k 点的等价像
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs` 调用
//! - 使用 `models/lattice.rs` 的向量运算和 `models/gap.rs`

use crate::models::lattice::vec3;
use crate::models::{GapMarker, Lattice};

use std::f64::consts::PI;

/// 长方体范围（闭区间）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxLimits {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: (f64, f64),
}

impl BoxLimits {
    pub fn contains(&self, k: [f64; 3]) -> bool {
        let inside = |v: f64, (lo, hi): (f64, f64)| lo <= v && v <= hi;
        inside(k[0], self.x) && inside(k[1], self.y) && inside(k[2], self.z)
    }
}

/// 整数组合 Σ n_i b_i，其中 n_i ∈ {-1, 0, 1} 且至多 `max_nonzero` 个非零
pub fn lattice_combinations(kcell: &[[f64; 3]; 3], max_nonzero: usize) -> Vec<[f64; 3]> {
    let mut shifts = Vec::new();
    for n0 in -1i32..=1 {
        for n1 in -1i32..=1 {
            for n2 in -1i32..=1 {
                let coeffs = [n0, n1, n2];
                let nonzero = coeffs.iter().filter(|&&n| n != 0).count();
                if nonzero > max_nonzero {
                    continue;
                }
                let mut g = [0.0; 3];
                for (n, b) in coeffs.iter().zip(kcell) {
                    g = vec3::add(g, vec3::scale(*b, *n as f64));
                }
                shifts.push(g);
            }
        }
    }
    shifts
}

/// 将 k 点折叠进第一布里渊区
///
/// 先把分数坐标约化到 [-0.5, 0.5)，再在全部 26 个 Σ n_i b_i 中选使 |k| 最小的平移，
/// 直到无法再缩短。这组平移与 `bz/cell.rs` 构造布里渊区用的面相同。
pub fn fold_into_bz(k: [f64; 3], kcell: &[[f64; 3]; 3]) -> [f64; 3] {
    let shifts = lattice_combinations(kcell, 3);
    let scale = kcell.iter().map(|b| vec3::norm(*b)).fold(0.0, f64::max);
    let tol = 1e-12 * scale.max(1.0);

    let mut current = reduce_fractional(k, kcell);
    let mut current_norm = vec3::norm(current);

    loop {
        let best = shifts
            .iter()
            .map(|g| vec3::add(current, *g))
            .map(|p| (vec3::norm(p), p))
            .fold(None, |acc: Option<(f64, [f64; 3])>, (n, p)| match acc {
                Some((best_n, _)) if best_n <= n => acc,
                _ => Some((n, p)),
            });

        match best {
            Some((n, p)) if n < current_norm - tol => {
                current = p;
                current_norm = n;
            }
            _ => break,
        }
    }

    current
}

/// 按分数坐标 f_i = k·a_i / 2π 平移到原胞 [-0.5, 0.5)³ 内
///
/// 实空间基矢 a_i 是倒格矢的倒格矢。
fn reduce_fractional(k: [f64; 3], kcell: &[[f64; 3]; 3]) -> [f64; 3] {
    let real = Lattice::from_vectors(*kcell).reciprocal();
    let mut reduced = k;
    for (a, b) in real.iter().zip(kcell) {
        let f = vec3::dot(k, *a) / (2.0 * PI);
        let n = (f + 0.5).floor();
        if n.is_finite() {
            reduced = vec3::sub(reduced, vec3::scale(*b, n));
        }
    }
    reduced
}

/// 在长方体范围内复制 k 点的等价像
///
/// 等价像为 k + Σ n_i b_i（n_i ∈ {-1, 0, 1}，至多两个非零），
/// 只保留落在范围内的像，每个像沿用原点的能量。
pub fn replicate_in_box(
    markers: &[GapMarker],
    kcell: &[[f64; 3]; 3],
    limits: &BoxLimits,
) -> Vec<GapMarker> {
    let shifts = lattice_combinations(kcell, 2);

    markers
        .iter()
        .flat_map(|m| {
            shifts
                .iter()
                .map(move |g| vec3::add(m.k(), *g))
                .filter(|k| limits.contains(*k))
                .map(move |k| GapMarker::new(k, m.energy))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic(b: f64) -> [[f64; 3]; 3] {
        [[b, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, b]]
    }

    fn hexagonal() -> [[f64; 3]; 3] {
        let b = 2.0 * PI / 3.0 * 2.0 / 3.0_f64.sqrt();
        [
            [b * 3.0_f64.sqrt() / 2.0, -b / 2.0, 0.0],
            [0.0, b, 0.0],
            [0.0, 0.0, 2.0 * PI / 5.0],
        ]
    }

    #[test]
    fn test_combination_count() {
        assert_eq!(lattice_combinations(&cubic(1.0), 2).len(), 19);
        assert_eq!(lattice_combinations(&cubic(1.0), 3).len(), 27);
    }

    #[test]
    fn test_fold_cubic() {
        let kcell = cubic(1.0);
        let folded = fold_into_bz([0.9, -1.2, 2.3], &kcell);
        assert!((folded[0] - (-0.1)).abs() < 1e-12);
        assert!((folded[1] - (-0.2)).abs() < 1e-12);
        assert!((folded[2] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_fold_never_grows_and_is_idempotent() {
        let kcell = hexagonal();
        let samples = [
            [0.0, 0.0, 0.0],
            [1.7, 0.3, -0.4],
            [-2.5, 2.5, 1.1],
            [0.4, -3.1, 0.0],
        ];
        for k in samples {
            let folded = fold_into_bz(k, &kcell);
            assert!(vec3::norm(folded) <= vec3::norm(k) + 1e-12);

            let twice = fold_into_bz(folded, &kcell);
            for i in 0..3 {
                assert!((twice[i] - folded[i]).abs() < 1e-12);
            }

            // 折叠后的点比任何邻近像都更靠近原点
            for g in lattice_combinations(&kcell, 3) {
                assert!(vec3::norm(folded) <= vec3::norm(vec3::add(folded, g)) + 1e-9);
            }
        }
    }

    /// Bi2Se3 型菱方原胞 (a_h = 4.14 Å, c = 28.64 Å, α ≈ 24°) 的倒格矢
    fn rhombohedral() -> [[f64; 3]; 3] {
        let (a, c) = (4.14, 28.64);
        let s = 3.0_f64.sqrt();
        let lattice = Lattice::from_vectors([
            [a / 2.0, -a / (2.0 * s), c / 3.0],
            [0.0, a / s, c / 3.0],
            [-a / 2.0, -a / (2.0 * s), c / 3.0],
        ]);
        lattice.reciprocal()
    }

    /// 在 n_i ∈ [-6, 6] 内穷举等价像的最小模长
    fn shortest_image(k: [f64; 3], kcell: &[[f64; 3]; 3]) -> f64 {
        let mut best = f64::INFINITY;
        for n0 in -6i32..=6 {
            for n1 in -6i32..=6 {
                for n2 in -6i32..=6 {
                    let mut p = k;
                    for (n, b) in [n0, n1, n2].iter().zip(kcell) {
                        p = vec3::add(p, vec3::scale(*b, *n as f64));
                    }
                    best = best.min(vec3::norm(p));
                }
            }
        }
        best
    }

    #[test]
    fn test_fold_rhombohedral_reaches_shortest_image() {
        let kcell = rhombohedral();
        let samples = [
            [1.1, -0.4, 0.9],
            [-0.7, 0.8, -1.3],
            [0.35, 0.35, 0.35],
            [2.0, 1.5, -0.2],
            [-1.6, -0.1, 2.4],
        ];
        for k in samples {
            let folded = fold_into_bz(k, &kcell);
            let expected = shortest_image(k, &kcell);
            assert!(
                (vec3::norm(folded) - expected).abs() < 1e-9,
                "k = {:?}: |folded| = {}, shortest = {}",
                k,
                vec3::norm(folded),
                expected
            );
        }
    }

    #[test]
    fn test_fold_far_point() {
        let kcell = cubic(1.0);
        let folded = fold_into_bz([100.3, 0.0, -57.6], &kcell);
        assert!((folded[0] - 0.3).abs() < 1e-9);
        assert!(folded[1].abs() < 1e-9);
        assert!((folded[2] - 0.4).abs() < 1e-9);

        let kcell = rhombohedral();
        let k = vec3::add(
            [0.1, -0.05, 0.2],
            vec3::add(vec3::scale(kcell[0], 40.0), vec3::scale(kcell[2], -73.0)),
        );
        let folded = fold_into_bz(k, &kcell);
        assert!((vec3::norm(folded) - shortest_image(folded, &kcell)).abs() < 1e-9);
        assert!((vec3::norm(folded) - vec3::norm([0.1, -0.05, 0.2])).abs() < 1e-9);
    }

    #[test]
    fn test_replicate_in_box() {
        let kcell = cubic(1.0);
        let markers = vec![GapMarker::new([0.1, 0.2, 0.0], -0.05)];
        let limits = BoxLimits {
            x: (-1.0, 1.0),
            y: (-1.0, 1.0),
            z: (-0.5, 0.5),
        };

        let images = replicate_in_box(&markers, &kcell, &limits);
        // x: 0.1, -0.9; y: 0.2, -0.8; z: 0.0
        assert_eq!(images.len(), 4);
        assert!(images.iter().all(|m| limits.contains(m.k())));
        assert!(images.iter().all(|m| m.energy == -0.05));
    }
}
