//! # 布里渊区多面体
//!
//! 第一布里渊区即倒格子的 Wigner-Seitz 原胞：到原点比到任何倒格点 G 都近的区域，
//! 由半空间 G·k <= |G|²/2 的交集给出。
//!
//! ## 算法概述
//! 1. 取 G = Σ n_i b_i（n_i ∈ {-1, 0, 1}，不全为零）作为候选面
//! 2. 任取三个面求交点，保留满足所有半空间约束的交点作为顶点
//! 3. 两个顶点共享两个不平行的面时，它们之间是一条棱
//!
//! ## 依赖关系
//! - 被 `plot/scatter.rs` 绘制线框时使用
//! - 使用 `bz/fold.rs` 的倒格矢组合

use crate::bz::fold::lattice_combinations;
use crate::models::lattice::vec3;

/// 布里渊区的一条棱
pub type Edge = ([f64; 3], [f64; 3]);

/// 候选面: 法向 G 与偏移 |G|²/2
struct Plane {
    normal: [f64; 3],
    offset: f64,
}

/// 计算第一布里渊区的顶点
pub fn wigner_seitz_vertices(kcell: &[[f64; 3]; 3]) -> Vec<[f64; 3]> {
    let (planes, tol) = candidate_planes(kcell);
    vertices_with_planes(&planes, tol)
        .into_iter()
        .map(|(v, _)| v)
        .collect()
}

/// 计算第一布里渊区的棱
pub fn wigner_seitz_edges(kcell: &[[f64; 3]; 3]) -> Vec<Edge> {
    let (planes, tol) = candidate_planes(kcell);
    let vertices = vertices_with_planes(&planes, tol);

    let mut edges = Vec::new();
    for (i, (u, u_planes)) in vertices.iter().enumerate() {
        for (v, v_planes) in vertices.iter().skip(i + 1) {
            let shared: Vec<usize> = u_planes
                .iter()
                .filter(|p| v_planes.contains(p))
                .copied()
                .collect();
            if has_independent_pair(&planes, &shared) {
                edges.push((*u, *v));
            }
        }
    }
    edges
}

fn candidate_planes(kcell: &[[f64; 3]; 3]) -> (Vec<Plane>, f64) {
    let planes: Vec<Plane> = lattice_combinations(kcell, 3)
        .into_iter()
        .filter(|g| vec3::norm(*g) > 1e-12)
        .map(|g| Plane {
            normal: g,
            offset: vec3::dot(g, g) / 2.0,
        })
        .collect();

    let scale = planes.iter().map(|p| p.offset).fold(0.0, f64::max);
    (planes, 1e-9 * scale.max(1e-12))
}

/// 顶点及其所在的面
fn vertices_with_planes(planes: &[Plane], tol: f64) -> Vec<([f64; 3], Vec<usize>)> {
    let mut vertices: Vec<[f64; 3]> = Vec::new();
    let n = planes.len();

    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let Some(v) = intersect(&planes[i], &planes[j], &planes[k]) else {
                    continue;
                };
                let inside = planes
                    .iter()
                    .all(|p| vec3::dot(p.normal, v) <= p.offset + tol);
                if !inside {
                    continue;
                }
                let length_tol = tol.sqrt();
                if vertices
                    .iter()
                    .all(|u| vec3::norm(vec3::sub(*u, v)) > length_tol)
                {
                    vertices.push(v);
                }
            }
        }
    }

    vertices
        .into_iter()
        .map(|v| {
            let on: Vec<usize> = planes
                .iter()
                .enumerate()
                .filter(|(_, p)| (vec3::dot(p.normal, v) - p.offset).abs() <= tol)
                .map(|(idx, _)| idx)
                .collect();
            (v, on)
        })
        .collect()
}

/// 三个面的交点（Cramer 法则）
fn intersect(a: &Plane, b: &Plane, c: &Plane) -> Option<[f64; 3]> {
    let bc = vec3::cross(b.normal, c.normal);
    let det = vec3::dot(a.normal, bc);
    let scale = vec3::norm(a.normal) * vec3::norm(b.normal) * vec3::norm(c.normal);
    if det.abs() < 1e-10 * scale {
        return None;
    }

    let ca = vec3::cross(c.normal, a.normal);
    let ab = vec3::cross(a.normal, b.normal);
    let v = vec3::add(
        vec3::add(vec3::scale(bc, a.offset), vec3::scale(ca, b.offset)),
        vec3::scale(ab, c.offset),
    );
    Some(vec3::scale(v, 1.0 / det))
}

fn has_independent_pair(planes: &[Plane], shared: &[usize]) -> bool {
    for (i, &p) in shared.iter().enumerate() {
        for &q in &shared[i + 1..] {
            let c = vec3::cross(planes[p].normal, planes[q].normal);
            let scale = vec3::norm(planes[p].normal) * vec3::norm(planes[q].normal);
            if vec3::norm(c) > 1e-8 * scale {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_zone() {
        let b = 2.0;
        let kcell = [[b, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, b]];

        let vertices = wigner_seitz_vertices(&kcell);
        assert_eq!(vertices.len(), 8);
        for v in &vertices {
            for c in v {
                assert!((c.abs() - b / 2.0).abs() < 1e-9);
            }
        }

        let edges = wigner_seitz_edges(&kcell);
        assert_eq!(edges.len(), 12);
        for (p, q) in &edges {
            assert!((vec3::norm(vec3::sub(*p, *q)) - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hexagonal_prism_zone() {
        let s = 3.0_f64.sqrt();
        let kcell = [[1.0, -1.0 / s, 0.0], [0.0, 2.0 / s, 0.0], [0.0, 0.0, 1.5]];

        assert_eq!(wigner_seitz_vertices(&kcell).len(), 12);
        assert_eq!(wigner_seitz_edges(&kcell).len(), 18);
    }

    #[test]
    fn test_fcc_reciprocal_is_truncated_octahedron() {
        // 面心立方的倒格子是体心立方，布里渊区为截角八面体: 24 顶点, 36 棱
        let kcell = [[-1.0, 1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, -1.0]];

        assert_eq!(wigner_seitz_vertices(&kcell).len(), 24);
        assert_eq!(wigner_seitz_edges(&kcell).len(), 36);
    }
}
