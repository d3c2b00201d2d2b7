//! # 颜色映射
//!
//! 以锚点颜色线性插值的连续色图，提供 viridis 与 RdYlBu 两种。
//!
//! ## 依赖关系
//! - 被 `plot/` 下各图表使用
//! - 使用 `plotters` 的 RGBColor

use plotters::style::RGBColor;

const VIRIDIS: [(u8, u8, u8); 10] = [
    (68, 1, 84),
    (72, 40, 120),
    (62, 74, 137),
    (49, 104, 142),
    (38, 130, 142),
    (31, 158, 137),
    (53, 183, 121),
    (109, 205, 89),
    (180, 222, 44),
    (253, 231, 37),
];

const RD_YL_BU: [(u8, u8, u8); 11] = [
    (165, 0, 38),
    (215, 48, 39),
    (244, 109, 67),
    (253, 174, 97),
    (254, 224, 144),
    (255, 255, 191),
    (224, 243, 248),
    (171, 217, 233),
    (116, 173, 209),
    (69, 117, 180),
    (49, 54, 149),
];

/// 色图
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    Viridis,
    /// 反向 viridis
    ViridisR,
    RdYlBu,
}

impl ColorMap {
    /// t ∈ [0, 1] 处的颜色，越界时取端点
    pub fn color(self, t: f64) -> RGBColor {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            ColorMap::Viridis => interpolate(&VIRIDIS, t),
            ColorMap::ViridisR => interpolate(&VIRIDIS, 1.0 - t),
            ColorMap::RdYlBu => interpolate(&RD_YL_BU, t),
        }
    }

    /// 将 v 按 [min, max] 归一化后取色
    pub fn color_in(self, v: f64, min: f64, max: f64) -> RGBColor {
        if max <= min {
            return self.color(0.5);
        }
        self.color((v - min) / (max - min))
    }
}

fn interpolate(anchors: &[(u8, u8, u8)], t: f64) -> RGBColor {
    let segments = (anchors.len() - 1) as f64;
    let pos = t * segments;
    let i = (pos.floor() as usize).min(anchors.len() - 2);
    let frac = pos - i as f64;

    let (r0, g0, b0) = anchors[i];
    let (r1, g1, b1) = anchors[i + 1];
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;

    RGBColor(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ColorMap::Viridis.color(0.0), RGBColor(68, 1, 84));
        assert_eq!(ColorMap::Viridis.color(1.0), RGBColor(253, 231, 37));
        assert_eq!(ColorMap::ViridisR.color(0.0), RGBColor(253, 231, 37));
        assert_eq!(ColorMap::RdYlBu.color(1.0), RGBColor(49, 54, 149));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(ColorMap::Viridis.color(-3.0), ColorMap::Viridis.color(0.0));
        assert_eq!(ColorMap::Viridis.color(7.0), ColorMap::Viridis.color(1.0));
        assert_eq!(ColorMap::RdYlBu.color(f64::NAN), ColorMap::RdYlBu.color(0.0));
    }

    #[test]
    fn test_color_in_range() {
        assert_eq!(
            ColorMap::Viridis.color_in(5.0, 0.0, 10.0),
            ColorMap::Viridis.color(0.5)
        );
        assert_eq!(
            ColorMap::Viridis.color_in(1.0, 2.0, 2.0),
            ColorMap::Viridis.color(0.5)
        );
    }
}
