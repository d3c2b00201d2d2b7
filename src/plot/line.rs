//! # 曲线图
//!
//! AHC 与 ANC 随化学势变化的曲线。单条曲线即一个面板，
//! 多个面板按 `GridLayout` 排成表格。
//!
//! ## 依赖关系
//! - 被 `commands/ahc.rs`, `commands/anc.rs` 调用

use super::{padded_range, Figure, GridLayout};
use crate::error::{plot_err, Result};

use plotters::coord::Shift;
use plotters::prelude::*;

const AHC_COLOR: RGBColor = RGBColor(0, 102, 204);
const ANC_COLOR: RGBColor = RGBColor(204, 51, 0);

/// 单个面板
#[derive(Debug, Clone)]
pub struct LinePanel {
    /// 面板标题（面板上方居中）
    pub title: Option<String>,
    pub x_desc: String,
    pub y_desc: String,
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
}

impl LinePanel {
    /// AHC 曲线
    pub fn ahc(points: impl Iterator<Item = (f64, f64)>) -> Self {
        LinePanel {
            title: None,
            x_desc: "E - E_F (eV)".to_string(),
            y_desc: "σ (S/cm)".to_string(),
            points: points.collect(),
            color: AHC_COLOR,
        }
    }

    /// ANC 曲线
    pub fn anc(points: impl Iterator<Item = (f64, f64)>) -> Self {
        LinePanel {
            title: None,
            x_desc: "E - E_F (eV)".to_string(),
            y_desc: "α (A/(m·K))".to_string(),
            points: points.collect(),
            color: ANC_COLOR,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// 多面板曲线图
#[derive(Debug, Clone)]
pub struct LineGrid {
    pub panels: Vec<LinePanel>,
    pub layout: GridLayout,
}

impl LineGrid {
    pub fn new(panels: Vec<LinePanel>) -> Result<Self> {
        let layout = GridLayout::for_panels(panels.len())?;
        Ok(LineGrid { panels, layout })
    }
}

impl Figure for LineGrid {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE).map_err(plot_err)?;

        let areas = root.split_evenly((self.layout.rows, self.layout.cols));
        for (panel, area) in self.panels.iter().zip(areas.iter()) {
            draw_panel(area, panel, &self.layout)?;
        }
        Ok(())
    }
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &LinePanel,
    layout: &GridLayout,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (x_min, x_max) = padded_range(panel.points.iter().map(|p| p.0), 0.0);
    let (y_min, y_max) = padded_range(panel.points.iter().map(|p| p.1), 0.05);

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(20)
        .x_label_area_size(layout.label_size * 2 + layout.tick_size)
        .y_label_area_size(layout.label_size * 2 + layout.tick_size * 3);
    if let Some(title) = &panel.title {
        builder.caption(title, ("sans-serif", layout.label_size));
    }
    let mut chart = builder
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(panel.x_desc.as_str())
        .y_desc(panel.y_desc.as_str())
        .x_label_style(("sans-serif", layout.tick_size))
        .y_label_style(("sans-serif", layout.tick_size))
        .axis_desc_style(("sans-serif", layout.label_size))
        .draw()
        .map_err(plot_err)?;

    // 零线
    if y_min < 0.0 && y_max > 0.0 {
        chart
            .draw_series(LineSeries::new(
                [(x_min, 0.0), (x_max, 0.0)],
                BLACK.mix(0.4).stroke_width(1),
            ))
            .map_err(plot_err)?;
    }

    chart
        .draw_series(LineSeries::new(
            panel.points.iter().copied(),
            panel.color.stroke_width(2),
        ))
        .map_err(plot_err)?;

    Ok(())
}
