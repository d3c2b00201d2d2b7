//! # curv 命令实现
//!
//! Berry 曲率在 k 平面上的三种画法：
//! - `height`: 一个分量的色图（x→Ω_x, y→Ω_y, z→Ω_z）
//! - `vec2d`: 垂直于给定轴的平面内投影，颜色为投影模长
//! - `vec3d`: 完整曲率向量，viridis_r 着色
//!
//! 向量图在方形网格的两个方向上每隔 `stride` 个点抽样。
//!
//! ## 依赖关系
//! - 使用 `cli/curv.rs` 定义的参数
//! - 使用 `parsers/curv_dat.rs`, `plot/heatmap.rs`, `plot/vector.rs`
//! - 使用 `utils/output.rs`, `utils/ranges.rs`

use crate::cli::curv::{
    CurvArgs, CurvCommands, CurvHeightArgs, CurvInput, CurvVec2dArgs, CurvVec3dArgs,
};
use crate::error::{Result, WtplotError};
use crate::models::{Axis, CurvatureGrid};
use crate::parsers::curv_dat::parse_curv_file;
use crate::plot::heatmap::CurvatureHeatmap;
use crate::plot::padded_range;
use crate::plot::vector::{VectorField2d, VectorField3d};
use crate::utils::{output, ranges};

use std::path::PathBuf;

/// 平面图的默认尺寸
const PLANE_SIZE: (u32, u32) = (900, 800);
/// 三维图的默认尺寸
const VOLUME_SIZE: (u32, u32) = (1000, 900);

/// 执行 curv 命令
pub fn execute(args: CurvArgs) -> Result<()> {
    match args.command {
        CurvCommands::Height(args) => execute_height(args),
        CurvCommands::Vec2d(args) => execute_vec2d(args),
        CurvCommands::Vec3d(args) => execute_vec3d(args),
    }
}

/// 读取曲率文件并确定网格边长
fn load(input: &CurvInput) -> Result<(CurvatureGrid, usize)> {
    let columns = ranges::parse_columns(&input.columns)?;
    let grid = parse_curv_file(&input.curv_dat, columns)?;
    let mesh = grid.square_mesh(input.mesh)?;

    output::print_info(&format!(
        "Read {} k-points ({}x{} mesh, {} component(s)) from '{}'",
        grid.len(),
        mesh,
        mesh,
        grid.components(),
        input.curv_dat.display()
    ));
    Ok((grid, mesh))
}

fn output_path(input: &CurvInput, default: String) -> PathBuf {
    input
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default))
}

fn execute_height(args: CurvHeightArgs) -> Result<()> {
    let axis: Axis = args.axis.into();
    output::print_header(&format!("Berry Curvature Ω_{}", axis));

    let (grid, mesh) = load(&args.input)?;
    let values = grid.component(axis.index())?;
    let clim = args.clim.as_deref().map(ranges::parse_pair).transpose()?;

    let figure = CurvatureHeatmap::new(
        grid.plane_kpoints(),
        values,
        mesh,
        clim,
        format!("Ω_{}", axis),
    )?;
    output::print_info(&format!(
        "Colour range: {:.4} to {:.4}",
        figure.clim.0, figure.clim.1
    ));

    let path = output_path(&args.input, format!("curv_height_{}.png", axis));
    super::render(&figure, &path, args.input.size.resolve(PLANE_SIZE))
}

fn execute_vec2d(args: CurvVec2dArgs) -> Result<()> {
    let axis: Axis = args.axis.into();
    output::print_header(&format!("Berry Curvature (projection ⊥ {})", axis));

    let (grid, mesh) = load(&args.input)?;
    let indices = grid.subsample(mesh, args.stride);
    let kpoints = grid.plane_kpoints();

    let origins = indices.iter().map(|&i| kpoints[i]).collect();
    let vectors = indices
        .iter()
        .map(|&i| grid.projected(i, axis))
        .collect::<Result<Vec<_>>>()?;
    let clim = args.clim.as_deref().map(ranges::parse_pair).transpose()?;
    output::print_info(&format!("Drawing {} arrows", indices.len()));

    let [a, b] = axis.plane_indices();
    let label = format!("|(Ω_{}, Ω_{})|", Axis::ALL[a], Axis::ALL[b]);
    let figure = VectorField2d::new(origins, vectors, clim, args.nmax, label);

    let path = output_path(&args.input, format!("curv_vec2d_{}.png", axis));
    super::render(&figure, &path, args.input.size.resolve(PLANE_SIZE))
}

fn execute_vec3d(args: CurvVec3dArgs) -> Result<()> {
    output::print_header("Berry Curvature (3D)");

    let (grid, mesh) = load(&args.input)?;
    if grid.components() < 3 {
        return Err(WtplotError::InvalidArgument(format!(
            "3D arrows need 3 curvature components, got {} (check --columns)",
            grid.components()
        )));
    }
    if args.nmax.is_nan() || args.nmax <= 0.0 {
        return Err(WtplotError::InvalidArgument(format!(
            "nmax must be positive, got {}",
            args.nmax
        )));
    }
    let clim = ranges::parse_pair(&args.clim)?;

    let kpoints = grid.plane_kpoints();
    let x_range = padded_range(kpoints.iter().map(|k| k.0), 0.0);
    let y_range = padded_range(kpoints.iter().map(|k| k.1), 0.0);

    let indices = grid.subsample(mesh, args.stride);
    let figure = VectorField3d {
        origins: indices.iter().map(|&i| kpoints[i]).collect(),
        vectors: indices
            .iter()
            .map(|&i| {
                let c = &grid.curvature[i];
                [c[0], c[1], c[2]]
            })
            .collect(),
        x_range,
        y_range,
        clim,
        nmax: args.nmax,
    };
    output::print_info(&format!("Drawing {} arrows", indices.len()));

    let path = output_path(&args.input, "curv_vec3d.png".to_string());
    super::render(&figure, &path, args.input.size.resolve(VOLUME_SIZE))
}
