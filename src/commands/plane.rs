//! # plane 命令实现
//!
//! 读取 bulkek_plane.dat，画出所选能带在 k 平面上的曲面。
//!
//! ## 依赖关系
//! - 使用 `cli/plane.rs` 定义的参数
//! - 使用 `parsers/bulkek.rs`, `plot/surface.rs`
//! - 使用 `utils/output.rs`, `utils/ranges.rs`

use crate::cli::plane::PlaneArgs;
use crate::error::Result;
use crate::parsers::bulkek::parse_bulkek_file;
use crate::plot::surface::BandSurface;
use crate::utils::{output, ranges};

/// 默认图像尺寸
const DEFAULT_SIZE: (u32, u32) = (1000, 900);

/// 执行 plane 命令
pub fn execute(args: PlaneArgs) -> Result<()> {
    output::print_header("Band Energies on a k-Plane");

    let offsets = ranges::parse_band_offsets(args.bands.as_deref())?;
    let plane = parse_bulkek_file(&args.dat)?;
    output::print_info(&format!(
        "Read {} k-points ({}x{} mesh) from '{}'",
        plane.kpoints.len(),
        plane.mesh.0,
        plane.mesh.1,
        args.dat.display()
    ));

    let (rows, cols) = plane.interior();
    if rows.len() < 2 || cols.len() < 2 {
        output::print_warning("Mesh has no interior cells; the plot will be empty");
    }

    let figure = BandSurface::new(plane, offsets, (args.emin, args.emax))?;
    output::print_info(&format!(
        "Bands {:?}, energies clipped to [{}, {}] eV",
        figure.offsets, args.emin, args.emax
    ));

    super::render(&figure, &args.output, args.size.resolve(DEFAULT_SIZE))
}
