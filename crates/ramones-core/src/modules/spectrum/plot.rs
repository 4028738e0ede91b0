//! SVG rendering of a broadened spectrum.

use crate::domain::{SampleGrid, SpectrumCurve};
use plotters::prelude::*;
use std::path::Path;

const PLOT_SIZE: (u32, u32) = (1024, 640);
const Y_HEADROOM: f64 = 1.05;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlotError {
    #[error("cannot plot an empty spectrum curve")]
    EmptyCurve,
    #[error("plot grid has {grid} points but the curve has {curve}")]
    LengthMismatch { grid: usize, curve: usize },
    #[error("failed to render plot: {0}")]
    Render(String),
}

fn render_error(error: impl std::fmt::Display) -> PlotError {
    PlotError::Render(error.to_string())
}

/// Draw `curve` against `grid` as a single line with a labelled mesh.
pub fn render_curve_svg(
    grid: &SampleGrid,
    curve: &SpectrumCurve,
    output_path: &Path,
) -> Result<(), PlotError> {
    if grid.len() != curve.len() {
        return Err(PlotError::LengthMismatch {
            grid: grid.len(),
            curve: curve.len(),
        });
    }
    let (Some(x_min), Some(x_last)) = (grid.first(), grid.last()) else {
        return Err(PlotError::EmptyCurve);
    };
    // a single sample still needs a non-zero axis span
    let x_max = if x_last > x_min { x_last } else { x_min + 1.0 };
    let y_min = curve
        .ordinates()
        .iter()
        .fold(0.0_f64, |lowest, value| lowest.min(*value));

    let root = SVGBackend::new(output_path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..Y_HEADROOM)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc("frequency")
        .y_desc("intensity")
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(LineSeries::new(
            grid.points()
                .iter()
                .copied()
                .zip(curve.ordinates().iter().copied()),
            BLUE.stroke_width(1),
        ))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{PlotError, render_curve_svg};
    use crate::domain::{SpectralLine, SpectrumCurve};
    use crate::numerics::{build_grid, synthesize};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn renders_svg_document() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("spectrum.svg");
        let grid = build_grid(1000.0, 1100.0).expect("grid");
        let curve = synthesize(&grid, &[SpectralLine::new(1040.0, 1.0)], 8.0).expect("curve");

        render_curve_svg(&grid, &curve, &path).expect("plot should render");

        let svg = fs::read_to_string(&path).expect("svg should be readable");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("frequency"));
        assert!(svg.contains("intensity"));
    }

    #[test]
    fn empty_curve_is_rejected() {
        let temp = TempDir::new().expect("tempdir should be created");
        let grid = build_grid(10.0, 0.0).expect("grid");
        assert_eq!(
            render_curve_svg(&grid, &SpectrumCurve::default(), &temp.path().join("x.svg")),
            Err(PlotError::EmptyCurve)
        );
    }
}
