use super::parser::parse_vibrational_log;
use crate::domain::{
    CalibrationTransform, ComputeResult, RamonesError, SampleGrid, SpectralLine, SpectrumCurve,
    SynthesisParameters,
};
use crate::modules::serialization::format_fixed_f64;
use crate::numerics::{
    CalibrationError, GridError, SynthesisError, build_grid, calibrate, synthesize,
};
use tracing::{debug, warn};

const TABLE_PRECISION: usize = 6;

/// Calibrated stick spectrum together with its broadened curve.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSpectrum {
    transform: CalibrationTransform,
    sticks: Vec<SpectralLine>,
    grid: SampleGrid,
    curve: SpectrumCurve,
}

impl SimulatedSpectrum {
    pub fn from_log_source(source: &str, parameters: &SynthesisParameters) -> ComputeResult<Self> {
        let lines = parse_vibrational_log(source)?.into_lines()?;
        Self::from_lines(&lines, parameters)
    }

    pub fn from_lines(
        raw_lines: &[SpectralLine],
        parameters: &SynthesisParameters,
    ) -> ComputeResult<Self> {
        let transform = calibrate(&parameters.anchors).map_err(calibration_error)?;
        let sticks = transform.apply_to_lines(raw_lines);
        debug!(
            lines = sticks.len(),
            anchors = parameters.anchors.len(),
            scale = transform.scale,
            shift = transform.shift,
            "calibrated stick spectrum"
        );

        let grid = build_grid(parameters.grid_min, parameters.grid_max).map_err(grid_error)?;
        if grid.is_empty() {
            warn!(
                min = parameters.grid_min,
                max = parameters.grid_max,
                "sampling window is empty; the curve table will have no rows"
            );
        }

        let curve = synthesize(&grid, &sticks, parameters.hwhm).map_err(synthesis_error)?;
        debug!(points = grid.len(), hwhm = parameters.hwhm, "broadened spectrum");

        Ok(Self {
            transform,
            sticks,
            grid,
            curve,
        })
    }

    pub fn transform(&self) -> CalibrationTransform {
        self.transform
    }

    pub fn sticks(&self) -> &[SpectralLine] {
        &self.sticks
    }

    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    pub fn curve(&self) -> &SpectrumCurve {
        &self.curve
    }

    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.grid
            .points()
            .iter()
            .copied()
            .zip(self.curve.ordinates().iter().copied())
    }

    pub fn render_stick_table(&self) -> String {
        render_two_column_table(
            self.sticks
                .iter()
                .map(|line| (line.frequency, line.intensity)),
        )
    }

    pub fn render_curve_table(&self) -> String {
        render_two_column_table(self.samples())
    }
}

fn render_two_column_table(rows: impl Iterator<Item = (f64, f64)>) -> String {
    rows.map(|(x, y)| {
        format!(
            "{} {}\n",
            format_fixed_f64(x, 0, TABLE_PRECISION),
            format_fixed_f64(y, 0, TABLE_PRECISION)
        )
    })
    .collect()
}

fn calibration_error(error: CalibrationError) -> RamonesError {
    match error {
        CalibrationError::NonFiniteAnchor { .. } => {
            RamonesError::input_validation("INPUT.ADJUST_VALUE", error.to_string())
        }
        CalibrationError::DegenerateAnchors { .. }
        | CalibrationError::NonFiniteTransform { .. } => {
            RamonesError::computation("RUN.DEGENERATE_CALIBRATION", error.to_string())
        }
    }
}

fn grid_error(error: GridError) -> RamonesError {
    // both variants describe an unusable window
    RamonesError::input_validation("INPUT.GRID_BOUNDS", error.to_string())
}

fn synthesis_error(error: SynthesisError) -> RamonesError {
    match error {
        SynthesisError::InvalidHalfWidth { .. } => {
            RamonesError::input_validation("INPUT.HWHM", error.to_string())
        }
        SynthesisError::NonFiniteLine { .. } => {
            RamonesError::input_validation("INPUT.LOG_VALUE", error.to_string())
        }
        SynthesisError::EmptySpectrum { .. } => {
            RamonesError::computation("RUN.EMPTY_SPECTRUM", error.to_string())
        }
        SynthesisError::Overflow { .. } => {
            RamonesError::computation("RUN.SPECTRUM_OVERFLOW", error.to_string())
        }
    }
}
