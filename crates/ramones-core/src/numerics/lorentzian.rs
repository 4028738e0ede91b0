use crate::domain::{SampleGrid, SpectralLine, SpectrumCurve};
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthesisError {
    #[error("lorentzian half-width must be finite and > 0, got {value}")]
    InvalidHalfWidth { value: f64 },
    #[error("spectral line {index} must be finite, got frequency={frequency}, intensity={intensity}")]
    NonFiniteLine {
        index: usize,
        frequency: f64,
        intensity: f64,
    },
    #[error("broadened spectrum is zero at all {points} grid points and cannot be normalized")]
    EmptySpectrum { points: usize },
    #[error("broadened spectrum overflows at grid point {index} and cannot be normalized")]
    Overflow { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorentzianBroadeningInput<'a> {
    pub grid: &'a SampleGrid,
    pub lines: &'a [SpectralLine],
    pub hwhm: f64,
}

impl<'a> LorentzianBroadeningInput<'a> {
    pub fn new(grid: &'a SampleGrid, lines: &'a [SpectralLine], hwhm: f64) -> Self {
        Self { grid, lines, hwhm }
    }
}

/// Lorentzian lobe with peak height `intensity` at `center`.
pub fn lorentzian(x: f64, center: f64, intensity: f64, hwhm: f64) -> f64 {
    let reduced = (x - center) / hwhm;
    intensity / (1.0 + reduced * reduced)
}

/// Sum every line's lobe at every grid point, without normalization.
///
/// Grid points are evaluated in parallel. Each point sums the lines
/// sequentially in input order, so the result does not depend on the
/// thread count.
pub fn broaden(input: LorentzianBroadeningInput<'_>) -> Result<Vec<f64>, SynthesisError> {
    validate_broadening_input(&input)?;

    let lines = input.lines;
    let hwhm = input.hwhm;
    Ok(input
        .grid
        .points()
        .par_iter()
        .map(|&x| {
            lines.iter().fold(0.0_f64, |sum, line| {
                sum + lorentzian(x, line.frequency, line.intensity, hwhm)
            })
        })
        .collect())
}

/// Divide every ordinate by the largest magnitude so the peak becomes 1.
pub fn normalize_peak(ordinates: &[f64]) -> Result<Vec<f64>, SynthesisError> {
    if ordinates.is_empty() {
        return Ok(Vec::new());
    }
    if let Some(index) = ordinates.iter().position(|value| !value.is_finite()) {
        return Err(SynthesisError::Overflow { index });
    }

    let largest = ordinates
        .iter()
        .fold(0.0_f64, |largest, value| largest.max(value.abs()));
    if largest == 0.0 {
        return Err(SynthesisError::EmptySpectrum {
            points: ordinates.len(),
        });
    }

    Ok(ordinates.iter().map(|value| value / largest).collect())
}

/// Broaden the stick spectrum over `grid` and normalize it to unit peak.
pub fn synthesize(
    grid: &SampleGrid,
    lines: &[SpectralLine],
    hwhm: f64,
) -> Result<SpectrumCurve, SynthesisError> {
    let raw = broaden(LorentzianBroadeningInput::new(grid, lines, hwhm))?;
    normalize_peak(&raw).map(SpectrumCurve::from_ordinates)
}

fn validate_broadening_input(input: &LorentzianBroadeningInput<'_>) -> Result<(), SynthesisError> {
    if !input.hwhm.is_finite() || input.hwhm <= 0.0 {
        return Err(SynthesisError::InvalidHalfWidth { value: input.hwhm });
    }

    for (index, line) in input.lines.iter().enumerate() {
        if !line.frequency.is_finite() || !line.intensity.is_finite() {
            return Err(SynthesisError::NonFiniteLine {
                index,
                frequency: line.frequency,
                intensity: line.intensity,
            });
        }
    }

    Ok(())
}
