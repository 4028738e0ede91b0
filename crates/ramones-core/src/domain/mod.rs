pub mod errors;

pub use errors::{ComputeResult, ParserResult, RamonesError, RamonesErrorCategory, RamonesResult};

use std::path::PathBuf;

pub const DEFAULT_GRID_MIN: f64 = 1000.0;
pub const DEFAULT_GRID_MAX: f64 = 1800.0;
pub const DEFAULT_HWHM: f64 = 8.0;
pub const DEFAULT_STICK_ARTIFACT: &str = "xy.stick";
pub const DEFAULT_CURVE_ARTIFACT: &str = "xy.lorentz";

/// One computed vibrational transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralLine {
    pub frequency: f64,
    pub intensity: f64,
}

impl SpectralLine {
    pub const fn new(frequency: f64, intensity: f64) -> Self {
        Self {
            frequency,
            intensity,
        }
    }
}

/// A computed frequency paired with the observed frequency it should land on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPair {
    pub measured: f64,
    pub reference: f64,
}

impl AnchorPair {
    pub const fn new(measured: f64, reference: f64) -> Self {
        Self {
            measured,
            reference,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CalibrationAnchors {
    #[default]
    None,
    Single(AnchorPair),
    Pair(AnchorPair, AnchorPair),
}

impl CalibrationAnchors {
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Single(_) => 1,
            Self::Pair(_, _) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn pairs(&self) -> Vec<AnchorPair> {
        match *self {
            Self::None => Vec::new(),
            Self::Single(first) => vec![first],
            Self::Pair(first, second) => vec![first, second],
        }
    }
}

/// Affine map `frequency -> scale * frequency + shift`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationTransform {
    pub scale: f64,
    pub shift: f64,
}

impl CalibrationTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        shift: 0.0,
    };

    pub const fn new(scale: f64, shift: f64) -> Self {
        Self { scale, shift }
    }

    pub fn apply(&self, frequency: f64) -> f64 {
        self.scale * frequency + self.shift
    }

    pub fn apply_to_lines(&self, lines: &[SpectralLine]) -> Vec<SpectralLine> {
        lines
            .iter()
            .map(|line| SpectralLine::new(self.apply(line.frequency), line.intensity))
            .collect()
    }
}

impl Default for CalibrationTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Strictly increasing sample abscissas.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleGrid {
    points: Vec<f64>,
}

impl SampleGrid {
    pub(crate) fn from_points(points: Vec<f64>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.points.last().copied()
    }
}

/// Broadened ordinates, one per grid point, scaled to a peak magnitude of 1.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpectrumCurve {
    ordinates: Vec<f64>,
}

impl SpectrumCurve {
    pub(crate) fn from_ordinates(ordinates: Vec<f64>) -> Self {
        Self { ordinates }
    }

    pub fn ordinates(&self) -> &[f64] {
        &self.ordinates
    }

    pub fn len(&self) -> usize {
        self.ordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordinates.is_empty()
    }

    pub fn peak_magnitude(&self) -> f64 {
        self.ordinates
            .iter()
            .fold(0.0_f64, |largest, value| largest.max(value.abs()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisParameters {
    pub grid_min: f64,
    pub grid_max: f64,
    pub hwhm: f64,
    pub anchors: CalibrationAnchors,
}

impl Default for SynthesisParameters {
    fn default() -> Self {
        Self {
            grid_min: DEFAULT_GRID_MIN,
            grid_max: DEFAULT_GRID_MAX,
            hwhm: DEFAULT_HWHM,
            anchors: CalibrationAnchors::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub log_path: PathBuf,
    pub output_dir: PathBuf,
    pub parameters: SynthesisParameters,
    pub stick_artifact: String,
    pub curve_artifact: String,
    pub plot_path: Option<PathBuf>,
}

impl SynthesisRequest {
    pub fn new(
        log_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        parameters: SynthesisParameters,
    ) -> Self {
        Self {
            log_path: log_path.into(),
            output_dir: output_dir.into(),
            parameters,
            stick_artifact: DEFAULT_STICK_ARTIFACT.to_string(),
            curve_artifact: DEFAULT_CURVE_ARTIFACT.to_string(),
            plot_path: None,
        }
    }

    pub fn with_artifact_names(
        mut self,
        stick_artifact: impl Into<String>,
        curve_artifact: impl Into<String>,
    ) -> Self {
        self.stick_artifact = stick_artifact.into();
        self.curve_artifact = curve_artifact.into();
        self
    }

    pub fn with_plot_path(mut self, plot_path: impl Into<PathBuf>) -> Self {
        self.plot_path = Some(plot_path.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisArtifact {
    pub path: PathBuf,
}

impl SynthesisArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}
