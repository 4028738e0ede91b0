mod model;
mod parser;
mod plot;

pub use model::SimulatedSpectrum;
pub use parser::{
    FREQUENCY_MARKER, RAMAN_ACTIVITY_MARKER, VibrationalColumns, parse_adjust_spec,
    parse_vibrational_log,
};
pub use plot::{PlotError, render_curve_svg};

use crate::domain::{ComputeResult, RamonesError, SynthesisArtifact, SynthesisRequest};
use crate::modules::serialization::write_text_artifact;
use crate::modules::traits::ModuleExecutor;
use std::fs;
use std::path::Path;
use tracing::info;

/// Outcome of one synthesis run: the in-memory spectrum and the files written.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumRun {
    pub spectrum: SimulatedSpectrum,
    pub artifacts: Vec<SynthesisArtifact>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpectrumModule;

impl SpectrumModule {
    pub fn run(&self, request: &SynthesisRequest) -> ComputeResult<SpectrumRun> {
        let source = read_log_source(&request.log_path)?;
        let spectrum = SimulatedSpectrum::from_log_source(&source, &request.parameters)?;
        if let Some(plot_path) = &request.plot_path {
            if spectrum.grid().is_empty() {
                return Err(empty_plot_error(plot_path));
            }
        }

        let stick_path = request.output_dir.join(&request.stick_artifact);
        let curve_path = request.output_dir.join(&request.curve_artifact);
        write_table(&stick_path, &spectrum.render_stick_table())?;
        write_table(&curve_path, &spectrum.render_curve_table())?;
        let mut artifacts = vec![
            SynthesisArtifact::new(stick_path),
            SynthesisArtifact::new(curve_path),
        ];

        if let Some(plot_path) = &request.plot_path {
            write_plot(plot_path, &spectrum)?;
            artifacts.push(SynthesisArtifact::new(plot_path.clone()));
        }

        for artifact in &artifacts {
            info!(path = %artifact.path.display(), "wrote artifact");
        }

        Ok(SpectrumRun {
            spectrum,
            artifacts,
        })
    }
}

impl ModuleExecutor for SpectrumModule {
    fn execute(&self, request: &SynthesisRequest) -> ComputeResult<Vec<SynthesisArtifact>> {
        self.run(request).map(|run| run.artifacts)
    }
}

fn read_log_source(path: &Path) -> ComputeResult<String> {
    fs::read_to_string(path).map_err(|source| {
        RamonesError::io_system(
            "IO.LOG_READ",
            format!("failed to read calculation log '{}': {}", path.display(), source),
        )
    })
}

fn write_table(path: &Path, contents: &str) -> ComputeResult<()> {
    write_text_artifact(path, contents).map_err(|source| {
        RamonesError::io_system(
            "IO.TABLE_WRITE",
            format!("failed to write table '{}': {}", path.display(), source),
        )
    })
}

fn write_plot(path: &Path, spectrum: &SimulatedSpectrum) -> ComputeResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| {
            RamonesError::io_system(
                "IO.PLOT_WRITE",
                format!("failed to create plot directory '{}': {}", parent.display(), source),
            )
        })?;
    }

    render_curve_svg(spectrum.grid(), spectrum.curve(), path).map_err(|error| match error {
        PlotError::EmptyCurve => empty_plot_error(path),
        other => RamonesError::io_system(
            "IO.PLOT_WRITE",
            format!("failed to write plot '{}': {}", path.display(), other),
        ),
    })
}

fn empty_plot_error(path: &Path) -> RamonesError {
    RamonesError::input_validation(
        "INPUT.PLOT_EMPTY",
        format!("cannot plot '{}': the sampling window is empty", path.display()),
    )
}
