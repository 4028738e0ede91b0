use super::{Cli, CliError};
use anyhow::Context;
use ramones_core::config::{SynthesisConfig, load_synthesis_config};
use ramones_core::domain::SynthesisRequest;
use ramones_core::modules::{SpectrumModule, SpectrumRun};
use tracing::debug;

impl Cli {
    fn config_overrides(&self) -> SynthesisConfig {
        SynthesisConfig {
            min: self.min,
            max: self.max,
            hwhm: self.hwhm,
            adjust: self.adjust.clone(),
            stick_output: self.stick_output.clone(),
            curve_output: self.curve_output.clone(),
        }
    }
}

pub(super) fn run_synthesis_command(cli: Cli) -> Result<i32, CliError> {
    let Some(log_path) = cli.calc.clone() else {
        return Err(CliError::Usage("you have to specify --calc".to_string()));
    };

    let file_config = match &cli.config {
        Some(path) => load_synthesis_config(path)
            .with_context(|| format!("failed to load configuration '{}'", path.display()))?,
        None => SynthesisConfig::default(),
    };
    let settings = file_config.merged(cli.config_overrides());
    debug!(?settings, "resolved synthesis settings");

    let parameters = settings.to_parameters().map_err(CliError::Compute)?;
    let mut request = SynthesisRequest::new(log_path, cli.output_dir, parameters)
        .with_artifact_names(settings.stick_artifact(), settings.curve_artifact());
    if let Some(plot_path) = cli.plot {
        request = request.with_plot_path(plot_path);
    }

    let run = SpectrumModule.run(&request).map_err(CliError::Compute)?;
    println!("{}", render_run_summary(&run));
    Ok(0)
}

fn render_run_summary(run: &SpectrumRun) -> String {
    let spectrum = &run.spectrum;
    let transform = spectrum.transform();
    let mut lines = vec![
        format!(
            "Calibration: scale={:.6} shift={:.6}",
            transform.scale, transform.shift
        ),
        format!("Spectral lines: {}", spectrum.sticks().len()),
        format!("Grid points: {}", spectrum.grid().len()),
    ];
    for artifact in &run.artifacts {
        lines.push(format!("Wrote: {}", artifact.path.display()));
    }
    lines.join("\n")
}
