mod commands;
mod logging;

use clap::{CommandFactory, Parser};
use ramones_core::domain::RamonesError;
use std::path::PathBuf;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let diagnostic = error.as_ramones_error();
            eprintln!("{}", diagnostic.diagnostic_line());
            diagnostic.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    if args.is_empty() {
        // a bare invocation shows usage instead of failing on the missing log
        println!("{}", Cli::command().render_help().to_string().trim_end());
        return Ok(0);
    }

    let full_args = std::iter::once("ramones".to_string())
        .chain(args)
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            logging::init_tracing(cli.verbose);
            commands::run_synthesis_command(cli)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "ramones",
    version,
    about = "Broaden computed Raman activities into a Lorentzian spectrum",
    allow_negative_numbers = true
)]
struct Cli {
    /// Calculated spectrum (frequencies and intensities)
    #[arg(long, value_name = "LOG")]
    calc: Option<PathBuf>,

    /// Min cm-1 [default: 1000]
    #[arg(long)]
    min: Option<f64>,

    /// Max cm-1 [default: 1800]
    #[arg(long)]
    max: Option<f64>,

    /// Lorentzian half-width at half-maximum [default: 8]
    #[arg(long)]
    hwhm: Option<f64>,

    /// Adjust spectrum; only move (1 anchor point) --adjust="1200=1250"
    /// or scale (based on 2 anchor points) --adjust="1200=1150 1550=1500"
    #[arg(long, value_name = "ANCHORS")]
    adjust: Option<String>,

    /// Directory receiving the stick and curve tables
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Stick table file name [default: xy.stick]
    #[arg(long)]
    stick_output: Option<String>,

    /// Broadened curve file name [default: xy.lorentz]
    #[arg(long)]
    curve_output: Option<String>,

    /// Render the broadened curve to an SVG file
    #[arg(long, value_name = "SVG")]
    plot: Option<PathBuf>,

    /// JSON file providing defaults for the options above
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug); RAMONES_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(RamonesError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_ramones_error(&self) -> RamonesError {
        match self {
            Self::Usage(message) => {
                RamonesError::input_validation("INPUT.CLI_USAGE", message.trim_end())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => RamonesError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}
