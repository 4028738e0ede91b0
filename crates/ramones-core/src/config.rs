use crate::domain::{
    DEFAULT_CURVE_ARTIFACT, DEFAULT_GRID_MAX, DEFAULT_GRID_MIN, DEFAULT_HWHM,
    DEFAULT_STICK_ARTIFACT, ParserResult, SynthesisParameters,
};
use crate::modules::spectrum::parse_adjust_spec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Run settings as read from a JSON file or the command line.
///
/// Every field is optional so that layers can be merged; unset fields fall
/// back to the built-in defaults when converted into [`SynthesisParameters`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SynthesisConfig {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub hwhm: Option<f64>,
    #[serde(default)]
    pub adjust: Option<String>,
    #[serde(default)]
    pub stick_output: Option<String>,
    #[serde(default)]
    pub curve_output: Option<String>,
}

impl SynthesisConfig {
    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merged(self, overrides: SynthesisConfig) -> SynthesisConfig {
        SynthesisConfig {
            min: overrides.min.or(self.min),
            max: overrides.max.or(self.max),
            hwhm: overrides.hwhm.or(self.hwhm),
            adjust: overrides.adjust.or(self.adjust),
            stick_output: overrides.stick_output.or(self.stick_output),
            curve_output: overrides.curve_output.or(self.curve_output),
        }
    }

    pub fn to_parameters(&self) -> ParserResult<SynthesisParameters> {
        let anchors = match self.adjust.as_deref() {
            Some(spec) => parse_adjust_spec(spec)?,
            None => Default::default(),
        };

        Ok(SynthesisParameters {
            grid_min: self.min.unwrap_or(DEFAULT_GRID_MIN),
            grid_max: self.max.unwrap_or(DEFAULT_GRID_MAX),
            hwhm: self.hwhm.unwrap_or(DEFAULT_HWHM),
            anchors,
        })
    }

    pub fn stick_artifact(&self) -> &str {
        self.stick_output.as_deref().unwrap_or(DEFAULT_STICK_ARTIFACT)
    }

    pub fn curve_artifact(&self) -> &str {
        self.curve_output.as_deref().unwrap_or(DEFAULT_CURVE_ARTIFACT)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisConfigError {
    #[error("failed to read synthesis config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse synthesis config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn load_synthesis_config(
    config_path: impl AsRef<Path>,
) -> Result<SynthesisConfig, SynthesisConfigError> {
    let config_path = config_path.as_ref();
    let source = fs::read_to_string(config_path).map_err(|source| SynthesisConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| SynthesisConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}
