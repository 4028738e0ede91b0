use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RamonesResult<T> = Result<T, RamonesError>;
pub type ParserResult<T> = RamonesResult<T>;
pub type ComputeResult<T> = RamonesResult<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RamonesErrorCategory {
    InputValidationError,
    IoSystemError,
    ComputationError,
}

impl RamonesErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RamonesError {
    category: RamonesErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl RamonesError {
    pub fn new(
        category: RamonesErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            RamonesErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(RamonesErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(RamonesErrorCategory::ComputationError, placeholder, message)
    }

    pub const fn category(&self) -> RamonesErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }
}

impl Display for RamonesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.as_str(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for RamonesError {}

#[cfg(test)]
mod tests {
    use super::{RamonesError, RamonesErrorCategory};

    #[test]
    fn exit_code_mapping_is_stable() {
        let cases = [
            (
                RamonesErrorCategory::InputValidationError,
                2,
                "InputValidationError",
            ),
            (RamonesErrorCategory::IoSystemError, 3, "IoSystemError"),
            (RamonesErrorCategory::ComputationError, 4, "ComputationError"),
        ];

        for (category, exit_code, name) in cases {
            assert_eq!(category.exit_code(), exit_code);
            assert_eq!(category.as_str(), name);
        }
    }

    #[test]
    fn fatal_error_renders_diagnostic_line() {
        let error = RamonesError::input_validation(
            "INPUT.ADJUST_PAIR",
            "calibration pair '1200' must have the form measured=reference",
        );

        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.ADJUST_PAIR] calibration pair '1200' must have the form measured=reference"
        );
        assert_eq!(
            error.to_string(),
            "InputValidationError [INPUT.ADJUST_PAIR] calibration pair '1200' must have the form measured=reference"
        );
    }
}
