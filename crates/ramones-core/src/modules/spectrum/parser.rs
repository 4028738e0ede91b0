use crate::domain::{AnchorPair, CalibrationAnchors, ParserResult, RamonesError, SpectralLine};

pub const FREQUENCY_MARKER: &str = "Frequencies ---";
pub const RAMAN_ACTIVITY_MARKER: &str = "Raman Activities ---";

// Token offsets past the row labels ("Frequencies ---" / "Raman Activities ---").
const FREQUENCY_FIRST_TOKEN: usize = 2;
const RAMAN_ACTIVITY_FIRST_TOKEN: usize = 3;

/// Frequency and Raman activity columns collected from every normal-mode block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VibrationalColumns {
    pub frequencies: Vec<f64>,
    pub intensities: Vec<f64>,
}

impl VibrationalColumns {
    pub fn into_lines(self) -> ParserResult<Vec<SpectralLine>> {
        if self.frequencies.len() != self.intensities.len() {
            return Err(RamonesError::input_validation(
                "INPUT.LOG_LENGTH_MISMATCH",
                format!(
                    "log lists {} frequencies but {} Raman activities",
                    self.frequencies.len(),
                    self.intensities.len()
                ),
            ));
        }

        Ok(self
            .frequencies
            .into_iter()
            .zip(self.intensities)
            .map(|(frequency, intensity)| SpectralLine::new(frequency, intensity))
            .collect())
    }
}

pub fn parse_vibrational_log(source: &str) -> ParserResult<VibrationalColumns> {
    let mut columns = VibrationalColumns::default();

    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        if line.contains(FREQUENCY_MARKER) {
            columns.frequencies.extend(parse_marker_row(
                line,
                line_number,
                FREQUENCY_FIRST_TOKEN,
                "frequency",
            )?);
        }
        if line.contains(RAMAN_ACTIVITY_MARKER) {
            columns.intensities.extend(parse_marker_row(
                line,
                line_number,
                RAMAN_ACTIVITY_FIRST_TOKEN,
                "Raman activity",
            )?);
        }
    }

    Ok(columns)
}

fn parse_marker_row(
    line: &str,
    line_number: usize,
    first_token: usize,
    quantity: &str,
) -> ParserResult<Vec<f64>> {
    line.split_whitespace()
        .skip(first_token)
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                RamonesError::input_validation(
                    "INPUT.LOG_VALUE",
                    format!(
                        "invalid {} value '{}' at line {}",
                        quantity, token, line_number
                    ),
                )
            })
        })
        .collect()
}

/// Parse `"f1=ref1"` or `"f1=ref1 f2=ref2"`; a blank string means no calibration.
pub fn parse_adjust_spec(spec: &str) -> ParserResult<CalibrationAnchors> {
    let pairs = spec
        .split_whitespace()
        .map(parse_anchor_pair)
        .collect::<ParserResult<Vec<_>>>()?;

    match pairs.as_slice() {
        [] => Ok(CalibrationAnchors::None),
        [first] => Ok(CalibrationAnchors::Single(*first)),
        [first, second] => Ok(CalibrationAnchors::Pair(*first, *second)),
        _ => Err(RamonesError::input_validation(
            "INPUT.ADJUST_ANCHOR_COUNT",
            format!(
                "calibration accepts one or two anchor pairs, got {} in '{}'",
                pairs.len(),
                spec
            ),
        )),
    }
}

fn parse_anchor_pair(token: &str) -> ParserResult<AnchorPair> {
    let malformed = || {
        RamonesError::input_validation(
            "INPUT.ADJUST_PAIR",
            format!(
                "calibration pair '{}' must have the form measured=reference",
                token
            ),
        )
    };

    let (measured, reference) = token.split_once('=').ok_or_else(malformed)?;
    if reference.contains('=') {
        return Err(malformed());
    }

    let parse_side = |value: &str| {
        value.parse::<f64>().map_err(|_| {
            RamonesError::input_validation(
                "INPUT.ADJUST_VALUE",
                format!(
                    "calibration pair '{}' has non-numeric value '{}'",
                    token, value
                ),
            )
        })
    };

    Ok(AnchorPair::new(parse_side(measured)?, parse_side(reference)?))
}

#[cfg(test)]
mod tests {
    use super::{VibrationalColumns, parse_adjust_spec, parse_vibrational_log};
    use crate::domain::{AnchorPair, CalibrationAnchors, RamonesErrorCategory, SpectralLine};

    const TWO_BLOCK_LOG: &str = "\
 Harmonic frequencies (cm**-1), IR intensities (KM/Mole), Raman scattering
                      1                      2                      3
                      A                      A                      A
 Frequencies ---  1050.1234              1210.5000              1399.9000
 Reduced masses ---  1.2000                 1.3000                 1.4000
 Raman Activities ---  12.3400                0.5600                 7.8900
 Depolarization ratios ---  0.7500           0.7500                 0.3300
                      4                      5
                      A                      A
 Frequencies ---  1601.0000              1755.2500
 Raman Activities ---  3.2100                44.0000
";

    #[test]
    fn blocks_accumulate_in_order_of_appearance() {
        let columns = parse_vibrational_log(TWO_BLOCK_LOG).expect("log should parse");
        assert_eq!(
            columns.frequencies,
            vec![1050.1234, 1210.5, 1399.9, 1601.0, 1755.25]
        );
        assert_eq!(columns.intensities, vec![12.34, 0.56, 7.89, 3.21, 44.0]);

        let lines = columns.into_lines().expect("columns should pair");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], SpectralLine::new(1755.25, 44.0));
    }

    #[test]
    fn log_without_markers_has_no_lines() {
        let columns = parse_vibrational_log("SCF Done\nNormal termination\n").expect("parse");
        assert_eq!(columns, VibrationalColumns::default());
        assert!(columns.into_lines().expect("pair").is_empty());
    }

    #[test]
    fn unparsable_token_reports_line_number() {
        let error = parse_vibrational_log("header\n Frequencies ---  1000.0  abc\n")
            .expect_err("bad token should fail");
        assert_eq!(error.category(), RamonesErrorCategory::InputValidationError);
        assert_eq!(error.placeholder(), "INPUT.LOG_VALUE");
        assert!(error.message().contains("'abc' at line 2"));
    }

    #[test]
    fn mismatched_columns_fail_fast() {
        let columns = parse_vibrational_log(
            " Frequencies ---  1000.0  1100.0\n Raman Activities ---  1.0\n",
        )
        .expect("parse");
        let error = columns.into_lines().expect_err("mismatch should fail");
        assert_eq!(error.placeholder(), "INPUT.LOG_LENGTH_MISMATCH");
        assert_eq!(
            error.message(),
            "log lists 2 frequencies but 1 Raman activities"
        );
    }

    #[test]
    fn adjust_spec_supports_zero_one_and_two_anchors() {
        assert_eq!(parse_adjust_spec("").expect("blank"), CalibrationAnchors::None);
        assert_eq!(parse_adjust_spec("   ").expect("blank"), CalibrationAnchors::None);
        assert_eq!(
            parse_adjust_spec("1200=1250").expect("single"),
            CalibrationAnchors::Single(AnchorPair::new(1200.0, 1250.0))
        );
        assert_eq!(
            parse_adjust_spec(" 1200=1150   1550=1500 ").expect("pair"),
            CalibrationAnchors::Pair(
                AnchorPair::new(1200.0, 1150.0),
                AnchorPair::new(1550.0, 1500.0)
            )
        );
    }

    #[test]
    fn adjust_spec_rejects_malformed_pairs() {
        let cases = [
            ("1200", "INPUT.ADJUST_PAIR"),
            ("1200=1250=1300", "INPUT.ADJUST_PAIR"),
            ("1200=abc", "INPUT.ADJUST_VALUE"),
            ("=1250", "INPUT.ADJUST_VALUE"),
            ("1=2 3=4 5=6", "INPUT.ADJUST_ANCHOR_COUNT"),
        ];

        for (spec, placeholder) in cases {
            let error = parse_adjust_spec(spec).expect_err("malformed spec should fail");
            assert_eq!(error.placeholder(), placeholder, "spec '{}'", spec);
        }
    }
}
