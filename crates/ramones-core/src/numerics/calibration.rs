use crate::domain::{AnchorPair, CalibrationAnchors, CalibrationTransform};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalibrationError {
    #[error("calibration anchor {index} must be finite, got {measured}={reference}")]
    NonFiniteAnchor {
        index: usize,
        measured: f64,
        reference: f64,
    },
    #[error(
        "calibration anchors share the measured frequency {measured}; the scale factor is undefined"
    )]
    DegenerateAnchors { measured: f64 },
    #[error("calibration anchors produce a non-finite transform (scale={scale}, shift={shift})")]
    NonFiniteTransform { scale: f64, shift: f64 },
}

/// Derive the affine frequency correction for zero, one or two anchors.
///
/// One anchor translates the whole stick spectrum so that its measured
/// frequency lands on the reference. Two anchors are interpolated exactly:
/// `reference_i = scale * measured_i + shift` holds for both.
pub fn calibrate(anchors: &CalibrationAnchors) -> Result<CalibrationTransform, CalibrationError> {
    for (index, anchor) in anchors.pairs().iter().enumerate() {
        if !anchor.measured.is_finite() || !anchor.reference.is_finite() {
            return Err(CalibrationError::NonFiniteAnchor {
                index,
                measured: anchor.measured,
                reference: anchor.reference,
            });
        }
    }

    let transform = match *anchors {
        CalibrationAnchors::None => CalibrationTransform::IDENTITY,
        CalibrationAnchors::Single(anchor) => {
            CalibrationTransform::new(1.0, anchor.reference - anchor.measured)
        }
        CalibrationAnchors::Pair(first, second) => two_point_transform(first, second)?,
    };

    // nearly coincident or extreme anchors can overflow the fit
    if !transform.scale.is_finite() || !transform.shift.is_finite() {
        return Err(CalibrationError::NonFiniteTransform {
            scale: transform.scale,
            shift: transform.shift,
        });
    }
    Ok(transform)
}

fn two_point_transform(
    first: AnchorPair,
    second: AnchorPair,
) -> Result<CalibrationTransform, CalibrationError> {
    let measured_span = first.measured - second.measured;
    if measured_span == 0.0 {
        return Err(CalibrationError::DegenerateAnchors {
            measured: first.measured,
        });
    }

    let scale = (first.reference - second.reference) / measured_span;
    let shift = 0.5 * (first.reference + second.reference)
        - 0.5 * scale * (first.measured + second.measured);
    Ok(CalibrationTransform::new(scale, shift))
}
