use crate::domain::SampleGrid;

pub const GRID_STEP: f64 = 1.0;

/// Largest sampling window accepted, in grid points.
pub const MAX_GRID_POINTS: usize = 10_000_000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("sampling grid bounds must be finite, got min={min}, max={max}")]
    NonFiniteBound { min: f64, max: f64 },
    #[error(
        "sampling window [{min}, {max}] spans more than {limit} grid points",
        limit = MAX_GRID_POINTS
    )]
    TooManyPoints { min: f64, max: f64 },
}

/// Number of unit-spaced samples covering `[min, max]`; zero when `max < min`.
pub fn grid_point_count(min: f64, max: f64) -> Result<usize, GridError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(GridError::NonFiniteBound { min, max });
    }

    let span = ((max - min) / GRID_STEP).floor();
    if span < 0.0 {
        return Ok(0);
    }
    // `max - min` itself may overflow to infinity for finite bounds
    if !span.is_finite() || span >= MAX_GRID_POINTS as f64 {
        return Err(GridError::TooManyPoints { min, max });
    }

    (span as usize)
        .checked_add(1)
        .ok_or(GridError::TooManyPoints { min, max })
}

/// Build the inclusive unit-step grid `min, min + 1, ..., min + floor(max - min)`.
pub fn build_grid(min: f64, max: f64) -> Result<SampleGrid, GridError> {
    let count = grid_point_count(min, max)?;
    let points = (0..count)
        .map(|index| min + GRID_STEP * index as f64)
        .collect();
    Ok(SampleGrid::from_points(points))
}
