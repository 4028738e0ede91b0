pub mod calibration;
pub mod grid;
pub mod lorentzian;

pub use calibration::{CalibrationError, calibrate};
pub use grid::{GRID_STEP, GridError, MAX_GRID_POINTS, build_grid, grid_point_count};
pub use lorentzian::{
    LorentzianBroadeningInput, SynthesisError, broaden, lorentzian, normalize_peak, synthesize,
};
