pub mod serialization;
pub mod spectrum;

mod traits;

pub use spectrum::{SimulatedSpectrum, SpectrumModule, SpectrumRun};
pub use traits::ModuleExecutor;
