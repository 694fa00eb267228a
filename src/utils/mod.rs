pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::{to_dms, to_exact_fraction, DmsAngle, Rational};
pub use filename::generate_default_report_filename;
pub use progress::ProgressReporter;
