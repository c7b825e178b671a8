//! Cave crossing simulator.
//!
//! Three modes share the same traversal engine:
//! - show the regions explored in one fixed cave
//! - estimate the crossing probability for one accessibility
//! - sweep the estimate over accessibility 0.00 to 1.00
//!
//! Crossing rates jump sharply around a threshold accessibility; the sweep
//! report exposes an estimate of it.

mod config;
mod report;
mod runner;

pub use config::{ExecMode, SimConfig, SimMode, SWEEP_STEPS};
pub use report::{CrossingEstimate, PathReport, SimReport, SweepReport};
pub use runner::{estimate_crossing, run_simulation, show_paths, sweep};
