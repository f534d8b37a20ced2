#![deny(clippy::all)]

pub mod callback;
pub mod model;
pub mod solver;
pub mod types;

pub use model::{build_model, EdgeVariables};
pub use solver::solve;
pub use types::{MilpConfig, MilpReport, SolveStatus};
