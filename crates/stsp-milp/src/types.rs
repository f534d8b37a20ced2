use serde::{Deserialize, Serialize};
use std::time::Duration;
use stsp_core::{Cut, Relation};

#[derive(Clone, Debug)]
pub struct MilpConfig {
    /// Checked between rounds; a round already running is never interrupted.
    pub time_limit: Option<Duration>,
    pub max_rounds: Option<usize>,
    pub cut_relation: Relation,
}

impl Default for MilpConfig {
    fn default() -> Self {
        Self {
            time_limit: None,
            max_rounds: None,
            cut_relation: Relation::Equal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Optimal,
    TimeLimit,
    RoundLimit,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MilpReport {
    pub status: SolveStatus,
    /// Positions in visiting order; present only when `status` is `Optimal`.
    pub tour: Option<Vec<usize>>,
    pub cost: Option<f64>,
    /// Number of times the model was solved.
    pub rounds: usize,
    pub cuts: Vec<Cut>,
    pub elapsed: Duration,
}
