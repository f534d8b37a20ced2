use clap::{Parser, ValueEnum};
use log::LevelFilter;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use stsp_core::{Relation, DEFAULT_SEED};

#[derive(Parser, Debug, Clone)]
#[command(name = "stsp", version, about = "Exact symmetric TSP over bi-coordinate vertices")]
pub struct Options {
    /// Coordinate file with one `x1 y1 x2 y2` vertex per line.
    /// The built-in instance is used when omitted.
    pub file: Option<PathBuf>,

    /// Solve a deterministic sample of this many vertices instead of the whole instance.
    #[arg(long)]
    pub sample: Option<usize>,

    /// Sampling seed, decimal or 0x-prefixed hex.
    #[arg(long, value_parser = parse_seed, default_value = "0x0123456789ABCDEF")]
    pub seed: u64,

    #[arg(long, value_enum, default_value_t = Algorithm::Milp)]
    pub algorithm: Algorithm,

    /// Seconds; checked between MILP rounds.
    #[arg(long, value_parser = parse_seconds)]
    pub time_limit: Option<Duration>,

    #[arg(long)]
    pub max_rounds: Option<usize>,

    #[arg(long, value_enum, default_value_t = CutRelation::Eq)]
    pub cut_relation: CutRelation,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[arg(long)]
    pub log_timestamp: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            file: None,
            sample: None,
            seed: DEFAULT_SEED,
            algorithm: Algorithm::Milp,
            time_limit: None,
            max_rounds: None,
            cut_relation: CutRelation::Eq,
            json: false,
            log_level: LogLevel::Warn,
            log_timestamp: false,
        }
    }
}

#[derive(ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Milp,
    BruteForce,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutRelation {
    Eq,
    Le,
}

impl From<CutRelation> for Relation {
    fn from(value: CutRelation) -> Self {
        match value {
            CutRelation::Eq => Relation::Equal,
            CutRelation::Le => Relation::LessEqual,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn parse_seed(value: &str) -> Result<u64, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => value.parse(),
    };
    parsed.map_err(|e| format!("invalid seed {value:?}: {e}"))
}

fn parse_seconds(value: &str) -> Result<Duration, String> {
    let secs: f64 = value
        .parse()
        .map_err(|e| format!("invalid seconds {value:?}: {e}"))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid seconds {value:?}: {e}"))
}
