#![deny(clippy::all)]

pub mod logging;
pub mod options;

use log::info;
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use stsp_core::{CostKind, IdAllocator, Instance, Result, VertexId};
use stsp_milp::{MilpConfig, SolveStatus};

use options::{Algorithm, Options};

#[derive(Serialize, Debug)]
pub struct Report {
    pub algorithm: Algorithm,
    pub status: SolveStatus,
    pub vertices: usize,
    /// Vertex ids in visiting order.
    pub tour: Option<Vec<VertexId>>,
    pub cost1: Option<f64>,
    pub cost2: Option<f64>,
    pub rounds: Option<usize>,
    pub cuts: Option<usize>,
    pub elapsed_secs: f64,
}

pub fn load_instance(options: &Options) -> Result<Instance> {
    let mut ids = IdAllocator::new();
    let instance = match &options.file {
        Some(path) => Instance::read(path, &mut ids)?,
        None => Instance::builtin(&mut ids),
    };
    info!("loaded {} vertices", instance.order());

    match options.sample {
        Some(count) => instance.sample(count, options.seed),
        None => Ok(instance),
    }
}

pub fn run(options: &Options) -> Result<Report> {
    let instance = load_instance(options)?;
    let started = Instant::now();

    let (status, tour, rounds, cuts) = match options.algorithm {
        Algorithm::Milp => {
            let config = MilpConfig {
                time_limit: options.time_limit,
                max_rounds: options.max_rounds,
                cut_relation: options.cut_relation.into(),
            };
            let report = stsp_milp::solve(&instance, &config)?;
            (
                report.status,
                report.tour,
                Some(report.rounds),
                Some(report.cuts.len()),
            )
        }
        Algorithm::BruteForce => {
            let solution = stsp_brute_force::solve(&instance)?;
            (SolveStatus::Optimal, Some(solution.tour), None, None)
        }
    };

    let costs = tour.as_ref().map(|tour| {
        (
            instance.tour_cost(tour, CostKind::Primary),
            instance.tour_cost(tour, CostKind::Secondary),
        )
    });

    Ok(Report {
        algorithm: options.algorithm,
        status,
        vertices: instance.order(),
        tour: tour.map(|tour| {
            tour.iter()
                .map(|&position| instance.vertices()[position].id())
                .collect()
        }),
        cost1: costs.map(|(cost1, _)| cost1),
        cost2: costs.map(|(_, cost2)| cost2),
        rounds,
        cuts,
        elapsed_secs: started.elapsed().as_secs_f64(),
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "status: {:?}", self.status)?;
        writeln!(f, "vertices: {}", self.vertices)?;
        if let Some(tour) = &self.tour {
            let ids: Vec<String> = tour.iter().map(VertexId::to_string).collect();
            writeln!(f, "tour: {}", ids.join(" "))?;
        }
        if let (Some(cost1), Some(cost2)) = (self.cost1, self.cost2) {
            writeln!(f, "cost1: {cost1}")?;
            writeln!(f, "cost2: {cost2}")?;
        }
        if let (Some(rounds), Some(cuts)) = (self.rounds, self.cuts) {
            writeln!(f, "rounds: {rounds}")?;
            writeln!(f, "cuts: {cuts}")?;
        }
        write!(f, "elapsed: {:.3}s", self.elapsed_secs)
    }
}
