use good_lp::SolverModel;
use log::{debug, info, trace};
use std::time::Instant;
use stsp_core::{
    read_presence, CostKind, Error, Instance, Matrix, Result, SubTour, SubTours,
    SubtourElimination,
};

use crate::callback::{CutPool, SolutionValues};
use crate::model::build_model;
use crate::types::{MilpConfig, MilpReport, SolveStatus};

/// Solves to integer optimality, adding one subtour-elimination cut per
/// round until the optimum is a single tour through every vertex.
pub fn solve(instance: &Instance, config: &MilpConfig) -> Result<MilpReport> {
    let n = instance.order();
    let started = Instant::now();
    let policy = SubtourElimination::new(config.cut_relation);
    let mut pool = CutPool::default();
    let mut rounds = 0;

    info!("solving {n} vertices, {} edges", instance.size());

    let status = loop {
        if config.max_rounds.is_some_and(|limit| rounds >= limit) {
            break SolveStatus::RoundLimit;
        }
        if config
            .time_limit
            .is_some_and(|limit| started.elapsed() >= limit)
        {
            break SolveStatus::TimeLimit;
        }
        rounds += 1;

        let (edges, model) = build_model(instance, pool.cuts())?;
        let solution = model
            .solve()
            .map_err(|e| Error::solver(format!("round {rounds}: {e}")))?;
        let values = SolutionValues {
            solution: &solution,
            edges: &edges,
        };

        let present = read_presence(n, &values);
        let objective = selected_cost(instance, &present);

        let Some(cut) = policy.on_candidate(n, &values, &mut pool) else {
            let tour = accepted_tour(&present);
            let cost = instance.tour_cost(&tour, CostKind::Primary);
            debug!("round {rounds}: objective {objective}, accepted tour of cost {cost}");

            let elapsed = started.elapsed();
            info!(
                "optimal tour of cost {cost} after {rounds} rounds, {} cuts, {:.3}s",
                pool.len(),
                elapsed.as_secs_f64()
            );
            return Ok(MilpReport {
                status: SolveStatus::Optimal,
                tour: Some(tour),
                cost: Some(cost),
                rounds,
                cuts: pool.into_cuts(),
                elapsed,
            });
        };

        debug!(
            "round {rounds}: objective {objective}, shortest sub-tour has {} of {n} vertices",
            cut.bound + 1
        );
        trace!("cut {:?} {:?} {}", cut.edges, cut.relation, cut.bound);

        if cut.edges.is_empty() {
            return Err(Error::stalled(format!(
                "round {rounds}: isolated vertex yields an empty cut"
            )));
        }
        if pool.repeats_earlier(&cut) {
            return Err(Error::stalled(format!(
                "round {rounds}: candidate violates a cut already in the model"
            )));
        }
    };

    let elapsed = started.elapsed();
    info!(
        "stopped with {status:?} after {rounds} rounds, {} cuts, {:.3}s",
        pool.len(),
        elapsed.as_secs_f64()
    );
    Ok(MilpReport {
        status,
        tour: None,
        cost: None,
        rounds,
        cuts: pool.into_cuts(),
        elapsed,
    })
}

/// The single walk of an accepted candidate, in visiting order.
///
/// The minimum sub-tour of a Hamiltonian candidate is only its length
/// stand-in, so the walk is taken from the decomposition itself.
fn accepted_tour(present: &Matrix<bool>) -> SubTour {
    SubTours::new(present).next_sub_tour().unwrap_or_default()
}

/// `cost1` of every selected edge, i.e. the candidate's objective value.
fn selected_cost(instance: &Instance, present: &Matrix<bool>) -> f64 {
    let n = present.dim();
    (0..n)
        .flat_map(|u| (u + 1..n).map(move |v| (u, v)))
        .filter(|&(u, v)| present.get(u, v))
        .map(|(u, v)| instance.cost(u, v, CostKind::Primary))
        .sum()
}
