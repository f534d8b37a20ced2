use good_lp::Solution;
use stsp_core::{AssignmentReader, Cut, CutEmitter};

use crate::model::EdgeVariables;

/// Exposes a backend solution through the edge positions the core works with.
pub struct SolutionValues<'a, S> {
    pub solution: &'a S,
    pub edges: &'a EdgeVariables,
}

impl<S: Solution> AssignmentReader for SolutionValues<'_, S> {
    fn value(&self, u: usize, v: usize) -> f64 {
        self.solution.value(self.edges.get(u, v))
    }
}

/// Lazy constraints in submission order; they are added to every later round.
#[derive(Debug, Default)]
pub struct CutPool {
    cuts: Vec<Cut>,
}

impl CutPool {
    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Whether `cut` was already submitted before the last one.
    pub fn repeats_earlier(&self, cut: &Cut) -> bool {
        match self.cuts.split_last() {
            Some((_, earlier)) => earlier.contains(cut),
            None => false,
        }
    }

    pub fn into_cuts(self) -> Vec<Cut> {
        self.cuts
    }
}

impl CutEmitter for CutPool {
    fn submit_cut(&mut self, cut: &Cut) {
        self.cuts.push(cut.clone());
    }
}
