//! Fakes standing in for the solver in tests.

use crate::elimination::{AssignmentReader, Cut, CutEmitter};
use crate::matrix::Matrix;

/// An assignment frozen in a matrix.
#[derive(Clone, Debug)]
pub struct FixedAssignment {
    values: Matrix<f64>,
}

impl FixedAssignment {
    pub fn empty(n: usize) -> Self {
        Self {
            values: Matrix::new(n),
        }
    }

    /// Selects the closing edge of every cycle; a two-vertex cycle is a single edge.
    pub fn from_cycles(n: usize, cycles: &[&[usize]]) -> Self {
        let mut assignment = Self::empty(n);
        for cycle in cycles {
            for (i, &u) in cycle.iter().enumerate() {
                let v = cycle[(i + 1) % cycle.len()];
                if u != v {
                    assignment.set(u, v, 1.0);
                }
            }
        }
        assignment
    }

    pub fn set(&mut self, u: usize, v: usize, value: f64) {
        self.values.set_symmetric(u, v, value);
    }
}

impl AssignmentReader for FixedAssignment {
    fn value(&self, u: usize, v: usize) -> f64 {
        self.values.get(u, v)
    }
}

/// Keeps every submitted cut instead of forwarding it to a solver.
#[derive(Debug, Default)]
pub struct RecordingEmitter {
    pub cuts: Vec<Cut>,
}

impl CutEmitter for RecordingEmitter {
    fn submit_cut(&mut self, cut: &Cut) {
        self.cuts.push(cut.clone());
    }
}
