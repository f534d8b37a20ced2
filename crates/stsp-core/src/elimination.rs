use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::subtour::min_sub_tour;

/// Read access to the values the solver currently assigns to edge variables.
/// Only meaningful while a candidate is being inspected.
pub trait AssignmentReader {
    /// Value of the variable for the edge between positions `u` and `v`, in `[0, 1]`.
    fn value(&self, u: usize, v: usize) -> f64;
}

/// Sink for lazy constraints. Implementations map each edge position pair to
/// the variable their model created for it.
pub trait CutEmitter {
    fn submit_cut(&mut self, cut: &Cut);
}

impl<T: AssignmentReader + ?Sized> AssignmentReader for &T {
    fn value(&self, u: usize, v: usize) -> f64 {
        (**self).value(u, v)
    }
}

impl<T: CutEmitter + ?Sized> CutEmitter for &mut T {
    fn submit_cut(&mut self, cut: &Cut) {
        (**self).submit_cut(cut)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Equal,
    LessEqual,
}

/// `Σ x(u, v) <relation> bound` over the listed edges.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cut {
    pub edges: Vec<(usize, usize)>,
    pub relation: Relation,
    pub bound: usize,
}

impl Cut {
    /// Left-hand side under the given assignment.
    pub fn lhs(&self, reader: &impl AssignmentReader) -> f64 {
        self.edges.iter().map(|&(u, v)| reader.value(u, v)).sum()
    }

    pub fn is_satisfied_by(&self, reader: &impl AssignmentReader) -> bool {
        const EPS: f64 = 1e-6;
        let lhs = self.lhs(reader);
        let bound = self.bound as f64;
        match self.relation {
            Relation::Equal => (lhs - bound).abs() <= EPS,
            Relation::LessEqual => lhs <= bound + EPS,
        }
    }
}

/// Copies the solver's current values into a symmetric matrix with a zero diagonal.
pub fn read_assignment(n: usize, reader: &impl AssignmentReader) -> Matrix<f64> {
    let mut values = Matrix::new(n);
    for u in 0..n {
        for v in u + 1..n {
            values.set_symmetric(u, v, reader.value(u, v));
        }
    }
    values
}

pub fn presence(values: &Matrix<f64>) -> Matrix<bool> {
    values.map(|value| value > 0.5)
}

pub fn read_presence(n: usize, reader: &impl AssignmentReader) -> Matrix<bool> {
    let mut present = Matrix::new(n);
    for u in 0..n {
        for v in u + 1..n {
            present.set_symmetric(u, v, reader.value(u, v) > 0.5);
        }
    }
    present
}

/// Callback payload: turns the shortest sub-tour of a candidate into a DFJ cut.
///
/// Stateless between candidates. Each call rebuilds the presence matrix and
/// the decomposition from scratch.
#[derive(Clone, Copy, Debug)]
pub struct SubtourElimination {
    relation: Relation,
}

impl SubtourElimination {
    pub fn new(relation: Relation) -> Self {
        Self { relation }
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// `None` when `tour` already covers all `n` vertices or is empty.
    ///
    /// A single-vertex tour has no internal pairs and yields an empty cut
    /// bounded by zero, which every assignment satisfies. Degree-2 models
    /// never produce one.
    pub fn cut_for(&self, tour: &[usize], n: usize) -> Option<Cut> {
        let len = tour.len();
        if len == 0 || len >= n {
            return None;
        }

        let mut edges = Vec::with_capacity(len * len.saturating_sub(1) / 2);
        for (i, &u) in tour.iter().enumerate() {
            for &v in &tour[i + 1..] {
                edges.push((u, v));
            }
        }

        Some(Cut {
            edges,
            relation: self.relation,
            bound: len - 1,
        })
    }

    /// Inspects one integer-feasible candidate over `n` vertices and submits
    /// at most one cut. The submitted cut is returned as well.
    pub fn on_candidate(
        &self,
        n: usize,
        reader: &impl AssignmentReader,
        emitter: &mut impl CutEmitter,
    ) -> Option<Cut> {
        let present = read_presence(n, reader);
        let tour = min_sub_tour(&present);
        let cut = self.cut_for(&tour, n)?;

        emitter.submit_cut(&cut);
        Some(cut)
    }
}

impl Default for SubtourElimination {
    fn default() -> Self {
        Self::new(Relation::Equal)
    }
}
