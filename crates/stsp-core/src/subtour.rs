use crate::matrix::Matrix;

/// Vertex positions in visiting order.
pub type SubTour = Vec<usize>;

/// One decomposition pass over a presence matrix.
///
/// Every scan runs in ascending index order and takes the first hit, so the
/// same matrix always decomposes into the same ordered list of walks.
pub struct SubTours<'a> {
    presence: &'a Matrix<bool>,
    seen: Vec<bool>,
}

impl<'a> SubTours<'a> {
    pub fn new(presence: &'a Matrix<bool>) -> Self {
        Self {
            presence,
            seen: vec![false; presence.dim()],
        }
    }

    /// Lowest-indexed vertex no walk has claimed yet.
    pub fn next_unmarked_vertex(&self) -> Option<usize> {
        self.seen.iter().position(|&seen| !seen)
    }

    /// Lowest-indexed unclaimed vertex sharing a present edge with `u`.
    pub fn best_neighbor(&self, u: usize) -> Option<usize> {
        self.presence
            .row(u)
            .iter()
            .zip(&self.seen)
            .position(|(&present, &seen)| present && !seen)
    }

    pub fn extract_walk(&mut self, start: usize) -> SubTour {
        let n = self.seen.len();
        let mut walk = Vec::with_capacity(n);
        let mut node = start;

        for _ in 0..n {
            self.seen[node] = true;
            walk.push(node);

            match self.best_neighbor(node) {
                Some(next) => node = next,
                None => break,
            }
        }
        walk
    }

    pub fn next_sub_tour(&mut self) -> Option<SubTour> {
        let start = self.next_unmarked_vertex()?;
        Some(self.extract_walk(start))
    }
}

impl Iterator for SubTours<'_> {
    type Item = SubTour;

    fn next(&mut self) -> Option<SubTour> {
        self.next_sub_tour()
    }
}

pub fn decompose(presence: &Matrix<bool>) -> Vec<SubTour> {
    SubTours::new(presence).collect()
}

/// Shortest walk of the decomposition; the earliest one wins ties.
///
/// Starts from the full position list, so a matrix holding one tour through
/// every vertex yields a walk of length `n` either way.
pub fn min_sub_tour(presence: &Matrix<bool>) -> SubTour {
    let mut min_tour: SubTour = (0..presence.dim()).collect();

    for tour in SubTours::new(presence) {
        if tour.len() < min_tour.len() {
            min_tour = tour;
        }
    }
    min_tour
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presence_from_cycles(n: usize, cycles: &[&[usize]]) -> Matrix<bool> {
        let mut m = Matrix::new(n);
        for cycle in cycles {
            for (i, &u) in cycle.iter().enumerate() {
                let v = cycle[(i + 1) % cycle.len()];
                if u != v {
                    m.set_symmetric(u, v, true);
                }
            }
        }
        m
    }

    #[test]
    fn full_cycle_decomposes_into_one_walk() {
        let m = presence_from_cycles(5, &[&[0, 1, 2, 3, 4]]);

        assert_eq!(decompose(&m), vec![vec![0, 1, 2, 3, 4]]);
        assert_eq!(min_sub_tour(&m), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn walk_follows_lowest_neighbor_first() {
        // 0-3-1-4-2-0: from 0 the lower neighbor is 2
        let m = presence_from_cycles(5, &[&[0, 3, 1, 4, 2]]);

        assert_eq!(decompose(&m), vec![vec![0, 2, 4, 1, 3]]);
    }

    #[test]
    fn empty_matrix_gives_singletons() {
        let m = Matrix::new(4);

        assert_eq!(decompose(&m), vec![vec![0], vec![1], vec![2], vec![3]]);
        assert_eq!(min_sub_tour(&m), vec![0]);
    }

    #[test]
    fn shortest_walk_wins_and_ties_go_to_lowest_start() {
        let m = presence_from_cycles(9, &[&[0, 4, 8, 6], &[1, 5, 2], &[3, 7]]);
        let tours = decompose(&m);

        assert_eq!(tours, vec![vec![0, 4, 8, 6], vec![1, 2, 5], vec![3, 7]]);
        assert_eq!(min_sub_tour(&m), vec![3, 7]);

        let m = presence_from_cycles(6, &[&[0, 3, 5], &[1, 2, 4]]);
        assert_eq!(min_sub_tour(&m), vec![0, 3, 5]);
    }

    #[test]
    fn markers_reset_for_a_fresh_pass() {
        let m = presence_from_cycles(6, &[&[0, 2, 4], &[1, 3, 5]]);

        assert_eq!(decompose(&m), decompose(&m));
    }

    #[test]
    fn single_vertex_is_a_full_tour() {
        let m = Matrix::new(1);

        assert_eq!(min_sub_tour(&m), vec![0]);
    }

    #[test]
    fn step_by_step_operations() {
        let m = presence_from_cycles(4, &[&[0, 1], &[2, 3]]);
        let mut tours = SubTours::new(&m);

        assert_eq!(tours.next_unmarked_vertex(), Some(0));
        assert_eq!(tours.best_neighbor(0), Some(1));
        assert_eq!(tours.extract_walk(0), vec![0, 1]);
        assert_eq!(tours.best_neighbor(1), None);
        assert_eq!(tours.next_unmarked_vertex(), Some(2));
        assert_eq!(tours.next_sub_tour(), Some(vec![2, 3]));
        assert_eq!(tours.next_sub_tour(), None);
    }
}
