use rand::seq::index;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};
use crate::vertex::{CostKind, IdAllocator, Point, Vertex};

pub const DEFAULT_SEED: u64 = 0x0123_4567_89AB_CDEF;

// x1, y1, x2, y2
const BUILTIN_COORDINATES: [[f64; 4]; 12] = [
    [32.0, 71.0, 88.0, 14.0],
    [57.0, 12.0, 23.0, 65.0],
    [91.0, 48.0, 47.0, 90.0],
    [14.0, 33.0, 72.0, 41.0],
    [66.0, 85.0, 9.0, 27.0],
    [43.0, 39.0, 61.0, 53.0],
    [78.0, 21.0, 35.0, 8.0],
    [8.0, 92.0, 54.0, 77.0],
    [25.0, 5.0, 96.0, 62.0],
    [84.0, 67.0, 18.0, 45.0],
    [50.0, 58.0, 80.0, 31.0],
    [3.0, 60.0, 41.0, 99.0],
];

/// The vertex list a model is built over. Positions in `vertices()` are the
/// dense indices every matrix, sub-tour and cut refers to.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Instance {
    vertices: Vec<Vertex>,
}

impl Instance {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn builtin(ids: &mut IdAllocator) -> Self {
        let vertices = BUILTIN_COORDINATES
            .iter()
            .map(|&[x1, y1, x2, y2]| Vertex::new(ids, Point::new(x1, y1), Point::new(x2, y2)))
            .collect();
        Self { vertices }
    }

    pub fn read(path: impl AsRef<Path>, ids: &mut IdAllocator) -> Result<Self> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(Error::empty_or_missing(path))
            }
            Err(err) => return Err(err.into()),
        };
        Self::parse_named(path, &text, ids)
    }

    pub fn parse(text: &str, ids: &mut IdAllocator) -> Result<Self> {
        Self::parse_named(Path::new("<input>"), text, ids)
    }

    fn parse_named(source: &Path, text: &str, ids: &mut IdAllocator) -> Result<Self> {
        let mut vertices = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let values = line
                .split_whitespace()
                .map(str::parse::<f64>)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|_| Error::invalid_data(source, idx + 1))?;

            let &[x1, y1, x2, y2] = values.as_slice() else {
                return Err(Error::invalid_data(source, idx + 1));
            };
            vertices.push(Vertex::new(ids, Point::new(x1, y1), Point::new(x2, y2)));
        }

        if vertices.is_empty() {
            return Err(Error::empty_or_missing(source));
        }
        Ok(Self { vertices })
    }

    /// Picks `count` vertices deterministically for `seed`, keeping input order and ids.
    pub fn sample(&self, count: usize, seed: u64) -> Result<Self> {
        let available = self.vertices.len();
        if count > available {
            return Err(Error::NotEnoughItems {
                requested: count,
                available,
            });
        }

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut picked = index::sample(&mut rng, available, count).into_vec();
        picked.sort_unstable();

        Ok(Self {
            vertices: picked.into_iter().map(|i| self.vertices[i].clone()).collect(),
        })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges between distinct vertices.
    pub fn size(&self) -> usize {
        let n = self.order();
        n * n.saturating_sub(1) / 2
    }

    #[inline(always)]
    pub fn cost(&self, u: usize, v: usize, kind: CostKind) -> f64 {
        self.vertices[u].cost(&self.vertices[v], kind)
    }

    /// Length of the closed tour through the given positions.
    pub fn tour_cost(&self, tour: &[usize], kind: CostKind) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }
        tour.iter()
            .zip(tour.iter().cycle().skip(1))
            .map(|(&u, &v)| self.cost(u, v, kind))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::VertexId;

    #[test]
    fn parses_lines_and_skips_blanks() {
        let mut ids = IdAllocator::new();
        let instance = Instance::parse("0 0 1 1\n\n  3 4 1 1  \n", &mut ids).unwrap();

        assert_eq!(instance.order(), 2);
        assert_eq!(instance.vertices()[0].id(), VertexId(1));
        assert_eq!(instance.vertices()[1].id(), VertexId(2));
        assert_eq!(instance.cost(0, 1, CostKind::Primary), 5.0);
        assert_eq!(instance.cost(0, 1, CostKind::Secondary), 0.0);
    }

    #[test]
    fn rejects_malformed_lines() {
        let mut ids = IdAllocator::new();

        let err = Instance::parse("0 0 1 1\n1 2 3\n", &mut ids).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");

        let err = Instance::parse("0 0 x 1\n", &mut ids).unwrap_err();
        assert!(matches!(err, Error::InvalidFile { .. }));
    }

    #[test]
    fn rejects_empty_input() {
        let mut ids = IdAllocator::new();
        let err = Instance::parse("\n \n", &mut ids).unwrap_err();

        assert!(err.to_string().contains("is empty or missing"));
    }

    #[test]
    fn missing_file_is_reported_as_missing() {
        let mut ids = IdAllocator::new();
        let err = Instance::read("/definitely/not/here.txt", &mut ids).unwrap_err();

        assert!(err.to_string().contains("is empty or missing"), "{err}");
    }

    #[test]
    fn sampling_is_deterministic_and_order_preserving() {
        let mut ids = IdAllocator::new();
        let instance = Instance::builtin(&mut ids);

        let a = instance.sample(5, DEFAULT_SEED).unwrap();
        let b = instance.sample(5, DEFAULT_SEED).unwrap();
        let ids_a: Vec<_> = a.vertices().iter().map(Vertex::id).collect();
        let ids_b: Vec<_> = b.vertices().iter().map(Vertex::id).collect();

        assert_eq!(ids_a.len(), 5);
        assert_eq!(ids_a, ids_b);
        assert!(ids_a.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sampling_more_than_available_fails() {
        let mut ids = IdAllocator::new();
        let instance = Instance::builtin(&mut ids);

        let err = instance.sample(13, DEFAULT_SEED).unwrap_err();
        assert!(matches!(
            err,
            Error::NotEnoughItems {
                requested: 13,
                available: 12
            }
        ));
        assert_eq!(instance.sample(12, 7).unwrap().order(), 12);
    }

    #[test]
    fn metrics() {
        let mut ids = IdAllocator::new();
        let instance = Instance::parse("0 0 0 0\n3 0 0 1\n3 4 0 2\n", &mut ids).unwrap();

        assert_eq!(instance.size(), 3);
        assert_eq!(instance.tour_cost(&[0, 1, 2], CostKind::Primary), 12.0);
        assert_eq!(instance.tour_cost(&[0, 1, 2], CostKind::Secondary), 4.0);
        assert_eq!(instance.tour_cost(&[0], CostKind::Primary), 0.0);
    }
}
