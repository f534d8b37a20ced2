#![deny(clippy::all)]

use serde::{Deserialize, Serialize};
use stsp_core::{CostKind, Error, Instance, Result};

/// Largest instance the DP table is allowed to grow to.
pub const MAX_VERTICES: usize = 16;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BruteForceSolution {
    /// Positions in visiting order, starting at position 0.
    pub tour: Vec<usize>,
    pub cost: f64,
}

/// Exact minimum `cost1` tour by bitmask DP over subsets of positions `1..n`.
pub fn solve(instance: &Instance) -> Result<BruteForceSolution> {
    let n = instance.order();
    if n == 0 {
        return Err(Error::invalid_input("instance has no vertices"));
    }
    if n > MAX_VERTICES {
        return Err(Error::invalid_input(format!(
            "brute force handles at most {MAX_VERTICES} vertices, got {n}"
        )));
    }
    if n == 1 {
        return Ok(BruteForceSolution { tour: vec![0], cost: 0.0 });
    }

    // Flattened matrix for cache locality
    let mut dist_mat = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            if i != j {
                dist_mat[i * n + j] = instance.cost(i, j, CostKind::Primary);
            }
        }
    }

    // Bit `j - 1` of a mask stands for position `j`; position 0 is the fixed start.
    let bits = n - 1;
    let full_mask = (1usize << bits) - 1;
    let mut best = vec![f64::INFINITY; (full_mask + 1) * n];
    let mut parent = vec![u8::MAX; (full_mask + 1) * n];

    for (j, &leg) in dist_mat.iter().enumerate().take(n).skip(1) {
        best[(1 << (j - 1)) * n + j] = leg;
    }

    for mask in 1..=full_mask {
        for last in 1..n {
            let last_bit = 1 << (last - 1);
            if mask & last_bit == 0 {
                continue;
            }
            let current = best[mask * n + last];
            if current == f64::INFINITY {
                continue;
            }

            for next in 1..n {
                let next_bit = 1 << (next - 1);
                if mask & next_bit != 0 {
                    continue;
                }
                let slot = (mask | next_bit) * n + next;
                let candidate = current + dist_mat[last * n + next];
                if candidate < best[slot] {
                    best[slot] = candidate;
                    parent[slot] = last as u8;
                }
            }
        }
    }

    let (mut last, cost) = (1..n)
        .map(|j| (j, best[full_mask * n + j] + dist_mat[j * n]))
        .fold((0, f64::INFINITY), |acc, item| if item.1 < acc.1 { item } else { acc });

    let mut tour = Vec::with_capacity(n);
    let mut mask = full_mask;
    while last != 0 {
        tour.push(last);
        let prev = parent[mask * n + last];
        mask &= !(1 << (last - 1));
        last = if prev == u8::MAX { 0 } else { prev as usize };
    }
    tour.push(0);
    tour.reverse();

    Ok(BruteForceSolution { tour, cost })
}
