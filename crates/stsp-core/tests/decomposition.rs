use proptest::prelude::*;
use std::collections::BTreeSet;
use stsp_core::{decompose, min_sub_tour, Matrix, SubtourElimination};

fn presence_from_cycles(n: usize, cycles: &[Vec<usize>]) -> Matrix<bool> {
    let mut m = Matrix::new(n);
    for cycle in cycles {
        for (i, &u) in cycle.iter().enumerate() {
            m.set_symmetric(u, cycle[(i + 1) % cycle.len()], true);
        }
    }
    m
}

/// A random partition of `0..n` into cycles of at least three vertices.
fn cycle_partition() -> impl Strategy<Value = (usize, Vec<Vec<usize>>)> {
    (3usize..40)
        .prop_flat_map(|n| {
            (
                Just(n),
                Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
                prop::collection::vec(3usize..8, 1..8),
            )
        })
        .prop_map(|(n, order, sizes)| {
            let mut cycles = Vec::new();
            let mut rest = &order[..];
            for size in sizes {
                if rest.len() < size + 3 {
                    break;
                }
                let (head, tail) = rest.split_at(size);
                cycles.push(head.to_vec());
                rest = tail;
            }
            cycles.push(rest.to_vec());
            (n, cycles)
        })
}

proptest! {
    #[test]
    fn walks_partition_the_vertex_set((n, cycles) in cycle_partition()) {
        let present = presence_from_cycles(n, &cycles);
        let walks = decompose(&present);

        prop_assert_eq!(walks.len(), cycles.len());
        prop_assert_eq!(walks.iter().map(Vec::len).sum::<usize>(), n);

        let mut covered = BTreeSet::new();
        for walk in &walks {
            for &u in walk {
                prop_assert!(covered.insert(u), "vertex {} visited twice", u);
            }
            for pair in walk.windows(2) {
                prop_assert!(present.get(pair[0], pair[1]));
            }
        }
        prop_assert_eq!(covered, (0..n).collect::<BTreeSet<_>>());

        let mut walk_sets: Vec<BTreeSet<usize>> = walks.iter().map(|w| w.iter().copied().collect()).collect();
        let mut cycle_sets: Vec<BTreeSet<usize>> = cycles.iter().map(|c| c.iter().copied().collect()).collect();
        walk_sets.sort();
        cycle_sets.sort();
        prop_assert_eq!(walk_sets, cycle_sets);
    }

    #[test]
    fn walks_start_at_ascending_vertices((n, cycles) in cycle_partition()) {
        let walks = decompose(&presence_from_cycles(n, &cycles));
        let starts: Vec<usize> = walks.iter().map(|w| w[0]).collect();

        prop_assert!(starts.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(starts[0], 0);
        for walk in &walks {
            prop_assert_eq!(walk[0], *walk.iter().min().unwrap());
        }
    }

    #[test]
    fn selector_picks_first_shortest_walk((n, cycles) in cycle_partition()) {
        let present = presence_from_cycles(n, &cycles);
        let walks = decompose(&present);
        let shortest = walks.iter().map(Vec::len).min().unwrap();
        let selected = min_sub_tour(&present);

        prop_assert_eq!(selected.len(), shortest);
        if cycles.len() > 1 {
            let expected = walks.iter().find(|w| w.len() == shortest).unwrap();
            prop_assert_eq!(&selected, expected);
        } else {
            // a single tour leaves the full position list in place
            prop_assert_eq!(selected, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn decomposition_is_repeatable((n, cycles) in cycle_partition()) {
        let present = presence_from_cycles(n, &cycles);

        prop_assert_eq!(decompose(&present), decompose(&present));
    }

    #[test]
    fn only_multi_cycle_candidates_are_cut((n, cycles) in cycle_partition()) {
        let present = presence_from_cycles(n, &cycles);
        let tour = min_sub_tour(&present);
        let cut = SubtourElimination::default().cut_for(&tour, n);

        if cycles.len() == 1 {
            prop_assert_eq!(tour.len(), n);
            prop_assert!(cut.is_none());
        } else {
            let cut = cut.unwrap();
            prop_assert_eq!(cut.bound, tour.len() - 1);
            prop_assert_eq!(cut.edges.len(), tour.len() * (tour.len() - 1) / 2);
        }
    }
}

#[test]
fn identity_presence_cuts_the_first_singleton() {
    let present = Matrix::<bool>::new(4);

    assert_eq!(decompose(&present), vec![vec![0], vec![1], vec![2], vec![3]]);

    let tour = min_sub_tour(&present);
    assert_eq!(tour, vec![0]);

    let cut = SubtourElimination::default().cut_for(&tour, 4).unwrap();
    assert!(cut.edges.is_empty());
    assert_eq!(cut.bound, 0);
}

#[test]
fn cut_serializes_with_its_relation() {
    let cut = SubtourElimination::default().cut_for(&[2, 5, 1], 6).unwrap();
    let json = serde_json::to_value(&cut).unwrap();

    assert_eq!(json["relation"], "equal");
    assert_eq!(json["bound"], 2);
    assert_eq!(json["edges"], serde_json::json!([[2, 5], [2, 1], [5, 1]]));
}
