//! Tests for the greedy randomized construction.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scp_heuristics::constructive::greedy_randomized;
use scp_heuristics::error::ScpError;
use scp_heuristics::problem::Problem;

fn create_test_problem() -> Problem {
    Problem::new(
        3,
        5,
        vec![1, 6, 8, 4, 3],
        vec![vec![1, 2, 4], vec![0, 2], vec![1, 3, 4]],
    )
    .unwrap()
}

/// A deterministic, moderately sized instance where every element has three
/// candidate subsets.
fn create_moderate_problem() -> Problem {
    let elements = 40;
    let subsets = 30;
    let costs = (0..subsets).map(|i| (i * 17 % 23 + 1) as u64).collect();
    let coverage = (0..elements)
        .map(|e| vec![e % subsets, (e * 7 + 3) % subsets, (e * 13 + 5) % subsets])
        .collect();

    Problem::new(elements, subsets, costs, coverage).unwrap()
}

#[test]
fn test_greedy_on_reference_instance() {
    let problem = create_test_problem();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    // Subset 0 (cost 1) covers element 1, then subset 4 (cost 3) covers 0 and 2
    let ids = greedy_randomized(&problem, 1, 0, &mut rng).unwrap();

    assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![0, 4]);
}

#[test]
fn test_greedy_skips_useless_subsets() {
    // Subset 1 is the cheapest after subset 0 but covers nothing new
    let problem = Problem::new(
        2,
        3,
        vec![1, 2, 5],
        vec![vec![0, 1], vec![2]],
    )
    .unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let ids = greedy_randomized(&problem, 1, 0, &mut rng).unwrap();

    assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![0, 2]);
}

#[test]
fn test_randomized_construction_is_feasible() {
    let problem = create_moderate_problem();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for k in [1, 2, 5, 10, problem.subset_count] {
        for _ in 0..20 {
            let ids = greedy_randomized(&problem, k, 0, &mut rng).unwrap();
            assert!(problem.is_feasible(&ids), "infeasible cover for k = {}", k);
        }
    }
}

#[test]
fn test_noisy_construction_is_feasible() {
    let problem = create_moderate_problem();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for rho in [1, 5, 50] {
        let ids = greedy_randomized(&problem, 3, rho, &mut rng).unwrap();
        assert!(problem.is_feasible(&ids));
    }
}

#[test]
fn test_same_seed_same_construction() {
    let problem = create_moderate_problem();
    let mut rng1 = ChaCha8Rng::seed_from_u64(99);
    let mut rng2 = ChaCha8Rng::seed_from_u64(99);

    let a = greedy_randomized(&problem, 4, 3, &mut rng1).unwrap();
    let b = greedy_randomized(&problem, 4, 3, &mut rng2).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_invalid_rcl_size() {
    let problem = create_test_problem();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let zero = greedy_randomized(&problem, 0, 0, &mut rng);
    assert!(matches!(zero, Err(ScpError::InvalidConfiguration(_))));

    let too_large = greedy_randomized(&problem, 6, 0, &mut rng);
    assert!(matches!(too_large, Err(ScpError::InvalidConfiguration(_))));

    // k equal to the subset count is allowed
    assert!(greedy_randomized(&problem, 5, 0, &mut rng).is_ok());
}

#[test]
fn test_uncoverable_element() {
    let problem = Problem::new(2, 2, vec![1, 1], vec![vec![0, 1], vec![]]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let result = greedy_randomized(&problem, 1, 0, &mut rng);
    assert!(matches!(result, Err(ScpError::InfeasibleInstance { element: 1 })));
}
