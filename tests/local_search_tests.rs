//! Unit tests for the neighbourhood moves.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scp_heuristics::local_search::{utils, LocalSearch, Neighborhood};
use scp_heuristics::problem::Problem;
use scp_heuristics::solution::Solution;
use std::collections::BTreeSet;

fn ids(values: &[usize]) -> BTreeSet<usize> {
    values.iter().copied().collect()
}

/// Two elements; subset 2 covers both and is cheaper than 0 and 1 together.
fn create_swap_problem() -> Problem {
    Problem::new(2, 3, vec![5, 5, 3], vec![vec![0, 2], vec![1, 2]]).unwrap()
}

fn create_moderate_problem() -> Problem {
    let elements = 40;
    let subsets = 30;
    let costs = (0..subsets).map(|i| (i * 17 % 23 + 1) as u64).collect();
    let coverage = (0..elements)
        .map(|e| vec![e % subsets, (e * 7 + 3) % subsets, (e * 13 + 5) % subsets])
        .collect();

    Problem::new(elements, subsets, costs, coverage).unwrap()
}

/// Every subset selected: trivially feasible and maximally expensive.
fn all_subsets(problem: &Problem) -> Solution {
    Solution::from_subsets((0..problem.subset_count).collect(), problem)
}

#[test]
fn test_neighborhood_indices() {
    assert_eq!(Neighborhood::from_index(0), Some(Neighborhood::RandomSwap));
    assert_eq!(Neighborhood::from_index(1), Some(Neighborhood::SequentialRemoval));
    assert_eq!(Neighborhood::from_index(2), Some(Neighborhood::BestSwap));
    assert_eq!(Neighborhood::from_index(3), None);
}

#[test]
fn test_unknown_index_yields_empty_solution() {
    let problem = create_swap_problem();
    let current = Solution::from_subsets(ids(&[0, 1]), &problem);
    let local_search = LocalSearch::new(100);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let neighbour = local_search.generate_neighbour(&current, &problem, 7, &mut rng);

    assert_eq!(neighbour, Solution::default());
}

#[test]
fn test_best_neighbour_finds_cheapest_swap() {
    let problem = create_swap_problem();
    let current = Solution::from_subsets(ids(&[0, 1]), &problem);
    let local_search = LocalSearch::new(100);

    let neighbour = local_search.best_neighbour(&current, &problem);

    // Replacing subset 0 by subset 2 is the first swap reaching cost 8
    assert_eq!(neighbour.subset_ids, ids(&[1, 2]));
    assert_eq!(neighbour.cost, 8);
    assert!(neighbour.is_feasible(&problem));
}

#[test]
fn test_best_neighbour_drops_redundant_subset() {
    let problem = create_swap_problem();
    let current = Solution::from_subsets(ids(&[0, 1, 2]), &problem);
    let local_search = LocalSearch::new(100);

    let neighbour = local_search.best_neighbour(&current, &problem);

    // Removing 0 or 1 while "inserting" the already selected 2 leaves {1, 2}
    assert_eq!(neighbour.cost, 8);
    assert!(neighbour.is_feasible(&problem));
}

#[test]
fn test_best_neighbour_never_worse_than_current() {
    let problem = create_moderate_problem();
    let local_search = LocalSearch::new(100);
    let mut current = all_subsets(&problem);

    for _ in 0..10 {
        let neighbour = local_search.best_neighbour(&current, &problem);
        assert!(neighbour.is_feasible(&problem));
        assert!(neighbour.cost <= current.cost);
        assert_eq!(neighbour.cost, problem.cost(&neighbour.subset_ids));
        current = neighbour;
    }
}

#[test]
fn test_random_neighbour_is_feasible() {
    let problem = create_moderate_problem();
    let local_search = LocalSearch::new(1000);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut current = all_subsets(&problem);

    for _ in 0..50 {
        let neighbour = local_search.random_neighbour(&current, &problem, &mut rng);
        assert!(neighbour.is_feasible(&problem));
        assert_eq!(neighbour.subset_count, neighbour.subset_ids.len());
        assert_eq!(neighbour.cost, problem.cost(&neighbour.subset_ids));

        // At most one subset leaves and one enters
        let removed = current.subset_ids.difference(&neighbour.subset_ids).count();
        let added = neighbour.subset_ids.difference(&current.subset_ids).count();
        assert!(removed <= 1 && added <= 1);

        current = neighbour;
    }
}

#[test]
fn test_random_neighbour_falls_back_to_current() {
    // Each element has exactly one subset, so only the identity swap is feasible
    let problem = Problem::new(2, 2, vec![1, 1], vec![vec![0], vec![1]]).unwrap();
    let current = Solution::from_subsets(ids(&[0, 1]), &problem);
    let local_search = LocalSearch::new(5);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..20 {
        let neighbour = local_search.random_neighbour(&current, &problem, &mut rng);
        assert_eq!(neighbour, current);
    }
}

#[test]
fn test_random_neighbour_with_zero_attempts() {
    let problem = create_moderate_problem();
    let current = all_subsets(&problem);
    let local_search = LocalSearch::new(0);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    assert_eq!(local_search.random_neighbour(&current, &problem, &mut rng), current);
}

#[test]
fn test_sequential_removal_neighbour_is_feasible() {
    let problem = create_moderate_problem();
    let local_search = LocalSearch::new(100);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let current = all_subsets(&problem);

    for _ in 0..20 {
        let neighbour = local_search.sequential_removal_neighbour(&current, &problem, &mut rng);
        assert!(neighbour.is_feasible(&problem));
        assert_eq!(neighbour.cost, problem.cost(&neighbour.subset_ids));

        let removed = current.subset_ids.difference(&neighbour.subset_ids).count();
        assert!(removed <= 1);
    }
}

#[test]
fn test_sequential_removal_improves_full_selection() {
    let problem = create_moderate_problem();
    let local_search = LocalSearch::new(100);
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let current = all_subsets(&problem);

    // With everything selected any random replacement is a pure removal, and
    // removing some subset always keeps the cover
    let neighbour = local_search.sequential_removal_neighbour(&current, &problem, &mut rng);
    assert!(neighbour.cost < current.cost);
}

#[test]
fn test_generate_neighbour_dispatch() {
    let problem = create_moderate_problem();
    let local_search = LocalSearch::new(100);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let current = all_subsets(&problem);

    for k in 0..3 {
        let neighbour = local_search.generate_neighbour(&current, &problem, k, &mut rng);
        assert!(neighbour.is_feasible(&problem), "neighbourhood {} broke the cover", k);
    }
}

#[test]
fn test_swap_helpers() {
    let problem = create_swap_problem();
    let current = Solution::from_subsets(ids(&[0, 1]), &problem);

    assert_eq!(utils::swapped(&current.subset_ids, 0, 2), ids(&[1, 2]));
    assert_eq!(utils::swapped(&current.subset_ids, 0, 1), ids(&[1]));

    assert_eq!(utils::swap_cost(&current, &problem, 0, 2), 8);
    assert_eq!(utils::swap_cost(&current, &problem, 0, 1), 5);
    assert_eq!(utils::swap_cost(&current, &problem, 0, 0), 10);

    assert!(utils::covers_all(&problem, 2, &[0, 1]));
    assert!(!utils::covers_all(&problem, 0, &[0, 1]));
    assert!(utils::covers_all(&problem, 0, &[]));
}

#[test]
fn test_random_selected() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let selection = ids(&[3, 9, 12]);

    for _ in 0..20 {
        let picked = utils::random_selected(&selection, &mut rng).unwrap();
        assert!(selection.contains(&picked));
    }
    assert_eq!(utils::random_selected(&BTreeSet::new(), &mut rng), None);
}
