//! Unit tests for the SCP solution representation.

use scp_heuristics::problem::Problem;
use scp_heuristics::solution::Solution;
use std::collections::BTreeSet;

fn create_test_problem() -> Problem {
    Problem::new(
        3,
        5,
        vec![1, 6, 8, 4, 3],
        vec![vec![1, 2, 4], vec![0, 2], vec![1, 3, 4]],
    )
    .unwrap()
}

fn ids(values: &[usize]) -> BTreeSet<usize> {
    values.iter().copied().collect()
}

#[test]
fn test_new_solution_is_empty() {
    let solution = Solution::new();

    assert_eq!(solution.cost, 0);
    assert_eq!(solution.subset_count, 0);
    assert!(solution.is_empty());
    assert_eq!(solution, Solution::default());
}

#[test]
fn test_from_subsets_is_cost_consistent() {
    let problem = create_test_problem();
    let solution = Solution::from_subsets(ids(&[1, 0]), &problem);

    assert_eq!(solution.cost, 7);
    assert_eq!(solution.subset_count, 2);
    assert_eq!(solution.subset_ids, ids(&[0, 1]));
    assert!(solution.is_feasible(&problem));
}

#[test]
fn test_evaluate_after_edit() {
    let problem = create_test_problem();
    let mut solution = Solution::from_subsets(ids(&[0, 1]), &problem);

    solution.subset_ids.remove(&1);
    solution.subset_ids.insert(4);
    solution.evaluate(&problem);

    assert_eq!(solution.cost, 4);
    assert_eq!(solution.subset_count, 2);
}

#[test]
fn test_feasibility_is_derived() {
    let problem = create_test_problem();
    let mut solution = Solution::from_subsets(ids(&[0, 4]), &problem);
    assert!(solution.is_feasible(&problem));

    solution.subset_ids.remove(&0);
    solution.evaluate(&problem);
    assert!(!solution.is_feasible(&problem));
}

#[test]
fn test_delta() {
    let problem = create_test_problem();
    let cheap = Solution::from_subsets(ids(&[0, 4]), &problem);
    let expensive = Solution::from_subsets(ids(&[2, 3]), &problem);

    assert_eq!(cheap.delta(&expensive), -8);
    assert_eq!(expensive.delta(&cheap), 8);
    assert_eq!(cheap.delta(&cheap), 0);
}

#[test]
fn test_to_vec() {
    let problem = create_test_problem();
    let solution = Solution::from_subsets(ids(&[4, 0]), &problem);

    let flat = solution.to_vec();
    assert_eq!(flat[0], 4);
    assert_eq!(flat[1], 2);

    let mut flat_ids = flat[2..].to_vec();
    flat_ids.sort_unstable();
    assert_eq!(flat_ids, vec![0, 4]);
}

#[test]
fn test_display_is_one_indexed() {
    let problem = create_test_problem();
    let solution = Solution::from_subsets(ids(&[0, 4]), &problem);

    assert_eq!(
        solution.to_string(),
        "cost: 4 subsetCount: 2 subsetIDs: 1 5"
    );
}

#[test]
fn test_debug_output() {
    let problem = create_test_problem();
    let solution = Solution::from_subsets(ids(&[0, 4]), &problem);
    let debug = format!("{:?}", solution);

    assert!(debug.contains("Cost: 4"));
    assert!(debug.contains("IDs: [0, 4]"));
}

#[test]
fn test_serde_round_trip() {
    let problem = create_test_problem();
    let solution = Solution::from_subsets(ids(&[1, 3]), &problem);

    let json = serde_json::to_string(&solution).unwrap();
    let restored: Solution = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, solution);
}
