use game_tree::{
    search, strength, GameTree, ScriptedPerturbation, SearchConfig, SearchResult,
    SeededPerturbation,
};

const STRENGTH_PAIRS: &[(f64, f64)] = &[(9.0, 8.0), (0.0, 0.0), (8.5, 8.5), (1.0, 20.0), (50.0, 0.5)];

fn run(depth: u32, pruning: bool, seed: u64, max: f64, min: f64) -> SearchResult {
    let config = SearchConfig::with_depth(depth).pruning(pruning).seeded(seed);
    let source = SeededPerturbation::new(seed);
    search(&config, max, min, &source).unwrap()
}

#[test]
fn pruning_never_changes_value_or_path() {
    for depth in 1..=10 {
        for seed in 0..12u64 {
            for &(max, min) in STRENGTH_PAIRS {
                let full = run(depth, false, seed, max, min);
                let pruned = run(depth, true, seed, max, min);
                assert_eq!(
                    full.value.to_bits(),
                    pruned.value.to_bits(),
                    "depth {depth} seed {seed} strengths ({max}, {min})"
                );
                assert_eq!(full.path, pruned.path);
                assert_eq!(full.path.len(), depth as usize);
            }
        }
    }
}

#[test]
fn pruning_never_evaluates_more_leaves() {
    for depth in 1..=10 {
        for seed in 0..25u64 {
            let full = run(depth, false, seed, 9.0, 8.0);
            let pruned = run(depth, true, seed, 9.0, 8.0);
            assert!(pruned.stats.leaves_evaluated <= full.stats.leaves_evaluated);
            assert!(pruned.stats.nodes_visited <= full.stats.nodes_visited);
        }
    }
}

#[test]
fn visited_plus_skipped_is_whole_tree() {
    for depth in 1..=12 {
        let tree = GameTree::new(&SearchConfig::with_depth(depth)).unwrap();
        for seed in 0..10u64 {
            for pruning in [true, false] {
                let r = run(depth, pruning, seed, 4.0, 6.0);
                assert_eq!(
                    r.stats.leaves_evaluated + r.stats.leaves_pruned,
                    tree.leaf_count()
                );
                assert_eq!(
                    r.stats.nodes_visited + r.stats.nodes_pruned,
                    tree.node_count()
                );
            }
        }
    }
}

#[test]
fn unpruned_search_is_exhaustive() {
    let r = run(5, false, 3, 9.0, 8.0);
    assert_eq!(r.stats.leaves_evaluated, 32);
    assert_eq!(r.stats.nodes_visited, 63);
    assert_eq!(r.stats.branches_pruned, 0);
}

#[test]
fn same_seed_reproduces_result() {
    let a = run(7, true, 2024, 3.0, 2.0);
    let b = run(7, true, 2024, 3.0, 2.0);
    assert_eq!(a, b);
}

#[test]
fn depth_one_scenario() {
    let config = SearchConfig::with_depth(1);
    let source = ScriptedPerturbation::new(vec![0.3, 0.2]);
    let r = search(&config, 9.0, 8.0, &source).unwrap();

    let gap = strength(9.0).unwrap() - strength(8.0).unwrap();
    let leaf0 = gap + 0.3;
    let leaf1 = gap - 0.2;
    assert_eq!(r.value, leaf0.max(leaf1));
    assert_eq!(r.path, vec![0]);
}

#[test]
fn equal_strengths_zero_perturbation_is_zero() {
    let source = ScriptedPerturbation::constant(0.0);
    for depth in 1..=5 {
        let r = search(&SearchConfig::with_depth(depth), 8.5, 8.5, &source).unwrap();
        assert_eq!(r.value, 0.0);
        assert!(r.path.iter().all(|&m| m == 0));
    }
}

#[test]
fn pruning_happens_on_depth_five() {
    // Constant magnitudes make every even leaf equal, which forces cutoffs.
    let source = ScriptedPerturbation::constant(0.5);
    let r = search(&SearchConfig::with_depth(5), 20.0, 1.0, &source).unwrap();
    assert!(r.stats.branches_pruned > 0);
    assert!(r.stats.pruning_ratio() > 0.0);

    let total_pruned: u64 = (0..20u64)
        .map(|seed| run(5, true, seed, 20.0, 1.0).stats.leaves_pruned)
        .sum();
    assert!(total_pruned > 0);
}

#[test]
fn strength_gap_shifts_value_uniformly() {
    for seed in 0..8u64 {
        let even = run(5, true, seed, 3.0, 3.0);
        let ahead = run(5, true, seed, 9.0, 3.0);
        let gap = strength(9.0).unwrap() - strength(3.0).unwrap();
        assert_eq!(even.path, ahead.path);
        assert!((ahead.value - even.value - gap).abs() < 1e-9);
    }
}
