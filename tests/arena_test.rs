//! Tests for the arena-backed BST and its parity with the boxed tree

use bstree::arena::ArenaBst;
use bstree::util::testing::init_test_setup;
use bstree::{build_tree, DEMO_DATASET};
use itertools::Itertools;

// ============================================================
// Basic Behavior Tests
// ============================================================

#[test]
fn given_reference_dataset_when_traversing_then_yields_sorted_values() {
    init_test_setup();
    let tree: ArenaBst = DEMO_DATASET.into_iter().collect();
    assert_eq!(tree.in_order(), vec![10, 12, 25, 29, 36, 41, 48, 62, 65]);
}

#[test]
fn given_empty_tree_when_traversing_then_yields_empty_sequence() {
    init_test_setup();
    let tree = ArenaBst::new();
    assert!(tree.in_order().is_empty());
    assert_eq!(tree.height(), 0);
    assert!(tree.is_empty());
}

#[test]
fn given_duplicate_values_when_traversing_then_all_are_kept() {
    init_test_setup();
    let tree: ArenaBst = [5, 5].into_iter().collect();
    assert_eq!(tree.in_order(), vec![5, 5]);
    assert_eq!(tree.len(), 2);
}

#[test]
fn given_tree_when_walking_root_then_children_obey_ordering() {
    init_test_setup();
    let tree: ArenaBst = [25, 12, 36].into_iter().collect();

    let root = tree.get_node(tree.root().unwrap()).unwrap();
    assert_eq!(root.key, 25);

    let left = tree.get_node(root.left.unwrap()).unwrap();
    let right = tree.get_node(root.right.unwrap()).unwrap();
    assert_eq!(left.key, 12);
    assert_eq!(right.key, 36);
}

// ============================================================
// Parity Tests (arena vs boxed tree)
// ============================================================

#[test]
fn given_same_input_when_building_both_trees_then_traversals_agree() {
    init_test_setup();
    let inputs: Vec<Vec<i64>> = vec![
        DEMO_DATASET.to_vec(),
        vec![],
        vec![42],
        vec![5, 5, 5],
        vec![-3, 0, -3, 9, 1],
    ];

    for input in inputs {
        let boxed = build_tree(input.iter().copied());
        let arena: ArenaBst = input.iter().copied().collect();
        assert_eq!(arena.in_order(), boxed.in_order(), "input {:?}", input);
        assert_eq!(arena.height(), boxed.height(), "input {:?}", input);
        assert_eq!(arena.len(), boxed.len(), "input {:?}", input);
    }
}

#[test]
fn given_any_insertion_order_when_building_both_trees_then_shapes_agree() {
    init_test_setup();
    // Shape equality follows because both trees apply the same descent rule
    let values = vec![29, 41, 62, 65];
    for perm in values.iter().copied().permutations(values.len()) {
        let boxed = build_tree(perm.iter().copied());
        let arena: ArenaBst = perm.iter().copied().collect();
        assert_eq!(arena.height(), boxed.height(), "insertion order {:?}", perm);
        assert_eq!(arena.in_order(), boxed.in_order());
    }
}

#[test]
fn given_unmodified_arena_tree_when_traversing_twice_then_sequences_are_identical() {
    init_test_setup();
    let tree: ArenaBst = DEMO_DATASET.into_iter().collect();
    assert_eq!(tree.in_order(), tree.in_order());
    let via_iter: Vec<i64> = tree.iter().collect();
    assert_eq!(via_iter, tree.in_order());
}
